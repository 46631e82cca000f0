//! Study session scheduling for Recall
//!
//! This module provides:
//! - Study item and progress models
//! - A fixed-size remembered set keyed by item position
//! - The interleaved learn/review state machine

pub mod models;
pub mod remembered;
pub mod session;

pub use models::*;
pub use remembered::RememberedSet;
pub use session::{MemorySession, SessionError, SessionState};
