//! Word groups for Recall
//!
//! Groups are named lists of words and phrases saved for study. Each group
//! feeds a study session with its words in saved order.

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{GroupStorageError, WordGroupStorage, DEFAULT_GROUPS_FILE};
