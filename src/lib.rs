//! Recall: word groups and interleaved study sessions.
//!
//! - [`groups`] stores named word groups and turns them into study items.
//! - [`memory`] schedules a study session over those items.
//! - [`config`] locates the data directory and study defaults.

pub mod config;
pub mod groups;
pub mod memory;
