//! Data models for study sessions

use serde::{Deserialize, Serialize};

/// A single word or phrase presented during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyItem {
    /// Position of the item in the session's item list
    pub index: usize,
    pub text: String,
    #[serde(default)]
    pub is_phrase: bool,
    /// Sentence the item was extracted from
    #[serde(default)]
    pub sentence: String,
    #[serde(default)]
    pub translation: String,
}

impl StudyItem {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            is_phrase: false,
            sentence: String::new(),
            translation: String::new(),
        }
    }
}

/// Which kind of item the session is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionMode {
    /// Introducing the new item at the cursor
    Learn,
    /// Working through the head of the review queue
    Review,
}

impl Default for SessionMode {
    fn default() -> Self {
        Self::Learn
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Learn => write!(f, "learn"),
            Self::Review => write!(f, "review"),
        }
    }
}

/// Learner input that drives the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Not known yet; the item stays eligible for review
    Keep,
    /// Known; the item leaves every future review queue
    Remember,
    /// Start the session over from item 0
    Restart,
}

/// Progress counters for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub remembered: usize,
    pub total: usize,
    pub mode: SessionMode,
    pub review_queue_len: usize,
}
