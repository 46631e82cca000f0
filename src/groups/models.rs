//! Data models for word groups

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::memory::StudyItem;

/// A word or phrase saved into a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupWord {
    /// Stable identity assigned by the extractor; falls back to `text`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub text: String,
    #[serde(default)]
    pub is_phrase: bool,
    #[serde(default)]
    pub sentence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl GroupWord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            is_phrase: false,
            sentence: String::new(),
            translation: None,
            added_at: None,
        }
    }

    /// Identity used for deduplication and removal. An empty key counts as
    /// no key.
    pub fn word_key(&self) -> &str {
        self.key
            .as_deref()
            .filter(|k| !k.is_empty())
            .unwrap_or(&self.text)
    }
}

/// Result of adding words to a group
#[derive(Debug, Clone, PartialEq)]
pub struct AddedWords {
    pub group: WordGroup,
    /// Words actually appended; duplicates are not counted
    pub added: usize,
}

/// A named collection of words studied together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordGroup {
    pub group_name: String,
    #[serde(default)]
    pub words: Vec<GroupWord>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl WordGroup {
    pub fn new(group_name: String) -> Self {
        Self {
            group_name,
            words: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn contains(&self, word_key: &str) -> bool {
        self.words.iter().any(|w| w.word_key() == word_key)
    }

    /// Items for a study session, in the order they were saved
    pub fn study_items(&self) -> Vec<StudyItem> {
        self.words
            .iter()
            .enumerate()
            .map(|(index, word)| StudyItem {
                index,
                text: word.text.clone(),
                is_phrase: word.is_phrase,
                sentence: word.sentence.clone(),
                translation: word.translation.clone().unwrap_or_default(),
            })
            .collect()
    }
}
