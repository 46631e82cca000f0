//! Storage operations for word groups
//!
//! All groups live in one file inside the data directory:
//! ```text
//! {data-dir}/
//! └── word-groups.json   # Array of all groups with their words
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use super::models::{AddedWords, GroupWord, WordGroup};

/// File name used when no override is configured
pub const DEFAULT_GROUPS_FILE: &str = "word-groups.json";

#[derive(Error, Debug)]
pub enum GroupStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Word '{word}' not found in group '{group}'")]
    WordNotFound { group: String, word: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Could not determine data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, GroupStorageError>;

/// Storage manager for word groups
pub struct WordGroupStorage {
    /// Directory holding the groups file (e.g., ~/.local/share/recall)
    data_dir: PathBuf,
    groups_path: PathBuf,
}

impl WordGroupStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self::with_file_name(data_dir, DEFAULT_GROUPS_FILE)
    }

    pub fn with_file_name(data_dir: PathBuf, file_name: &str) -> Self {
        let groups_path = data_dir.join(file_name);
        Self {
            data_dir,
            groups_path,
        }
    }

    /// Default data directory for the current user
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("recall"))
            .ok_or(GroupStorageError::DataDirNotFound)
    }

    pub fn groups_path(&self) -> &Path {
        &self.groups_path
    }

    /// Create the data directory and an empty groups file if missing
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        if !self.groups_path.exists() {
            let empty: Vec<WordGroup> = Vec::new();
            fs::write(&self.groups_path, serde_json::to_string_pretty(&empty)?)?;
            log::info!("Created groups file at {}", self.groups_path.display());
        }

        Ok(())
    }

    fn save_groups(&self, groups: &[WordGroup]) -> Result<()> {
        self.init()?;
        fs::write(&self.groups_path, serde_json::to_string_pretty(groups)?)?;
        Ok(())
    }

    // ==================== Group Operations ====================

    /// List all groups
    pub fn list_groups(&self) -> Result<Vec<WordGroup>> {
        if !self.groups_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.groups_path)?;
        let groups: Vec<WordGroup> = serde_json::from_str(&content)?;
        Ok(groups)
    }

    /// Get a group by exact name
    pub fn get_group(&self, group_name: &str) -> Result<WordGroup> {
        self.list_groups()?
            .into_iter()
            .find(|g| g.group_name == group_name)
            .ok_or_else(|| GroupStorageError::GroupNotFound(group_name.to_string()))
    }

    /// Add words to a group, creating the group if it does not exist.
    ///
    /// Words whose key (or text, when no key is set) is already in the group
    /// are skipped.
    pub fn add_words(&self, group_name: &str, words: Vec<GroupWord>) -> Result<AddedWords> {
        if group_name.trim().is_empty() {
            return Err(GroupStorageError::InvalidRequest(
                "group name must not be empty".to_string(),
            ));
        }
        if words.is_empty() {
            return Err(GroupStorageError::InvalidRequest(
                "no words to add".to_string(),
            ));
        }

        let mut groups = self.list_groups()?;
        let pos = match groups.iter().position(|g| g.group_name == group_name) {
            Some(pos) => pos,
            None => {
                log::info!("Creating word group '{}'", group_name);
                groups.push(WordGroup::new(group_name.to_string()));
                groups.len() - 1
            }
        };

        let now = Utc::now();
        let group = &mut groups[pos];
        let mut added = 0;
        for mut word in words {
            if group.contains(word.word_key()) {
                log::debug!("Skipping duplicate word '{}'", word.word_key());
                continue;
            }
            word.added_at = Some(now);
            group.words.push(word);
            added += 1;
        }
        group.updated_at = Some(now);

        let updated = group.clone();
        self.save_groups(&groups)?;

        log::info!(
            "Added {} word(s) to group '{}' ({} total)",
            added,
            group_name,
            updated.words.len()
        );
        Ok(AddedWords {
            group: updated,
            added,
        })
    }

    /// Delete a group and all its words
    pub fn delete_group(&self, group_name: &str) -> Result<()> {
        let mut groups = self.list_groups()?;
        let before = groups.len();
        groups.retain(|g| g.group_name != group_name);

        if groups.len() == before {
            return Err(GroupStorageError::GroupNotFound(group_name.to_string()));
        }

        self.save_groups(&groups)?;
        log::info!("Deleted word group '{}'", group_name);
        Ok(())
    }

    /// Remove a word from a group by key
    pub fn remove_word(&self, group_name: &str, word_key: &str) -> Result<WordGroup> {
        let mut groups = self.list_groups()?;
        let group = groups
            .iter_mut()
            .find(|g| g.group_name == group_name)
            .ok_or_else(|| GroupStorageError::GroupNotFound(group_name.to_string()))?;

        let before = group.words.len();
        group.words.retain(|w| w.word_key() != word_key);
        if group.words.len() == before {
            return Err(GroupStorageError::WordNotFound {
                group: group_name.to_string(),
                word: word_key.to_string(),
            });
        }
        group.updated_at = Some(Utc::now());

        let updated = group.clone();
        self.save_groups(&groups)?;
        log::info!("Removed '{}' from group '{}'", word_key, group_name);
        Ok(updated)
    }
}
