use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use recall_lib::config::RecallConfig;
use recall_lib::groups::{AddedWords, GroupWord, WordGroup, WordGroupStorage};

/// Shared application state for CLI commands
pub struct App {
    pub config: RecallConfig,
    pub storage: WordGroupStorage,
}

impl App {
    /// Initialize from the user config, optionally overriding the data directory
    pub fn new(data_dir: Option<&str>) -> Result<Self> {
        let mut config = RecallConfig::load_default().context("Failed to load config")?;
        if let Some(dir) = data_dir {
            config.data_dir = Some(PathBuf::from(dir));
        }

        let storage = config
            .group_storage()
            .context("Failed to get data directory")?;
        storage
            .init()
            .context("Failed to initialize group storage")?;

        Ok(Self { config, storage })
    }

    /// List all groups
    pub fn list_groups(&self) -> Result<Vec<WordGroup>> {
        self.storage.list_groups().context("Failed to list groups")
    }

    /// Find a group by name (exact, then case-insensitive prefix match)
    pub fn find_group(&self, name: &str) -> Result<WordGroup> {
        let groups = self.list_groups()?;

        if let Some(group) = groups.iter().find(|g| g.group_name == name) {
            return Ok(group.clone());
        }

        let name_lower = name.to_lowercase();
        let matches: Vec<&WordGroup> = groups
            .iter()
            .filter(|g| g.group_name.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.len() {
            0 => bail!(
                "No group matching '{}'. Available groups:\n{}",
                name,
                groups
                    .iter()
                    .map(|g| format!("  - {}", g.group_name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous group name '{}'. Matches:\n{}",
                name,
                matches
                    .iter()
                    .map(|g| format!("  - {}", g.group_name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Add words to a group, creating it if needed
    pub fn add_words(&self, group_name: &str, words: Vec<GroupWord>) -> Result<AddedWords> {
        self.storage
            .add_words(group_name, words)
            .with_context(|| format!("Failed to add words to '{}'", group_name))
    }

    /// Remove a single word from a group
    pub fn remove_word(&self, group_name: &str, word_key: &str) -> Result<WordGroup> {
        let group = self.find_group(group_name)?;
        self.storage
            .remove_word(&group.group_name, word_key)
            .context("Failed to remove word")
    }

    /// Delete a group
    pub fn delete_group(&self, group_name: &str) -> Result<String> {
        let group = self.find_group(group_name)?;
        self.storage
            .delete_group(&group.group_name)
            .context("Failed to delete group")?;
        Ok(group.group_name)
    }

    /// Parse a JSON array of words as produced by the extractor
    pub fn parse_words(json: &str) -> Result<Vec<GroupWord>> {
        let words: Vec<GroupWord> =
            serde_json::from_str(json).context("Expected a JSON array of words")?;
        if words.iter().any(|w| w.text.trim().is_empty()) {
            bail!("Every word needs a non-empty 'text'");
        }
        Ok(words)
    }
}
