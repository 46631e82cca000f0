//! User configuration
//!
//! Read from `{config-dir}/recall/config.toml`; every field is optional.
//!
//! ```toml
//! data_dir = "/home/me/study"
//! groups_file = "word-groups.json"
//! reveal_translation = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::groups::{WordGroupStorage, DEFAULT_GROUPS_FILE};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// Overrides the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Name of the groups file inside the data directory
    pub groups_file: String,
    /// Start each card with its translation visible
    pub reveal_translation: bool,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            groups_file: DEFAULT_GROUPS_FILE.to_string(),
            reveal_translation: false,
        }
    }
}

impl RecallConfig {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("recall").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Data directory to use, honouring the override if set
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => WordGroupStorage::default_data_dir().map_err(|_| ConfigError::DataDirNotFound),
        }
    }

    /// Group storage rooted at the configured data directory
    pub fn group_storage(&self) -> Result<WordGroupStorage> {
        let data_dir = self.resolve_data_dir()?;
        Ok(WordGroupStorage::with_file_name(data_dir, &self.groups_file))
    }
}
