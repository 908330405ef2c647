use crate::domain::model::SwapMode;
use crate::utils::error::{Result, SaveSwapError};
use crate::utils::validation::{validate_backup_suffix, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults loaded from a TOML file. Command line flags take precedence.
///
/// ```toml
/// swap_mode = "words-only"
/// force_padding = 0
/// backup = false
/// backup_suffix = ".orig"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub swap_mode: Option<SwapMode>,
    pub force_padding: Option<usize>,
    pub backup: Option<bool>,
    pub backup_suffix: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SaveSwapError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SaveSwapError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(suffix) = &self.backup_suffix {
            validate_backup_suffix("backup_suffix", suffix)?;
        }
        Ok(())
    }
}
