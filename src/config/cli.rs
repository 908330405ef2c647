use crate::core::Storage;
use crate::utils::error::{Result, SaveSwapError};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

/// Filesystem storage; backups are written next to the original.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    backup_suffix: String,
}

impl LocalStorage {
    pub fn new(backup_suffix: impl Into<String>) -> Self {
        Self {
            backup_suffix: backup_suffix.into(),
        }
    }

    pub fn backup_path(&self, path: &Path) -> PathBuf {
        let mut backup = path.as_os_str().to_owned();
        backup.push(&self.backup_suffix);
        PathBuf::from(backup)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(DEFAULT_BACKUP_SUFFIX)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| SaveSwapError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|source| SaveSwapError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn backup_file(&self, path: &Path) -> Result<PathBuf> {
        let backup = self.backup_path(path);

        // fs::copy carries the permission bits over
        fs::copy(path, &backup).map_err(|source| SaveSwapError::Backup {
            path: path.to_path_buf(),
            backup: backup.clone(),
            source,
        })?;

        Ok(backup)
    }
}
