use crate::domain::model::SwapMode;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Where save dumps are read from and written back to.
pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
    /// Copy the file at `path` aside before it is overwritten, returning the copy's path.
    fn backup_file(&self, path: &Path) -> Result<PathBuf>;
}

/// Options resolved for one run, shared by every file in it.
pub trait ConfigProvider {
    fn swap_mode(&self) -> SwapMode;
    /// `Some` overrides size detection; `Some(0)` also disables the divisibility check.
    fn force_padding(&self) -> Option<usize>;
    fn backup_enabled(&self) -> bool;
}
