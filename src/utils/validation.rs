use crate::utils::error::{Result, SaveSwapError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.display().to_string();

    if path.as_os_str().is_empty() {
        return Err(SaveSwapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(SaveSwapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(SaveSwapError::ConfigError {
            message: format!("At least one {} is required", field_name),
        });
    }
    Ok(())
}

/// A backup suffix is appended to the file name, so it must stay in the same directory.
pub fn validate_backup_suffix(field_name: &str, suffix: &str) -> Result<()> {
    if suffix.trim().is_empty() {
        return Err(SaveSwapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }

    if suffix.contains(['/', '\\', '\0']) {
        return Err(SaveSwapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Suffix cannot contain path separators or null bytes".to_string(),
        });
    }

    Ok(())
}
