use crate::domain::model::ExitSeverity;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the swap engine and the size classifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("File size {len} does not match any known save size{}", nearest_hint(.nearest))]
    UnrecognizedSize { len: usize, nearest: Option<usize> },

    #[error("File size {len} is not a multiple of the {} increment of {increment} bytes", increment_kind(.forced))]
    MisalignedSize {
        len: usize,
        increment: usize,
        forced: bool,
    },
}

fn nearest_hint(nearest: &Option<usize>) -> String {
    match nearest {
        Some(size) => format!(" (next valid size is {})", size),
        None => " (larger than every valid size)".to_string(),
    }
}

fn increment_kind(forced: &bool) -> &'static str {
    if *forced {
        "forced"
    } else {
        "swap"
    }
}

impl SwapError {
    pub fn severity(&self) -> ExitSeverity {
        match self {
            SwapError::UnrecognizedSize { .. } => ExitSeverity::UnrecognizedSize,
            SwapError::MisalignedSize { .. } => ExitSeverity::MisalignedSize,
        }
    }
}

#[derive(Error, Debug)]
pub enum SaveSwapError {
    #[error(transparent)]
    Swap(#[from] SwapError),

    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not back up {} to {}: {source}", .path.display(), .backup.display())]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SaveSwapError {
    /// The exit severity this error contributes to the run.
    pub fn severity(&self) -> ExitSeverity {
        match self {
            SaveSwapError::Swap(e) => e.severity(),
            SaveSwapError::Read { .. }
            | SaveSwapError::Backup { .. }
            | SaveSwapError::Write { .. } => ExitSeverity::Io,
            SaveSwapError::ConfigError { .. } | SaveSwapError::InvalidConfigValueError { .. } => {
                ExitSeverity::Usage
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SaveSwapError::Swap(SwapError::UnrecognizedSize { nearest: Some(size), .. }) => format!(
                "If this really is a save dump, pad it to {} bytes or pass --force-padding",
                size
            ),
            SaveSwapError::Swap(SwapError::UnrecognizedSize { nearest: None, .. }) => {
                "Pass --force-padding to swap files that are not N64 save dumps".to_string()
            }
            SaveSwapError::Swap(SwapError::MisalignedSize { forced: true, .. }) => {
                "Pick a --force-padding size that divides the file length, or 0 to disable the check"
                    .to_string()
            }
            SaveSwapError::Swap(SwapError::MisalignedSize { forced: false, .. }) => {
                "The dump looks truncated; try another --swap-mode or re-dump the cartridge"
                    .to_string()
            }
            SaveSwapError::Read { .. } => "Check that the file exists and is readable".to_string(),
            SaveSwapError::Backup { .. } => {
                "Check the directory is writable, or pass --no-backup".to_string()
            }
            SaveSwapError::Write { .. } => "Check that the file is writable".to_string(),
            SaveSwapError::ConfigError { .. } | SaveSwapError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SaveSwapError>;
