pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::FileConfig};
pub use crate::core::processor::{RunSummary, SaveSwapper};
pub use crate::core::swap::swap;
pub use domain::model::{ExitSeverity, SaveFormat, SwapMode, SwapOutcome, SwapRequest};
pub use utils::error::{Result, SaveSwapError, SwapError};
