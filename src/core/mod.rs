pub mod classifier;
pub mod processor;
pub mod swap;

pub use crate::domain::model::{ExitSeverity, SaveFormat, SwapMode, SwapOutcome, SwapRequest};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
