pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use super::cli::DEFAULT_BACKUP_SUFFIX;
    use super::toml_config::FileConfig;
    use crate::core::ConfigProvider;
    use crate::domain::model::SwapMode;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_backup_suffix, validate_non_empty, validate_path, Validate,
    };
    use clap::{ArgAction, Parser};
    use std::path::PathBuf;

    const AFTER_HELP: &str = "\
The swap modes behave as follows:
        both: 12 34 -> 43 21
  bytes-only: 12 34 -> 21 43
  words-only: 12 34 -> 34 12

The valid padding sizes for N64 save dumps are as follows:
  ===== EEPROM =====
      512 (  4kbit)
     2048 ( 16kbit)
  ====== SRAM ======
    32768 (256kbit)
   131072 (  1Mbit)
  ===== Flash ======
   131072 (  1Mbit)

Exit codes: 0 success, 10 read/backup failure, 20 unrecognized size,
30 size not a multiple of the swap increment.";

    #[derive(Debug, Clone, Parser)]
    #[command(name = "saveswap", version)]
    #[command(about = "Byte-swap Nintendo 64 SRAM/EEPROM/Flash save dumps")]
    #[command(after_help = AFTER_HELP)]
    pub struct CliConfig {
        /// One or more Nintendo 64 save memory dumps to byte-swap
        #[arg(required = true, value_name = "PATH")]
        pub paths: Vec<PathBuf>,

        /// Set the type of byte-swapping to be performed [default: both]
        #[arg(long, value_enum)]
        pub swap_mode: Option<SwapMode>,

        /// Override autodetected padding size. This also disables the
        /// associated safety checks, allowing this tool to be used on other
        /// types of files. Specify 0 to disable the size check entirely.
        #[arg(long, value_name = "NEW_SIZE")]
        pub force_padding: Option<usize>,

        /// Don't copy each file to a backup before overwriting it
        #[arg(long)]
        pub no_backup: bool,

        /// Suffix appended to a file's name to form its backup [default: .bak]
        #[arg(long, value_name = "SUFFIX")]
        pub backup_suffix: Option<String>,

        /// TOML file supplying defaults for the options above
        #[arg(long, value_name = "FILE")]
        pub config: Option<PathBuf>,

        /// Increase the verbosity. Use twice for extra effect.
        #[arg(short, long, action = ArgAction::Count)]
        pub verbose: u8,

        /// Decrease the verbosity. Use twice for extra effect.
        #[arg(short, long, action = ArgAction::Count)]
        pub quiet: u8,
    }

    impl CliConfig {
        /// Fill anything not given on the command line from a config file.
        pub fn apply_file(&mut self, file: FileConfig) {
            if self.swap_mode.is_none() {
                self.swap_mode = file.swap_mode;
            }
            if self.force_padding.is_none() {
                self.force_padding = file.force_padding;
            }
            if file.backup == Some(false) {
                self.no_backup = true;
            }
            if self.backup_suffix.is_none() {
                self.backup_suffix = file.backup_suffix;
            }
        }

        pub fn backup_suffix(&self) -> &str {
            self.backup_suffix.as_deref().unwrap_or(DEFAULT_BACKUP_SUFFIX)
        }
    }

    impl ConfigProvider for CliConfig {
        fn swap_mode(&self) -> SwapMode {
            self.swap_mode.unwrap_or_default()
        }

        fn force_padding(&self) -> Option<usize> {
            self.force_padding
        }

        fn backup_enabled(&self) -> bool {
            !self.no_backup
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_empty("path", &self.paths)?;
            for path in &self.paths {
                validate_path("path", path)?;
            }
            validate_backup_suffix("backup_suffix", self.backup_suffix())
        }
    }

}
