use anyhow::Context;
use clap::Parser;
use n64_saveswap::core::ConfigProvider;
use n64_saveswap::utils::{logger, validation::Validate};
use n64_saveswap::{CliConfig, ExitSeverity, FileConfig, LocalStorage, SaveSwapper};

fn load_config() -> anyhow::Result<CliConfig> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(logger::level_for(config.verbose, config.quiet));

    if let Some(path) = config.config.clone() {
        tracing::debug!("Loading defaults from {}", path.display());
        let file = FileConfig::from_file(&path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?;
        file.validate()
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        config.apply_file(file);
    }

    config.validate().context("Invalid command line")?;
    Ok(config)
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            // printed directly so -qq cannot hide it
            eprintln!("ERROR: {:#}", e);
            std::process::exit(ExitSeverity::Usage.code());
        }
    };

    tracing::debug!(
        "Swap mode: {}, forced padding: {:?}, backups: {}",
        config.swap_mode(),
        config.force_padding(),
        config.backup_enabled()
    );

    let storage = LocalStorage::new(config.backup_suffix());
    let paths = config.paths.clone();
    let swapper = SaveSwapper::new(storage, config);

    let summary = swapper.run(&paths);

    if summary.failed.is_empty() {
        tracing::info!("Swapped {} file(s)", summary.succeeded.len());
    } else {
        tracing::warn!(
            "{} of {} file(s) failed",
            summary.failed.len(),
            summary.failed.len() + summary.succeeded.len()
        );
    }

    std::process::exit(summary.exit_code());
}
