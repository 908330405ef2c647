use std::io::IsTerminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LEVELS: [LevelFilter; 5] = [
    LevelFilter::OFF,
    LevelFilter::ERROR,
    LevelFilter::WARN,
    LevelFilter::INFO,
    LevelFilter::DEBUG,
];

const DEFAULT_LEVEL: usize = 2;

/// Map `-v`/`-q` counts onto a level, starting from warnings.
pub fn level_for(verbose: u8, quiet: u8) -> LevelFilter {
    let index = (DEFAULT_LEVEL + verbose as usize)
        .saturating_sub(quiet as usize)
        .min(LEVELS.len() - 1);
    LEVELS[index]
}

/// Install a stderr logger. `RUST_LOG` wins over the computed level.
pub fn init_cli_logger(level: LevelFilter) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .without_time()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
