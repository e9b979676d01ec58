//! Logging setup using `tracing-subscriber`.
//!
//! Logs go to stderr so that `--output json` on stdout stays machine-readable.
//! An explicit level wins; otherwise `RUST_LOG` is honoured, defaulting to
//! `warn`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::{LogFormatArg, LogLevelArg};

pub fn init_logging(level: Option<LogLevelArg>, format: LogFormatArg) -> anyhow::Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::default().add_directive(level_filter(level).into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormatArg::Pretty => builder.pretty().try_init(),
        LogFormatArg::Compact => builder.compact().try_init(),
        LogFormatArg::Json => builder.json().try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

fn level_filter(level: LogLevelArg) -> LevelFilter {
    match level {
        LogLevelArg::Error => LevelFilter::ERROR,
        LogLevelArg::Warn => LevelFilter::WARN,
        LogLevelArg::Info => LevelFilter::INFO,
        LogLevelArg::Debug => LevelFilter::DEBUG,
        LogLevelArg::Trace => LevelFilter::TRACE,
    }
}
