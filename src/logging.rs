//! File logging.
//!
//! stdout belongs to the terminal renderer, so log records go to a file via
//! log4rs. Without a configured path no logger is installed and the `log`
//! macros are no-ops.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

/// Build the log4rs configuration for a file at `path`.
pub fn file_config(path: &Path, level: LevelFilter) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("building log config")
}

/// Install the global logger if a path is configured.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let config = file_config(path, level)?;
    log4rs::init_config(config).context("installing logger")?;
    log::info!("logging to {} at {}", path.display(), level);
    Ok(())
}
