use crate::config::LogConfig;
use anyhow::Context;
use fs_err::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber that appends to the configured log
/// file.  The terminal is occupied by the game, so nothing is logged to
/// stderr.
///
/// If the log file cannot be opened, a note is printed to stderr, no
/// subscriber is installed, and `Ok(false)` is returned; the game runs
/// without diagnostics.  An invalid log level is still an error.
pub(crate) fn init(config: &LogConfig) -> anyhow::Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log level {:?}", config.level))?,
    };
    let file = match open_log_file(config) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("gridsnake: logging disabled: {e:#}");
            return Ok(false);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")?;
    Ok(true)
}

fn open_log_file(config: &LogConfig) -> anyhow::Result<File> {
    let path = config
        .log_file()
        .context("failed to determine path to local data directory")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .context("failed to open log file")
}
