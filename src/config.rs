use crate::options::Options;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default, rename = "game")]
    pub(crate) options: Options,

    /// Settings about diagnostic logging
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct LogConfig {
    /// File to write log messages to.  If not set, a file in the local data
    /// directory is used.
    pub(crate) file: Option<PathBuf>,

    /// Minimum level of messages to log, in `tracing_subscriber::EnvFilter`
    /// syntax.  The `RUST_LOG` environment variable takes precedence.
    pub(crate) level: String,
}

impl LogConfig {
    /// Return the file that log messages should be written to, or `None` if
    /// no file is configured and the default path could not be computed
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
        })
    }
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: String::from("info"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Grid;
    use pretty_assertions::assert_eq;
    use std::num::{NonZeroU16, NonZeroUsize};
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, src: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs_err::write(&path, src).expect("config file should be writable");
        path
    }

    #[test]
    fn load_full() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = write_config(
            &dir,
            concat!(
                "[game]\n",
                "tick-period-ms = 33\n",
                "rows = 20\n",
                "cols = 30\n",
                "max-snake-length = 50\n",
                "max-pending-turns = 3\n",
                "\n",
                "[log]\n",
                "file = \"/tmp/snake.log\"\n",
                "level = \"debug\"\n",
            ),
        );
        let config = Config::load(&path, false).expect("config should load");
        assert_eq!(
            config,
            Config {
                options: Options {
                    tick_period: Duration::from_millis(33),
                    grid: Grid::new(
                        NonZeroU16::new(20).expect("20 is nonzero"),
                        NonZeroU16::new(30).expect("30 is nonzero"),
                    ),
                    max_snake_length: NonZeroUsize::new(50).expect("50 is nonzero"),
                    max_pending_turns: NonZeroUsize::new(3).expect("3 is nonzero"),
                },
                log: LogConfig {
                    file: Some(PathBuf::from("/tmp/snake.log")),
                    level: String::from("debug"),
                },
            }
        );
    }

    #[test]
    fn load_partial() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = write_config(&dir, "[game]\ntick-period-ms = 200\n");
        let config = Config::load(&path, false).expect("config should load");
        assert_eq!(config.options.tick_period, Duration::from_millis(200));
        assert_eq!(config.options.grid, Options::default().grid);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn load_empty() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = write_config(&dir, "");
        let config = Config::load(&path, false).expect("config should load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_allowed() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("nonexistent.toml");
        let config = Config::load(&path, true).expect("missing config should be allowed");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_not_allowed() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("nonexistent.toml");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn load_zero_cols() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = write_config(&dir, "[game]\ncols = 0\n");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_unknown_key() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = write_config(&dir, "[game]\nwraparound = true\n");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn explicit_log_file() {
        let log = LogConfig {
            file: Some(PathBuf::from("snake.log")),
            ..LogConfig::default()
        };
        assert_eq!(log.log_file(), Some(PathBuf::from("snake.log")));
    }
}
