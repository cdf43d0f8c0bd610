use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".movie-rental";
/// Log file written inside the application data directory.
const LOG_FILE_NAME: &str = "movie-rental.log";
/// Environment variable holding a `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "MOVIE_RENTAL_LOG";
/// Filter used when the environment does not provide one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where diagnostics are written. The TUI owns stdout, so logs go here.
    pub log_file: PathBuf,
    /// `EnvFilter` directive, e.g. `info` or `movie_rental=debug`.
    pub log_filter: String,
}

impl AppConfig {
    /// Place the log file under the user's home and read the filter from
    /// `MOVIE_RENTAL_LOG`.
    pub fn from_env() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        let mut config = Self::with_log_dir(base_dirs.home_dir().join(DATA_DIR_NAME));
        config.log_filter = resolve_log_filter(env::var(LOG_FILTER_ENV).ok());
        Ok(config)
    }

    /// Build a config that logs into `dir` with the default filter.
    pub fn with_log_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            log_file: dir.as_ref().join(LOG_FILE_NAME),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Pick the filter directive: a non-blank override wins, otherwise `info`.
fn resolve_log_filter(raw: Option<String>) -> String {
    raw.filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_config_uses_default_filter() {
        let config = AppConfig::with_log_dir("/tmp/movies");
        assert_eq!(config.log_file, PathBuf::from("/tmp/movies/movie-rental.log"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unset_filter_uses_default() {
        assert_eq!(resolve_log_filter(None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn blank_filter_uses_default() {
        assert_eq!(resolve_log_filter(Some("   ".into())), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn set_filter_overrides_default() {
        assert_eq!(
            resolve_log_filter(Some("movie_rental=debug".into())),
            "movie_rental=debug"
        );
    }
}
