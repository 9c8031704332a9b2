use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Host prepended to every matched `/edu...jpg` path.
pub const DEFAULT_HOST_PREFIX: &str = "http://code.google.com";

/// Global configuration loaded from `~/.config/logpuzzle/config.toml`.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogpuzzleConfig {
    /// Scheme and host joined in front of each extracted path.
    pub host_prefix: String,
    /// Connect timeout for image fetches in seconds (None = libcurl default).
    pub connect_timeout_secs: Option<u64>,
    /// Optional `User-Agent` sent with image fetches.
    pub user_agent: Option<String>,
    /// Write tracing output to `~/.local/state/logpuzzle/logpuzzle.log` instead of stderr.
    pub log_to_file: bool,
}

impl Default for LogpuzzleConfig {
    fn default() -> Self {
        Self {
            host_prefix: DEFAULT_HOST_PREFIX.to_string(),
            connect_timeout_secs: None,
            user_agent: None,
            log_to_file: false,
        }
    }
}

impl LogpuzzleConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

/// Existing config file, if any. The file is never created on the user's behalf.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("logpuzzle")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, or defaults when no file exists.
pub fn load() -> Result<LogpuzzleConfig> {
    match config_path()? {
        Some(path) => load_from_path(&path),
        None => Ok(LogpuzzleConfig::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<LogpuzzleConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: LogpuzzleConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
