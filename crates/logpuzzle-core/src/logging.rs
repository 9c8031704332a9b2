//! Logging init: stderr by default, or a file under the XDG state dir when configured.

use crate::config::LogpuzzleConfig;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Quiet unless `RUST_LOG` asks for more; stdout carries the program's real output.
const DEFAULT_FILTER: &str = "warn";

const LOG_FILE: &str = "logpuzzle.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Pick the log destination from config. File logging that cannot be set up
/// falls back to stderr so the CLI never fails because of logging.
pub fn init(cfg: &LogpuzzleConfig) {
    if !cfg.log_to_file {
        if let Err(err) = init_logging_stderr() {
            eprintln!("logpuzzle: logging disabled: {:#}", err);
        }
        return;
    }
    match log_file_path().and_then(|path| init_logging_file(&path)) {
        Ok(path) => tracing::info!("logging to {}", path.display()),
        Err(file_err) => match init_logging_stderr() {
            Ok(()) => tracing::warn!("file logging unavailable, using stderr: {:#}", file_err),
            Err(err) => eprintln!("logpuzzle: logging disabled: {:#}", err),
        },
    }
}

/// `~/.local/state/logpuzzle/logpuzzle.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("logpuzzle")?;
    Ok(xdg_dirs.get_state_home().join("logpuzzle").join(LOG_FILE))
}

/// Append tracing output to `path`, creating its directory if needed.
pub fn init_logging_file(path: &Path) -> Result<PathBuf> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install file subscriber: {}", e))?;

    Ok(path.to_path_buf())
}

/// Initialize logging to stderr only (no file).
pub fn init_logging_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install stderr subscriber: {}", e))
}

fn open_log_file(path: &Path) -> Result<File> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}
