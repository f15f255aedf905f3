// src/log.rs
//! Subscriber setup. Library code only emits `tracing` events; binaries pick
//! a sink here. `RUST_LOG` overrides the default `info` filter.

use std::fs::OpenOptions;
use std::path::{ Path, PathBuf };
use std::sync::Mutex;

use tracing_subscriber::{ fmt, EnvFilter };

use crate::config::consts::{ LOG_FILE, STORE_DIR };
use crate::error::{ Error, Result };
use crate::file::ensure_directory;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// CLI: human-readable lines on stderr, stdout stays clean for results.
pub fn init_stderr() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn default_log_path() -> PathBuf {
    Path::new(STORE_DIR).join(LOG_FILE)
}

/// GUI: append to `.store/debug.log`, stamped with time since start.
pub fn init_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    let _ = fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(fmt::time::uptime())
        .try_init();
    Ok(())
}
