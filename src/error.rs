// src/error.rs
//! Crate-wide error type.
//!
//! Only conditions that stop a whole batch live here. Per-source and
//! per-record trouble is absorbed closer to where it happens:
//! - a document that no grammar can read becomes a `pipeline::SkipReason`;
//! - a failed classification becomes a NEUTRAL/0.5 fallback (`classify`).

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("input directory not found: {}", .0.display())]
    MissingInputDir(PathBuf),

    #[error("no review files (*.txt) found in {}", .dir.display())]
    NoReviewFiles { dir: PathBuf },

    #[error("no reviews could be parsed from any source ({skipped} skipped)")]
    NoUsableInput { skipped: usize },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
