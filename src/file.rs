// src/file.rs

use std::{
    fs,
    path::{ Path, PathBuf },
};

use tracing::{ debug, warn };

use crate::config::consts::REVIEW_EXT;
use crate::core::sanitize::source_label_from_file_name;
use crate::core::text::decode_text;
use crate::error::{ Error, Result };

/// One review dump found in the input directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewFile {
    pub path: PathBuf,
    pub source_label: String,
}

/// Every non-hidden `*.txt` in `dir`, sorted by file name.
pub fn list_review_files(dir: &Path) -> Result<Vec<ReviewFile>> {
    if !dir.is_dir() {
        return Err(Error::MissingInputDir(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else { continue };
        if name.starts_with('.') || !path.is_file() {
            continue;
        }
        if !path.extension().is_some_and(|e| e == REVIEW_EXT) {
            continue;
        }
        files.push(ReviewFile { source_label: source_label_from_file_name(name), path });
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    if files.is_empty() {
        return Err(Error::NoReviewFiles { dir: dir.to_path_buf() });
    }
    debug!("Found {} review files in {}", files.len(), dir.display());
    Ok(files)
}

/// UTF-8, or Latin-1 when the bytes aren't valid UTF-8.
pub fn read_review_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let (text, lossy) = decode_text(bytes);
    if lossy {
        warn!("{} is not valid UTF-8; read as Latin-1", path.display());
    }
    Ok(text)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(Error::io(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// Write `contents`, creating the parent directory first.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}
