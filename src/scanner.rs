use crate::error::TouchError;
use crate::types::FileRecord;
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct Scan {
    pub files: Vec<FileRecord>,
    pub skipped_dirs: usize,
    pub skipped_special: usize,
}

/// Lists the direct-child regular files of `dir`, recording each file's size
/// and current mtime before anything is modified.
///
/// Entry types are taken without following symlinks, so a symlink to a regular
/// file is classified as a symlink and skipped along with sockets, devices and
/// other special entries. Fails before enumerating anything if `dir` is
/// missing, unreadable, or not a directory.
pub fn list_regular_files(dir: &Path) -> Result<Scan, TouchError> {
    let meta = fs::metadata(dir).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            TouchError::NotFound(dir.to_path_buf())
        } else {
            TouchError::ReadDir {
                path: dir.to_path_buf(),
                source,
            }
        }
    })?;

    if !meta.is_dir() {
        return Err(TouchError::NotADirectory(dir.to_path_buf()));
    }

    let mut scan = Scan::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| TouchError::ReadDir {
            path: dir.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("directory walk failed")),
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            log::debug!("skipping directory: {}", entry.path().display());
            scan.skipped_dirs += 1;
            continue;
        }
        if !file_type.is_file() {
            log::debug!("skipping non-regular entry: {}", entry.path().display());
            scan.skipped_special += 1;
            continue;
        }

        let metadata = entry.metadata().map_err(|e| TouchError::ReadDir {
            path: dir.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("metadata read failed")),
        })?;

        // Use UNIX_EPOCH as fallback so an unreadable mtime never shows up as
        // "just now" in the summary
        let previous_modified: DateTime<Local> =
            metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH).into();

        scan.files.push(FileRecord {
            path: entry.path().to_path_buf(),
            name: entry.file_name().to_string_lossy().to_string(),
            size: metadata.len(),
            previous_modified,
        });
    }

    Ok(scan)
}
