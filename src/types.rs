use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub previous_modified: DateTime<Local>,
}

#[derive(Debug)]
pub struct TouchOutcome {
    pub timestamp: DateTime<Local>,
    pub touched: Vec<FileRecord>,
    pub skipped_dirs: usize,
    pub skipped_special: usize,
}
