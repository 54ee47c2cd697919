use crate::error::TouchError;
use crate::scanner;
use crate::types::TouchOutcome;
use chrono::{DateTime, Local};
use filetime::FileTime;
use std::path::Path;
use std::time::SystemTime;

/// Sets atime and mtime of every direct-child regular file of `dir` to "now".
///
/// The timestamp is sampled once, before the first update, and the same value
/// is applied to every file, so all files in one run end up with identical
/// times. Prints `Updated: <path>` per file. Aborts on the first per-file
/// failure; files touched before that point keep their new timestamps.
pub fn touch_all(dir: &Path) -> Result<TouchOutcome, TouchError> {
    let scan = scanner::list_regular_files(dir)?;

    let now = SystemTime::now();
    let stamp = FileTime::from_system_time(now);
    let timestamp: DateTime<Local> = now.into();
    log::debug!(
        "run timestamp: {}",
        timestamp.format("%Y-%m-%d %H:%M:%S%.3f")
    );

    for record in &scan.files {
        filetime::set_file_times(&record.path, stamp, stamp).map_err(|source| {
            TouchError::SetTimes {
                path: record.path.clone(),
                source,
            }
        })?;
        println!("Updated: {}", record.path.display());
    }

    Ok(TouchOutcome {
        timestamp,
        touched: scan.files,
        skipped_dirs: scan.skipped_dirs,
        skipped_special: scan.skipped_special,
    })
}
