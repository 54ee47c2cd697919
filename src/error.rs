use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while touching a folder. All variants carry
/// the offending path; the run aborts on the first failure.
#[derive(Debug, Error)]
pub enum TouchError {
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot list directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("cannot update timestamps on {}: {source}", path.display())]
    SetTimes { path: PathBuf, source: io::Error },
}
