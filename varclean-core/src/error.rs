use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VarCleanError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Invalid mode: {0:?} (expected VIEW or UPDATE)")]
    InvalidMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VarCleanError>;
