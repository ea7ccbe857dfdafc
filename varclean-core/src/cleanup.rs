use std::fs;
use std::path::PathBuf;

use crate::scanner::VersionedFile;

/// A file that could not be removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of removing a batch of outdated files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    /// Paths that were removed, in the order they were attempted
    pub deleted: Vec<PathBuf>,
    /// Paths that could not be removed
    pub failures: Vec<DeleteFailure>,
    /// Combined size of the removed files
    pub bytes_freed: u64,
}

impl DeleteReport {
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }
}

/// Remove each file in turn. A failure is recorded and the batch continues.
pub fn delete_outdated(files: &[VersionedFile]) -> DeleteReport {
    let mut report = DeleteReport::default();

    for file in files {
        match fs::remove_file(&file.path) {
            Ok(()) => {
                report.bytes_freed += file.size_bytes;
                report.deleted.push(file.path.clone());
            }
            Err(e) => {
                tracing::warn!("Failed to delete {:?}: {}", file.path, e);
                report.failures.push(DeleteFailure {
                    path: file.path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        "Deleted {} files ({} bytes), {} failures",
        report.deleted.len(),
        report.bytes_freed,
        report.failures.len()
    );

    report
}
