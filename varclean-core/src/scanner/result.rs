use std::path::PathBuf;

/// A directory entry handed to the partitioner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    /// Full path of the entry
    pub path: PathBuf,
    /// File name used for version matching
    pub name: String,
}

impl ListedFile {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// A file following the `<base>.<version>.var` convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedFile {
    /// Full path on disk
    pub path: PathBuf,
    /// File name without the trailing `.<version>.var`
    pub base: String,
    /// Parsed version number
    pub version: u64,
    /// Size in bytes (0 when it could not be read)
    pub size_bytes: u64,
}

/// Outcome of scanning a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Files older than the newest version of their base, in listing order
    pub outdated: Vec<VersionedFile>,
    /// Combined size of the outdated files
    pub total_bytes: u64,
}

impl ScanResult {
    pub fn count(&self) -> usize {
        self.outdated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outdated.is_empty()
    }
}
