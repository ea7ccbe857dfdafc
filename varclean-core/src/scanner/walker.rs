use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::partition::partition_outdated;
use super::result::{ListedFile, ScanResult};
use crate::{Result, VarCleanError};

/// Scan the top level of `dir` for outdated versioned files.
///
/// Entries that cannot be read, directories and names that are not valid
/// UTF-8 are skipped. Failing to list the directory itself is an error.
pub fn scan_directory(dir: &Path) -> Result<ScanResult> {
    tracing::debug!("Scanning {:?}", dir);

    let files = list_files(dir)?;
    let result = partition_outdated(&files, file_size);

    tracing::debug!(
        "Scanned {} entries in {:?}: {} outdated, {} bytes",
        files.len(),
        dir,
        result.count(),
        result.total_bytes
    );

    Ok(result)
}

/// List non-directory entries of `dir` in the order the OS returns them
fn list_files(dir: &Path) -> Result<Vec<ListedFile>> {
    let metadata = fs::metadata(dir).map_err(|e| io_error_for(dir, e))?;
    if !metadata.is_dir() {
        return Err(VarCleanError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| io_error_for(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };

        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        match entry.file_name().into_string() {
            Ok(name) => files.push(ListedFile::new(path, name)),
            Err(_) => tracing::debug!("Skipping non UTF-8 name {:?}", path),
        }
    }

    Ok(files)
}

fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path).map(|m| m.len()).ok()
}

fn io_error_for(path: &Path, err: std::io::Error) -> VarCleanError {
    let path = path.to_path_buf();
    match err.kind() {
        ErrorKind::NotFound => VarCleanError::PathNotFound(path),
        ErrorKind::PermissionDenied => VarCleanError::PermissionDenied(path),
        _ => VarCleanError::Io(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, len: usize) {
        fs::write(dir.join(name), vec![b'x'; len]).unwrap();
    }

    fn outdated_names(result: &ScanResult) -> Vec<String> {
        let mut names: Vec<String> = result
            .outdated
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp = TempDir::new().unwrap();
        let result = scan_directory(temp.path()).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.total_bytes, 0);
    }

    #[test]
    fn test_scan_reports_older_versions() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.1.var", 5);
        write(temp.path(), "a.2.var", 7);
        write(temp.path(), "a.3.var", 11);

        let result = scan_directory(temp.path()).unwrap();

        assert_eq!(outdated_names(&result), vec!["a.1.var", "a.2.var"]);
        assert_eq!(result.total_bytes, 12);
        assert!(temp.path().join("a.3.var").exists());
    }

    #[test]
    fn test_scan_sums_sizes_of_outdated_only() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "pack.1.var", 100);
        write(temp.path(), "pack.2.var", 200);

        let result = scan_directory(temp.path()).unwrap();

        assert_eq!(outdated_names(&result), vec!["pack.1.var"]);
        assert_eq!(result.outdated[0].size_bytes, 100);
        assert_eq!(result.total_bytes, 100);
    }

    #[test]
    fn test_scan_ignores_unrelated_files() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "readme.txt", 10);
        write(temp.path(), "a.var", 10);
        write(temp.path(), "a.x.var", 10);
        write(temp.path(), "x.5.var", 10);

        let result = scan_directory(temp.path()).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.total_bytes, 0);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write(&nested, "a.1.var", 10);
        write(&nested, "a.2.var", 10);
        write(temp.path(), "a.3.var", 10);

        let result = scan_directory(temp.path()).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_skips_directories_with_versioned_names() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a.1.var")).unwrap();
        write(temp.path(), "a.2.var", 10);

        let result = scan_directory(temp.path()).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.1.var", 3);
        write(temp.path(), "a.2.var", 3);
        write(temp.path(), "b.7.var", 3);
        write(temp.path(), "b.10.var", 3);

        let first = scan_directory(temp.path()).unwrap();
        let second = scan_directory(temp.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.count(), 2);
    }

    #[test]
    fn test_scan_missing_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");

        let err = scan_directory(&missing).unwrap_err();
        assert!(matches!(err, VarCleanError::PathNotFound(p) if p == missing));
    }

    #[test]
    fn test_scan_file_instead_of_dir() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.1.var", 1);

        let err = scan_directory(&temp.path().join("a.1.var")).unwrap_err();
        assert!(matches!(err, VarCleanError::NotADirectory(_)));
    }
}
