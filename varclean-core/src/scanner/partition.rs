use std::collections::HashMap;
use std::path::Path;

use super::result::{ListedFile, ScanResult, VersionedFile};
use crate::version::parse_versioned_name;

/// Split a listing into outdated versioned files and their combined size.
///
/// A file is outdated when its version is strictly below the highest version
/// seen for the same base. Names outside the `<base>.<version>.var` set are
/// ignored. `size_of` is only consulted for outdated files; `None` counts as
/// zero bytes but the file is still reported.
pub fn partition_outdated<F>(files: &[ListedFile], mut size_of: F) -> ScanResult
where
    F: FnMut(&Path) -> Option<u64>,
{
    let parsed: Vec<_> = files
        .iter()
        .filter_map(|file| parse_versioned_name(&file.name).map(|name| (file, name)))
        .collect();

    let mut latest: HashMap<&str, u64> = HashMap::new();
    for (_, name) in &parsed {
        let max = latest.entry(name.base.as_str()).or_insert(name.version);
        if name.version > *max {
            *max = name.version;
        }
    }

    let mut result = ScanResult::default();
    for (file, name) in &parsed {
        let max = latest
            .get(name.base.as_str())
            .copied()
            .unwrap_or(name.version);
        if name.version >= max {
            continue;
        }

        let size_bytes = size_of(&file.path).unwrap_or(0);
        result.total_bytes += size_bytes;
        result.outdated.push(VersionedFile {
            path: file.path.clone(),
            base: name.base.clone(),
            version: name.version,
            size_bytes,
        });
    }

    result
}
