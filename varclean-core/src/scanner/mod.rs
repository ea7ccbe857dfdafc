mod partition;
mod result;
mod walker;

pub use partition::partition_outdated;
pub use result::{ListedFile, ScanResult, VersionedFile};
pub use walker::scan_directory;
