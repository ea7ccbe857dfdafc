pub mod cleanup;
pub mod error;
pub mod mode;
pub mod prefs;
pub mod scanner;
pub mod size;
pub mod version;

pub use cleanup::{DeleteFailure, DeleteReport, delete_outdated};
pub use error::{Result, VarCleanError};
pub use mode::Mode;
pub use prefs::{PREFERENCES_FILE_NAME, PreferenceStore, Preferences};
pub use scanner::{ListedFile, ScanResult, VersionedFile, partition_outdated, scan_directory};
pub use size::format_size;
pub use version::{VersionedName, parse_versioned_name};
