use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the preference store inside the home directory
pub const PREFERENCES_FILE_NAME: &str = ".var_cleaner_config.json";

/// Contents of the preference file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    /// Directory chosen on the previous run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_dir: Option<PathBuf>,
}

/// Remembers the last directory the user picked.
///
/// Both operations are best-effort: a missing, unreadable or corrupt file
/// behaves like an empty store, and write failures are dropped.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A store that never remembers anything (no home directory available)
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Store located at `<home>/.var_cleaner_config.json`
    pub fn in_home(home: Option<PathBuf>) -> Self {
        match home {
            Some(home) => Self::new(home.join(PREFERENCES_FILE_NAME)),
            None => Self::disabled(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Last directory saved, if any
    pub fn load(&self) -> Option<PathBuf> {
        let path = self.path.as_ref()?;
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!("No preferences loaded from {:?}: {}", path, e);
                return None;
            }
        };

        match serde_json::from_str::<Preferences>(&data) {
            Ok(prefs) => prefs.last_dir,
            Err(e) => {
                tracing::debug!("Ignoring corrupt preferences {:?}: {}", path, e);
                None
            }
        }
    }

    /// Remember `dir` for the next run
    pub fn save(&self, dir: &Path) {
        let Some(path) = self.path.as_ref() else {
            return;
        };

        let prefs = Preferences {
            last_dir: Some(dir.to_path_buf()),
        };
        if let Err(e) = write_preferences(path, &prefs) {
            tracing::debug!("Failed to save preferences to {:?}: {}", path, e);
        }
    }
}

/// Write to a temp file then rename over the target
fn write_preferences(path: &Path, prefs: &Preferences) -> std::io::Result<()> {
    let data = serde_json::to_vec(prefs)?;

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path)?;
    file.write_all(&data)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp.path().join("prefs.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp.path().join("prefs.json"));
        let dir = temp.path().join("packages");

        store.save(&dir);

        assert_eq!(store.load(), Some(dir));
    }

    #[test]
    fn test_file_format() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("prefs.json");
        let store = PreferenceStore::new(&file);

        store.save(Path::new("/games/vam/AddonPackages"));

        let raw = fs::read_to_string(&file).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["last_dir"], "/games/vam/AddonPackages");
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("prefs.json");
        fs::write(&file, "{ not json").unwrap();

        assert_eq!(PreferenceStore::new(&file).load(), None);
    }

    #[test]
    fn test_unknown_keys_and_missing_last_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("prefs.json");

        fs::write(&file, r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(PreferenceStore::new(&file).load(), None);

        fs::write(&file, r#"{"theme": "dark", "last_dir": "rel/dir"}"#).unwrap();
        assert_eq!(
            PreferenceStore::new(&file).load(),
            Some(PathBuf::from("rel/dir"))
        );
    }

    #[test]
    fn test_save_failure_is_silent() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp.path().join("missing").join("prefs.json"));

        store.save(temp.path());

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_disabled_store() {
        let store = PreferenceStore::in_home(None);
        store.save(Path::new("/tmp"));
        assert_eq!(store.load(), None);
        assert!(store.path().is_none());
    }

    #[test]
    fn test_in_home_location() {
        let store = PreferenceStore::in_home(Some(PathBuf::from("/home/user")));
        assert_eq!(
            store.path(),
            Some(Path::new("/home/user/.var_cleaner_config.json"))
        );
    }
}
