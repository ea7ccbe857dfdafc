//! Where the directory to clean comes from.
//!
//! A terminal session gets the full-screen browser; anything else (pipes,
//! redirected output, `--plain`) gets a one-line prompt. The scanner does not
//! care which one produced the path.

mod browser;
mod prompt;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use color_eyre::Result;
use varclean_core::PreferenceStore;

pub use browser::BrowserSource;
pub use prompt::PromptSource;

/// Something that can ask the user for a directory
pub trait DirectorySource {
    /// Ask for a directory, starting from `initial`. `None` means the user
    /// gave up without choosing.
    fn pick(&mut self, initial: &Path) -> Result<Option<PathBuf>>;
}

/// Pick the browser when both ends are terminals, otherwise the prompt
pub fn select_source(force_plain: bool) -> Box<dyn DirectorySource> {
    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    if interactive && !force_plain {
        tracing::debug!("Using terminal directory browser");
        Box::new(BrowserSource::new())
    } else {
        tracing::debug!("Using plain directory prompt");
        Box::new(PromptSource::stdio())
    }
}

/// Ask `source` for a directory, starting from the remembered one.
///
/// The answer is kept only if it names an existing directory, in which case
/// it is remembered for next time.
pub fn choose_directory(
    source: &mut dyn DirectorySource,
    store: &PreferenceStore,
) -> Result<Option<PathBuf>> {
    let initial = match store.load() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let picked = source.pick(&initial)?;
    Ok(accept_directory(picked, store))
}

/// Keep `picked` if it is a directory and remember it
pub fn accept_directory(picked: Option<PathBuf>, store: &PreferenceStore) -> Option<PathBuf> {
    let dir = picked.filter(|p| p.is_dir())?;
    store.save(&dir);
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Returns a fixed answer and records where it was asked to start
    struct FixedSource {
        answer: Option<PathBuf>,
        asked_from: Option<PathBuf>,
    }

    impl DirectorySource for FixedSource {
        fn pick(&mut self, initial: &Path) -> Result<Option<PathBuf>> {
            self.asked_from = Some(initial.to_path_buf());
            Ok(self.answer.clone())
        }
    }

    #[test]
    fn test_choice_is_remembered() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("packages");
        fs::create_dir(&target).unwrap();
        let store = PreferenceStore::new(temp.path().join("prefs.json"));
        let mut source = FixedSource {
            answer: Some(target.clone()),
            asked_from: None,
        };

        let chosen = choose_directory(&mut source, &store).unwrap();

        assert_eq!(chosen, Some(target.clone()));
        assert_eq!(store.load(), Some(target));
    }

    #[test]
    fn test_starts_from_remembered_directory() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp.path().join("prefs.json"));
        store.save(temp.path());
        let mut source = FixedSource {
            answer: None,
            asked_from: None,
        };

        let chosen = choose_directory(&mut source, &store).unwrap();

        assert_eq!(chosen, None);
        assert_eq!(source.asked_from.as_deref(), Some(temp.path()));
    }

    #[test]
    fn test_non_directory_is_rejected_and_not_saved() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.1.var");
        fs::write(&file, b"x").unwrap();
        let store = PreferenceStore::new(temp.path().join("prefs.json"));

        assert_eq!(accept_directory(Some(file), &store), None);
        assert_eq!(accept_directory(Some(temp.path().join("gone")), &store), None);
        assert_eq!(accept_directory(None, &store), None);
        assert_eq!(store.load(), None);
    }
}
