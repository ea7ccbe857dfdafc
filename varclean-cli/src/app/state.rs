use std::fs;
use std::path::{Path, PathBuf};

use varclean_core::scan_directory;

/// How the browser was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserOutcome {
    Selected(PathBuf),
    Cancelled,
}

/// A row in the directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
    /// The `..` row
    pub is_parent: bool,
}

/// Outdated files found in the directory currently shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryPreview {
    pub outdated: usize,
    pub total_bytes: u64,
}

/// Directory browser state
pub struct BrowserState {
    /// Directory being listed
    pub current_dir: PathBuf,
    /// Subdirectories of `current_dir`, `..` first when there is a parent
    pub entries: Vec<BrowserEntry>,
    /// Currently selected row
    pub selected_index: usize,
    /// Scroll offset for the listing
    pub scroll_offset: usize,
    /// Visible area height (set by UI)
    pub visible_height: usize,
    /// Outdated-file summary for `current_dir`
    pub preview: Option<DirectoryPreview>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Set once the user selects or cancels
    pub outcome: Option<BrowserOutcome>,
}

impl BrowserState {
    pub fn new(start: PathBuf) -> Self {
        let mut state = Self {
            current_dir: start.clone(),
            entries: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            visible_height: 20,
            preview: None,
            error_message: None,
            outcome: None,
        };
        if let Err(e) = state.load(start) {
            state.error_message = Some(e);
        }
        state
    }

    /// Replace the listing with the contents of `dir`.
    ///
    /// On failure the previous listing is kept.
    fn load(&mut self, dir: PathBuf) -> Result<(), String> {
        let entries = list_subdirectories(&dir)
            .map_err(|e| format!("Cannot open {}: {}", dir.display(), e))?;

        self.preview = scan_directory(&dir).ok().map(|scan| DirectoryPreview {
            outdated: scan.count(),
            total_bytes: scan.total_bytes,
        });
        self.current_dir = dir;
        self.entries = entries;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.error_message = None;
        Ok(())
    }

    fn navigate_to(&mut self, dir: PathBuf) {
        if let Err(e) = self.load(dir) {
            tracing::debug!("{}", e);
            self.error_message = Some(e);
        }
    }

    pub fn selected_entry(&self) -> Option<&BrowserEntry> {
        self.entries.get(self.selected_index)
    }

    fn ensure_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.selected_index + 1 - self.visible_height.max(1);
        }
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.ensure_visible();
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
            self.ensure_visible();
        }
    }

    pub fn page_up(&mut self) {
        let page = self.visible_height.max(1);
        self.selected_index = self.selected_index.saturating_sub(page);
        self.ensure_visible();
    }

    pub fn page_down(&mut self) {
        let page = self.visible_height.max(1);
        let last = self.entries.len().saturating_sub(1);
        self.selected_index = (self.selected_index + page).min(last);
        self.ensure_visible();
    }

    pub fn go_to_first(&mut self) {
        self.selected_index = 0;
        self.ensure_visible();
    }

    pub fn go_to_last(&mut self) {
        self.selected_index = self.entries.len().saturating_sub(1);
        self.ensure_visible();
    }

    /// Enter the highlighted directory
    pub fn open_selected(&mut self) {
        if let Some(entry) = self.selected_entry() {
            let path = entry.path.clone();
            self.navigate_to(path);
        }
    }

    /// Go to the parent of the current directory, keeping the child selected
    pub fn go_parent(&mut self) {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return;
        };
        let child = self.current_dir.clone();
        self.navigate_to(parent);

        if let Some(idx) = self
            .entries
            .iter()
            .position(|e| !e.is_parent && e.path == child)
        {
            self.selected_index = idx;
            self.ensure_visible();
        }
    }

    pub fn select_current(&mut self) {
        self.outcome = Some(BrowserOutcome::Selected(self.current_dir.clone()));
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(BrowserOutcome::Cancelled);
    }
}

/// Subdirectories of `dir` sorted case-insensitively, with `..` on top
fn list_subdirectories(dir: &Path) -> std::io::Result<Vec<BrowserEntry>> {
    let mut dirs: Vec<BrowserEntry> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| BrowserEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            is_parent: false,
        })
        .collect();
    dirs.sort_by_key(|e| e.name.to_lowercase());

    let mut entries = Vec::with_capacity(dirs.len() + 1);
    if let Some(parent) = dir.parent() {
        entries.push(BrowserEntry {
            name: "..".to_string(),
            path: parent.to_path_buf(),
            is_parent: true,
        });
    }
    entries.extend(dirs);
    Ok(entries)
}
