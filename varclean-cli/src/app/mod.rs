mod action;
mod state;

pub use action::Action;
pub use state::{BrowserEntry, BrowserOutcome, BrowserState, DirectoryPreview};
