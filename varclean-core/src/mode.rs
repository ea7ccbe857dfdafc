use std::fmt;
use std::str::FromStr;

use crate::VarCleanError;

/// What to do with outdated files once they are found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report only
    View,
    /// Report, then offer to delete
    Update,
}

impl FromStr for Mode {
    type Err = VarCleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("view") {
            Ok(Mode::View)
        } else if trimmed.eq_ignore_ascii_case("update") {
            Ok(Mode::Update)
        } else {
            Err(VarCleanError::InvalidMode(trimmed.to_string()))
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::View => f.write_str("VIEW"),
            Mode::Update => f.write_str("UPDATE"),
        }
    }
}
