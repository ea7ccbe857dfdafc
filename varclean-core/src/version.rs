use std::sync::LazyLock;

use regex::Regex;

/// `<base>.<digits>.var`, with a minimal base so the tail is exactly one
/// version segment followed by the extension.
static VERSIONED_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<base>.+?)\.(?P<version>[0-9]+)\.var$")
        .expect("Invalid versioned name regex")
});

/// A file name split into its base and version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedName {
    pub base: String,
    pub version: u64,
}

/// Parse a file name of the form `<base>.<version>.var`.
///
/// Returns `None` for names outside the versioned set, including versions
/// too large to fit in a `u64`.
pub fn parse_versioned_name(name: &str) -> Option<VersionedName> {
    let caps = VERSIONED_NAME_REGEX.captures(name)?;
    let base = caps.name("base")?.as_str();
    let digits = caps.name("version")?.as_str();

    match digits.parse::<u64>() {
        Ok(version) => Some(VersionedName {
            base: base.to_string(),
            version,
        }),
        Err(e) => {
            tracing::debug!("Ignoring {name}: version {digits} out of range ({e})");
            None
        }
    }
}
