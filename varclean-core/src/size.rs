const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

/// Format bytes into a human-readable string with two decimals.
///
/// The value is divided by 1024 until it drops below 1024, picking the
/// matching unit. Anything that is still 1024 TB or more is shown in PB
/// without further division.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.2} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.2} PB", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;
    const PB: u64 = TB * 1024;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 bytes");
        assert_eq!(format_size(512), "512.00 bytes");
        assert_eq!(format_size(1023), "1023.00 bytes");
        assert_eq!(format_size(KB), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(MB), "1.00 MB");
        assert_eq!(format_size(GB), "1.00 GB");
        assert_eq!(format_size(TB), "1.00 TB");
    }

    #[test]
    fn test_format_size_caps_at_petabytes() {
        assert_eq!(format_size(PB), "1.00 PB");
        assert_eq!(format_size(PB * 1024), "1024.00 PB");
    }
}
