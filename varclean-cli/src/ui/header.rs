use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use varclean_core::format_size;

use crate::app::BrowserState;

use super::theme::Theme;

/// Header widget showing title, current path, and outdated-file summary
pub struct Header<'a> {
    state: &'a BrowserState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a BrowserState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        // Title
        let title = "VARCLEAN";
        let title_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, title, title_style);

        buf.set_string(
            area.x + 10,
            area.y,
            "─",
            Style::default().fg(self.theme.border),
        );

        // Status (right-aligned)
        let (status, status_style) = match self.state.preview {
            Some(preview) => (
                format!(
                    "{} outdated, {}",
                    preview.outdated,
                    format_size(preview.total_bytes)
                ),
                Style::default().fg(self.theme.preview_color(preview.outdated)),
            ),
            None => (String::new(), Style::default().fg(self.theme.fg_dim)),
        };

        // Path, truncated from the left
        let path = self.state.current_dir.to_string_lossy().to_string();
        let max_path_len = (area.width as usize).saturating_sub(status.len() + 16);
        let display_path = truncate_left(&path, max_path_len);
        buf.set_string(
            area.x + 12,
            area.y,
            &display_path,
            Style::default().fg(self.theme.fg),
        );

        if !status.is_empty() {
            let status_x = (area.x + area.width).saturating_sub(status.len() as u16 + 2);
            buf.set_string(status_x, area.y, &status, status_style);
        }
    }
}

/// Keep the tail of `s` so it fits in `max` characters
pub fn truncate_left(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    let tail: String = s.chars().skip(len - (max - 3)).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_left() {
        assert_eq!(truncate_left("/short", 10), "/short");
        assert_eq!(truncate_left("/a/very/long/path", 10), "...ng/path");
        assert_eq!(truncate_left("/abc", 2), "..");
    }
}
