use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::Theme;

/// One-line status: the last error, or a usage hint
pub struct StatusLine<'a> {
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(error: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { error, theme }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 1 {
            return;
        }

        let (text, style) = match self.error {
            Some(error) => (error, Style::default().fg(self.theme.red)),
            None => (
                "Choose the folder holding your .var files",
                Style::default().fg(self.theme.fg_muted),
            ),
        };
        buf.set_stringn(
            area.x + 1,
            area.y,
            text,
            area.width.saturating_sub(2) as usize,
            style,
        );
    }
}
