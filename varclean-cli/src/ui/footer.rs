use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::theme::Theme;

const HINTS: [(&str, &str); 5] = [
    ("↑↓", "Navigate"),
    ("Enter", "Open"),
    ("Bksp", "Parent"),
    ("s", "Select this folder"),
    ("q", "Cancel"),
];

/// Footer widget showing keyboard hints
pub struct Footer<'a> {
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let key_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg_dim);
        let sep_style = Style::default().fg(self.theme.border);

        let mut x = area.x + 1;
        for (i, (key, desc)) in HINTS.iter().enumerate() {
            // Key
            buf.set_string(x, area.y, *key, key_style);
            x += key.chars().count() as u16 + 1;

            // Description
            buf.set_string(x, area.y, *desc, desc_style);
            x += desc.len() as u16;

            // Separator
            if i < HINTS.len() - 1 {
                buf.set_string(x, area.y, "  │  ", sep_style);
                x += 5;
            }

            if x >= area.x + area.width - 5 {
                break;
            }
        }
    }
}
