use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::BrowserEntry;

use super::theme::Theme;

const DIR_ICON: &str = "▸ ";
const PARENT_ICON: &str = "↰ ";

/// Scrollable list of subdirectories
pub struct DirList<'a> {
    entries: &'a [BrowserEntry],
    selected_index: usize,
    scroll_offset: usize,
    theme: &'a Theme,
}

impl<'a> DirList<'a> {
    pub fn new(
        entries: &'a [BrowserEntry],
        selected_index: usize,
        scroll_offset: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            entries,
            selected_index,
            scroll_offset,
            theme,
        }
    }
}

impl Widget for DirList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 6 || area.height < 1 {
            return;
        }

        if self.entries.is_empty() {
            buf.set_string(
                area.x + 2,
                area.y,
                "(no subfolders)",
                Style::default().fg(self.theme.fg_muted),
            );
            return;
        }

        let width = area.width as usize;
        let rows = self
            .entries
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(area.height as usize);

        for (row, (idx, entry)) in rows.enumerate() {
            let y = area.y + row as u16;
            let is_selected = idx == self.selected_index;

            let (icon, icon_color) = if entry.is_parent {
                (PARENT_ICON, self.theme.fg_dim)
            } else {
                (DIR_ICON, self.theme.yellow)
            };

            let (name_style, icon_style) = if is_selected {
                let selected = Style::default()
                    .fg(self.theme.selection_fg)
                    .bg(self.theme.selection_bg)
                    .add_modifier(Modifier::BOLD);
                buf.set_style(Rect::new(area.x, y, area.width, 1), selected);
                (selected, selected)
            } else {
                (
                    Style::default().fg(self.theme.fg),
                    Style::default().fg(icon_color),
                )
            };

            buf.set_string(area.x + 1, y, icon, icon_style);
            buf.set_stringn(
                area.x + 3,
                y,
                &entry.name,
                width.saturating_sub(4),
                name_style,
            );
        }
    }
}
