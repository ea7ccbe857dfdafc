use std::io::{self, Stdout, stdout};
use std::path::{Path, PathBuf};

use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Style, widgets::Widget};

use super::{DirectorySource, PromptSource};
use crate::app::{Action, BrowserOutcome, BrowserState};
use crate::tui::{AppEvent, EventHandler, handle_key};
use crate::ui::{AppLayout, DirList, Footer, Header, StatusLine, Theme};

/// Full-screen terminal directory browser.
///
/// Falls back to the text prompt when the terminal cannot be switched into
/// raw mode or the alternate screen.
pub struct BrowserSource {
    theme: Theme,
}

impl BrowserSource {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }
}

impl Default for BrowserSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectorySource for BrowserSource {
    fn pick(&mut self, initial: &Path) -> Result<Option<PathBuf>> {
        let start = if initial.is_dir() {
            initial.to_path_buf()
        } else {
            std::env::current_dir()?
        };

        let mut terminal = match enter_terminal() {
            Ok(terminal) => terminal,
            Err(e) => {
                tracing::debug!("Terminal browser unavailable ({e}), using prompt");
                let _ = restore_terminal();
                return PromptSource::stdio().pick(initial);
            }
        };

        let result = run_browser(&mut terminal, BrowserState::new(start), &self.theme);

        restore_terminal()?;

        Ok(match result? {
            BrowserOutcome::Selected(dir) => Some(dir),
            BrowserOutcome::Cancelled => None,
        })
    }
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_browser(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut state: BrowserState,
    theme: &Theme,
) -> Result<BrowserOutcome> {
    let event_handler = EventHandler::new(250);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::new(area);

            // Background
            frame
                .buffer_mut()
                .set_style(area, Style::default().bg(theme.bg));

            // Update visible height for scrolling
            state.visible_height = layout.list.height as usize;

            Header::new(&state, theme).render(layout.header, frame.buffer_mut());
            StatusLine::new(state.error_message.as_deref(), theme)
                .render(layout.status, frame.buffer_mut());
            DirList::new(
                &state.entries,
                state.selected_index,
                state.scroll_offset,
                theme,
            )
            .render(layout.list, frame.buffer_mut());
            Footer::new(theme).render(layout.footer, frame.buffer_mut());
        })?;

        match event_handler.next()? {
            AppEvent::Key(key) => handle_action(&mut state, handle_key(key)),
            AppEvent::Resize | AppEvent::Tick => {}
        }

        if let Some(outcome) = state.outcome.take() {
            return Ok(outcome);
        }
    }
}

fn handle_action(state: &mut BrowserState, action: Action) {
    match action {
        Action::MoveUp => state.move_up(),
        Action::MoveDown => state.move_down(),
        Action::PageUp => state.page_up(),
        Action::PageDown => state.page_down(),
        Action::GoToFirst => state.go_to_first(),
        Action::GoToLast => state.go_to_last(),
        Action::Open => state.open_selected(),
        Action::GoParent => state.go_parent(),
        Action::Select => state.select_current(),
        Action::Cancel => state.cancel(),
        Action::Tick => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_actions_drive_state() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("packs")).unwrap();
        let mut state = BrowserState::new(temp.path().to_path_buf());

        handle_action(&mut state, Action::GoToLast);
        handle_action(&mut state, Action::Open);
        assert_eq!(state.current_dir, temp.path().join("packs"));

        handle_action(&mut state, Action::Select);
        assert_eq!(
            state.outcome,
            Some(BrowserOutcome::Selected(temp.path().join("packs")))
        );
    }
}
