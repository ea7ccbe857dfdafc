use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Action;

/// Map key events to browser actions
pub fn handle_key(key: KeyEvent) -> Action {
    match key.code {
        // Cancel
        KeyCode::Esc | KeyCode::Char('q') => Action::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Cancel,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Action::GoToFirst,
        KeyCode::End | KeyCode::Char('G') => Action::GoToLast,

        // Open / back
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Action::Open,
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Action::GoParent,

        // Choose the directory being shown
        KeyCode::Char('s') | KeyCode::Char(' ') => Action::Select,

        _ => Action::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(handle_key(key(KeyCode::Up)), Action::MoveUp);
        assert_eq!(handle_key(key(KeyCode::Char('j'))), Action::MoveDown);
        assert_eq!(handle_key(key(KeyCode::End)), Action::GoToLast);
        assert_eq!(handle_key(key(KeyCode::Enter)), Action::Open);
        assert_eq!(handle_key(key(KeyCode::Backspace)), Action::GoParent);
    }

    #[test]
    fn test_select_and_cancel_keys() {
        assert_eq!(handle_key(key(KeyCode::Char('s'))), Action::Select);
        assert_eq!(handle_key(key(KeyCode::Char(' '))), Action::Select);
        assert_eq!(handle_key(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Cancel
        );
        assert_eq!(handle_key(key(KeyCode::Char('c'))), Action::Tick);
    }
}
