//! Key mapping from terminal events to editor actions.

use crate::types::{EditorAction, Side};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to editor actions.
///
/// WASD / arrows move the viewer, IJKL move the edit cursor.
pub fn handle_key_event(key: KeyEvent) -> Option<EditorAction> {
    match key.code {
        // Viewer
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(EditorAction::MoveViewer(Side::North))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(EditorAction::MoveViewer(Side::South))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(EditorAction::MoveViewer(Side::West))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(EditorAction::MoveViewer(Side::East))
        }

        // Cursor
        KeyCode::Char('i') | KeyCode::Char('I') => Some(EditorAction::MoveCursor(Side::North)),
        KeyCode::Char('k') | KeyCode::Char('K') => Some(EditorAction::MoveCursor(Side::South)),
        KeyCode::Char('j') | KeyCode::Char('J') => Some(EditorAction::MoveCursor(Side::West)),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(EditorAction::MoveCursor(Side::East)),

        // Edits
        KeyCode::Char(' ') | KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
            Some(EditorAction::ToggleCell)
        }

        // Sight
        KeyCode::Char('+') | KeyCode::Char('=') => Some(EditorAction::WidenSight),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(EditorAction::NarrowSight),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(EditorAction::ToggleEdges),

        _ => None,
    }
}

/// Check if key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_viewer_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(EditorAction::MoveViewer(Side::North))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(EditorAction::MoveViewer(Side::West))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(EditorAction::MoveViewer(Side::South))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(EditorAction::MoveViewer(Side::East))
        );
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('i'))),
            Some(EditorAction::MoveCursor(Side::North))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(EditorAction::MoveCursor(Side::East))
        );
    }

    #[test]
    fn test_edit_and_sight_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(EditorAction::ToggleCell)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(EditorAction::WidenSight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(EditorAction::NarrowSight)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
