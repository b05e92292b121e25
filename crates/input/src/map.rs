//! Key mapping from terminal events to game intents.

use crate::types::{Direction, Intent, PieceKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Intent::Quit),
            _ => None,
        };
    }

    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Intent::MoveCursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::MoveCursor(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::MoveCursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::MoveCursor(Direction::Right))
        }

        // Select / move / cancel
        KeyCode::Char(' ') => Some(Intent::Select),
        KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char('M') => Some(Intent::MoveToCursor),
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => Some(Intent::Cancel),

        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),

        // Restart
        KeyCode::F(5) => Some(Intent::Restart),

        // Placement, by piece letter
        KeyCode::Char(c) => PieceKind::from_letter(c).map(Intent::Place),

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Agrees with the quit keys of [`handle_key_event`].
pub fn should_quit(key: KeyEvent) -> bool {
    let is_c = matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'));
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return is_c;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Intent::MoveCursor(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Intent::MoveCursor(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Intent::MoveCursor(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(Intent::MoveCursor(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(Intent::MoveCursor(Direction::Left))
        );
    }

    #[test]
    fn test_protocol_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Intent::Select)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(Intent::MoveToCursor)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(Intent::Cancel)
        );
    }

    #[test]
    fn test_placement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(Intent::Place(PieceKind::King))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('N'))),
            Some(Intent::Place(PieceKind::Knight))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('b'))),
            Some(Intent::Place(PieceKind::Bishop))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(Intent::Place(PieceKind::Rook))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('o'))),
            Some(Intent::Place(PieceKind::Stone))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::F(5))),
            Some(Intent::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Intent::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('C'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn test_should_quit_agrees_with_key_map() {
        let keys = [
            KeyEvent::from(KeyCode::Char('q')),
            KeyEvent::from(KeyCode::Char('Q')),
            KeyEvent::from(KeyCode::Char('c')),
            KeyEvent::from(KeyCode::Char('k')),
            KeyEvent::from(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        ];
        for key in keys {
            assert_eq!(
                should_quit(key),
                handle_key_event(key) == Some(Intent::Quit),
                "{key:?}"
            );
        }
    }
}
