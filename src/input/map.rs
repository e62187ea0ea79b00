//! Key mapping from terminal events to logical keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::LogicalKey;

/// Map a key code to its logical key, arrows plus vi/wasd aliases.
pub fn map_key(code: KeyCode) -> Option<LogicalKey> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(LogicalKey::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(LogicalKey::Right),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(LogicalKey::SoftDrop),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(LogicalKey::RotateCw)
        }
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            Some(LogicalKey::RotateCcw)
        }
        _ => None,
    }
}

/// Whether this key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Whether this key restarts after a game over.
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys() {
        assert_eq!(map_key(KeyCode::Left), Some(LogicalKey::Left));
        assert_eq!(map_key(KeyCode::Char('H')), Some(LogicalKey::Left));
        assert_eq!(map_key(KeyCode::Right), Some(LogicalKey::Right));
        assert_eq!(map_key(KeyCode::Char('d')), Some(LogicalKey::Right));
        assert_eq!(map_key(KeyCode::Down), Some(LogicalKey::SoftDrop));
        assert_eq!(map_key(KeyCode::Char('j')), Some(LogicalKey::SoftDrop));
    }

    #[test]
    fn rotation_keys() {
        assert_eq!(map_key(KeyCode::Up), Some(LogicalKey::RotateCw));
        assert_eq!(map_key(KeyCode::Char('x')), Some(LogicalKey::RotateCw));
        assert_eq!(map_key(KeyCode::Char('z')), Some(LogicalKey::RotateCcw));
        assert_eq!(map_key(KeyCode::Char('Y')), Some(LogicalKey::RotateCcw));
    }

    #[test]
    fn unmapped_keys() {
        assert_eq!(map_key(KeyCode::Char('7')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }

    #[test]
    fn quit_and_restart() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('r'))));
        assert!(is_restart(KeyEvent::from(KeyCode::Char('r'))));
    }
}
