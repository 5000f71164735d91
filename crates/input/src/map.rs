//! Key mapping from terminal events to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Intent;
use crate::Command;

/// Map a key press to a command.
///
/// Arrows drive the piece; WASD and HJKL are accepted as aliases.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }
    let intent = match key.code {
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Intent::MoveLeft,
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Intent::MoveRight,
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Intent::Rotate,
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Intent::SoftDrop,
        KeyCode::Enter | KeyCode::Char(' ') => return Some(Command::Play),
        _ => return None,
    };
    Some(Command::Intent(intent))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Option<Command> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key(KeyCode::Left), Some(Command::Intent(Intent::MoveLeft)));
        assert_eq!(key(KeyCode::Right), Some(Command::Intent(Intent::MoveRight)));
        assert_eq!(key(KeyCode::Up), Some(Command::Intent(Intent::Rotate)));
        assert_eq!(key(KeyCode::Down), Some(Command::Intent(Intent::SoftDrop)));
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(key(KeyCode::Char('A')), Some(Command::Intent(Intent::MoveLeft)));
        assert_eq!(key(KeyCode::Char('l')), Some(Command::Intent(Intent::MoveRight)));
        assert_eq!(key(KeyCode::Char('k')), Some(Command::Intent(Intent::Rotate)));
        assert_eq!(key(KeyCode::Char('S')), Some(Command::Intent(Intent::SoftDrop)));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(key(KeyCode::Enter), Some(Command::Play));
        assert_eq!(key(KeyCode::Char(' ')), Some(Command::Play));
        assert_eq!(key(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(key(KeyCode::Char('c')), None);
        assert_eq!(key(KeyCode::Tab), None);
    }
}
