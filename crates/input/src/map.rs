//! Key mapping from terminal events to game inputs.

use crate::types::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game inputs.
pub fn handle_key_event(key: KeyEvent) -> Option<GameInput> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameInput::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameInput::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameInput::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameInput::Right),

        KeyCode::Char(' ') => Some(GameInput::Space),
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Some(GameInput::Menu),
        KeyCode::Enter => Some(GameInput::Enter),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Some(GameInput::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), Some(GameInput::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), Some(GameInput::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), Some(GameInput::Right));
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('k'))), Some(GameInput::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('J'))), Some(GameInput::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('h'))), Some(GameInput::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), Some(GameInput::Right));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), Some(GameInput::Space));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('p'))), Some(GameInput::Menu));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), Some(GameInput::Menu));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), Some(GameInput::Enter));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
