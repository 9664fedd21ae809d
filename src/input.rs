//! Key mapping for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input actions understood by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space or Up.
    Flap,
    /// Enter or R. Confirms the retry prompt; flaps otherwise.
    Retry,
    /// Q, Esc or Ctrl+C.
    Quit,
    /// Any other key.
    Other,
}

pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind == KeyEventKind::Release {
        return GameInput::Other;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up => GameInput::Flap,
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Retry,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_flap_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), GameInput::Flap);
        assert_eq!(map_key(press(KeyCode::Up)), GameInput::Flap);
    }

    #[test]
    fn test_retry_and_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), GameInput::Retry);
        assert_eq!(map_key(press(KeyCode::Char('r'))), GameInput::Retry);
        assert_eq!(map_key(press(KeyCode::Esc)), GameInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameInput::Quit
        );
        assert_eq!(map_key(press(KeyCode::Char('c'))), GameInput::Other);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), GameInput::Other);
    }
}
