//! Key mapping from terminal events to game signals.

use crate::types::{Direction, Signal};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game signal.
///
/// Unmapped keys yield `None` and never reach the game state.
pub fn handle_key_event(key: KeyEvent) -> Option<Signal> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Signal::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Signal::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Signal::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Signal::Turn(Direction::Right))
        }

        // Pause
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(Signal::Pause),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Signal::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn turn(dir: Direction) -> Option<Signal> {
        Some(Signal::Turn(dir))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), turn(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), turn(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), turn(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), turn(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), turn(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('S'))), turn(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), turn(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('D'))), turn(Direction::Right));
    }

    #[test]
    fn test_pause_and_restart_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), Some(Signal::Pause));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('p'))), Some(Signal::Pause));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('r'))), Some(Signal::Restart));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('R'))), Some(Signal::Restart));
    }

    #[test]
    fn test_unmapped_keys_are_dropped() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
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
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
