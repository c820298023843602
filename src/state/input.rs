//! Input Module - Key event conversion and blocking reads
//!
//! Bridges crossterm's event system with the [`Key`] identities the capture
//! loops understand.
//!
//! # API
//!
//! - `convert_key_event` - Convert a crossterm KeyEvent to a `Key`
//! - `read_key` - Blocking read of the next key press
//!
//! Mouse, resize and focus events are swallowed: the capture loops only
//! consume keys.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    read,
};

use super::keyboard::Key;

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent to our Key.
///
/// Returns `None` for key releases so a press is never seen twice on
/// terminals that report both edges.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match event.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Char(c) => {
            if event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                Key::Sequence(format!("{:?}+{}", event.modifiers, c))
            } else {
                Key::Char(c)
            }
        }
        KeyCode::Tab => Key::Sequence("Tab".to_string()),
        KeyCode::BackTab => Key::Sequence("BackTab".to_string()),
        KeyCode::Esc => Key::Sequence("Escape".to_string()),
        KeyCode::Left => Key::Sequence("ArrowLeft".to_string()),
        KeyCode::Right => Key::Sequence("ArrowRight".to_string()),
        KeyCode::Home => Key::Sequence("Home".to_string()),
        KeyCode::End => Key::Sequence("End".to_string()),
        KeyCode::PageUp => Key::Sequence("PageUp".to_string()),
        KeyCode::PageDown => Key::Sequence("PageDown".to_string()),
        KeyCode::Insert => Key::Sequence("Insert".to_string()),
        KeyCode::F(n) => Key::Sequence(format!("F{}", n)),
        _ => Key::Other,
    };

    Some(key)
}

// =============================================================================
// BLOCKING READ
// =============================================================================

/// Read the next key press (blocking).
///
/// Non-key events are skipped until a key arrives.
pub fn read_key() -> std::io::Result<Key> {
    loop {
        if let CrosstermEvent::Key(event) = read()? {
            if let Some(key) = convert_key_event(event) {
                return Ok(key);
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> CrosstermKeyEvent {
        CrosstermKeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_convert_key_char() {
        assert_eq!(convert_key_event(press(KeyCode::Char('a'))), Some(Key::Char('a')));
        assert_eq!(convert_key_event(press(KeyCode::Char(' '))), Some(Key::Char(' ')));
    }

    #[test]
    fn test_convert_key_named() {
        assert_eq!(convert_key_event(press(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(convert_key_event(press(KeyCode::Backspace)), Some(Key::Backspace));
        assert_eq!(convert_key_event(press(KeyCode::Delete)), Some(Key::Delete));
        assert_eq!(convert_key_event(press(KeyCode::Up)), Some(Key::Up));
        assert_eq!(convert_key_event(press(KeyCode::Down)), Some(Key::Down));
    }

    #[test]
    fn test_convert_key_sequences() {
        assert_eq!(
            convert_key_event(press(KeyCode::Left)),
            Some(Key::Sequence("ArrowLeft".to_string()))
        );
        assert_eq!(
            convert_key_event(press(KeyCode::F(5))),
            Some(Key::Sequence("F5".to_string()))
        );
    }

    #[test]
    fn test_convert_key_with_ctrl_is_not_text() {
        let event = CrosstermKeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let key = convert_key_event(event).unwrap();
        assert!(matches!(key, Key::Sequence(_)));
    }

    #[test]
    fn test_convert_key_release_is_dropped() {
        let event = CrosstermKeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::empty(),
            KeyEventKind::Release,
        );
        assert_eq!(convert_key_event(event), None);
    }

    #[test]
    fn test_convert_key_repeat_is_kept() {
        let event = CrosstermKeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::empty(),
            KeyEventKind::Repeat,
        );
        assert_eq!(convert_key_event(event), Some(Key::Char('a')));
    }
}
