//! Keyboard Module - Key identities seen by the capture loops.
//!
//! The capture loops only care about a handful of named keys plus printable
//! characters. Everything else collapses into [`Key::Sequence`] (multi-byte
//! escape sequences such as arrows left/right or function keys) or
//! [`Key::Other`] so the state machines can observe and ignore it.

use std::fmt;

// =============================================================================
// TYPES
// =============================================================================

/// A single key event delivered by the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Confirm key.
    Enter,
    Backspace,
    Delete,
    Up,
    Down,
    /// A raw character without control/alt modifiers.
    Char(char),
    /// Any other multi-byte escape sequence, named for diagnostics
    /// (e.g. "Left", "F5").
    Sequence(String),
    /// Anything that is neither a named key, a character nor a sequence.
    Other,
}

impl Key {
    /// Confirm key (ends both capture loops).
    #[inline]
    pub fn is_confirm(&self) -> bool {
        matches!(self, Key::Enter)
    }

    /// Backspace and Delete both erase the last character.
    #[inline]
    pub fn is_erase(&self) -> bool {
        matches!(self, Key::Backspace | Key::Delete)
    }

    /// True when the key arrived as an escape sequence.
    ///
    /// Up/Down are sequences too; the editor ignores them like any other.
    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Key::Up | Key::Down | Key::Sequence(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Enter => f.write_str("Enter"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Delete"),
            Key::Up => f.write_str("ArrowUp"),
            Key::Down => f.write_str("ArrowDown"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Sequence(name) => f.write_str(name),
            Key::Other => f.write_str("Unknown"),
        }
    }
}

/// Build a key sequence from plain text, one `Key::Char` per character.
///
/// Handy for scripting input: `keys("ab")` then `Key::Enter`.
pub fn keys(text: &str) -> impl Iterator<Item = Key> + '_ {
    text.chars().map(Key::Char)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_classes() {
        assert!(Key::Enter.is_confirm());
        assert!(Key::Backspace.is_erase());
        assert!(Key::Delete.is_erase());
        assert!(Key::Up.is_sequence());
        assert!(Key::Sequence("Left".into()).is_sequence());
        assert!(!Key::Char('a').is_sequence());
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::Char('x').to_string(), "x");
        assert_eq!(Key::Up.to_string(), "ArrowUp");
        assert_eq!(Key::Sequence("F5".into()).to_string(), "F5");
    }

    #[test]
    fn test_keys_helper() {
        let seq: Vec<Key> = keys("hi").collect();
        assert_eq!(seq, vec![Key::Char('h'), Key::Char('i')]);
    }
}
