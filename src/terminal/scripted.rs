//! In-memory terminal driven by a script of keys.
//!
//! Records every byte written and every raw-mode switch so tests can assert
//! on exactly what a capture loop did. Running out of scripted keys is an
//! `UnexpectedEof` error, which also exercises the error exit of a loop.

use std::collections::VecDeque;
use std::io::{self, Write};

use super::Terminal;
use crate::state::Key;

#[derive(Debug, Clone, Default)]
pub struct ScriptedTerminal {
    size: (u16, u16),
    tty: bool,
    keys: VecDeque<Key>,
    output: Vec<u8>,
    raw_mode: bool,
    raw_entries: usize,
    raw_exits: usize,
}

impl ScriptedTerminal {
    /// Interactive terminal of the given size with no keys queued.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: (width, height),
            tty: true,
            ..Self::default()
        }
    }

    /// Non-interactive target (piped output).
    pub fn piped(width: u16, height: u16) -> Self {
        Self {
            tty: false,
            ..Self::new(width, height)
        }
    }

    /// Queue keys to be returned by `read_key`, in order.
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keys.extend(keys);
    }

    /// Keys not consumed yet.
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Everything written so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Written bytes as text (lossy).
    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Take and clear the recorded output.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    pub fn in_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn raw_mode_entries(&self) -> usize {
        self.raw_entries
    }

    pub fn raw_mode_exits(&self) -> usize {
        self.raw_exits
    }
}

impl Write for ScriptedTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Terminal for ScriptedTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn is_tty(&self) -> bool {
        self.tty
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }

    fn enable_raw_mode(&mut self) -> io::Result<()> {
        self.raw_mode = true;
        self.raw_entries += 1;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        self.raw_mode = false;
        self.raw_exits += 1;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_replay_in_order() {
        let mut term = ScriptedTerminal::new(10, 5).with_keys([Key::Up, Key::Enter]);
        assert_eq!(term.read_key().unwrap(), Key::Up);
        assert_eq!(term.read_key().unwrap(), Key::Enter);
        let err = term.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_output_is_recorded() {
        let mut term = ScriptedTerminal::piped(10, 5);
        write!(term, "hello").unwrap();
        assert_eq!(term.output_str(), "hello");
        assert!(!term.is_tty());
        assert_eq!(term.take_output(), b"hello");
        assert!(term.output().is_empty());
    }
}
