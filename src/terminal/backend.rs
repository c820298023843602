//! crossterm-backed terminal.
//!
//! Output goes to stdout, keys come from crossterm's event reader (which
//! falls back to `/dev/tty` when stdin is redirected).

use std::io::{self, Stdout, Write};

use crossterm::tty::IsTty;

use super::Terminal;
use crate::state::{Key, input};

/// The process terminal.
pub struct CrosstermTerminal {
    out: Stdout,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for CrosstermTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Terminal for CrosstermTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn is_tty(&self) -> bool {
        self.out.is_tty()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        input::read_key()
    }

    fn enable_raw_mode(&mut self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }
}
