//! Terminal capability layer.
//!
//! Everything the toolkit needs from a real terminal sits behind the
//! [`Terminal`] trait: the byte sink for output, a size query, a "is this
//! an interactive TTY" flag, a blocking key read and raw-mode switching.
//!
//! - [`CrosstermTerminal`] talks to stdout/stdin through crossterm.
//! - [`ScriptedTerminal`] replays synthetic keys into memory, for tests and
//!   headless drivers.
//! - [`RawModeGuard`] scopes raw mode to a capture loop.

mod backend;
mod raw_mode;
mod scripted;

pub use backend::CrosstermTerminal;
pub use raw_mode::RawModeGuard;
pub use scripted::ScriptedTerminal;

use std::io::{self, Write};

use crate::state::Key;

/// Capabilities consumed from the terminal.
///
/// Output goes through the `Write` supertrait; writes are buffered until
/// `flush`.
pub trait Terminal: Write {
    /// Current (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Whether output reaches an interactive terminal that understands ANSI
    /// positioning and styling.
    fn is_tty(&self) -> bool;

    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<Key>;

    fn enable_raw_mode(&mut self) -> io::Result<()>;

    fn disable_raw_mode(&mut self) -> io::Result<()>;
}
