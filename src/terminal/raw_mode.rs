//! Scoped raw mode.
//!
//! Entering returns a guard that derefs to the terminal; dropping the guard
//! leaves raw mode, so every exit from a capture loop (confirm, `?` on a
//! read error, panic unwind) restores the previous input mode.

use std::io;
use std::ops::{Deref, DerefMut};

use tracing::{trace, warn};

use super::Terminal;

/// RAII guard holding a terminal in raw mode.
pub struct RawModeGuard<'a, T: Terminal> {
    terminal: &'a mut T,
}

impl<'a, T: Terminal> RawModeGuard<'a, T> {
    /// Switch the terminal into raw mode for the lifetime of the guard.
    pub fn enter(terminal: &'a mut T) -> io::Result<Self> {
        terminal.enable_raw_mode()?;
        trace!("raw mode entered");
        Ok(Self { terminal })
    }
}

impl<T: Terminal> Deref for RawModeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.terminal
    }
}

impl<T: Terminal> DerefMut for RawModeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.terminal
    }
}

impl<T: Terminal> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        match self.terminal.disable_raw_mode() {
            Ok(()) => trace!("raw mode left"),
            Err(e) => warn!(error = %e, "failed to leave raw mode"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
