//! Screen surface - the single rendering sink.
//!
//! Every component hands its draw commands to the surface. The surface
//! turns logical positions into safe on-screen ones and forwards the write
//! to the session's renderer.
//!
//! # Clamping
//!
//! For a write of text `t` at (`col`, `row`) on a `width` x `height` frame:
//!
//! - `row > height` becomes `height`, `row < 0` becomes `0`
//! - `col + width(t) > width` becomes `width - width(t)`
//! - a column that is still negative becomes `0`
//!
//! Out-of-range input is never an error.

use std::io::{self, Write};

use tracing::debug;

use super::{RenderMode, Renderer};
use crate::types::{DrawCommand, Position, Span, TerminalFrame, spans_width};

/// Clamp a requested position for text `text_width` cells wide.
pub fn clamp_position(frame: &TerminalFrame, text_width: usize, pos: Position) -> (u16, u16) {
    let width = i64::from(frame.width);
    let height = i64::from(frame.height);
    let text_width = i64::try_from(text_width).unwrap_or(i64::MAX);

    let row = i64::from(pos.row).clamp(0, height);

    let mut col = i64::from(pos.col);
    if col.saturating_add(text_width) > width {
        col = width - text_width;
    }
    let col = col.max(0);

    // Both values are bounded by u16 frame dimensions here.
    (col as u16, row as u16)
}

pub struct ScreenSurface {
    frame: TerminalFrame,
    renderer: Box<dyn Renderer>,
}

impl ScreenSurface {
    pub fn new(frame: TerminalFrame, renderer: Box<dyn Renderer>) -> Self {
        Self { frame, renderer }
    }

    /// Surface with the renderer for `mode`.
    pub fn with_mode(frame: TerminalFrame, mode: RenderMode) -> Self {
        Self::new(frame, mode.renderer())
    }

    pub fn frame(&self) -> TerminalFrame {
        self.frame
    }

    pub fn mode(&self) -> RenderMode {
        self.renderer.mode()
    }

    /// Clamped, cursor-preserving write at (`col`, `row`).
    pub fn write_at(
        &mut self,
        out: &mut dyn Write,
        spans: &[Span],
        col: i32,
        row: i32,
    ) -> io::Result<()> {
        let (c, r) = clamp_position(&self.frame, spans_width(spans), Position::new(col, row));
        if i32::from(c) != col || i32::from(r) != row {
            debug!(col, row, clamped_col = c, clamped_row = r, "surface: clamped write");
        }
        self.renderer.write_at(out, c, r, spans)
    }

    /// Write at the terminal's current cursor, as a line.
    pub fn write_inline(&mut self, out: &mut dyn Write, spans: &[Span]) -> io::Result<()> {
        self.renderer.write_line(out, spans)
    }

    /// Execute one draw command.
    pub fn draw(&mut self, out: &mut dyn Write, cmd: &DrawCommand) -> io::Result<()> {
        match cmd.position {
            Some(pos) => self.write_at(out, &cmd.spans, pos.col, pos.row),
            None => self.write_inline(out, &cmd.spans),
        }
    }

    /// Execute commands in order, then flush once.
    pub fn draw_all(&mut self, out: &mut dyn Write, cmds: &[DrawCommand]) -> io::Result<()> {
        for cmd in cmds {
            self.draw(out, cmd)?;
        }
        out.flush()
    }

    /// Blank rows `1..height`; row 0 is left to the title bar.
    pub fn clear_region(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let bar = [Span::raw(" ".repeat(usize::from(self.frame.width)))];
        for row in 1..self.frame.height_i32() {
            self.write_at(out, &bar, 0, row)?;
        }
        out.flush()
    }

    /// Wipe the whole screen.
    pub fn clear_screen(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.renderer.clear_screen(out)?;
        out.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================
