//! Plain renderer for non-interactive output.
//!
//! Styles and coordinates are dropped; every write becomes one line of text.
//! An addressed write with no text at all emits nothing, such as the field
//! redraw after the last character of an input is erased.

use std::io::{self, Write};

use super::{RenderMode, Renderer};
use crate::types::Span;

#[derive(Debug, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn write_text(out: &mut dyn Write, spans: &[Span]) -> io::Result<()> {
    for span in spans {
        out.write_all(span.text.as_bytes())?;
    }
    out.write_all(b"\n")
}

impl Renderer for PlainRenderer {
    fn mode(&self) -> RenderMode {
        RenderMode::Plain
    }

    fn write_at(
        &mut self,
        out: &mut dyn Write,
        _col: u16,
        _row: u16,
        spans: &[Span],
    ) -> io::Result<()> {
        if spans.iter().all(|s| s.text.is_empty()) {
            return Ok(());
        }
        write_text(out, spans)
    }

    fn write_line(&mut self, out: &mut dyn Write, spans: &[Span]) -> io::Result<()> {
        write_text(out, spans)
    }

    fn clear_screen(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
