//! ANSI renderer for interactive terminals.
//!
//! Addressed writes are wrapped in save/restore cursor so they never move
//! the cursor that unaddressed writes continue from. Every span starts from
//! a full attribute reset, so styles never bleed from one span to the next.

use std::io::{self, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::{MoveTo, RestorePosition, SavePosition};
use crossterm::style::{
    Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};

use super::{RenderMode, Renderer};
use crate::types::{Attr, Span, Style};

/// Attribute flags and the SGR attribute each one maps to.
const ATTRIBUTES: [(Attr, Attribute); 5] = [
    (Attr::BOLD, Attribute::Bold),
    (Attr::DIM, Attribute::Dim),
    (Attr::ITALIC, Attribute::Italic),
    (Attr::UNDERLINE, Attribute::Underlined),
    (Attr::REVERSE, Attribute::Reverse),
];

#[derive(Debug, Default)]
pub struct InteractiveRenderer;

impl InteractiveRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// Queue the escape codes selecting `style`.
fn queue_style(out: &mut dyn Write, style: &Style) -> io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(fg))?;
    }
    if let Some(bg) = style.bg {
        out.queue(SetBackgroundColor(bg))?;
    }
    for (flag, attribute) in ATTRIBUTES {
        if style.attrs.contains(flag) {
            out.queue(SetAttribute(attribute))?;
        }
    }
    Ok(())
}

fn queue_spans(out: &mut dyn Write, spans: &[Span]) -> io::Result<()> {
    for span in spans {
        queue_style(out, &span.style)?;
        out.queue(Print(&span.text))?;
    }
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

impl Renderer for InteractiveRenderer {
    fn mode(&self) -> RenderMode {
        RenderMode::Interactive
    }

    fn write_at(
        &mut self,
        out: &mut dyn Write,
        col: u16,
        row: u16,
        spans: &[Span],
    ) -> io::Result<()> {
        out.queue(SavePosition)?;
        out.queue(MoveTo(col, row))?;
        queue_spans(out, spans)?;
        out.queue(RestorePosition)?;
        Ok(())
    }

    fn write_line(&mut self, out: &mut dyn Write, spans: &[Span]) -> io::Result<()> {
        queue_spans(out, spans)?;
        out.write_all(b"\n")
    }

    /// Clear everything and park the cursor on row 1; row 0 belongs to the
    /// title bar.
    fn clear_screen(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.queue(Clear(ClearType::All))?;
        out.queue(MoveTo(0, 1))?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn render_at(col: u16, row: u16, spans: &[Span]) -> String {
        let mut out = Vec::new();
        InteractiveRenderer::new()
            .write_at(&mut out, col, row, spans)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_at_is_scoped() {
        let s = render_at(4, 2, &[Span::raw("hi")]);
        // DEC save, CUP (1-based), text, DEC restore
        assert!(s.starts_with("\x1b7\x1b[3;5H"));
        assert!(s.contains("hi"));
        assert!(s.ends_with("\x1b8"));
    }

    #[test]
    fn test_reverse_attribute_is_emitted() {
        let style = Style::new(Some(Color::White), None, Attr::REVERSE);
        let s = render_at(0, 0, &[Span::new("x", style)]);
        assert!(s.contains("\x1b[7m"));
    }

    #[test]
    fn test_write_line_ends_with_newline() {
        let mut out = Vec::new();
        InteractiveRenderer::new()
            .write_line(&mut out, &[Span::raw("line")])
            .unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("line"));
        assert!(s.ends_with('\n'));
    }

    #[test]
    fn test_clear_screen() {
        let mut out = Vec::new();
        InteractiveRenderer::new().clear_screen(&mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("\x1b[2J"));
        assert!(s.ends_with("\x1b[2;1H"));
    }
}
