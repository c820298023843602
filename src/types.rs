//! Core types for bui.
//!
//! These types define what every component produces and what the surface
//! understands: a frame snapshot of the terminal, styled spans of text and
//! draw commands that place those spans on screen.

use crossterm::style::Color;

use crate::text::string_width;

// =============================================================================
// Terminal Frame
// =============================================================================

/// Snapshot of the terminal taken when the toolkit is constructed.
///
/// Never refreshed implicitly. Resizing mid-session is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalFrame {
    pub width: u16,
    pub height: u16,
    pub styling_enabled: bool,
}

impl TerminalFrame {
    /// Create a new frame snapshot.
    pub const fn new(width: u16, height: u16, styling_enabled: bool) -> Self {
        Self {
            width,
            height,
            styling_enabled,
        }
    }

    /// Width as a signed coordinate.
    #[inline]
    pub fn width_i32(&self) -> i32 {
        i32::from(self.width)
    }

    /// Height as a signed coordinate.
    #[inline]
    pub fn height_i32(&self) -> i32 {
        i32::from(self.height)
    }
}

// =============================================================================
// Position
// =============================================================================

/// Requested screen position, zero-based.
///
/// Signed on purpose: callers may compute positions that land off screen
/// and the surface clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE = 1 << 4;
    }
}

// =============================================================================
// Style
// =============================================================================

/// Foreground, background and attributes applied to a span.
///
/// `None` colors leave the terminal default in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Attr,
}

impl Style {
    /// Style with no colors and no attributes.
    pub const PLAIN: Style = Style {
        fg: None,
        bg: None,
        attrs: Attr::NONE,
    };

    pub const fn new(fg: Option<Color>, bg: Option<Color>, attrs: Attr) -> Self {
        Self { fg, bg, attrs }
    }

    /// Same colors with extra attributes OR'd in.
    pub const fn with_attrs(self, attrs: Attr) -> Self {
        Self {
            attrs: self.attrs.union(attrs),
            ..self
        }
    }
}

// =============================================================================
// Span
// =============================================================================

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Unstyled span.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }

    /// Display width of the span's text.
    pub fn width(&self) -> usize {
        string_width(&self.text)
    }
}

/// Total display width of a span sequence.
pub fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(Span::width).sum()
}

// =============================================================================
// DrawCommand
// =============================================================================

/// One write request for the surface.
///
/// With a position the write is addressed (and clamped); without one it is
/// emitted as a line at the terminal's current cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCommand {
    pub position: Option<Position>,
    pub spans: Vec<Span>,
}

impl DrawCommand {
    /// Addressed write of a single styled string.
    pub fn at(col: i32, row: i32, text: impl Into<String>, style: Style) -> Self {
        Self {
            position: Some(Position::new(col, row)),
            spans: vec![Span::new(text, style)],
        }
    }

    /// Addressed write of several spans.
    pub fn spans_at(col: i32, row: i32, spans: Vec<Span>) -> Self {
        Self {
            position: Some(Position::new(col, row)),
            spans,
        }
    }

    /// Unaddressed line.
    pub fn line(spans: Vec<Span>) -> Self {
        Self {
            position: None,
            spans,
        }
    }

    /// Concatenated text of all spans, styles dropped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width of the command's text.
    pub fn width(&self) -> usize {
        spans_width(&self.spans)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_with_attrs() {
        let style = Style::new(Some(Color::White), None, Attr::BOLD).with_attrs(Attr::REVERSE);
        assert!(style.attrs.contains(Attr::BOLD));
        assert!(style.attrs.contains(Attr::REVERSE));
        assert_eq!(style.fg, Some(Color::White));
    }

    #[test]
    fn test_draw_command_text() {
        let cmd = DrawCommand::spans_at(
            0,
            1,
            vec![Span::raw("[12:00] "), Span::new("hello", Style::PLAIN)],
        );
        assert_eq!(cmd.text(), "[12:00] hello");
        assert_eq!(cmd.width(), 13);
        assert_eq!(cmd.position, Some(Position::new(0, 1)));
    }

    #[test]
    fn test_line_has_no_position() {
        let cmd = DrawCommand::line(vec![Span::raw("plain")]);
        assert!(cmd.position.is_none());
    }
}
