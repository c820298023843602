//! Rendering strategies.
//!
//! The toolkit picks one strategy when it is constructed and every write goes
//! through it:
//!
//! - [`InteractiveRenderer`] - ANSI positioning and styling for a real terminal
//! - [`PlainRenderer`] - line-oriented text for pipes and other dumb targets
//!
//! [`ScreenSurface`] sits in front of the renderer and owns the coordinate
//! clamping, so renderers only ever see on-screen positions.

mod interactive;
mod plain;
mod surface;

pub use interactive::InteractiveRenderer;
pub use plain::PlainRenderer;
pub use surface::{ScreenSurface, clamp_position};

use std::io::{self, Write};

use crate::types::Span;

// =============================================================================
// Render Mode
// =============================================================================

/// Which strategy renders the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Styled output with absolute positioning.
    #[default]
    Interactive,
    /// Unstyled, one line per write, coordinates ignored.
    Plain,
}

impl RenderMode {
    /// Parse `interactive` / `plain` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "interactive" => Some(Self::Interactive),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }

    #[inline]
    pub fn is_interactive(self) -> bool {
        self == Self::Interactive
    }

    /// Build the renderer for this mode.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Interactive => Box::new(InteractiveRenderer::new()),
            Self::Plain => Box::new(PlainRenderer::new()),
        }
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Turns write requests into bytes.
pub trait Renderer {
    fn mode(&self) -> RenderMode;

    /// Write spans at an on-screen position without moving the logical
    /// cursor for later unaddressed writes.
    fn write_at(&mut self, out: &mut dyn Write, col: u16, row: u16, spans: &[Span])
    -> io::Result<()>;

    /// Write spans at the current cursor, followed by a newline.
    fn write_line(&mut self, out: &mut dyn Write, spans: &[Span]) -> io::Result<()>;

    /// Wipe the whole screen.
    fn clear_screen(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

// =============================================================================
// Tests
// =============================================================================
