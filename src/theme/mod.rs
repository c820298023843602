//! Theme for bui.
//!
//! A theme is a small set of named styles. Every component asks the theme
//! for the style of what it draws instead of hard-coding colors, so a caller
//! can swap the palette through [`Config`](crate::config::Config).
//!
//! # Styles
//!
//! - `default` - white on black, the base of every write
//! - `window` - reverse video, used by the title bar and menu highlight
//! - `error` - red on white
//! - `warn` - yellow on black
//! - `stamp_bracket` / `stamp_time` - the `[HH:MM]` prefix of log entries

use crossterm::style::Color;

use crate::types::{Attr, Span, Style};

// =============================================================================
// Named colors
// =============================================================================

/// Olive drab, used for the brackets around a log stamp.
pub const OLIVE_DRAB: Color = Color::Rgb {
    r: 107,
    g: 142,
    b: 35,
};

/// Turquoise, used for the time inside a log stamp.
pub const TURQUOISE: Color = Color::Rgb {
    r: 64,
    g: 224,
    b: 208,
};

// =============================================================================
// Theme
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub default: Style,
    pub window: Style,
    pub error: Style,
    pub warn: Style,
    pub stamp_bracket: Style,
    pub stamp_time: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            default: Style::new(Some(Color::White), Some(Color::Black), Attr::NONE),
            window: Style::new(Some(Color::White), None, Attr::REVERSE),
            error: Style::new(Some(Color::Red), Some(Color::White), Attr::NONE),
            warn: Style::new(Some(Color::Yellow), Some(Color::Black), Attr::NONE),
            stamp_bracket: Style::new(Some(OLIVE_DRAB), Some(Color::Black), Attr::NONE),
            stamp_time: Style::new(Some(TURQUOISE), Some(Color::Black), Attr::NONE),
        }
    }
}

impl Theme {
    /// Highlight style for the selected menu row.
    pub fn highlight(&self) -> Style {
        self.default.with_attrs(Attr::REVERSE)
    }

    /// Bold variant of the default style.
    pub fn bold(&self, text: &str) -> Span {
        Span::new(text, self.default.with_attrs(Attr::BOLD))
    }

    /// Underlined variant of the default style.
    pub fn underline(&self, text: &str) -> Span {
        Span::new(text, self.default.with_attrs(Attr::UNDERLINE))
    }

    /// Text in the window (reverse video) style.
    pub fn window_text(&self, text: &str) -> Span {
        Span::new(text, self.window)
    }
}

// =============================================================================
// Tests
// =============================================================================
