//! Title bar on row 0.
//!
//! Stored truncated to the frame width. Rendering blanks the whole row in
//! the window style and centers the title on it. Nothing is drawn in plain
//! mode or while no title is set.

use crate::renderer::RenderMode;
use crate::text::{string_width, truncate_to_width};
use crate::theme::Theme;
use crate::types::{DrawCommand, TerminalFrame};

#[derive(Debug, Clone)]
pub struct TitleOverlay {
    text: Option<String>,
    frame: TerminalFrame,
    mode: RenderMode,
    theme: Theme,
}

impl TitleOverlay {
    pub fn new(frame: TerminalFrame, mode: RenderMode, theme: Theme) -> Self {
        Self {
            text: None,
            frame,
            mode,
            theme,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the title (`None` removes it) and return the redraw.
    pub fn set(&mut self, text: Option<&str>) -> Vec<DrawCommand> {
        self.text = text.map(|t| truncate_to_width(t, usize::from(self.frame.width)));
        self.render()
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        let Some(title) = self.text.as_deref() else {
            return Vec::new();
        };
        if !self.mode.is_interactive() {
            return Vec::new();
        }

        let col = self.frame.width_i32() / 2 - string_width(title) as i32 / 2;
        vec![
            DrawCommand::at(
                0,
                0,
                " ".repeat(usize::from(self.frame.width)),
                self.theme.window,
            ),
            DrawCommand::at(col, 0, title, self.theme.window),
        ]
    }
}

// =============================================================================
// Tests
// =============================================================================
