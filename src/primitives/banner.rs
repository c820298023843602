//! Centered message box.
//!
//! A filled block five rows tall around the middle of the screen with the
//! text on its middle row and an optional glyph on each corner. Plain mode
//! gets the bare text as one line.

use crate::renderer::RenderMode;
use crate::text::string_width;
use crate::types::{DrawCommand, Span, Style, TerminalFrame};

/// Corner glyph meaning "no corners".
pub const NO_CORNER: char = ' ';

/// Commands drawing `text` in a centered box.
pub fn center_box(
    frame: TerminalFrame,
    mode: RenderMode,
    text: &str,
    style: Style,
    corner: char,
) -> Vec<DrawCommand> {
    if !mode.is_interactive() {
        return vec![DrawCommand::line(vec![Span::raw(text)])];
    }

    let len = string_width(text) as i32;
    let half = len / 2;
    let mid_col = frame.width_i32() / 2;
    let mid_row = frame.height_i32() / 2;

    let left = mid_col - (half + 4);
    let right = mid_col + (half + 2);
    let top = mid_row - 2;
    let bottom = mid_row + 2;

    let bar = " ".repeat((len + 6) as usize);
    let mut cmds: Vec<DrawCommand> = (top..=bottom)
        .map(|row| DrawCommand::at(left, row, bar.clone(), style))
        .collect();

    cmds.push(DrawCommand::at(left + 3, top + 2, text, style));

    if corner != NO_CORNER {
        let glyph = corner.to_string();
        for (col, row) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            cmds.push(DrawCommand::at(col, row, glyph.clone(), style));
        }
    }
    cmds
}

// =============================================================================
// Tests
// =============================================================================
