//! Text measurement.
//!
//! Width is measured in terminal cells via `unicode-width`. Everything the
//! toolkit accepts is expected to be single-width text, but measuring in cells
//! keeps clamping honest when a wide character slips through.
//!
//! # API
//!
//! - `string_width` - Display width of a string
//! - `truncate_to_width` - Cut a string so it fits a width (no ellipsis)

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal cells.
#[inline]
pub fn string_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate text so its display width is at most `width`.
///
/// A wide character that would straddle the limit is dropped whole.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if string_width(text) <= width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        result.push(c);
    }
    result
}

// =============================================================================
// Tests
// =============================================================================
