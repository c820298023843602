//! Scrolling log.
//!
//! A bounded, append-only list of entries drawn bottom-up: the most recent
//! entry sits on row `height - 3`, each older one a row above it, down to
//! row 1 (row 0 is the title bar). Each row is padded to the full width so a
//! short entry completely covers a longer one drawn there before.
//!
//! Capacity is `height - 1` entries. Appending past capacity evicts the
//! oldest entry first. Every append redraws the whole visible window.
//!
//! In plain mode nothing is buffered: an appended entry comes straight back
//! as a `[HH:MM] text` line.

use std::collections::VecDeque;
use std::fmt::Write;

use chrono::Local;
use tracing::{trace, warn};

use crate::config::DEFAULT_TIMESTAMP_FORMAT;
use crate::renderer::RenderMode;
use crate::theme::Theme;
use crate::types::{DrawCommand, Span, TerminalFrame, spans_width};

// =============================================================================
// Log Entry
// =============================================================================

/// What kind of message an entry carries; picks the text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Notice,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// `None` for raw console lines.
    pub level: Option<LogLevel>,
    /// Pre-formatted time, without brackets.
    pub stamp: Option<String>,
    pub text: String,
}

impl LogEntry {
    /// Stamped entry with an explicit stamp.
    pub fn new(level: LogLevel, stamp: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: Some(level),
            stamp: Some(stamp.into()),
            text: text.into(),
        }
    }

    /// Stamped entry using the local wall clock.
    ///
    /// A `format` chrono cannot render falls back to `%H:%M`.
    pub fn now(level: LogLevel, text: impl Into<String>, format: &str) -> Self {
        let now = Local::now();
        let mut stamp = String::new();
        if write!(stamp, "{}", now.format(format)).is_err() {
            warn!(format, "invalid timestamp format, using {}", DEFAULT_TIMESTAMP_FORMAT);
            stamp = now.format(DEFAULT_TIMESTAMP_FORMAT).to_string();
        }
        Self::new(level, stamp, text)
    }

    /// Unstamped, default-styled line.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            level: None,
            stamp: None,
            text: text.into(),
        }
    }

    /// Styled spans: `[` stamp `]` prefix then the text.
    pub fn spans(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = Vec::with_capacity(5);
        if let Some(stamp) = &self.stamp {
            spans.push(Span::new("[", theme.stamp_bracket));
            spans.push(Span::new(stamp.as_str(), theme.stamp_time));
            spans.push(Span::new("]", theme.stamp_bracket));
            spans.push(Span::new(" ", theme.default));
        }
        let style = match self.level {
            Some(LogLevel::Error) => theme.error,
            Some(LogLevel::Warn) => theme.warn,
            Some(LogLevel::Notice) | None => theme.default,
        };
        spans.push(Span::new(self.text.as_str(), style));
        spans
    }

    /// Unstyled `[HH:MM] text` form.
    pub fn plain_text(&self) -> String {
        match &self.stamp {
            Some(stamp) => format!("[{}] {}", stamp, self.text),
            None => self.text.clone(),
        }
    }
}

// =============================================================================
// Scrolling Log
// =============================================================================

#[derive(Debug, Clone)]
pub struct ScrollingLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    frame: TerminalFrame,
    mode: RenderMode,
    theme: Theme,
}

impl ScrollingLog {
    pub fn new(frame: TerminalFrame, mode: RenderMode, theme: Theme) -> Self {
        let capacity = usize::from(frame.height.saturating_sub(1));
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            frame,
            mode,
            theme,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Lowest row used by the log.
    pub fn bottom_row(&self) -> i32 {
        self.frame.height_i32() - 3
    }

    /// Append an entry and return the commands that show it.
    pub fn append(&mut self, entry: LogEntry) -> Vec<DrawCommand> {
        if !self.mode.is_interactive() {
            return vec![DrawCommand::line(vec![Span::raw(entry.plain_text())])];
        }

        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        trace!(len = self.entries.len(), "console: appended");
        self.render()
    }

    /// Commands drawing the visible window, most recent entry lowest.
    ///
    /// Pure: the same log state always yields the same commands.
    pub fn render(&self) -> Vec<DrawCommand> {
        let width = usize::from(self.frame.width);
        let bottom = self.bottom_row();

        self.entries
            .iter()
            .rev()
            .zip((1..=bottom).rev())
            .map(|(entry, row)| {
                let mut spans = entry.spans(&self.theme);
                let used = spans_width(&spans);
                if used < width {
                    spans.push(Span::new(" ".repeat(width - used), self.theme.default));
                }
                DrawCommand::spans_at(0, row, spans)
            })
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn log(height: u16) -> ScrollingLog {
        ScrollingLog::new(
            TerminalFrame::new(30, height, true),
            RenderMode::Interactive,
            Theme::default(),
        )
    }

    fn text_of(cmd: &DrawCommand) -> String {
        cmd.text().trim_end().to_string()
    }

    #[test]
    fn test_capacity_is_height_minus_one() {
        assert_eq!(log(10).capacity(), 9);
    }

    #[test]
    fn test_eviction_keeps_most_recent() {
        let mut l = log(10);
        for i in 0..25 {
            l.append(LogEntry::raw(format!("line {i}")));
        }
        assert_eq!(l.len(), 9);
        let kept: Vec<String> = l.entries().map(|e| e.text.clone()).collect();
        let expected: Vec<String> = (16..25).map(|i| format!("line {i}")).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn test_render_most_recent_lowest() {
        let mut l = log(10);
        l.append(LogEntry::raw("first"));
        l.append(LogEntry::raw("second"));
        let cmds = l.append(LogEntry::raw("third"));

        assert_eq!(cmds.len(), 3);
        assert_eq!(text_of(&cmds[0]), "third");
        assert_eq!(cmds[0].position.unwrap().row, 7);
        assert_eq!(text_of(&cmds[1]), "second");
        assert_eq!(cmds[1].position.unwrap().row, 6);
        assert_eq!(text_of(&cmds[2]), "first");
        assert_eq!(cmds[2].position.unwrap().row, 5);
    }

    #[test]
    fn test_visible_window_stops_below_title() {
        let mut l = log(10);
        for i in 0..9 {
            l.append(LogEntry::raw(format!("{i}")));
        }
        let cmds = l.render();
        // rows 1..=7 are visible
        assert_eq!(cmds.len(), 7);
        assert!(cmds.iter().all(|c| c.position.unwrap().row >= 1));
        assert_eq!(text_of(cmds.last().unwrap()), "2");
    }

    #[test]
    fn test_rows_are_padded_to_width() {
        let mut l = log(10);
        let cmds = l.append(LogEntry::new(LogLevel::Warn, "12:30", "careful"));
        assert_eq!(cmds[0].width(), 30);
        assert!(cmds[0].text().starts_with("[12:30] careful"));
    }

    #[test]
    fn test_level_styles() {
        let theme = Theme::default();
        let spans = LogEntry::new(LogLevel::Error, "09:05", "boom").spans(&theme);
        assert_eq!(spans.last().unwrap().style, theme.error);
        let spans = LogEntry::new(LogLevel::Warn, "09:05", "hm").spans(&theme);
        assert_eq!(spans.last().unwrap().style, theme.warn);
        assert_eq!(spans[1].style, theme.stamp_time);
    }

    #[test]
    fn test_now_with_bad_format_uses_default() {
        let entry = LogEntry::now(LogLevel::Notice, "hi", "%Q");
        let stamp = entry.stamp.unwrap();
        assert_eq!(stamp.len(), 5);
        assert_eq!(stamp.as_bytes()[2], b':');
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut l = log(8);
        l.append(LogEntry::raw("a"));
        l.append(LogEntry::new(LogLevel::Notice, "10:00", "b"));
        assert_eq!(l.render(), l.render());
    }

    #[test]
    fn test_plain_mode_bypasses_buffer() {
        let mut l = ScrollingLog::new(
            TerminalFrame::new(30, 10, false),
            RenderMode::Plain,
            Theme::default(),
        );
        let cmds = l.append(LogEntry::new(LogLevel::Notice, "08:15", "hello"));
        assert!(l.is_empty());
        assert_eq!(cmds, vec![DrawCommand::line(vec![Span::raw("[08:15] hello")])]);
    }

    #[test]
    fn test_tiny_frame_draws_nothing() {
        let mut l = log(3);
        assert!(l.append(LogEntry::raw("x")).is_empty());
        assert_eq!(l.len(), 1);
    }
}
