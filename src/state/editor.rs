//! Line Editor - Character-filtered single line input
//!
//! A state machine with two phases, `Editing` and `Done`. Each key moves it
//! through [`LineEditor::handle_key`], which mutates the buffer and returns
//! the draw commands needed to show the new state. The editor never touches
//! the terminal itself; a driver feeds it keys and hands the commands to the
//! surface.
//!
//! # Transitions (while editing)
//!
//! - Enter -> `Done`, yields the buffer
//! - Backspace / Delete -> drop the last character, blank the old field, redraw
//! - editable character -> append if it fits `max_len`, redraw; otherwise dropped
//! - anything else -> ignored (logged at debug level)
//!
//! # Example
//!
//! ```ignore
//! let mut editor = LineEditor::new(frame, EditorOptions::default(), &config);
//! editor.handle_key(&Key::Char('h'));
//! editor.handle_key(&Key::Char('i'));
//! assert_eq!(editor.handle_key(&Key::Enter), Step::Done("hi".to_string()));
//! ```

use tracing::{debug, trace};

use crate::config::Config;
use crate::text::truncate_to_width;
use crate::types::{DrawCommand, Style, TerminalFrame};

use super::Step;
use super::keyboard::Key;

// =============================================================================
// CHARACTER FILTER
// =============================================================================

/// Punctuation accepted by the editor on top of letters, digits and space.
pub const EDITABLE_PUNCTUATION: &str = "-:().`+,!@<>#$%^&*;/\\|";

/// Whether a character may be typed into the editor.
pub fn is_editable(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || EDITABLE_PUNCTUATION.contains(c)
}

// =============================================================================
// OPTIONS / STATE
// =============================================================================

/// Caller-facing knobs for one `input` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorOptions {
    /// Prompt shown above the field. Falls back to the configured prompt.
    pub prompt: Option<String>,
    /// Echo a mask instead of the typed text.
    pub obfuscate: bool,
    /// Longest accepted input. Defaults to `width - 3`.
    pub max_len: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Editing,
    Done,
}

/// Mutable state of the editor.
///
/// `0 <= buffer.chars().count() <= max_len` holds after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub buffer: String,
    pub max_len: usize,
    pub obfuscate: bool,
    pub row: i32,
    pub col: i32,
}

// =============================================================================
// LINE EDITOR
// =============================================================================

#[derive(Debug, Clone)]
pub struct LineEditor {
    state: EditorState,
    phase: EditorPhase,
    prompt: String,
    mask: char,
    style: Style,
}

impl LineEditor {
    /// Build an editor for the given frame.
    ///
    /// The field sits on the last row at the configured offset, the prompt
    /// one row above it.
    pub fn new(frame: TerminalFrame, options: EditorOptions, config: &Config) -> Self {
        let offset = usize::from(config.input_offset);
        let width = usize::from(frame.width);

        let prompt = options
            .prompt
            .unwrap_or_else(|| config.input_prompt.clone());
        let prompt = truncate_to_width(&prompt, width.saturating_sub(offset));

        let max_len = options.max_len.unwrap_or(width.saturating_sub(3));

        Self {
            state: EditorState {
                buffer: String::new(),
                max_len,
                obfuscate: options.obfuscate,
                row: frame.height_i32() - 1,
                col: i32::from(config.input_offset),
            },
            phase: EditorPhase::Editing,
            prompt,
            mask: config.mask_char,
            style: config.theme.default,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Number of characters currently in the buffer.
    pub fn len(&self) -> usize {
        self.state.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.state.buffer.is_empty()
    }

    /// Commands drawing the prompt, issued once before the first key.
    pub fn prompt_commands(&self) -> Vec<DrawCommand> {
        vec![DrawCommand::at(
            self.state.col,
            self.state.row - 1,
            self.prompt.clone(),
            self.style,
        )]
    }

    /// Apply one key event.
    pub fn handle_key(&mut self, key: &Key) -> Step<String> {
        if self.phase == EditorPhase::Done {
            return Step::Ignored;
        }

        match key {
            k if k.is_confirm() => {
                self.phase = EditorPhase::Done;
                trace!(len = self.len(), "editor: confirmed");
                Step::Done(std::mem::take(&mut self.state.buffer))
            }
            k if k.is_sequence() => {
                debug!(key = %k, "editor: ignoring key sequence");
                Step::Ignored
            }
            k if k.is_erase() => self.erase(),
            Key::Char(c) if is_editable(*c) => self.append(*c),
            other => {
                debug!(key = %other, "editor: ignoring non-editable key");
                Step::Ignored
            }
        }
    }

    fn append(&mut self, c: char) -> Step<String> {
        if self.len() + 1 > self.state.max_len {
            trace!(max_len = self.state.max_len, "editor: dropping key past max length");
            return Step::Ignored;
        }
        self.state.buffer.push(c);
        trace!(len = self.len(), "editor: appended");
        Step::Redraw(vec![self.field_command()])
    }

    fn erase(&mut self) -> Step<String> {
        let old_len = self.len();
        if self.state.buffer.pop().is_none() {
            return Step::Ignored;
        }
        trace!(len = self.len(), "editor: erased");
        Step::Redraw(vec![
            DrawCommand::at(self.state.col, self.state.row, " ".repeat(old_len), self.style),
            self.field_command(),
        ])
    }

    /// The field as it should look right now: raw text or its mask.
    fn field_command(&self) -> DrawCommand {
        let shown = if self.state.obfuscate {
            self.mask.to_string().repeat(self.len())
        } else {
            self.state.buffer.clone()
        };
        DrawCommand::at(self.state.col, self.state.row, shown, self.style)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keyboard::keys;

    fn frame() -> TerminalFrame {
        TerminalFrame::new(40, 20, true)
    }

    fn editor(options: EditorOptions) -> LineEditor {
        LineEditor::new(frame(), options, &Config::default())
    }

    fn run(editor: &mut LineEditor, input: impl IntoIterator<Item = Key>) -> Vec<DrawCommand> {
        let mut drawn = Vec::new();
        for key in input {
            if let Step::Redraw(cmds) = editor.handle_key(&key) {
                drawn.extend(cmds);
            }
        }
        drawn
    }

    #[test]
    fn test_is_editable() {
        for c in "azAZ09 -:().`+,!@<>#$%^&*;/\\|".chars() {
            assert!(is_editable(c), "{c:?} should be editable");
        }
        for c in ['\t', '\n', '~', '[', ']', '{', '}', '"', '\'', '=', '?', '_', 'é'] {
            assert!(!is_editable(c), "{c:?} should not be editable");
        }
    }

    #[test]
    fn test_backspace_then_append() {
        let mut ed = editor(EditorOptions::default());
        run(&mut ed, keys("ab"));
        run(&mut ed, [Key::Backspace]);
        run(&mut ed, keys("c"));
        assert_eq!(ed.handle_key(&Key::Enter), Step::Done("ac".to_string()));
        assert_eq!(ed.phase(), EditorPhase::Done);
    }

    #[test]
    fn test_delete_behaves_like_backspace() {
        let mut ed = editor(EditorOptions::default());
        run(&mut ed, keys("xy"));
        run(&mut ed, [Key::Delete]);
        assert_eq!(ed.state().buffer, "x");
    }

    #[test]
    fn test_max_len_drops_overflow() {
        let mut ed = editor(EditorOptions {
            max_len: Some(2),
            ..Default::default()
        });
        assert!(ed.handle_key(&Key::Char('a')).is_redraw());
        assert!(ed.handle_key(&Key::Char('b')).is_redraw());
        assert_eq!(ed.handle_key(&Key::Char('c')), Step::Ignored);
        assert_eq!(ed.handle_key(&Key::Enter), Step::Done("ab".to_string()));
    }

    #[test]
    fn test_default_max_len_is_width_minus_three() {
        let ed = editor(EditorOptions::default());
        assert_eq!(ed.state().max_len, 37);
    }

    #[test]
    fn test_obfuscated_never_shows_input() {
        let mut ed = editor(EditorOptions {
            obfuscate: true,
            ..Default::default()
        });
        let drawn = run(&mut ed, keys("hi"));
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0].text(), "*");
        assert_eq!(drawn[1].text(), "**");
        for cmd in &drawn {
            assert!(!cmd.text().contains('h'));
            assert!(!cmd.text().contains('i'));
        }
        assert_eq!(ed.handle_key(&Key::Enter), Step::Done("hi".to_string()));
    }

    #[test]
    fn test_erase_blanks_old_field_first() {
        let mut ed = editor(EditorOptions::default());
        run(&mut ed, keys("abc"));
        let drawn = run(&mut ed, [Key::Backspace]);
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0].text(), "   ");
        assert_eq!(drawn[1].text(), "ab");
        assert_eq!(drawn[0].position, drawn[1].position);
    }

    #[test]
    fn test_erase_on_empty_is_ignored() {
        let mut ed = editor(EditorOptions::default());
        assert_eq!(ed.handle_key(&Key::Backspace), Step::Ignored);
        assert!(ed.is_empty());
    }

    #[test]
    fn test_sequences_and_filtered_chars_are_ignored() {
        let mut ed = editor(EditorOptions::default());
        run(&mut ed, keys("a"));
        for key in [
            Key::Up,
            Key::Down,
            Key::Sequence("ArrowLeft".into()),
            Key::Other,
            Key::Char('~'),
        ] {
            assert_eq!(ed.handle_key(&key), Step::Ignored);
        }
        assert_eq!(ed.state().buffer, "a");
    }

    #[test]
    fn test_field_and_prompt_positions() {
        let ed = editor(EditorOptions::default());
        let prompt = ed.prompt_commands();
        assert_eq!(prompt[0].text(), "Press [Enter] to continue:");
        let pos = prompt[0].position.unwrap();
        assert_eq!((pos.col, pos.row), (2, 18));
        assert_eq!((ed.state().col, ed.state().row), (2, 19));
    }

    #[test]
    fn test_long_prompt_is_truncated() {
        let ed = editor(EditorOptions {
            prompt: Some("x".repeat(100)),
            ..Default::default()
        });
        assert_eq!(ed.prompt().len(), 38);
    }

    #[test]
    fn test_keys_after_done_are_ignored() {
        let mut ed = editor(EditorOptions::default());
        ed.handle_key(&Key::Enter);
        assert_eq!(ed.handle_key(&Key::Char('a')), Step::Ignored);
    }
}
