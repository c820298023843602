//! Menu Selector - Single-select list with wraparound navigation
//!
//! A state machine with two phases, `Browsing` and `Done`, over a non-empty
//! ordered list of labels. Options sit two rows apart in a column anchored
//! at the middle of the screen; the selected one is drawn in the highlight
//! style, every other one plain.
//!
//! # Transitions (while browsing)
//!
//! - Enter -> `Done`, yields the selected label unmodified
//! - Up -> un-highlight current row, move up (0 wraps to last), highlight
//! - Down -> un-highlight current row, move down (last wraps to 0), highlight
//! - anything else -> ignored, nothing redrawn
//!
//! Every redraw step ends with the new row highlighted, so exactly one row
//! is highlighted between events.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::text::{string_width, truncate_to_width};
use crate::theme::Theme;
use crate::types::{DrawCommand, TerminalFrame};

use super::Step;
use super::keyboard::Key;

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Browsing,
    Done,
}

/// Menu state. `0 <= selected < options.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub options: Vec<String>,
    pub selected: usize,
    pub anchor_row: i32,
    pub anchor_col: i32,
}

impl MenuState {
    /// Screen row of option `index`.
    #[inline]
    pub fn row_of(&self, index: usize) -> i32 {
        self.anchor_row + (index as i32) * 2
    }
}

// =============================================================================
// MENU SELECTOR
// =============================================================================

#[derive(Debug, Clone)]
pub struct MenuSelector {
    state: MenuState,
    phase: MenuPhase,
    prompt: String,
    theme: Theme,
}

impl MenuSelector {
    /// Lay out a menu for the given frame.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyMenu`] when `options` is empty. A menu needs at least one
    /// row to highlight.
    pub fn new(
        frame: TerminalFrame,
        prompt: &str,
        options: Vec<String>,
        theme: Theme,
    ) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::EmptyMenu);
        }

        let anchor_col = frame.width_i32() / 2;
        let anchor_row = frame.height_i32() / 2 - (options.len() as i32 + 1);
        let prompt = truncate_to_width(prompt, usize::from(frame.width).saturating_sub(2));

        Ok(Self {
            state: MenuState {
                options,
                selected: 0,
                anchor_row,
                anchor_col,
            },
            phase: MenuPhase::Browsing,
            prompt,
            theme,
        })
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    pub fn selected(&self) -> usize {
        self.state.selected
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Commands for the first paint: prompt, every option plain, then the
    /// initial highlight.
    pub fn layout_commands(&self) -> Vec<DrawCommand> {
        let prompt_col = self.state.anchor_col - string_width(&self.prompt) as i32;
        let mut cmds = Vec::with_capacity(self.state.options.len() + 2);
        cmds.push(DrawCommand::at(
            prompt_col,
            self.state.anchor_row - 2,
            self.prompt.clone(),
            self.theme.default,
        ));
        for index in 0..self.state.options.len() {
            cmds.push(self.row_command(index, false));
        }
        cmds.push(self.row_command(self.state.selected, true));
        cmds
    }

    /// Apply one key event.
    pub fn handle_key(&mut self, key: &Key) -> Step<String> {
        if self.phase == MenuPhase::Done {
            return Step::Ignored;
        }

        let last = self.state.options.len() - 1;
        let next = match key {
            k if k.is_confirm() => {
                self.phase = MenuPhase::Done;
                trace!(selected = self.state.selected, "menu: confirmed");
                return Step::Done(self.state.options[self.state.selected].clone());
            }
            Key::Up => {
                if self.state.selected == 0 {
                    last
                } else {
                    self.state.selected - 1
                }
            }
            Key::Down => {
                if self.state.selected >= last {
                    0
                } else {
                    self.state.selected + 1
                }
            }
            other => {
                debug!(key = %other, "menu: ignoring key");
                return Step::Ignored;
            }
        };

        let unhighlight = self.row_command(self.state.selected, false);
        self.state.selected = next;
        trace!(selected = next, "menu: moved");
        Step::Redraw(vec![unhighlight, self.row_command(next, true)])
    }

    fn row_command(&self, index: usize, highlighted: bool) -> DrawCommand {
        let style = if highlighted {
            self.theme.highlight()
        } else {
            self.theme.default
        };
        DrawCommand::at(
            self.state.anchor_col,
            self.state.row_of(index),
            self.state.options[index].clone(),
            style,
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MenuSelector {
        MenuSelector::new(
            TerminalFrame::new(80, 24, true),
            "Pick one",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            Theme::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_menu_is_rejected() {
        let result = MenuSelector::new(
            TerminalFrame::new(80, 24, true),
            "Pick",
            Vec::new(),
            Theme::default(),
        );
        assert!(matches!(result, Err(Error::EmptyMenu)));
    }

    #[test]
    fn test_up_wraps_to_last() {
        let mut m = menu();
        assert!(m.handle_key(&Key::Up).is_redraw());
        assert_eq!(m.selected(), 2);
    }

    #[test]
    fn test_down_wraps_to_first() {
        let mut m = menu();
        m.handle_key(&Key::Down);
        m.handle_key(&Key::Down);
        assert_eq!(m.selected(), 2);
        m.handle_key(&Key::Down);
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn test_confirm_returns_label_unmodified() {
        for (moves, expected) in [(0, "a"), (1, "b"), (2, "c")] {
            let mut m = menu();
            for _ in 0..moves {
                m.handle_key(&Key::Down);
            }
            assert_eq!(m.handle_key(&Key::Enter), Step::Done(expected.to_string()));
            assert_eq!(m.phase(), MenuPhase::Done);
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut m = menu();
        for key in [
            Key::Char('j'),
            Key::Backspace,
            Key::Sequence("ArrowLeft".into()),
            Key::Other,
        ] {
            assert_eq!(m.handle_key(&key), Step::Ignored);
        }
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn test_move_unhighlights_then_highlights() {
        let theme = Theme::default();
        let mut m = menu();
        let Step::Redraw(cmds) = m.handle_key(&Key::Down) else {
            panic!("expected redraw");
        };
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].text(), "a");
        assert_eq!(cmds[0].spans[0].style, theme.default);
        assert_eq!(cmds[1].text(), "b");
        assert_eq!(cmds[1].spans[0].style, theme.highlight());
    }

    #[test]
    fn test_layout() {
        let m = menu();
        // top = 24/2 - (3 + 1) = 8, options two rows apart at col 40
        assert_eq!(m.state().anchor_row, 8);
        assert_eq!(m.state().anchor_col, 40);
        let cmds = m.layout_commands();
        assert_eq!(cmds.len(), 5);

        let prompt = cmds[0].position.unwrap();
        assert_eq!((prompt.col, prompt.row), (40 - 8, 6));

        let rows: Vec<i32> = cmds[1..4].iter().map(|c| c.position.unwrap().row).collect();
        assert_eq!(rows, vec![8, 10, 12]);

        let highlight = cmds.last().unwrap();
        assert_eq!(highlight.text(), "a");
        assert_eq!(highlight.spans[0].style, Theme::default().highlight());
    }
}
