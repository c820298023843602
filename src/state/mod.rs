//! Input capture state.
//!
//! Key identities, their conversion from crossterm, and the two capture
//! state machines (line editor and menu selector). The state machines are
//! pure: they take a key and return a [`Step`]. Reading keys and writing to
//! the screen is the driver's job (see [`crate::toolkit`]).

pub mod editor;
pub mod input;
pub mod keyboard;
pub mod menu;

pub use editor::{EDITABLE_PUNCTUATION, EditorOptions, EditorPhase, EditorState, LineEditor, is_editable};
pub use input::{convert_key_event, read_key};
pub use keyboard::{Key, keys};
pub use menu::{MenuPhase, MenuSelector, MenuState};

use crate::types::DrawCommand;

/// Outcome of feeding one key to a capture state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// State changed; draw these commands before reading the next key.
    Redraw(Vec<DrawCommand>),
    /// Key had no effect.
    Ignored,
    /// Confirm key received; the machine is finished.
    Done(T),
}

impl<T> Step<T> {
    pub fn is_redraw(&self) -> bool {
        matches!(self, Step::Redraw(_))
    }
}
