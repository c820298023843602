//! # bui
//!
//! Minimal terminal UI toolkit for line-oriented programs.
//!
//! A session gets a title bar on row 0, a scrolling timestamped log above the
//! bottom of the screen, centered message boxes, and two blocking capture
//! widgets: a filtered single-line editor and a vertical menu.
//!
//! ## Architecture
//!
//! Screen components never touch the terminal. Each one turns its state
//! into [`DrawCommand`]s:
//!
//! ```text
//! key → LineEditor / MenuSelector → Step::Redraw(commands)
//!                                         ↓
//!         ScrollingLog / TitleOverlay → ScreenSurface (clamp) → Renderer → Terminal
//! ```
//!
//! The renderer is chosen once per [`Toolkit`]: ANSI positioning and styling
//! when attached to a TTY, plain lines otherwise (or as forced through
//! [`Config::render_mode`] / `BUI_RENDER_MODE`).
//!
//! ## Modules
//!
//! - [`types`] - frame, positions, styles, spans and draw commands
//! - [`text`] - display-width measuring and truncation
//! - [`theme`] - the fixed color roles
//! - [`state`] - keys and the two capture state machines
//! - [`primitives`] - scrolling log, title bar, centered box
//! - [`renderer`] - render strategies and the clamping surface
//! - [`terminal`] - terminal capabilities, raw-mode guard, scripted terminal
//! - [`toolkit`] - the session facade

pub mod config;
pub mod error;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod toolkit;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use primitives::{LogEntry, LogLevel, ScrollingLog, TitleOverlay, center_box};
pub use renderer::{RenderMode, Renderer, ScreenSurface};
pub use state::{EditorOptions, Key, LineEditor, MenuSelector, Step, keys};
pub use terminal::{CrosstermTerminal, RawModeGuard, ScriptedTerminal, Terminal};
pub use text::{string_width, truncate_to_width};
pub use theme::Theme;
pub use toolkit::Toolkit;
pub use types::{Attr, DrawCommand, Position, Span, Style, TerminalFrame};
