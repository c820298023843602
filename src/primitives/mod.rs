//! Screen primitives - the drawn parts of a session besides input.
//!
//! - [`ScrollingLog`] - bounded message log above the input row
//! - [`TitleOverlay`] - centered banner on row 0
//! - [`center_box`] - centered, filled message box
//!
//! # Architecture
//!
//! Primitives never write to the terminal. Each one turns its state into
//! [`DrawCommand`](crate::types::DrawCommand)s and the toolkit hands those to
//! the [`ScreenSurface`](crate::renderer::ScreenSurface). The render mode is
//! given to each primitive once, at construction, and decides what it emits.

mod banner;
mod console;
mod title;

pub use banner::{NO_CORNER, center_box};
pub use console::{LogEntry, LogLevel, ScrollingLog};
pub use title::TitleOverlay;
