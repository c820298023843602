//! Toolkit - the caller-facing session object.
//!
//! Owns the terminal, the surface and every piece of UI state (log, title).
//! Components are built from the same frame snapshot and render mode, and
//! all of their output goes through the one surface.
//!
//! # Example
//!
//! ```ignore
//! use bui::{EditorOptions, Toolkit};
//!
//! let mut ui = Toolkit::new()?;
//! ui.clear_screen()?;
//! ui.set_title(Some("deploy"))?;
//! ui.notice("connected")?;
//! let env = ui.ask_list("Target?", &["staging", "production"])?;
//! let secret = ui.input(EditorOptions {
//!     prompt: Some("Token:".into()),
//!     obfuscate: true,
//!     ..Default::default()
//! })?;
//! ```
//!
//! Capture calls (`input`, `ask_list`) block until Enter. They must not be
//! nested; the toolkit is single-threaded and `&mut self` keeps it that way.
//!
//! Raw mode disables terminal signals while a capture runs: Ctrl+C arrives
//! as an ordinary key sequence, is ignored like any other, and does not
//! interrupt the capture. Only Enter ends it.

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::primitives::{LogEntry, LogLevel, NO_CORNER, ScrollingLog, TitleOverlay, center_box};
use crate::renderer::{RenderMode, ScreenSurface};
use crate::state::{EditorOptions, Key, LineEditor, MenuSelector, Step};
use crate::terminal::{CrosstermTerminal, RawModeGuard, Terminal};
use crate::types::{DrawCommand, Position, Span, Style, TerminalFrame};

pub struct Toolkit<T: Terminal = CrosstermTerminal> {
    terminal: T,
    config: Config,
    surface: ScreenSurface,
    console: ScrollingLog,
    title: TitleOverlay,
}

impl Toolkit<CrosstermTerminal> {
    /// Toolkit on the process terminal, configured from the environment.
    pub fn new() -> Result<Self> {
        Self::with_terminal(CrosstermTerminal::new(), Config::from_env())
    }
}

impl<T: Terminal> Toolkit<T> {
    /// Toolkit on any terminal.
    ///
    /// # Errors
    ///
    /// [`Error::TerminalUnavailable`] when interactive rendering is selected
    /// and the terminal size cannot be read. In plain mode the configured
    /// fallback size is used instead.
    ///
    /// An invalid `timestamp_format` is replaced by `%H:%M`.
    pub fn with_terminal(terminal: T, config: Config) -> Result<Self> {
        let config = config.validated();
        let mode = config.render_mode.unwrap_or(if terminal.is_tty() {
            RenderMode::Interactive
        } else {
            RenderMode::Plain
        });

        let (width, height) = match terminal.size() {
            Ok(size) => size,
            Err(e) if mode.is_interactive() => {
                return Err(Error::terminal_unavailable(e.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "terminal size unavailable, using fallback");
                config.fallback_size
            }
        };

        let frame = TerminalFrame::new(width, height, mode.is_interactive());
        debug!(width, height, ?mode, "toolkit: frame detected");

        Ok(Self {
            surface: ScreenSurface::with_mode(frame, mode),
            console: ScrollingLog::new(frame, mode, config.theme),
            title: TitleOverlay::new(frame, mode, config.theme),
            terminal,
            config,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn frame(&self) -> TerminalFrame {
        self.surface.frame()
    }

    pub fn render_mode(&self) -> RenderMode {
        self.surface.mode()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn title(&self) -> Option<&str> {
        self.title.text()
    }

    /// The scrolling log (empty in plain mode).
    pub fn console_log(&self) -> &ScrollingLog {
        &self.console
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn draw(&mut self, cmds: &[DrawCommand]) -> Result<()> {
        self.surface.draw_all(&mut self.terminal, cmds)?;
        Ok(())
    }

    /// Print text in the default style, at a position or as a line.
    pub fn print(&mut self, text: &str, at: Option<Position>) -> Result<()> {
        self.print_spans(vec![Span::new(text, self.config.theme.default)], at)
    }

    /// Print pre-styled spans, at a position or as a line.
    pub fn print_spans(&mut self, spans: Vec<Span>, at: Option<Position>) -> Result<()> {
        let cmd = match at {
            Some(pos) => DrawCommand::spans_at(pos.col, pos.row, spans),
            None => DrawCommand::line(spans),
        };
        self.draw(&[cmd])
    }

    /// Line in the error style.
    pub fn print_error(&mut self, text: &str) -> Result<()> {
        self.print_spans(vec![Span::new(text, self.config.theme.error)], None)
    }

    /// Line in the warn style.
    pub fn print_warn(&mut self, text: &str) -> Result<()> {
        self.print_spans(vec![Span::new(text, self.config.theme.warn)], None)
    }

    /// Centered box around `text`; defaults to the default style, no corners.
    pub fn print_center(&mut self, text: &str, style: Option<Style>, corner: Option<char>) -> Result<()> {
        let cmds = center_box(
            self.frame(),
            self.render_mode(),
            text,
            style.unwrap_or(self.config.theme.default),
            corner.unwrap_or(NO_CORNER),
        );
        self.draw(&cmds)
    }

    pub fn error_center(&mut self, text: &str) -> Result<()> {
        self.print_center(text, Some(self.config.theme.error), Some('!'))
    }

    pub fn warn_center(&mut self, text: &str) -> Result<()> {
        self.print_center(text, Some(self.config.theme.warn), Some('*'))
    }

    pub fn bold(&self, text: &str) -> Span {
        self.config.theme.bold(text)
    }

    pub fn underline(&self, text: &str) -> Span {
        self.config.theme.underline(text)
    }

    pub fn window_text(&self, text: &str) -> Span {
        self.config.theme.window_text(text)
    }

    // =========================================================================
    // Scrolling log
    // =========================================================================

    /// Append an entry to the scrolling log.
    pub fn log(&mut self, entry: LogEntry) -> Result<()> {
        let cmds = self.console.append(entry);
        self.draw(&cmds)
    }

    /// Append an unstamped line.
    pub fn console(&mut self, text: &str) -> Result<()> {
        self.log(LogEntry::raw(text))
    }

    fn log_stamped(&mut self, level: LogLevel, text: &str) -> Result<()> {
        let entry = LogEntry::now(level, text, &self.config.timestamp_format);
        self.log(entry)
    }

    pub fn notice(&mut self, text: &str) -> Result<()> {
        self.log_stamped(LogLevel::Notice, text)
    }

    pub fn warn(&mut self, text: &str) -> Result<()> {
        self.log_stamped(LogLevel::Warn, text)
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        self.log_stamped(LogLevel::Error, text)
    }

    // =========================================================================
    // Screen
    // =========================================================================

    /// Wipe the screen and redraw the title.
    pub fn clear_screen(&mut self) -> Result<()> {
        self.surface.clear_screen(&mut self.terminal)?;
        let cmds = self.title.render();
        self.draw(&cmds)
    }

    /// Blank every row below the title.
    pub fn clear_console(&mut self) -> Result<()> {
        self.surface.clear_region(&mut self.terminal)?;
        Ok(())
    }

    /// Set or remove the title and redraw it.
    pub fn set_title(&mut self, text: Option<&str>) -> Result<()> {
        let cmds = self.title.set(text);
        self.draw(&cmds)
    }

    // =========================================================================
    // Input capture
    // =========================================================================

    /// Read one line of filtered text from the bottom row.
    pub fn input(&mut self, options: EditorOptions) -> Result<String> {
        let mut editor = LineEditor::new(self.frame(), options, &self.config);
        self.draw(&editor.prompt_commands())?;
        self.capture(|key| editor.handle_key(key))
    }

    /// Let the user pick one of `options`; returns the chosen label.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyMenu`] when `options` is empty. Nothing is drawn.
    pub fn ask_list<S: AsRef<str>>(&mut self, prompt: &str, options: &[S]) -> Result<String> {
        let options = options.iter().map(|o| o.as_ref().to_string()).collect();
        let mut menu = MenuSelector::new(self.frame(), prompt, options, self.config.theme)?;
        self.draw(&menu.layout_commands())?;
        self.capture(|key| menu.handle_key(key))
    }

    /// Drive a capture state machine until it finishes.
    ///
    /// Raw mode is held by the guard for exactly the duration of the loop.
    fn capture(&mut self, mut machine: impl FnMut(&Key) -> Step<String>) -> Result<String> {
        let mut terminal = RawModeGuard::enter(&mut self.terminal)?;
        loop {
            let key = terminal.read_key()?;
            match machine(&key) {
                Step::Redraw(cmds) => self.surface.draw_all(&mut *terminal, &cmds)?,
                Step::Ignored => {}
                Step::Done(value) => return Ok(value),
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
