//! Toolkit configuration.
//!
//! Plain struct with public fields and a `Default`; override what you need
//! with struct-update syntax:
//!
//! ```ignore
//! let config = Config {
//!     mask_char: '#',
//!     ..Config::default()
//! };
//! ```

use chrono::format::{Item, StrftimeItems};

use crate::renderer::RenderMode;
use crate::theme::Theme;

/// Environment variable forcing the render mode (`interactive` or `plain`).
pub const RENDER_MODE_ENV: &str = "BUI_RENDER_MODE";

/// Prompt shown by `input` when the caller gives none.
pub const DEFAULT_INPUT_PROMPT: &str = "Press [Enter] to continue:";

/// Log stamp format used when none (or an invalid one) is configured.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Force a render mode. `None` picks interactive when stdout is a TTY.
    pub render_mode: Option<RenderMode>,
    /// Frame size assumed when the terminal cannot report one in plain mode.
    pub fallback_size: (u16, u16),
    /// Prompt used by `input` when none is passed.
    pub input_prompt: String,
    /// Column of the input prompt and field.
    pub input_offset: u16,
    /// Character echoed for each obfuscated keystroke.
    pub mask_char: char,
    /// chrono format string for log stamps.
    pub timestamp_format: String,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render_mode: None,
            fallback_size: (80, 24),
            input_prompt: DEFAULT_INPUT_PROMPT.to_string(),
            input_offset: 2,
            mask_char: '*',
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Defaults with `BUI_RENDER_MODE` applied when set to a known value.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(RENDER_MODE_ENV) {
            match RenderMode::parse(&value) {
                Some(mode) => config.render_mode = Some(mode),
                None => tracing::warn!(value = %value, "ignoring unknown {}", RENDER_MODE_ENV),
            }
        }
        config
    }

    /// Replace an unparseable `timestamp_format` with the default.
    pub fn validated(mut self) -> Self {
        if !is_valid_timestamp_format(&self.timestamp_format) {
            tracing::warn!(
                format = %self.timestamp_format,
                "invalid timestamp format, using {}",
                DEFAULT_TIMESTAMP_FORMAT
            );
            self.timestamp_format = DEFAULT_TIMESTAMP_FORMAT.to_string();
        }
        self
    }
}

/// Whether chrono accepts every specifier in `format`.
pub fn is_valid_timestamp_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.render_mode, None);
        assert_eq!(config.fallback_size, (80, 24));
        assert_eq!(config.input_prompt, "Press [Enter] to continue:");
        assert_eq!(config.input_offset, 2);
        assert_eq!(config.mask_char, '*');
        assert_eq!(config.timestamp_format, "%H:%M");
    }

    #[test]
    fn test_struct_update() {
        let config = Config {
            mask_char: '#',
            ..Config::default()
        };
        assert_eq!(config.mask_char, '#');
        assert_eq!(config.input_offset, 2);
    }

    #[test]
    fn test_timestamp_format_validation() {
        assert!(is_valid_timestamp_format("%H:%M"));
        assert!(is_valid_timestamp_format("%Y-%m-%d %H:%M:%S"));
        assert!(!is_valid_timestamp_format("%Q"));
    }

    #[test]
    fn test_validated_falls_back_on_bad_format() {
        let config = Config {
            timestamp_format: "%Q".into(),
            ..Config::default()
        }
        .validated();
        assert_eq!(config.timestamp_format, "%H:%M");

        let config = Config {
            timestamp_format: "%H:%M:%S".into(),
            ..Config::default()
        }
        .validated();
        assert_eq!(config.timestamp_format, "%H:%M:%S");
    }
}
