//! Construction-time configuration for the OTP view.
//!
//! A [`Config`] is read once when the view is built; the number of cells and
//! their styling cannot change afterwards. It can be assembled with the
//! builder methods or parsed from attribute-style `(name, value)` pairs:
//!
//! ```rust
//! use bubbletea_otp::otpview::Config;
//! use bubbletea_otp::InputKind;
//!
//! let config = Config::from_attributes([
//!     ("otp_number", "4"),
//!     ("input_type", "number"),
//!     ("text_color", "#FAFAFA"),
//! ])
//! .unwrap();
//!
//! assert_eq!(config.cell_count, 4);
//! assert_eq!(config.input_kind, InputKind::Number);
//! ```

use super::error::{Error, Result};
use crate::cell::InputKind;

/// Number of cells when none is configured.
pub const DEFAULT_CELL_COUNT: i64 = 5;

/// Text color when none is configured (black).
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Styling and sizing options for an OTP view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of cells. Must be at least 1; checked when the view is built.
    pub cell_count: i64,
    /// Foreground color of the cells, also used to tint cell borders when no
    /// background is set.
    pub text_color: String,
    /// Uniform cell background. `None` means no background.
    pub background_color: Option<String>,
    /// Characters the cells accept.
    pub input_kind: InputKind,
    /// Initial content. Only applied when it is exactly one character shorter
    /// than the cell count.
    pub prefill: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_count: DEFAULT_CELL_COUNT,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            background_color: None,
            input_kind: InputKind::Text,
            prefill: None,
        }
    }
}

impl Config {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of cells.
    pub fn with_cell_count(mut self, count: i64) -> Self {
        self.cell_count = count;
        self
    }

    /// Sets the text color.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Sets a uniform background color for every cell.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the input kind.
    pub fn with_input_kind(mut self, kind: InputKind) -> Self {
        self.input_kind = kind;
        self
    }

    /// Sets the initial content.
    pub fn with_prefill(mut self, prefill: impl Into<String>) -> Self {
        self.prefill = Some(prefill.into());
        self
    }

    /// Parses attribute-style configuration.
    ///
    /// Recognized names are `otp_number`, `text_color`, `text_background_color`,
    /// `input_type` and `otp`. Unrecognized names are skipped. The value
    /// `"transparent"` for `text_background_color` means no background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] for a malformed number or color and
    /// [`Error::UnknownInputType`] for an `input_type` other than `number` or
    /// `text`.
    pub fn from_attributes<'a, I>(attrs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attrs {
            let value = value.trim();
            match name {
                "otp_number" => {
                    config.cell_count = value
                        .parse::<i64>()
                        .map_err(|_| Error::invalid_attribute(name, value))?;
                }
                "text_color" => {
                    check_color(name, value)?;
                    config.text_color = value.to_string();
                }
                "text_background_color" => {
                    if value.eq_ignore_ascii_case("transparent") {
                        config.background_color = None;
                    } else {
                        check_color(name, value)?;
                        config.background_color = Some(value.to_string());
                    }
                }
                "input_type" => config.input_kind = parse_input_kind(value)?,
                "otp" => {
                    config.prefill = if value.is_empty() {
                        None
                    } else {
                        Some(value.to_string())
                    };
                }
                _ => {
                    tracing::debug!(
                        target: "bubbletea_otp::otpview",
                        "Ignoring unknown attribute '{}'",
                        name
                    );
                }
            }
        }
        Ok(config)
    }

    /// Returns the cell count as a `usize`, rejecting values below one.
    pub(super) fn validated_cell_count(&self) -> Result<usize> {
        if self.cell_count < 1 {
            return Err(Error::InvalidCellCount(self.cell_count));
        }
        usize::try_from(self.cell_count).map_err(|_| Error::InvalidCellCount(self.cell_count))
    }
}

fn parse_input_kind(value: &str) -> Result<InputKind> {
    match value.to_ascii_lowercase().as_str() {
        "number" | "numeric" => Ok(InputKind::Number),
        "text" | "textnormal" => Ok(InputKind::Text),
        _ => Err(Error::UnknownInputType(value.to_string())),
    }
}

// Accepts hex colors (#rgb, #rrggbb) and ANSI palette indices (0-255).
fn check_color(name: &str, value: &str) -> Result<()> {
    let ok = if let Some(hex) = value.strip_prefix('#') {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else {
        value.parse::<u8>().is_ok()
    };
    if ok {
        Ok(())
    } else {
        Err(Error::invalid_attribute(name, value))
    }
}
