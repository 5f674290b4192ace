//! Segmented one-time-password input for Bubble Tea applications.
//!
//! The OTP view is a row of single-character cells that behave as one input.
//! Focus moves on its own as the user types: a character entered in a cell
//! advances to the next cell, clearing a cell steps back to the previous one,
//! and filling the last cell completes the code.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_otp::otpview::{Config, Model};
//! use bubbletea_otp::{Component, InputKind};
//!
//! let mut otp = Model::with_config(
//!     Config::new()
//!         .with_cell_count(6)
//!         .with_input_kind(InputKind::Number)
//!         .with_text_color("#FAFAFA"),
//! )
//! .unwrap();
//! otp.focus();
//! assert_eq!(otp.focused_cell(), Some(0));
//! ```
//!
//! # Completion
//!
//! Register a callback with [`Model::set_on_otp_finished`], or handle the
//! [`FinishedMsg`] produced by the command [`Model::update`] returns when the
//! code is completed.
//!
//! # Display-only mode
//!
//! [`Model::disable_keypad`] keeps the cells navigable but drops typed input.

pub mod config;
mod controller;
pub mod error;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export main types and functions for public API
pub use config::{Config, DEFAULT_CELL_COUNT, DEFAULT_TEXT_COLOR};
pub use error::{Error, Result};
pub use keymap::{default_key_map, KeyMap};
pub use methods::VALID_OTP_LENGTH;
pub use model::{new, paste, Model};
pub use types::{FinishedFunc, FinishedMsg, PasteErrMsg, PasteMsg};
pub use view::Styles;
