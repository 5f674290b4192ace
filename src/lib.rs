#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-otp/")]

//! # bubbletea-otp
//!
//! A segmented one-time-password input component for terminal applications
//! built with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The OTP view is a row of single-character cells that behave as one input.
//! It follows the Elm Architecture pattern with `update()` and `view()`
//! methods, like any other bubbletea component:
//!
//! - **Auto-advance**: typing a character moves focus to the next cell
//! - **Auto-retreat**: clearing a cell moves focus back to the previous one
//! - **Completion**: filling the last cell hides the keyboard and reports the
//!   code through a callback and a `FinishedMsg`
//! - **Numeric or free-text** cells, with programmatic get/set of the code
//! - **Display-only mode** via `disable_keypad()`
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_otp::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     otp: OtpView,
//!     code: Option<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let config = OtpConfig::new()
//!             .with_cell_count(6)
//!             .with_input_kind(InputKind::Number);
//!         let mut otp = OtpView::with_config(config).expect("six cells is a valid count");
//!         otp.focus();
//!         (Self { otp, code: None }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<OtpFinishedMsg>() {
//!             self.code = Some(done.code.clone());
//!             return None;
//!         }
//!         self.otp.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Enter the code we sent you:\n\n{}", self.otp.view())
//!     }
//! }
//! ```
//!
//! ## Quick Start
//!
//! Add bubbletea-otp to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bubbletea-otp = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```

pub mod cell;
pub mod key;
pub mod otpview;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - **Focused**: the component receives keyboard input and shows it
/// - **Blurred**: the component ignores keyboard input
///
/// `focus()` may return a command to run on gaining focus; `blur()` should
/// drop any focus-related state.
///
/// ```rust
/// use bubbletea_otp::prelude::*;
///
/// let mut otp = otpview_new();
/// assert!(!otp.focused());
///
/// otp.focus();
/// assert!(otp.focused());
///
/// otp.blur();
/// assert!(!otp.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use cell::{Cell, InputKind, InputOutcome};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use otpview::{
    default_key_map as otpview_default_key_map, new as otpview_new, paste, Config as OtpConfig,
    Error as OtpError, FinishedFunc, FinishedMsg as OtpFinishedMsg, KeyMap as OtpKeyMap,
    Model as OtpView, PasteErrMsg, PasteMsg, Styles as OtpStyles, VALID_OTP_LENGTH,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_otp::prelude::*;
///
/// let otp: OtpView = otpview_new();
/// assert_eq!(otp.cell_count(), 5);
/// ```
pub mod prelude {
    pub use crate::cell::{Cell, InputKind};
    pub use crate::key::{matches_binding, new_binding, with_help, with_keys_str, Binding, KeyMap};
    pub use crate::otpview::{
        default_key_map as otpview_default_key_map, new as otpview_new, Config as OtpConfig,
        FinishedMsg as OtpFinishedMsg, KeyMap as OtpKeyMap, Model as OtpView,
        Styles as OtpStyles,
    };
    pub use crate::Component;
}
