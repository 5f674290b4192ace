//! Core model for the OTP view.

use super::config::Config;
use super::controller::Event;
use super::error::Result;
use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{FinishedFunc, PasteErrMsg};
use super::view::Styles;
use crate::cell::{Cell, InputKind};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Used to tell apart FinishedMsgs coming from different views.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

/// A segmented one-time-password input.
///
/// The view owns a fixed row of single-character [`Cell`]s that behave as one
/// input. Typing a character into a cell moves focus to the next one, deleting
/// the content of a cell moves focus back, and filling the last cell completes
/// the code: the keyboard is hidden, the completion callback runs and
/// [`update`](Model::update) returns a command producing a
/// [`FinishedMsg`](super::FinishedMsg).
///
/// # Examples
///
/// ```rust
/// use bubbletea_otp::otpview::{Config, Model};
/// use bubbletea_otp::{Component, InputKind};
///
/// let config = Config::new()
///     .with_cell_count(4)
///     .with_input_kind(InputKind::Number);
/// let mut otp = Model::with_config(config).unwrap();
/// otp.focus();
///
/// otp.set_on_otp_finished(Box::new(|code: &str| {
///     println!("entered {code}");
/// }));
///
/// otp.set_otp("4821").unwrap();
/// assert_eq!(otp.otp(), "4821");
/// assert!(otp.is_valid());
/// ```
pub struct Model {
    /// Err holds the last paste error, if any.
    pub err: Option<String>,

    /// Styles used to render the cells.
    pub styles: Styles,

    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    pub(super) cells: Vec<Cell>,
    pub(super) input_kind: InputKind,

    /// The cell that last gained focus. Written only by the focus-changed handler.
    pub(super) focused: Option<usize>,

    pub(super) on_finished: Option<FinishedFunc>,
    pub(super) keypad_enabled: bool,
    pub(super) keyboard_visible: bool,
    pub(super) pending: VecDeque<Event>,

    id: usize,
}

/// Creates a view with the default configuration: five free-text cells.
///
/// # Examples
///
/// ```rust
/// use bubbletea_otp::otpview::new;
///
/// let otp = new();
/// assert_eq!(otp.cell_count(), 5);
/// assert_eq!(otp.otp(), "");
/// ```
pub fn new() -> Model {
    Model::build(&Config::default(), super::config::DEFAULT_CELL_COUNT as usize)
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Creates a view from `config`.
    ///
    /// The cell count and styles are fixed from here on. A pre-fill is applied
    /// only when it is exactly one character shorter than the cell count and
    /// every character suits the input kind; otherwise it is ignored with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCellCount`](super::Error::InvalidCellCount) when
    /// the configured count is below one.
    pub fn with_config(config: Config) -> Result<Self> {
        let count = config.validated_cell_count()?;
        let mut m = Self::build(&config, count);
        if let Some(text) = config.prefill.as_deref().filter(|t| !t.is_empty()) {
            m.apply_prefill(text);
        }
        Ok(m)
    }

    fn build(config: &Config, count: usize) -> Self {
        Self {
            err: None,
            styles: Styles::from_config(config),
            key_map: default_key_map(),
            cells: (0..count)
                .map(|i| Cell::new(i, config.input_kind))
                .collect(),
            input_kind: config.input_kind,
            focused: None,
            on_finished: None,
            keypad_enabled: true,
            keyboard_visible: false,
            pending: VecDeque::new(),
            id: next_id(),
        }
    }

    // The length check is one short of the cell count, so at most the first
    // N-1 cells are ever pre-filled.
    fn apply_prefill(&mut self, text: &str) {
        let len = text.chars().count();
        if len != self.cells.len() - 1 {
            tracing::warn!(
                target: "bubbletea_otp::otpview",
                "Ignoring prefill of length {} for {} cells",
                len,
                self.cells.len()
            );
            return;
        }
        if !self.input_kind.accepts_all(text) {
            tracing::warn!(
                target: "bubbletea_otp::otpview",
                "Ignoring prefill that doesn't match input type '{}'",
                self.input_kind
            );
            return;
        }
        for (cell, ch) in self.cells.iter_mut().zip(text.chars()) {
            cell.set_value(Some(ch));
        }
    }

    /// Process-unique id of this view, carried by its `FinishedMsg`s.
    pub fn id(&self) -> usize {
        self.id
    }
}

/// Creates a command that reads a code from the system clipboard.
///
/// The command produces a [`PasteMsg`](super::PasteMsg) on success or a
/// [`PasteErrMsg`] on failure; feeding either back into
/// [`Model::update`] applies it.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: std::result::Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s.trim().to_string())) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
