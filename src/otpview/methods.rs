//! Public operations and message handling for the OTP view.

use super::controller::{left, right, Event};
use super::error::{Error, Result};
use super::model::{paste, Model};
use super::types::{FinishedFunc, FinishedMsg, PasteErrMsg, PasteMsg};
use crate::cell::{Cell, InputKind, InputOutcome};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// Code length reported as valid by [`Model::is_valid`], whatever the cell count.
pub const VALID_OTP_LENGTH: usize = 4;

impl Model {
    /// Returns the code entered so far: every cell's character, in order.
    ///
    /// Empty cells contribute nothing, so the result may be shorter than the
    /// cell count.
    pub fn otp(&self) -> String {
        self.cells.iter().filter_map(Cell::value).collect()
    }

    /// Reports whether the code is exactly [`VALID_OTP_LENGTH`] characters long.
    ///
    /// This does not depend on the cell count: a five-cell view is never
    /// valid. Use [`is_complete`](Model::is_complete) to check that every cell
    /// is filled.
    pub fn is_valid(&self) -> bool {
        self.otp().chars().count() == VALID_OTP_LENGTH
    }

    /// Reports whether every cell holds a character.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Sets the code, one character per cell.
    ///
    /// This is cosmetic: focus does not move and the completion callback does
    /// not run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] when `otp` does not have one character
    /// per cell, and [`Error::InputKindMismatch`] when the cells are numeric and
    /// `otp` contains anything but digits. In both cases no cell is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_otp::otpview::{Config, Error, Model};
    ///
    /// let mut otp = Model::with_config(Config::new().with_cell_count(4)).unwrap();
    /// assert!(matches!(otp.set_otp("12"), Err(Error::InvalidLength { .. })));
    /// assert_eq!(otp.otp(), "");
    ///
    /// otp.set_otp("ab12").unwrap();
    /// assert_eq!(otp.otp(), "ab12");
    /// ```
    pub fn set_otp(&mut self, otp: &str) -> Result<()> {
        let actual = otp.chars().count();
        if actual != self.cells.len() {
            let err = Error::InvalidLength {
                expected: self.cells.len(),
                actual,
            };
            tracing::error!(target: "bubbletea_otp::otpview", "{}", err);
            return Err(err);
        }
        if self.input_kind == InputKind::Number && !InputKind::Number.accepts_all(otp) {
            let err = Error::InputKindMismatch {
                kind: self.input_kind,
            };
            tracing::error!(target: "bubbletea_otp::otpview", "{}", err);
            return Err(err);
        }
        for (cell, ch) in self.cells.iter_mut().zip(otp.chars()) {
            cell.set_value(Some(ch));
        }
        Ok(())
    }

    /// Registers the callback run with the composite code when the last cell
    /// is filled while it holds focus. Replaces any previous callback.
    pub fn set_on_otp_finished(&mut self, on_finished: FinishedFunc) {
        self.on_finished = Some(on_finished);
    }

    /// Makes the cells display-only.
    ///
    /// Navigation between cells keeps working, but the keyboard is hidden
    /// after every move and typed characters and deletions are dropped.
    pub fn disable_keypad(&mut self) {
        self.keypad_enabled = false;
        self.hide_keyboard();
    }

    /// Accepts edits again and lets navigation bring the keyboard back.
    pub fn enable_keypad(&mut self) {
        self.keypad_enabled = true;
    }

    /// Whether the keypad is enabled.
    pub fn keypad_enabled(&self) -> bool {
        self.keypad_enabled
    }

    /// Whether the keyboard is shown. It is hidden on completion and in
    /// display-only mode.
    pub fn keyboard_visible(&self) -> bool {
        self.keyboard_visible
    }

    /// Index of the cell that last gained focus, if any has.
    pub fn focused_cell(&self) -> Option<usize> {
        self.focused
    }

    /// The cell that last gained focus, if any has.
    pub fn current_focused_cell(&self) -> Option<&Cell> {
        self.focused.and_then(|i| self.cells.get(i))
    }

    /// All cells, left to right.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells. Fixed at construction.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The input kind shared by all cells.
    pub fn input_kind(&self) -> InputKind {
        self.input_kind
    }

    /// Clears the focused cell as a delete key would.
    ///
    /// The change is reported like any other edit, so an emptied cell hands
    /// focus to the cell on its left.
    pub fn simulate_delete_press(&mut self) {
        let Some(index) = self.focused.filter(|&i| i < self.cells.len()) else {
            return;
        };
        self.cells[index].clear();
        self.dispatch(Event::TextChanged { cell: index });
    }

    /// Moves focus to the cell at `index`, as if it had been tapped.
    ///
    /// With the keypad enabled this also brings the keyboard back; with it
    /// disabled the keyboard is hidden. Out-of-range indices are ignored.
    pub fn focus_cell(&mut self, index: usize) {
        if index >= self.cells.len() {
            tracing::debug!(
                target: "bubbletea_otp::otpview",
                "Ignoring focus request for cell {} of {}",
                index,
                self.cells.len()
            );
            return;
        }
        if self.request_focus(index) {
            self.drain();
        }
        if self.keypad_enabled {
            self.show_keyboard();
        } else {
            self.hide_keyboard();
        }
    }

    /// Processes a message and updates the view.
    ///
    /// Key messages are only handled while a cell has focus. Paste messages
    /// are applied through [`set_otp`](Model::set_otp) at any time.
    ///
    /// # Returns
    ///
    /// A command producing a [`FinishedMsg`] when the message completed the
    /// code, or the clipboard read command when the paste binding was pressed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_otp::otpview::new;
    /// use bubbletea_otp::Component;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut otp = new();
    /// otp.focus();
    /// otp.update(Box::new(KeyMsg {
    ///     key: KeyCode::Char('7'),
    ///     modifiers: KeyModifiers::NONE,
    /// }));
    /// assert_eq!(otp.otp(), "7");
    /// assert_eq!(otp.focused_cell(), Some(1));
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.err = self.set_otp(&paste_msg.0).err().map(|e| e.to_string());
            return None;
        }
        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
            return None;
        }

        if !self.focused() {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if matches_binding(key_msg, &self.key_map.paste) {
            return Some(paste());
        }
        if self.handle_navigation_keys(key_msg) {
            return None;
        }
        // Display-only mode drops edits. A hidden keyboard does not: keys
        // from a physical keyboard still reach the cells.
        if !self.keypad_enabled {
            return None;
        }

        let completed = self.handle_edit_keys(key_msg)?;
        Some(self.finished_cmd(completed))
    }

    fn handle_navigation_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let current = self.focused.unwrap_or(0);
        if matches_binding(key_msg, &self.key_map.focus_previous) {
            self.focus_cell(left(current));
        } else if matches_binding(key_msg, &self.key_map.focus_next) {
            self.focus_cell(right(current, self.cells.len()));
        } else {
            return false;
        }
        true
    }

    /// Applies a delete or typed character to the focused cell and reports
    /// the change. Returns the code if that completed it.
    fn handle_edit_keys(&mut self, key_msg: &KeyMsg) -> Option<String> {
        let index = self.focused?;

        if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            self.simulate_delete_press();
            return None;
        }

        let KeyCode::Char(ch) = key_msg.key else {
            return None;
        };
        if key_msg.modifiers.contains(KeyModifiers::CONTROL)
            || key_msg.modifiers.contains(KeyModifiers::ALT)
        {
            return None;
        }
        match self.cells[index].input(ch) {
            InputOutcome::Refused => None,
            InputOutcome::Inserted | InputOutcome::Truncated => {
                self.dispatch(Event::TextChanged { cell: index })
            }
        }
    }

    fn finished_cmd(&self, code: String) -> Cmd {
        let id = self.id();
        Box::pin(async move { Some(Box::new(FinishedMsg { id, code }) as Msg) })
    }
}

impl Component for Model {
    /// Gives focus to the cell that last had it, or the first cell, and shows
    /// the keyboard when the keypad is enabled.
    fn focus(&mut self) -> Option<Cmd> {
        self.focus_cell(self.focused.unwrap_or(0));
        None
    }

    /// Removes focus from every cell and hides the keyboard. The last focused
    /// cell is remembered for the next [`focus`](Component::focus).
    fn blur(&mut self) {
        if let Some(index) = self.cells.iter().position(Cell::focused) {
            self.cells[index].set_focus(false);
            self.dispatch(Event::FocusChanged {
                cell: index,
                has_focus: false,
            });
        }
        self.hide_keyboard();
    }

    fn focused(&self) -> bool {
        self.cells.iter().any(Cell::focused)
    }
}
