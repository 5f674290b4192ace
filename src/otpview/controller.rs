//! Focus and auto-advance controller.
//!
//! The view's host glue (key handling, programmatic focus) never moves focus on
//! its own: it mutates a cell and reports what happened as an [`Event`]. The
//! controller is the only subscriber. It reacts to
//!
//! * `FocusChanged { has_focus: true }` by recording the cell as focused and
//!   moving its cursor to the end of its content, and to
//! * `TextChanged` by looking at the *focused* cell: a non-empty cell advances
//!   focus to the right, a non-empty last cell completes the code, and an
//!   empty cell with its cursor at 0 retreats focus to the left.
//!
//! Focus requests made while handling an event are queued and handled after
//! the current handler returns, before [`Model::dispatch`] returns.

use super::model::Model;
use crate::cell::Cell;

/// Notifications delivered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A cell gained or lost input focus.
    FocusChanged {
        /// Index of the cell.
        cell: usize,
        /// Whether the cell now has focus.
        has_focus: bool,
    },
    /// The content of a cell was written to, whether or not it changed.
    TextChanged {
        /// Index of the cell.
        cell: usize,
    },
}

/// Index of the cell to the right of `index`, saturating at the last cell.
pub fn right(index: usize, count: usize) -> usize {
    (index + 1).min(count.saturating_sub(1))
}

/// Index of the cell to the left of `index`, saturating at the first cell.
pub fn left(index: usize) -> usize {
    index.saturating_sub(1)
}

impl Model {
    /// Delivers `event` and everything it triggers.
    ///
    /// Returns the composite code when the event sequence completed it.
    pub(super) fn dispatch(&mut self, event: Event) -> Option<String> {
        self.pending.push_back(event);
        self.drain()
    }

    pub(super) fn drain(&mut self) -> Option<String> {
        let mut completed = None;
        while let Some(event) = self.pending.pop_front() {
            tracing::trace!(target: "bubbletea_otp::otpview", ?event, "dispatch");
            match event {
                Event::FocusChanged { cell, has_focus } => self.on_focus_changed(cell, has_focus),
                Event::TextChanged { .. } => {
                    if let Some(code) = self.on_text_changed() {
                        completed = Some(code);
                    }
                }
            }
        }
        completed
    }

    fn on_focus_changed(&mut self, index: usize, has_focus: bool) {
        if !has_focus {
            return;
        }
        if let Some(cell) = self.cells.get_mut(index) {
            cell.cursor_end();
            self.focused = Some(index);
        }
    }

    fn on_text_changed(&mut self) -> Option<String> {
        let Some(index) = self.focused else {
            tracing::debug!(
                target: "bubbletea_otp::otpview",
                "Text changed before any cell was focused"
            );
            return None;
        };
        let count = self.cells.len();
        let cell = &self.cells[index];
        let (len, pos) = (cell.len(), cell.position());

        if len >= 1 && index != count - 1 {
            self.request_focus(right(index, count));
            None
        } else if len >= 1 {
            self.hide_keyboard();
            let code = self.otp();
            tracing::debug!(target: "bubbletea_otp::otpview", id = self.id(), "OTP finished");
            if let Some(on_finished) = self.on_finished.as_mut() {
                on_finished(&code);
            }
            Some(code)
        } else {
            if pos == 0 {
                self.request_focus(left(index));
            }
            None
        }
    }

    /// Moves the host focus to `target`, queueing the focus-changed events.
    ///
    /// Requesting focus for the cell that already has it queues nothing.
    pub(super) fn request_focus(&mut self, target: usize) -> bool {
        if target >= self.cells.len() || self.cells[target].focused() {
            return false;
        }
        if let Some(prev) = self.cells.iter().position(Cell::focused) {
            self.cells[prev].set_focus(false);
            self.pending.push_back(Event::FocusChanged {
                cell: prev,
                has_focus: false,
            });
        }
        self.cells[target].set_focus(true);
        self.pending.push_back(Event::FocusChanged {
            cell: target,
            has_focus: true,
        });
        tracing::debug!(target: "bubbletea_otp::otpview", cell = target, "focus requested");
        true
    }

    pub(super) fn hide_keyboard(&mut self) {
        self.keyboard_visible = false;
    }

    pub(super) fn show_keyboard(&mut self) {
        self.keyboard_visible = true;
    }
}
