//! A single-character input cell.
//!
//! Cells are the building blocks of the OTP view: each one holds at most one
//! character, knows which characters its [`InputKind`] accepts and tracks a
//! cursor position that is either before (0) or after (1) its content.

use std::fmt;

/// Classification of the characters a cell accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Only ASCII digits.
    Number,
    /// Any printable character.
    #[default]
    Text,
}

impl InputKind {
    /// Reports whether a cell of this kind accepts `ch`.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            InputKind::Number => ch.is_ascii_digit(),
            InputKind::Text => !ch.is_control(),
        }
    }

    /// Reports whether every character of `s` is accepted.
    pub fn accepts_all(self, s: &str) -> bool {
        s.chars().all(|c| self.accepts(c))
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Number => write!(f, "number"),
            InputKind::Text => write!(f, "text"),
        }
    }
}

/// What happened to a character offered to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The character was stored.
    Inserted,
    /// The cell was already full; the length filter dropped the character.
    Truncated,
    /// The input kind does not accept the character.
    Refused,
}

/// One single-character slot of the OTP view.
#[derive(Debug, Clone)]
pub struct Cell {
    index: usize,
    value: Option<char>,
    pos: usize,
    kind: InputKind,
    focus: bool,
}

impl Cell {
    /// Creates an empty, unfocused cell.
    pub fn new(index: usize, kind: InputKind) -> Self {
        Self {
            index,
            value: None,
            pos: 0,
            kind,
            focus: false,
        }
    }

    /// Position of the cell in its collection. Stable for the cell's lifetime.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The character held by the cell, if any.
    pub fn value(&self) -> Option<char> {
        self.value
    }

    /// Number of characters in the cell: 0 or 1.
    pub fn len(&self) -> usize {
        usize::from(self.value.is_some())
    }

    /// True when the cell holds no character.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Cursor position within the cell.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The cell's input kind.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Whether the cell currently holds input focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    /// Moves the cursor to the end of the content.
    pub fn cursor_end(&mut self) {
        self.pos = self.len();
    }

    /// Offers a typed character to the cell.
    pub fn input(&mut self, ch: char) -> InputOutcome {
        if !self.kind.accepts(ch) {
            return InputOutcome::Refused;
        }
        if self.value.is_some() {
            return InputOutcome::Truncated;
        }
        self.value = Some(ch);
        self.pos = 1;
        InputOutcome::Inserted
    }

    /// Replaces the content without any filtering or cursor movement.
    pub(crate) fn set_value(&mut self, ch: Option<char>) {
        self.value = ch;
        self.pos = self.pos.min(self.len());
    }

    /// Empties the cell and moves the cursor to 0.
    pub fn clear(&mut self) {
        self.value = None;
        self.pos = 0;
    }
}
