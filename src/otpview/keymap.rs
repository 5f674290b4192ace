//! Key bindings for the OTP view.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// KeyMap is the key bindings for the actions available inside the OTP view.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move focus to the cell on the left.
    pub focus_previous: Binding,
    /// Move focus to the cell on the right.
    pub focus_next: Binding,
    /// Clear the focused cell.
    pub delete_character_backward: Binding,
    /// Paste a whole code from the clipboard.
    pub paste: Binding,
}

/// The default set of key bindings for the OTP view.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        focus_previous: new_binding(vec![
            with_keys_str(&["left", "ctrl+b"]),
            with_help("←", "previous cell"),
        ]),
        focus_next: new_binding(vec![
            with_keys_str(&["right", "ctrl+f"]),
            with_help("→", "next cell"),
        ]),
        delete_character_backward: new_binding(vec![
            with_keys_str(&["backspace", "ctrl+h"]),
            with_help("⌫", "delete"),
        ]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"]), with_help("ctrl+v", "paste")]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.focus_previous,
            &self.focus_next,
            &self.delete_character_backward,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.focus_previous, &self.focus_next],
            vec![&self.delete_character_backward, &self.paste],
        ]
    }
}
