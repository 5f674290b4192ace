//! View rendering for the OTP view.

use super::config::Config;
use super::model::Model;
use crate::cell::Cell;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

/// Styles used to render the cells.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of an unfocused cell.
    pub cell: Style,
    /// Style of the focused cell.
    pub focused_cell: Style,
    /// Character shown in empty cells.
    pub placeholder: char,
    /// Separator placed between cells.
    pub gap: String,
}

impl Styles {
    /// Builds the cell styles from a configuration.
    ///
    /// A configured background color fills every cell. Without one, the text
    /// color tints each cell's border instead.
    pub fn from_config(config: &Config) -> Self {
        let text_color = Color::from(config.text_color.as_str());
        let base = Style::new()
            .foreground(text_color.clone())
            .padding(0, 1, 0, 1);

        let cell = match config.background_color.as_deref() {
            Some(bg) => base.background(Color::from(bg)),
            None => base
                .border_style(lipgloss::normal_border())
                .border_top(true)
                .border_bottom(true)
                .border_left(true)
                .border_right(true)
                .border_foreground(text_color),
        };
        let focused_cell = cell.clone().bold(true).underline(true);

        Self {
            cell,
            focused_cell,
            placeholder: ' ',
            gap: " ".to_string(),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Model {
    /// View renders the cells side by side.
    pub fn view(&self) -> String {
        let width = self.cell_width();
        let rendered: Vec<String> = self
            .cells
            .iter()
            .map(|cell| self.cell_view(cell, width))
            .collect();

        let mut parts: Vec<&str> = Vec::with_capacity(rendered.len() * 2);
        for (i, cell) in rendered.iter().enumerate() {
            if i > 0 {
                parts.push(&self.styles.gap);
            }
            parts.push(cell);
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // Widest character across the cells so wide glyphs don't break alignment.
    fn cell_width(&self) -> usize {
        self.cells
            .iter()
            .filter_map(Cell::value)
            .chain(std::iter::once(self.styles.placeholder))
            .map(|c| c.width().unwrap_or(1))
            .max()
            .unwrap_or(1)
            .max(1)
    }

    fn cell_view(&self, cell: &Cell, width: usize) -> String {
        let ch = cell.value().unwrap_or(self.styles.placeholder);
        let mut content = ch.to_string();
        let pad = width.saturating_sub(ch.width().unwrap_or(1));
        content.push_str(&" ".repeat(pad));

        let style = if cell.focused() {
            &self.styles.focused_cell
        } else {
            &self.styles.cell
        };
        style.render(&content)
    }
}
