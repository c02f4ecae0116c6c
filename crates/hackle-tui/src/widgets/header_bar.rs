//! Header bar widget — renders the 1-line app title strip at the top.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

/// Renders `hackle` plus the committed search term at the top of the screen.
///
/// Keybinding hints (`q:quit  ?:help`) are right-aligned in the same row.
pub struct HeaderBar<'a> {
    search_key: &'a str,
    _theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    pub fn new(search_key: &'a str, theme: &'a Theme) -> Self {
        Self { search_key, _theme: theme }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_string(
            area.x,
            area.y,
            " hackle ",
            Style::default()
                .bg(ratatui::style::Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        if !self.search_key.is_empty() {
            buf.set_string(
                area.x + 9,
                area.y,
                format!("» {}", self.search_key),
                Style::default(),
            );
        }

        // Keybinding hints at the right edge
        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
