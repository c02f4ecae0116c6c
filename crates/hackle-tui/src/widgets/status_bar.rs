//! Status bar widget — the 1-line strip at the bottom of the screen.
//!
//! Shows, left to right:
//!   * a fetch indicator while a request for the committed search term is
//!     pending (`⟳ fetching…`), or the last fetch error if it failed,
//!   * right-aligned hints for the load-more and search bindings.

use crate::theme::Theme;
use hackle_core::SearchError;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    loading: bool,
    error: Option<&'a SearchError>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(loading: bool, error: Option<&'a SearchError>, theme: &'a Theme) -> Self {
        Self { loading, error, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.loading {
            buf.set_string(area.x + 1, area.y, "⟳ fetching…", self.theme.status_loading);
        } else if let Some(error) = self.error {
            let text = format!("✗ {}", error);
            buf.set_string(area.x + 1, area.y, text, self.theme.status_error);
        }

        let hint = " m:more  /:search  t/a/c/p:sort ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
