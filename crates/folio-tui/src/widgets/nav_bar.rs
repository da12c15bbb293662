//! Navigation bar — the strip of top-level views at the top of the screen.

use crate::theme::Theme;
use folio_core::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Renders the 1-line strip of top-level views.
///
/// The tab owning the current view is highlighted, so a detail view lights
/// up its list's tab. Keybinding hints (`q:quit  ?:help`) are right-aligned
/// in the same row.
pub struct NavBar<'a> {
    view: &'a View,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(view: &'a View, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = View::NAV
            .iter()
            .enumerate()
            .map(|(i, v)| Line::from(format!(" {}:{} ", i + 1, v.label())))
            .collect();

        Tabs::new(labels)
            .select(self.view.nav_index())
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("")
            .render(area, buf);

        let hint = if self.view.is_detail() {
            " esc:back  ?:help "
        } else {
            " q:quit  ?:help "
        };
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, self.theme.muted);
    }
}
