//! Ratatui widgets for the folio TUI.

pub mod command_bar;
pub mod contact_form;
pub mod filter_bar;
pub mod help;
pub mod home;
pub mod nav_bar;
pub mod project_detail;
pub mod project_list;
pub mod resume;
pub mod roadmap;
pub mod skill_detail;
pub mod text_input;
pub mod writing;

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
};

/// Split `text` into spans, applying `hl` to every case-insensitive
/// occurrence of `term` and `base` to the rest.
///
/// Text whose lowercase form changes byte length is returned unhighlighted,
/// since match offsets would not map back onto it.
pub fn highlight<'a>(text: &'a str, term: &str, base: Style, hl: Style) -> Vec<Span<'a>> {
    if term.is_empty() {
        return vec![Span::styled(text, base)];
    }
    let haystack = text.to_lowercase();
    let needle = term.to_lowercase();
    if haystack.len() != text.len() {
        return vec![Span::styled(text, base)];
    }

    let mut spans = Vec::new();
    let mut last = 0;
    for (start, _) in haystack.match_indices(&needle) {
        let end = start + needle.len();
        if start < last || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            continue;
        }
        if start > last {
            spans.push(Span::styled(&text[last..start], base));
        }
        spans.push(Span::styled(&text[start..end], hl));
        last = end;
    }
    if last < text.len() {
        spans.push(Span::styled(&text[last..], base));
    }
    spans
}

/// First item index to draw so that `cursor` stays inside a window of
/// `visible` items.
pub fn window_start(cursor: usize, visible: usize) -> usize {
    cursor.saturating_sub(visible.saturating_sub(1))
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
