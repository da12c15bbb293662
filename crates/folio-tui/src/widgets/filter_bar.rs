//! Filter bar — search box plus domain and difficulty selectors above the
//! project list.
//!
//! The selections live here for the whole session; switching views does not
//! reset them. [`FilterBarState::criteria`] turns them into the value the
//! query layer consumes.

use crate::theme::Theme;
use crate::widgets::text_input::TextInput;
use folio_core::{DifficultyFilter, DomainFilter, FilterCriteria};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FilterBarState {
    pub search: TextInput,
    pub domain: DomainFilter,
    pub difficulty: DifficultyFilter,
}

impl FilterBarState {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.search.as_str(),
            self.domain.clone(),
            self.difficulty,
        )
    }

    /// Advance the domain selector through `all` then each of `domains`.
    pub fn cycle_domain(&mut self, domains: &[&str]) {
        let current = match &self.domain {
            DomainFilter::All => 0,
            DomainFilter::Is(d) => domains
                .iter()
                .position(|x| x == d)
                .map(|i| i + 1)
                .unwrap_or(0),
        };
        let next = (current + 1) % (domains.len() + 1);
        self.domain = match next {
            0 => DomainFilter::All,
            i => DomainFilter::Is(domains[i - 1].to_string()),
        };
        tracing::debug!(domain = %self.domain, "filter: domain cycled");
    }

    pub fn cycle_difficulty(&mut self) {
        let options = DifficultyFilter::OPTIONS;
        let current = options
            .iter()
            .position(|o| *o == self.difficulty)
            .unwrap_or(0);
        self.difficulty = options[(current + 1) % options.len()];
        tracing::debug!(difficulty = %self.difficulty, "filter: difficulty cycled");
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.domain = DomainFilter::All;
        self.difficulty = DifficultyFilter::All;
        tracing::debug!("filter: cleared");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct FilterBar<'a> {
    state: &'a FilterBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    pub fn new(state: &'a FilterBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(self.state.search.cursor_chars())
            .min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(48)])
            .split(inner);

        let query_line = if self.state.search.text.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search projects",
                self.theme.muted,
            ))
        } else {
            Line::from(self.state.search.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        let selectors = Line::from(vec![
            Span::styled("d ", self.theme.muted),
            Span::raw(format!("domain:[{}] ", self.state.domain)),
            Span::styled("f ", self.theme.muted),
            Span::raw(format!("level:[{}]", self.state.difficulty)),
        ]);
        Paragraph::new(selectors)
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
