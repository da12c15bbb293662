//! Home view — hero, headline stats, featured projects, and the bio.

use crate::theme::Theme;
use folio_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct Home<'a> {
    catalog: &'a Catalog,
    /// Index into the featured projects.
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Home<'a> {
    pub fn new(catalog: &'a Catalog, cursor: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            catalog,
            cursor,
            focused,
            theme,
        }
    }
}

impl Widget for Home<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let profile = self.catalog.profile();

        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(7), Constraint::Fill(1), Constraint::Length(6)])
            .split(area);

        // Hero
        let stats: Vec<Span> = profile
            .stats
            .iter()
            .flat_map(|s| {
                [
                    Span::styled(s.value.as_str(), self.theme.heading),
                    Span::styled(format!(" {}    ", s.label), self.theme.muted),
                ]
            })
            .collect();
        Paragraph::new(vec![
            Line::from(Span::styled(profile.name.as_str(), self.theme.heading)),
            Line::from(Span::styled(profile.title.as_str(), self.theme.level_advanced)),
            Line::from(profile.tagline.as_str()),
            Line::default(),
            Line::from(stats),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::bordered().border_style(self.theme.border_unfocused))
        .render(chunks[0], buf);

        // Featured projects
        let featured = self.catalog.featured();
        let cursor = self.cursor.min(featured.len().saturating_sub(1));
        let mut lines = Vec::new();
        for (i, project) in featured.iter().enumerate() {
            let selected = i == cursor && self.focused;
            let marker = if selected { "▶ " } else { "  " };
            let mut title = self.theme.heading;
            if selected {
                title = title.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::styled(marker, self.theme.border_focused),
                Span::styled(project.title.as_str(), title),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", project.summary),
                self.theme.muted,
            )));
            lines.push(Line::default());
        }
        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title("Featured Projects")
                    .border_style(self.theme.border(self.focused)),
            )
            .render(chunks[1], buf);

        // Bio
        Paragraph::new(profile.bio.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title("About")
                    .border_style(self.theme.border_unfocused),
            )
            .render(chunks[2], buf);
    }
}
