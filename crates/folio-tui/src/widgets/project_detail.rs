//! Project detail — the full record behind a project card.

use crate::theme::Theme;
use folio_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct ProjectDetail<'a> {
    project: Option<&'a Project>,
    /// Slug requested, shown when it names no project.
    slug: &'a str,
    theme: &'a Theme,
}

impl<'a> ProjectDetail<'a> {
    pub fn new(project: Option<&'a Project>, slug: &'a str, theme: &'a Theme) -> Self {
        Self {
            project,
            slug,
            theme,
        }
    }
}

impl Widget for ProjectDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(project) = self.project else {
            let block = Block::bordered()
                .title(" Project ")
                .border_style(self.theme.border_focused);
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("No project named \"{}\".", self.slug),
                    self.theme.warning,
                )),
                Line::from(Span::styled("Press Esc to return to the list.", self.theme.muted)),
            ])
            .render(inner, buf);
            return;
        };

        let block = Block::bordered()
            .title(format!(" {} ", project.title))
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::raw(project.domain.as_str()),
                Span::styled(" · ", self.theme.muted),
                Span::styled(
                    project.difficulty.as_str(),
                    self.theme.difficulty_style(project.difficulty),
                ),
            ]),
            Line::default(),
            Line::from(project.summary.as_str()),
            Line::default(),
            Line::from(Span::styled("Methods", self.theme.heading)),
        ];
        lines.extend(project.methods.iter().map(|m| Line::from(format!("  • {m}"))));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Tools", self.theme.heading)));
        lines.push(Line::from(format!("  {}", project.tools.join(" · "))));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Outcome", self.theme.heading)));
        lines.push(Line::from(Span::styled(
            format!("  ✓ {}", project.outcome),
            self.theme.success,
        )));
        if let Some(metrics) = &project.metrics {
            lines.push(Line::from(Span::styled(format!("  {metrics}"), self.theme.muted)));
        }

        let links = project.links();
        if !links.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Links", self.theme.heading)));
            lines.extend(links.into_iter().map(|(label, url)| {
                Line::from(vec![
                    Span::styled(format!("  {label:<9}"), self.theme.muted),
                    Span::raw(url),
                ])
            }));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
