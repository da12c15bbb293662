//! Resume view — contact header, technical skills, featured projects, and
//! education.

use crate::theme::Theme;
use folio_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct ResumeView<'a> {
    catalog: &'a Catalog,
    theme: &'a Theme,
}

impl<'a> ResumeView<'a> {
    pub fn new(catalog: &'a Catalog, theme: &'a Theme) -> Self {
        Self { catalog, theme }
    }
}

impl Widget for ResumeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let profile = self.catalog.profile();
        let resume = self.catalog.resume();

        let block = Block::bordered()
            .title("Resume")
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(profile.name.as_str(), self.theme.heading)),
            Line::from(profile.title.as_str()),
            Line::from(Span::styled(
                format!("{} · {} · {}", profile.email, profile.github, profile.linkedin),
                self.theme.muted,
            )),
            Line::default(),
            Line::from(Span::styled("Technical Skills", self.theme.heading)),
        ];
        for group in &resume.skill_groups {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", group.heading), self.theme.level_practiced),
                Span::raw(group.items.join(", ")),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Featured Projects", self.theme.heading)));
        for project in self.catalog.featured() {
            lines.push(Line::from(vec![
                Span::raw(format!("  {}", project.title)),
                Span::styled(format!("  {}", project.tools.join(", ")), self.theme.muted),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    ✓ {}", project.outcome),
                self.theme.success,
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Education", self.theme.heading)));
        for edu in &resume.education {
            lines.push(Line::from(vec![
                Span::raw(format!("  {}", edu.degree)),
                Span::styled(format!(" · {} · {}", edu.school, edu.year), self.theme.muted),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
