//! Skill detail — theory summary, key concepts, common pitfalls, and the
//! projects the skill was applied in.
//!
//! Keys without a rich skill record render the catalog's default skill, with
//! a note saying so.

use crate::theme::Theme;
use crate::widgets::window_start;
use folio_core::{resolve_projects, Catalog, Project, Skill};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// The skill a detail view for `key` displays, and the projects it lists.
pub fn skill_with_projects<'c>(catalog: &'c Catalog, key: &str) -> (&'c Skill, Vec<&'c Project>) {
    let skill = catalog.skill_or_default(key);
    (skill, resolve_projects(skill, catalog.projects()))
}

pub struct SkillDetail<'a> {
    catalog: &'a Catalog,
    key: &'a str,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SkillDetail<'a> {
    pub fn new(catalog: &'a Catalog, key: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            catalog,
            key,
            cursor,
            focused: true,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SkillDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (skill, projects) = skill_with_projects(self.catalog, self.key);

        let block = Block::bordered()
            .title(format!(" {} ", skill.title))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Fill(1)])
            .split(inner);

        let mut theory: Vec<Line> = Vec::new();
        if self.catalog.skill(self.key).is_none() {
            theory.push(Line::from(Span::styled(
                format!("No write-up for \"{}\" yet, showing {}.", self.key, skill.title),
                self.theme.muted,
            )));
            theory.push(Line::default());
        }
        theory.push(Line::from(vec![
            Span::styled("Level: ", self.theme.muted),
            Span::styled(skill.level.to_string(), self.theme.level_style(skill.level)),
        ]));
        theory.push(Line::default());
        theory.push(Line::from(Span::styled("Theory", self.theme.heading)));
        theory.push(Line::from(skill.theory.summary.as_str()));
        theory.push(Line::default());
        theory.push(Line::from(Span::styled("Key Concepts", self.theme.heading)));
        theory.extend(
            skill
                .theory
                .concepts
                .iter()
                .map(|c| Line::from(format!("  • {c}"))),
        );
        theory.push(Line::default());
        theory.push(Line::from(Span::styled("Common Pitfalls", self.theme.heading)));
        theory.extend(
            skill
                .theory
                .pitfalls
                .iter()
                .map(|p| Line::from(Span::styled(format!("  ⚠ {p}"), self.theme.warning))),
        );
        Paragraph::new(theory)
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        let mut applied: Vec<Line> = vec![
            Line::from(Span::styled("Applied In", self.theme.heading)),
            Line::default(),
        ];
        if projects.is_empty() {
            applied.push(Line::from(Span::styled("No linked projects.", self.theme.muted)));
        }
        let cursor = self.cursor.min(projects.len().saturating_sub(1));
        let visible = (chunks[1].height as usize).saturating_sub(2) / 3;
        let start = window_start(cursor, visible.max(1));
        for (i, project) in projects.iter().enumerate().skip(start) {
            let selected = i == cursor && self.focused;
            let marker = if selected { "▶ " } else { "  " };
            let mut title = self.theme.heading;
            if selected {
                title = title.add_modifier(Modifier::REVERSED);
            }
            applied.push(Line::from(vec![
                Span::styled(marker, self.theme.border_focused),
                Span::styled(project.title.as_str(), title),
            ]));
            applied.push(Line::from(Span::styled(
                format!("  {} · {}", project.domain, project.difficulty),
                self.theme.difficulty_style(project.difficulty),
            )));
            applied.push(Line::default());
        }
        Paragraph::new(applied).render(chunks[1], buf);
    }
}
