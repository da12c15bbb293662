//! Skills roadmap — roadmap nodes grouped by category, with level badges and
//! project / write-up counters. `Enter` opens the skill behind the selected
//! node.

use crate::theme::Theme;
use folio_core::{derived_counts, Catalog, SkillCategory, SkillNode};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// Roadmap nodes in display order: grouped by category in legend order,
/// catalog order within a group. The cursor indexes into this list.
pub fn roadmap_order(catalog: &Catalog) -> Vec<&SkillNode> {
    SkillCategory::ALL
        .iter()
        .flat_map(|c| catalog.nodes_in(*c))
        .collect()
}

pub struct Roadmap<'a> {
    catalog: &'a Catalog,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Roadmap<'a> {
    pub fn new(catalog: &'a Catalog, cursor: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            catalog,
            cursor,
            focused,
            theme,
        }
    }
}

impl Widget for Roadmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Skills Roadmap")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(2), Constraint::Fill(1), Constraint::Length(3)])
            .split(inner);

        // Legend
        let mut legend = Vec::new();
        for category in SkillCategory::ALL {
            legend.push(Span::styled("■ ", self.theme.category_style(category)));
            legend.push(Span::raw(format!("{}   ", category.label())));
        }
        Paragraph::new(Line::from(legend)).render(chunks[0], buf);

        let order = roadmap_order(self.catalog);
        let cursor = self.cursor.min(order.len().saturating_sub(1));

        let mut lines: Vec<Line> = Vec::new();
        let mut cursor_line = 0;
        let mut idx = 0;
        for category in SkillCategory::ALL {
            let nodes: Vec<&SkillNode> = self.catalog.nodes_in(category).collect();
            if nodes.is_empty() {
                continue;
            }
            lines.push(Line::from(Span::styled(
                category.label(),
                self.theme.category_style(category),
            )));
            for node in nodes {
                if idx == cursor {
                    cursor_line = lines.len();
                }
                lines.push(self.node_line(node, idx == cursor));
                idx += 1;
            }
            lines.push(Line::default());
        }

        let height = chunks[1].height as usize;
        let scroll = (cursor_line + 1).saturating_sub(height) as u16;
        Paragraph::new(lines).scroll((scroll, 0)).render(chunks[1], buf);

        if let Some(node) = order.get(cursor) {
            Paragraph::new(vec![
                Line::from(Span::styled(node.label.as_str(), self.theme.heading)),
                Line::from(Span::styled(node.description.as_str(), self.theme.muted)),
            ])
            .wrap(Wrap { trim: true })
            .render(chunks[2], buf);
        }
    }
}

impl Roadmap<'_> {
    fn node_line<'n>(&self, node: &'n SkillNode, selected: bool) -> Line<'n> {
        let counts = derived_counts(node, self.catalog);
        let marker = if selected { "▶ " } else { "  " };
        let mut label = self.theme.category_style(node.category).remove_modifier(Modifier::BOLD);
        if selected && self.focused {
            label = label.add_modifier(Modifier::REVERSED);
        }
        Line::from(vec![
            Span::styled(marker, self.theme.border_focused),
            Span::styled(format!("{:<22}", node.label), label),
            Span::styled(format!("{:<11}", node.level.to_string()), self.theme.level_style(node.level)),
            Span::styled(
                format!("{} projects · {} write-ups", counts.projects, counts.write_ups),
                self.theme.muted,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_groups_by_category() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = roadmap_order(&catalog).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.roadmap_nodes().len());
        assert_eq!(&ids[..3], &["python", "sql", "r"]);
        assert_eq!(ids.last(), Some(&"finance"));
    }

    #[test]
    fn renders_derived_counts() {
        let catalog = Catalog::builtin();
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 110, 40);
        let mut buf = Buffer::empty(area);
        Roadmap::new(&catalog, 0, true, &theme).render(area, &mut buf);
        let out: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(out.contains("Statistics & Math"), "{out}");
        // `supervised` has a rich skill resolving to three projects
        let supervised = out
            .lines()
            .find(|l| l.contains("Supervised ML"))
            .unwrap_or_default();
        assert!(supervised.contains("3 projects"), "{supervised}");
    }
}
