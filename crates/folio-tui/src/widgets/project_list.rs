//! Project list — filtered project cards below the filter bar.
//!
//! Each card shows the title, domain and difficulty, the summary, a preview
//! of the tools (collapsed into "+N more" past the configured count), and the
//! outcome line. Search matches in the title and summary are highlighted.

use crate::theme::Theme;
use crate::widgets::{highlight, window_start};
use folio_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Rows a card occupies, including the blank separator.
const CARD_HEIGHT: usize = 6;

pub struct ProjectList<'a> {
    projects: &'a [&'a Project],
    total: usize,
    cursor: usize,
    search_term: &'a str,
    tools_preview: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ProjectList<'a> {
    pub fn new(projects: &'a [&'a Project], total: usize, theme: &'a Theme) -> Self {
        Self {
            projects,
            total,
            cursor: 0,
            search_term: "",
            tools_preview: 3,
            focused: false,
            theme,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn search_term(mut self, term: &'a str) -> Self {
        self.search_term = term;
        self
    }

    pub fn tools_preview(mut self, n: usize) -> Self {
        self.tools_preview = n;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ProjectList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Projects")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                format!("Showing {} of {} projects", self.projects.len(), self.total),
                self.theme.muted,
            )),
            Line::default(),
        ];

        if self.projects.is_empty() {
            lines.push(Line::from(Span::styled(
                "No projects match your filters.",
                self.theme.heading,
            )));
            lines.push(Line::from(Span::styled(
                "Press x to clear the search and selectors.",
                self.theme.muted,
            )));
            Paragraph::new(lines).render(inner, buf);
            return;
        }

        let visible = (inner.height as usize).saturating_sub(2) / CARD_HEIGHT;
        let cursor = self.cursor.min(self.projects.len() - 1);
        let start = window_start(cursor, visible.max(1));

        for (i, project) in self.projects.iter().enumerate().skip(start) {
            lines.extend(card(
                project,
                i == cursor && self.focused,
                self.search_term,
                self.tools_preview,
                self.theme,
            ));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

fn card<'a>(
    project: &'a Project,
    selected: bool,
    term: &str,
    tools_preview: usize,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let marker = if selected { "▶ " } else { "  " };
    let mut title = vec![Span::styled(marker, theme.border_focused)];
    title.extend(highlight(
        &project.title,
        term,
        theme.heading,
        theme.search_highlight,
    ));
    if project.featured {
        title.push(Span::styled("  ★ featured", theme.muted));
    }
    let mut title = Line::from(title);
    if selected {
        title = title.patch_style(ratatui::style::Style::default().add_modifier(Modifier::UNDERLINED));
    }

    let meta = Line::from(vec![
        Span::raw("  "),
        Span::raw(project.domain.as_str()),
        Span::styled(" · ", theme.muted),
        Span::styled(project.difficulty.as_str(), theme.difficulty_style(project.difficulty)),
    ]);

    let mut summary = vec![Span::raw("  ")];
    summary.extend(highlight(
        &project.summary,
        term,
        ratatui::style::Style::default(),
        theme.search_highlight,
    ));

    vec![
        title,
        meta,
        Line::from(summary),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(tools_line(&project.tools, tools_preview), theme.muted),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("✓ {}", project.outcome), theme.success),
        ]),
        Line::default(),
    ]
}

/// First `preview` tools joined with `·`, then `+N more` for the rest.
pub fn tools_line(tools: &[String], preview: usize) -> String {
    let shown = tools.iter().take(preview).map(String::as_str).collect::<Vec<_>>().join(" · ");
    match tools.len().saturating_sub(preview) {
        0 => shown,
        rest => format!("{shown} +{rest} more"),
    }
}
