//! Writing view — post list and post detail.
//!
//! Dates are stored as ISO strings and shown with the configured chrono
//! format; a date that does not parse is shown verbatim.

use crate::theme::Theme;
use crate::widgets::window_start;
use folio_core::Post;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// Rows a post entry occupies, including the blank separator.
const ENTRY_HEIGHT: usize = 5;

pub fn display_date(post: &Post, format: &str) -> String {
    post.published()
        .map(|d| d.format(format).to_string())
        .unwrap_or_else(|| post.date.clone())
}

fn meta_line<'a>(post: &'a Post, date_format: &str, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(display_date(post, date_format), theme.muted),
        Span::styled(format!(" · {} min read  ", post.read_time), theme.muted),
    ];
    for tag in &post.tags {
        spans.push(Span::styled(format!("#{tag} "), theme.tag_style(tag)));
    }
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

pub struct WritingList<'a> {
    posts: &'a [Post],
    cursor: usize,
    date_format: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> WritingList<'a> {
    pub fn new(posts: &'a [Post], cursor: usize, date_format: &'a str, theme: &'a Theme) -> Self {
        Self {
            posts,
            cursor,
            date_format,
            focused: true,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for WritingList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Writing")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.posts.is_empty() {
            Paragraph::new(Span::styled("Nothing published yet.", self.theme.muted))
                .render(inner, buf);
            return;
        }

        let cursor = self.cursor.min(self.posts.len() - 1);
        let start = window_start(cursor, (inner.height as usize / ENTRY_HEIGHT).max(1));
        let mut lines = Vec::new();
        for (i, post) in self.posts.iter().enumerate().skip(start) {
            let selected = i == cursor && self.focused;
            let marker = if selected { "▶ " } else { "  " };
            let mut title = self.theme.heading;
            if selected {
                title = title.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::styled(marker, self.theme.border_focused),
                Span::styled(post.title.as_str(), title),
            ]));
            let mut meta = meta_line(post, self.date_format, self.theme);
            meta.spans.insert(0, Span::raw("  "));
            lines.push(meta);
            lines.push(Line::from(format!("  {}", post.excerpt)));
            lines.push(Line::from(Span::styled("  Read more →", self.theme.muted)));
            lines.push(Line::default());
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

pub struct PostDetail<'a> {
    post: Option<&'a Post>,
    slug: &'a str,
    date_format: &'a str,
    theme: &'a Theme,
}

impl<'a> PostDetail<'a> {
    pub fn new(post: Option<&'a Post>, slug: &'a str, date_format: &'a str, theme: &'a Theme) -> Self {
        Self {
            post,
            slug,
            date_format,
            theme,
        }
    }
}

impl Widget for PostDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self.post.map(|p| p.title.as_str()).unwrap_or("Post");
        let block = Block::bordered()
            .title(format!(" {title} "))
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.post {
            Some(post) => vec![
                meta_line(post, self.date_format, self.theme),
                Line::default(),
                Line::from(post.excerpt.as_str()),
                Line::default(),
                Line::from(Span::styled(
                    "The full article is not part of this portfolio build.",
                    self.theme.muted,
                )),
            ],
            None => vec![Line::from(Span::styled(
                format!("No post named \"{}\".", self.slug),
                self.theme.warning,
            ))],
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
