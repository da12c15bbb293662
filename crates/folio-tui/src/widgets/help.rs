//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use crate::widgets::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit (or leave a detail view)"),
    ("Tab  /  Shift+Tab", "Next / previous view"),
    ("1 … 6", "Jump to Home, Roadmap, Projects, Writing, Resume, Contact"),
    ("↑ k  /  ↓ j", "Move the selection"),
    ("Enter", "Open the selection / write a message"),
    ("Esc  /  ← h", "Back to the list"),
    ("/", "Search projects"),
    ("d", "Cycle the domain filter"),
    ("f", "Cycle the difficulty filter"),
    ("x", "Clear search and filters"),
    (":", "Command line (:help for commands)"),
    ("?", "Toggle this help popup"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":open <view>", "home, roadmap, projects, writing, resume, contact"),
    (":skill <key>  :project <slug>", "Open a detail view"),
    (":search <text>", "Set the project search"),
    (":domain <name|all>", "Set the domain filter"),
    (":difficulty <level|all>", "Set the difficulty filter"),
    (":clear  :theme <name>  :q", "Reset filters / switch theme / quit"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (BINDINGS.len() + COMMANDS.len() + 4) as u16;
        let popup = centered_rect(90, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" folio — keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = self.theme.heading.add_modifier(Modifier::BOLD);
        let row = |(key, desc): &(&'static str, &'static str)| {
            Line::from(vec![
                Span::styled(format!("  {:<32}", key), key_style),
                Span::raw(*desc),
            ])
        };

        let mut lines: Vec<Line> = BINDINGS.iter().map(row).collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("  Commands", self.theme.muted)));
        lines.extend(COMMANDS.iter().map(row));

        Paragraph::new(lines).render(inner, buf);
    }
}
