//! Contact view — availability notes beside a three-field form.
//!
//! Submission is simulated: a valid form clears and shows a "message sent"
//! banner until the acknowledgement expires. Validation errors stay on
//! screen until the next edit.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::text_input::TextInput;
use folio_core::{Acknowledgement, ContactError, ContactForm, ContactInfo, Field};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ContactFormState {
    name: TextInput,
    email: TextInput,
    message: TextInput,
    /// Field receiving typed characters.
    pub field: Field,
    pub error: Option<ContactError>,
    pub ack: Option<Acknowledgement>,
}

impl ContactFormState {
    pub fn input(&self, field: Field) -> &TextInput {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn input_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Snapshot of the typed values.
    pub fn form(&self) -> ContactForm {
        ContactForm {
            name: self.name.as_str().to_string(),
            email: self.email.as_str().to_string(),
            message: self.message.as_str().to_string(),
        }
    }

    /// Edit the active field, or move between fields with `Tab`/`Up`/`Down`.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::FocusNext | AppEvent::Nav(Direction::Down) => {
                self.field = self.field.next();
            }
            AppEvent::Nav(Direction::Up) => {
                // Three fields: two steps forward is one step back
                self.field = self.field.next().next();
            }
            other => {
                if self.input_mut(self.field).handle(other) {
                    self.error = None;
                }
            }
        }
    }

    /// Validate and "send". On success the form is cleared and the banner
    /// shows for `show_for`.
    pub fn submit(&mut self, now: Instant, show_for: Duration) {
        match self.form().submit(now, show_for) {
            Ok(ack) => {
                *self = Self {
                    ack: Some(ack),
                    ..Self::default()
                };
            }
            Err(err) => {
                tracing::debug!(error = %err, "contact form rejected");
                self.error = Some(err);
            }
        }
    }

    pub fn ack_visible(&self, now: Instant) -> bool {
        self.ack.is_some_and(|a| a.is_visible(now))
    }

    /// Column/row of the text cursor for the active field within `area`
    /// (the area passed to [`ContactPane`]).
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let form_area = split(area)[1];
        let row = Field::ALL.iter().position(|f| *f == self.field).unwrap_or(0) as u16;
        let x = form_area
            .x
            .saturating_add(1 + LABEL_WIDTH)
            .saturating_add(self.input(self.field).cursor_chars())
            .min(form_area.right().saturating_sub(2));
        (x, form_area.y + 1 + row * 2)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

const LABEL_WIDTH: u16 = 10;

fn split(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Fill(1)])
        .split(area)
}

pub struct ContactPane<'a> {
    info: &'a ContactInfo,
    email: &'a str,
    state: &'a ContactFormState,
    focused: bool,
    now: Instant,
    theme: &'a Theme,
}

impl<'a> ContactPane<'a> {
    pub fn new(
        info: &'a ContactInfo,
        email: &'a str,
        state: &'a ContactFormState,
        focused: bool,
        now: Instant,
        theme: &'a Theme,
    ) -> Self {
        Self {
            info,
            email,
            state,
            focused,
            now,
            theme,
        }
    }
}

impl Widget for ContactPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = split(area);

        Paragraph::new(vec![
            Line::from(self.info.intro.as_str()),
            Line::default(),
            Line::from(Span::styled("Email", self.theme.heading)),
            Line::from(self.email),
            Line::default(),
            Line::from(Span::styled("Response Time", self.theme.heading)),
            Line::from(self.info.response_time.as_str()),
            Line::default(),
            Line::from(Span::styled("Open To", self.theme.heading)),
            Line::from(self.info.open_to.as_str()),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title("Get In Touch")
                .border_style(self.theme.border_unfocused),
        )
        .render(chunks[0], buf);

        let mut lines = Vec::new();
        for field in Field::ALL {
            let active = self.focused && field == self.state.field;
            let label_style = if active {
                self.theme.border_focused
            } else {
                self.theme.muted
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize), label_style),
                Span::raw(self.state.input(field).as_str()),
            ]));
            lines.push(Line::default());
        }

        if self.state.ack_visible(self.now) {
            lines.push(Line::from(Span::styled(
                "✓ Message sent! I'll get back to you soon.",
                self.theme.success,
            )));
        } else if let Some(err) = &self.state.error {
            lines.push(Line::from(Span::styled(format!("✗ {err}"), self.theme.warning)));
        } else if self.focused {
            lines.push(Line::from(Span::styled(
                "Tab next field · Enter send · Esc leave form",
                self.theme.muted,
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Press Enter to write a message",
                self.theme.muted,
            )));
        }

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title("Send a Message")
                    .border_style(self.theme.border(self.focused)),
            )
            .render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_str(state: &mut ContactFormState, s: &str) {
        for c in s.chars() {
            state.handle(&AppEvent::Char(c));
        }
    }

    fn filled() -> ContactFormState {
        let mut s = ContactFormState::default();
        type_str(&mut s, "Ada");
        s.handle(&AppEvent::FocusNext);
        type_str(&mut s, "ada@example.com");
        s.handle(&AppEvent::FocusNext);
        type_str(&mut s, "Hi");
        s
    }

    #[test]
    fn typing_fills_active_field_and_tab_advances() {
        let mut s = ContactFormState::default();
        type_str(&mut s, "Ada");
        s.handle(&AppEvent::FocusNext);
        type_str(&mut s, "ada@example.com");
        assert_eq!(s.form().name, "Ada");
        assert_eq!(s.form().email, "ada@example.com");
        assert_eq!(s.field, Field::Email);
        s.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(s.field, Field::Name);
    }

    #[test]
    fn fields_edit_at_the_cursor() {
        let mut s = ContactFormState::default();
        type_str(&mut s, "Aa");
        s.handle(&AppEvent::Nav(Direction::Left));
        type_str(&mut s, "d");
        assert_eq!(s.form().name, "Ada");
        s.handle(&AppEvent::Nav(Direction::Right));
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.form().name, "Ad");
        assert_eq!(s.input(Field::Name).cursor_chars(), 2);
    }

    #[test]
    fn successful_submit_clears_form_and_shows_ack() {
        let mut s = filled();
        let now = Instant::now();
        s.submit(now, Duration::from_secs(3));
        assert_eq!(s.form(), ContactForm::default());
        assert_eq!(s.field, Field::Name);
        assert!(s.ack_visible(now));
        assert!(!s.ack_visible(now + Duration::from_secs(3)));
    }

    #[test]
    fn failed_submit_keeps_input_and_records_error() {
        let mut s = ContactFormState::default();
        type_str(&mut s, "Ada");
        s.submit(Instant::now(), Duration::from_secs(3));
        assert_eq!(s.form().name, "Ada");
        assert_eq!(s.error, Some(ContactError::MissingField("Email")));
        s.handle(&AppEvent::Char('x'));
        assert!(s.error.is_none());
    }

    #[test]
    fn cursor_saturates_inside_the_form() {
        let mut s = ContactFormState::default();
        type_str(&mut s, &"m".repeat(70_000));
        let area = Rect::new(0, 0, 100, 14);
        let form_area = split(area)[1];
        let (x, y) = s.cursor_position(area);
        assert_eq!(x, form_area.right() - 2);
        assert_eq!(y, form_area.y + 1);
    }

    #[test]
    fn renders_ack_banner() {
        let theme = Theme::load_default();
        let info = ContactInfo::default();
        let mut s = filled();
        let now = Instant::now();
        s.submit(now, Duration::from_secs(3));

        let area = Rect::new(0, 0, 120, 14);
        let mut buf = Buffer::empty(area);
        ContactPane::new(&info, "me@example.com", &s, true, now, &theme).render(area, &mut buf);
        let out: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(out.contains("Message sent!"), "{out}");
    }
}
