//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. [`App::handle`] and
//! [`draw`] are public so the shell can be driven headlessly in tests.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        contact_form::{ContactFormState, ContactPane},
        filter_bar::{FilterBar, FilterBarState},
        help::HelpPopup,
        home::Home,
        nav_bar::NavBar,
        project_detail::ProjectDetail,
        project_list::ProjectList,
        resume::ResumeView,
        roadmap::{roadmap_order, Roadmap},
        skill_detail::{skill_with_projects, SkillDetail},
        writing::{PostDetail, WritingList},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{filter_projects, Catalog, Config, Project, View};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Lists and detail views.
    Body,
    /// Project search box.
    Search,
    /// Vim-style `:` command line is active.
    Command,
    /// Contact form fields.
    Form,
}

/// Selection index of every list view. Kept across navigation so returning
/// from a detail view lands on the same entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursors {
    pub home: usize,
    pub roadmap: usize,
    pub projects: usize,
    pub skill: usize,
    pub writing: usize,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub catalog: Catalog,
    pub view: View,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub filter: FilterBarState,
    pub cursors: Cursors,
    pub contact: ContactFormState,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    /// Projects passing the current filter selections, catalog order.
    pub fn filtered(&self) -> Vec<&Project> {
        filter_projects(self.catalog.projects(), &self.filter.criteria())
    }

    pub fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        tracing::debug!(from = ?self.view, to = ?view, "navigate");
        if matches!(view, View::SkillDetail { .. }) {
            self.cursors.skill = 0;
        }
        self.view = view;
        self.focus = Focus::Body;
    }

    /// Return from a detail view to its list. No-op on top-level views.
    pub fn back(&mut self) {
        let parent = self.view.parent();
        self.navigate(parent);
    }

    /// `q` semantics: leave a detail view, or quit from a top-level view.
    pub fn quit_or_back(&mut self) {
        if self.view.is_detail() {
            self.back();
        } else {
            tracing::debug!("quit");
            self.quit = true;
        }
    }

    /// Call after any change to the search text or selectors.
    pub fn filters_changed(&mut self) {
        self.cursors.projects = 0;
        let criteria = self.filter.criteria();
        tracing::debug!(
            search = %criteria.search_term,
            domain = %criteria.domain,
            difficulty = %criteria.difficulty,
            matches = self.filtered().len(),
            "filters changed"
        );
    }

    /// Number of selectable entries in the current view.
    fn list_len(&self) -> usize {
        match &self.view {
            View::Home => self.catalog.featured().len(),
            View::Roadmap => self.catalog.roadmap_nodes().len(),
            View::Projects => self.filtered().len(),
            View::SkillDetail { key } => skill_with_projects(&self.catalog, key).1.len(),
            View::Writing => self.catalog.posts().len(),
            _ => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.view {
            View::Home => Some(&mut self.cursors.home),
            View::Roadmap => Some(&mut self.cursors.roadmap),
            View::Projects => Some(&mut self.cursors.projects),
            View::SkillDetail { .. } => Some(&mut self.cursors.skill),
            View::Writing => Some(&mut self.cursors.writing),
            _ => None,
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let len = self.list_len();
        if let Some(cursor) = self.cursor_mut() {
            let current = (*cursor).min(len.saturating_sub(1));
            *cursor = if down {
                (current + 1).min(len.saturating_sub(1))
            } else {
                current.saturating_sub(1)
            };
        }
    }

    /// The view `Enter` leads to from the current selection.
    fn selection_target(&self) -> Option<View> {
        let c = &self.cursors;
        match &self.view {
            View::Home => self
                .catalog
                .featured()
                .get(c.home)
                .map(|p| View::project(p.slug.as_str())),
            View::Roadmap => roadmap_order(&self.catalog)
                .get(c.roadmap)
                .map(|n| View::skill(n.id.as_str())),
            View::Projects => self
                .filtered()
                .get(c.projects)
                .map(|p| View::project(p.slug.as_str())),
            View::SkillDetail { key } => skill_with_projects(&self.catalog, key)
                .1
                .get(c.skill)
                .map(|p| View::project(p.slug.as_str())),
            View::Writing => self
                .catalog
                .posts()
                .get(c.writing)
                .map(|p| View::post(p.slug.as_str())),
            _ => None,
        }
    }

    fn open_selection(&mut self) {
        if self.view == View::Contact {
            tracing::debug!("focus -> Form");
            self.focus = Focus::Form;
            return;
        }
        if let Some(target) = self.selection_target() {
            self.navigate(target);
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(catalog: Catalog, config: Config, theme: Theme) -> Self {
        let state = AppState {
            catalog,
            view: View::Home,
            focus: Focus::Body,
            prev_focus: Focus::Body,
            filter: FilterBarState::default(),
            cursors: Cursors::default(),
            contact: ContactFormState::default(),
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };
        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text input is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match s.focus {
            Focus::Command => handle_command_mode(s, event),
            Focus::Search => handle_search_mode(s, event),
            Focus::Form => handle_form_mode(s, event),
            Focus::Body => handle_body(s, event),
        }
    }
}

/// Returns true when the current focus is on a text input, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Command | Focus::Form)
}

fn handle_command_mode(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape => {
            tracing::debug!("command bar cancelled");
            s.command_bar.clear();
            s.focus = s.prev_focus;
        }
        AppEvent::Enter => {
            let input = s.command_bar.input.as_str().to_string();
            match Command::parse(&input) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "executing command");
                    s.focus = s.prev_focus;
                    match execute_command(s, cmd) {
                        Ok(()) => s.command_bar.clear(),
                        Err(msg) => {
                            // Keep the bar open with the error
                            s.focus = Focus::Command;
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                Err(msg) if msg.is_empty() => {
                    // Empty input closes the bar
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                Err(msg) => {
                    s.command_bar.error = Some(msg);
                }
            }
        }
        AppEvent::Quit => s.quit = true,
        other => s.command_bar.handle(&other),
    }
}

fn handle_search_mode(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape
        | AppEvent::Enter
        | AppEvent::FocusNext
        | AppEvent::Nav(Direction::Up)
        | AppEvent::Nav(Direction::Down) => {
            tracing::debug!("focus: Search -> Body");
            s.focus = Focus::Body;
        }
        AppEvent::Quit => s.quit = true,
        other => {
            if s.filter.search.handle(&other) {
                s.filters_changed();
            }
        }
    }
}

fn handle_form_mode(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape => {
            tracing::debug!("focus: Form -> Body");
            s.focus = Focus::Body;
        }
        AppEvent::Enter => {
            let show_for = s.config.ui.contact_ack();
            s.contact.submit(Instant::now(), show_for);
        }
        AppEvent::Quit => s.quit = true,
        other => s.contact.handle(&other),
    }
}

fn handle_body(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Char('?') => {
            tracing::debug!("help popup opened");
            s.show_help = true;
        }

        // Enter command mode with `:`
        AppEvent::Char(':') => {
            tracing::debug!(prev_focus = ?s.focus, "entering command mode");
            s.prev_focus = s.focus;
            s.command_bar.clear();
            s.focus = Focus::Command;
        }

        AppEvent::Quit => s.quit_or_back(),

        AppEvent::Escape | AppEvent::Backspace | AppEvent::Nav(Direction::Left) => s.back(),

        AppEvent::NextView | AppEvent::PrevView => {
            let n = View::NAV.len();
            let current = s.view.nav_index();
            let next = if event == AppEvent::NextView {
                (current + 1) % n
            } else {
                (current + n - 1) % n
            };
            s.navigate(View::NAV[next].clone());
        }

        AppEvent::JumpView(i) => {
            if let Some(view) = View::NAV.get(i) {
                s.navigate(view.clone());
            }
        }

        AppEvent::SearchFocus => {
            s.navigate(View::Projects);
            tracing::debug!("focus -> Search");
            s.focus = Focus::Search;
        }

        // Selectors only act where they are visible
        AppEvent::CycleDomain if s.view == View::Projects => {
            let domains = s.catalog.domains();
            s.filter.cycle_domain(&domains);
            s.filters_changed();
        }
        AppEvent::CycleDifficulty if s.view == View::Projects => {
            s.filter.cycle_difficulty();
            s.filters_changed();
        }
        AppEvent::ClearFilters if s.view == View::Projects => {
            s.filter.clear();
            s.filters_changed();
        }

        AppEvent::Nav(Direction::Up) => s.move_cursor(false),
        AppEvent::Nav(Direction::Down) => s.move_cursor(true),
        AppEvent::Nav(Direction::Right) | AppEvent::Enter => s.open_selection(),

        // Terminal resize is handled automatically by ratatui
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = &state.theme;
    let body_focused = state.focus == Focus::Body;

    // Vertical: 1-line nav bar | body
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);
    let body = vert[1];

    frame.render_widget(NavBar::new(&state.view, theme), vert[0]);

    match &state.view {
        View::Home => frame.render_widget(
            Home::new(&state.catalog, state.cursors.home, body_focused, theme),
            body,
        ),
        View::Roadmap => frame.render_widget(
            Roadmap::new(&state.catalog, state.cursors.roadmap, body_focused, theme),
            body,
        ),
        View::SkillDetail { key } => frame.render_widget(
            SkillDetail::new(&state.catalog, key, state.cursors.skill, theme).focused(body_focused),
            body,
        ),
        View::Projects => {
            let split = Layout::default()
                .direction(LayoutDir::Vertical)
                .constraints([Constraint::Length(3), Constraint::Fill(1)])
                .split(body);
            let search_focused = state.focus == Focus::Search;
            let filtered = state.filtered();
            frame.render_widget(FilterBar::new(&state.filter, search_focused, theme), split[0]);
            frame.render_widget(
                ProjectList::new(&filtered, state.catalog.projects().len(), theme)
                    .cursor(state.cursors.projects)
                    .search_term(state.filter.search.as_str())
                    .tools_preview(state.config.ui.tools_preview)
                    .focused(body_focused),
                split[1],
            );
            if search_focused {
                let bar = FilterBar::new(&state.filter, true, theme);
                frame.set_cursor_position(bar.cursor_position(split[0]));
            }
        }
        View::ProjectDetail { slug } => frame.render_widget(
            ProjectDetail::new(state.catalog.project(slug), slug, theme),
            body,
        ),
        View::Writing => frame.render_widget(
            WritingList::new(
                state.catalog.posts(),
                state.cursors.writing,
                &state.config.ui.date_format,
                theme,
            )
            .focused(body_focused),
            body,
        ),
        View::PostDetail { slug } => frame.render_widget(
            PostDetail::new(
                state.catalog.post(slug),
                slug,
                &state.config.ui.date_format,
                theme,
            ),
            body,
        ),
        View::Resume => frame.render_widget(ResumeView::new(&state.catalog, theme), body),
        View::Contact => {
            let form_focused = state.focus == Focus::Form;
            frame.render_widget(
                ContactPane::new(
                    state.catalog.contact(),
                    &state.catalog.profile().email,
                    &state.contact,
                    form_focused,
                    Instant::now(),
                    theme,
                ),
                body,
            );
            if form_focused {
                frame.set_cursor_position(state.contact.cursor_position(body));
            }
        }
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
