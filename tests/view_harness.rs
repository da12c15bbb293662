#![allow(unused)]
//! View state and contact form harness.
//!
//! # What this covers
//!
//! - **View values**: every detail view returns to its list view; top-level
//!   views are their own parent; JSON round-trips are identity.
//! - **Navigation through the app shell**: key events drive `View`
//!   transitions and the rendered screen follows the current view.
//! - **Contact form**: blank fields and malformed emails are rejected; an
//!   acknowledgement is visible before its expiry and hidden after it.
//!
//! # Running
//!
//! ```sh
//! cargo test --test view_harness
//! ```

mod common;
use common::*;
use folio_core::{Catalog, Config, ContactError, ContactForm, View};
use folio_tui::app::{draw, Focus};
use folio_tui::event::{AppEvent, Direction};
use folio_tui::theme::Theme;
use folio_tui::App;
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};
use rstest::rstest;
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// View values
// ---------------------------------------------------------------------------

#[rstest]
#[case::skill(View::skill("nlp"), View::Roadmap)]
#[case::project(View::project("churn-prediction"), View::Projects)]
#[case::post(View::post("bias-variance-tradeoff"), View::Writing)]
fn detail_views_return_to_their_list(#[case] detail: View, #[case] list: View) {
    assert!(detail.is_detail());
    assert_eq!(detail.parent(), list);
    assert_eq!(detail.nav_index(), list.nav_index());
}

#[test]
fn top_level_views_are_their_own_parent() {
    for view in View::NAV {
        assert!(!view.is_detail());
        assert_eq!(view.parent(), view);
    }
}

#[rstest]
#[case(View::Home)]
#[case(View::Contact)]
#[case(View::skill("supervised"))]
#[case(View::project("xray-classification"))]
#[case(View::post("ml-model-deployment"))]
fn view_json_round_trip(#[case] view: View) {
    let json = serde_json::to_string(&view).expect("serialize");
    let back: View = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, view);
}

#[test]
fn view_json_is_tagged_by_page() {
    let json = serde_json::to_value(View::project("churn-prediction")).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "page": "project-detail", "slug": "churn-prediction" })
    );
}

// ---------------------------------------------------------------------------
// App shell navigation
// ---------------------------------------------------------------------------

fn app() -> App {
    App::new(Catalog::builtin(), Config::defaults(), Theme::load_default())
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
    terminal
        .draw(|f| draw(f, app.state()))
        .expect("draw frame");
    let buf = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn home_featured_project_opens_and_backs_out_to_projects() {
    let mut app = app();
    app.handle(AppEvent::Enter);
    assert_eq!(app.state().view, View::project("churn-prediction"));
    assert!(screen(&app).contains("Customer Churn Prediction System"));

    app.handle(AppEvent::Escape);
    assert_eq!(app.state().view, View::Projects);
}

#[test]
fn unknown_skill_command_renders_the_default_skill() {
    let mut app = app();
    app.handle(AppEvent::Char(':'));
    for c in "skill quantum".chars() {
        app.handle(AppEvent::Char(c));
    }
    app.handle(AppEvent::Enter);

    assert_eq!(app.state().view, View::skill("quantum"));
    let out = screen(&app);
    assert!(out.contains("Supervised Machine Learning"), "{out}");
}

#[test]
fn filtered_list_is_rendered_after_search() {
    let mut app = app();
    app.handle(AppEvent::SearchFocus);
    assert_eq!(app.state().focus, Focus::Search);
    for c in "healthcare".chars() {
        app.handle(AppEvent::Char(c));
    }
    let out = screen(&app);
    assert!(out.contains("Showing 1 of 6 projects"), "{out}");
    assert!(out.contains("Healthcare Cost Prediction Model"));
    assert!(!out.contains("Customer Churn Prediction System"));
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

fn filled() -> ContactForm {
    ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello there".into(),
    }
}

#[rstest]
#[case::no_at("ada.example.com")]
#[case::no_tld("ada@example")]
#[case::spaces("ada @example.com")]
fn malformed_emails_are_rejected(#[case] email: &str) {
    let form = ContactForm {
        email: email.into(),
        ..filled()
    };
    assert!(matches!(form.validate(), Err(ContactError::InvalidEmail(_))));
}

#[test]
fn blank_message_is_rejected() {
    let form = ContactForm {
        message: "   ".into(),
        ..filled()
    };
    assert_eq!(form.validate(), Err(ContactError::MissingField("Message")));
}

#[test]
fn acknowledgement_expires() {
    let now = Instant::now();
    let ack = filled().submit(now, Duration::from_secs(3)).expect("valid form");
    assert!(ack.is_visible(now));
    assert!(ack.is_visible(now + Duration::from_millis(2999)));
    assert!(!ack.is_visible(now + Duration::from_secs(3)));
}
