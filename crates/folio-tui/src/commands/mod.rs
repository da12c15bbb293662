// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, theme::Theme};
use folio_core::{DifficultyFilter, DomainFilter, View};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Leave the current detail view, or close the app from a top-level view
    Quit,
    // Close the app regardless of the current view
    Exit,
    Help,
    Theme(String),
    // Switch to a top-level view
    Open(View),
    Skill(String),
    Project(String),
    // Replace the project search text (empty clears it)
    Search(String),
    Domain(DomainFilter),
    Difficulty(DifficultyFilter),
    // Reset search and both selectors
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "q!" | "quit!" | "exit" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "theme" => required(rest, "usage: theme <default|gruvbox>").map(Command::Theme),
            "open" => {
                let name = required(rest, "usage: open <view>")?;
                View::parse(&name)
                    .map(Command::Open)
                    .ok_or_else(|| format!("unknown view: {name}"))
            }
            "skill" => required(rest, "usage: skill <key>").map(Command::Skill),
            "project" => required(rest, "usage: project <slug>").map(Command::Project),
            "search" => Ok(Command::Search(rest.to_string())),
            "domain" => {
                let name = required(rest, "usage: domain <name|all>")?;
                Ok(Command::Domain(DomainFilter::parse(&name)))
            }
            "difficulty" => {
                let level = required(rest, "usage: difficulty <beginner|intermediate|advanced|all>")?;
                level.parse().map(Command::Difficulty)
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

fn required(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(usage.to_string())
    } else {
        Ok(rest.to_string())
    }
}

/// Execute a parsed [`Command`] against the application state.
///
/// Returns `Err(message)` when the command names something the catalog does
/// not hold; the state is left untouched in that case.
pub fn execute_command(s: &mut AppState, cmd: Command) -> Result<(), String> {
    match cmd {
        Command::Quit => s.quit_or_back(),
        Command::Exit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
        }
        Command::Open(view) => s.navigate(view),
        // Unknown keys render the default skill
        Command::Skill(key) => s.navigate(View::skill(key)),
        Command::Project(slug) => {
            if s.catalog.project(&slug).is_none() {
                return Err(format!("unknown project: {slug}"));
            }
            s.navigate(View::project(slug));
        }
        Command::Search(term) => {
            s.filter.search.set(term);
            s.filters_changed();
            s.navigate(View::Projects);
        }
        Command::Domain(domain) => {
            s.filter.domain = domain;
            s.filters_changed();
            s.navigate(View::Projects);
        }
        Command::Difficulty(difficulty) => {
            s.filter.difficulty = difficulty;
            s.filters_changed();
            s.navigate(View::Projects);
        }
        Command::Clear => {
            s.filter.clear();
            s.filters_changed();
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
