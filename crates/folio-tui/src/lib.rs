//! folio TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use folio_core::{Catalog, Config};

/// Start the TUI over `catalog`, themed per `config.ui.theme`.
pub fn run(catalog: Catalog, config: Config) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::debug!(
        theme = %config.ui.theme,
        projects = catalog.projects().len(),
        "starting tui"
    );
    App::new(catalog, config, theme).run()
}
