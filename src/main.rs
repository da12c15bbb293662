use clap::{Parser, Subcommand};
use folio_core::{
    filter_projects, resolve_projects, Catalog, Config, DifficultyFilter, DomainFilter,
    FilterCriteria, Integrity, Project,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Terminal portfolio — roadmap, projects, writing")]
struct Cli {
    /// Write debug logs to $TMPDIR/folio-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Catalog document to load instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the projects matching the given filters.
    Projects {
        /// Case-insensitive text matched against title and summary.
        #[arg(long, default_value = "")]
        search: String,
        /// Exact domain, or `all`.
        #[arg(long, default_value = "all")]
        domain: String,
        /// beginner | intermediate | advanced | all
        #[arg(long, default_value = "all")]
        difficulty: DifficultyFilter,
        /// Emit a JSON array instead of titles.
        #[arg(long)]
        json: bool,
    },
    /// Print a skill (or the default skill) and the projects it links to.
    Skill {
        key: String,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let log_path = std::env::temp_dir().join("folio-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %log_path.display(), "folio debug log started");
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::defaults()
    });
    let catalog = load_catalog(cli.catalog.as_ref(), &config)?;

    match cli.command {
        None => folio_tui::run(catalog, config),
        Some(Cmd::Projects {
            search,
            domain,
            difficulty,
            json,
        }) => {
            let criteria = FilterCriteria::new(search, DomainFilter::parse(&domain), difficulty);
            let matches = filter_projects(catalog.projects(), &criteria);
            tracing::debug!(?criteria, matches = matches.len(), "headless filter");
            print_projects(&matches, json)
        }
        Some(Cmd::Skill { key, json }) => {
            let skill = catalog.skill_or_default(&key);
            let projects = resolve_projects(skill, catalog.projects());
            if json {
                let out = serde_json::json!({
                    "skill": skill,
                    "projects": projects,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} ({})", skill.title, skill.level);
                println!("{}", skill.theory.summary);
                println!();
                print_projects(&projects, false)?;
            }
            Ok(())
        }
    }
}

/// `--catalog` wins over `[catalog] path`; neither means the built-in catalog.
fn load_catalog(flag: Option<&PathBuf>, config: &Config) -> anyhow::Result<Catalog> {
    let integrity = Integrity::from_strict(config.catalog.strict_references);
    match flag.or(config.catalog.path.as_ref()) {
        Some(path) => Ok(Catalog::from_path(path, integrity)?),
        None => Ok(Catalog::builtin()),
    }
}

fn print_projects(projects: &[&Project], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(projects)?);
    } else {
        for p in projects {
            println!("{:<45} {:<12} {}", p.title, p.domain, p.difficulty);
        }
    }
    Ok(())
}
