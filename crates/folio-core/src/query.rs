//! Query layer — project filtering and skill → project relation resolution.
//!
//! Everything here is a pure function over borrowed catalog data. Results are
//! fresh `Vec`s of references in a well-defined order; the inputs are never
//! touched, so the UI can call these on every keystroke.
//!
//! # Filtering
//!
//! [`filter_projects`] combines three predicates with AND:
//!
//! | Predicate | Field(s) | Bypass |
//! |-----------|----------|--------|
//! | text | `title` or `summary`, case-insensitive substring | empty term |
//! | domain | `domain`, exact equality | [`DomainFilter::All`] |
//! | difficulty | `difficulty`, equality | [`DifficultyFilter::All`] |
//!
//! Tools and methods are not searched.

use crate::catalog::Catalog;
use crate::types::{Project, ProjectDifficulty, Skill, SkillNode};
use serde::{Deserialize, Serialize};

/// Selector value that bypasses a predicate.
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainFilter {
    #[default]
    All,
    Is(String),
}

impl DomainFilter {
    /// Parse a selector value. Only the literal `"all"` bypasses the
    /// predicate; anything else is matched verbatim, so a domain named
    /// `"All"` stays selectable.
    pub fn parse(s: &str) -> Self {
        if s == ALL {
            DomainFilter::All
        } else {
            DomainFilter::Is(s.to_string())
        }
    }
}

impl std::fmt::Display for DomainFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainFilter::All => f.write_str(ALL),
            DomainFilter::Is(domain) => f.write_str(domain),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyFilter {
    #[default]
    All,
    Is(ProjectDifficulty),
}

impl DifficultyFilter {
    /// Selector values in dropdown order: `all`, then each difficulty.
    pub const OPTIONS: [DifficultyFilter; 4] = [
        DifficultyFilter::All,
        DifficultyFilter::Is(ProjectDifficulty::Beginner),
        DifficultyFilter::Is(ProjectDifficulty::Intermediate),
        DifficultyFilter::Is(ProjectDifficulty::Advanced),
    ];
}

impl std::str::FromStr for DifficultyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(DifficultyFilter::All)
        } else {
            s.parse().map(DifficultyFilter::Is)
        }
    }
}

impl std::fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyFilter::All => f.write_str(ALL),
            DifficultyFilter::Is(d) => write!(f, "{d}"),
        }
    }
}

/// The user's current project-list selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub domain: DomainFilter,
    pub difficulty: DifficultyFilter,
}

impl FilterCriteria {
    pub fn new(
        search_term: impl Into<String>,
        domain: DomainFilter,
        difficulty: DifficultyFilter,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            domain,
            difficulty,
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..Self::default()
        }
    }

    /// True when at least one predicate narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.domain != DomainFilter::All
            || self.difficulty != DifficultyFilter::All
    }

    pub fn matches(&self, project: &Project) -> bool {
        matches_text(project, &self.search_term)
            && matches_domain(project, &self.domain)
            && matches_difficulty(project, self.difficulty)
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Case-insensitive substring match on title or summary. Empty terms match.
pub fn matches_text(project: &Project, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.summary.to_lowercase().contains(&needle)
}

pub fn matches_domain(project: &Project, domain: &DomainFilter) -> bool {
    match domain {
        DomainFilter::All => true,
        DomainFilter::Is(d) => project.domain == *d,
    }
}

pub fn matches_difficulty(project: &Project, difficulty: DifficultyFilter) -> bool {
    match difficulty {
        DifficultyFilter::All => true,
        DifficultyFilter::Is(d) => project.difficulty == d,
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Projects satisfying every active predicate, in catalog order.
pub fn filter_projects<'a>(catalog: &'a [Project], criteria: &FilterCriteria) -> Vec<&'a Project> {
    catalog.iter().filter(|p| criteria.matches(p)).collect()
}

/// Resolve `skill.projects` into full records, in the skill's order.
/// Slugs without a matching project are dropped.
pub fn resolve_projects<'a>(skill: &Skill, all: &'a [Project]) -> Vec<&'a Project> {
    skill
        .projects
        .iter()
        .filter_map(|slug| all.iter().find(|p| p.slug == *slug))
        .collect()
}

/// Slugs in `skill.projects` that do not name a project in `all`.
pub fn dangling_references<'s>(skill: &'s Skill, all: &[Project]) -> Vec<&'s str> {
    skill
        .projects
        .iter()
        .filter(|slug| !all.iter().any(|p| p.slug == **slug))
        .map(String::as_str)
        .collect()
}

/// Counters displayed for a roadmap node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounts {
    pub projects: u32,
    pub write_ups: u32,
    /// `projects` came from a skill's relation list rather than the declared
    /// counter.
    pub projects_derived: bool,
}

/// Project and write-up counts for a roadmap node.
///
/// When a rich [`Skill`] shares the node's key, the project count is the
/// number of projects that skill resolves to. Otherwise the node's declared
/// counter is used. Posts carry no skill relation, so the write-up count is
/// always the declared one.
pub fn derived_counts(node: &SkillNode, catalog: &Catalog) -> NodeCounts {
    match catalog.skill(&node.id) {
        Some(skill) => NodeCounts {
            projects: resolve_projects(skill, catalog.projects()).len() as u32,
            write_ups: node.write_up_count,
            projects_derived: true,
        },
        None => NodeCounts {
            projects: node.project_count,
            write_ups: node.write_up_count,
            projects_derived: false,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
