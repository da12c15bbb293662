//! Core types for folio-core.
//!
//! This module defines the catalog entities shared by every layer: the
//! roadmap [`SkillNode`], the rich [`Skill`] record, [`Project`], [`Post`],
//! and the profile/resume/contact content rendered around them. Every entity
//! is immutable once the catalog is built; derived views are fresh values.

use serde::{Deserialize, Serialize};

/// Proficiency scale shared by roadmap nodes and skills.
///
/// Ordinal (`Learning < Practiced < Shipped < Advanced`), though no core
/// operation depends on the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Learning,
    Practiced,
    Shipped,
    Advanced,
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillLevel::Learning => write!(f, "Learning"),
            SkillLevel::Practiced => write!(f, "Practiced"),
            SkillLevel::Shipped => write!(f, "Shipped"),
            SkillLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Project difficulty. A separate scale from [`SkillLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProjectDifficulty {
    pub const ALL: [ProjectDifficulty; 3] = [
        ProjectDifficulty::Beginner,
        ProjectDifficulty::Intermediate,
        ProjectDifficulty::Advanced,
    ];

    /// Lowercase key as it appears in catalog documents.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectDifficulty::Beginner => "beginner",
            ProjectDifficulty::Intermediate => "intermediate",
            ProjectDifficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for ProjectDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ProjectDifficulty::Beginner),
            "intermediate" => Ok(ProjectDifficulty::Intermediate),
            "advanced" => Ok(ProjectDifficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Roadmap grouping for [`SkillNode`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Programming,
    Foundation,
    Ml,
    Engineering,
    Domain,
}

impl SkillCategory {
    /// Categories in roadmap legend order.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Programming,
        SkillCategory::Foundation,
        SkillCategory::Ml,
        SkillCategory::Engineering,
        SkillCategory::Domain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::Foundation => "Statistics & Math",
            SkillCategory::Ml => "Machine Learning",
            SkillCategory::Engineering => "Data Engineering",
            SkillCategory::Domain => "Domain Applications",
        }
    }
}

/// A cell of the skills roadmap grid.
///
/// `project_count` and `write_up_count` are declared values, not derived from
/// any relation; see [`crate::query::derived_counts`] for the relation-backed
/// read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: String,
    pub label: String,
    pub level: SkillLevel,
    pub description: String,
    pub category: SkillCategory,
    pub project_count: u32,
    pub write_up_count: u32,
}

/// A portfolio project. `slug` is the stable relation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    /// Free text, not a closed set.
    pub domain: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
    pub difficulty: ProjectDifficulty,
    pub outcome: String,
    #[serde(default)]
    pub metrics: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub notebook_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// External links that are present, labelled for display.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Code", self.github_url.as_deref()),
            ("Notebook", self.notebook_url.as_deref()),
            ("Demo", self.demo_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

/// Theory block of a [`Skill`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theory {
    pub summary: String,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[serde(default)]
    pub pitfalls: Vec<String>,
}

/// Rich skill record, keyed by `slug`. `projects` lists [`Project::slug`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub slug: String,
    pub title: String,
    pub level: SkillLevel,
    pub theory: Theory,
    #[serde(default)]
    pub projects: Vec<String>,
}

/// A writing-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Minutes.
    pub read_time: u32,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Parse [`Post::date`]. `None` when the document holds a malformed date.
    pub fn published(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Headline figure on the home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// Resume content. The "featured projects" section is read from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub education: Vec<Education>,
}

/// Static copy shown beside the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub response_time: String,
    #[serde(default)]
    pub open_to: String,
}
