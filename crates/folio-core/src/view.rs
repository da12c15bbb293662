//! View state — which page is showing and what it shows.
//!
//! A [`View`] is a plain value passed through the rendering boundary. Detail
//! views carry the key they display; resolving it against the catalog is the
//! renderer's job, so the value stays serialisable.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Roadmap,
    SkillDetail {
        key: String,
    },
    Projects,
    ProjectDetail {
        slug: String,
    },
    Writing,
    PostDetail {
        slug: String,
    },
    Resume,
    Contact,
}

impl View {
    /// Top-level views in navigation order.
    pub const NAV: [View; 6] = [
        View::Home,
        View::Roadmap,
        View::Projects,
        View::Writing,
        View::Resume,
        View::Contact,
    ];

    pub fn skill(key: impl Into<String>) -> Self {
        View::SkillDetail { key: key.into() }
    }

    pub fn project(slug: impl Into<String>) -> Self {
        View::ProjectDetail { slug: slug.into() }
    }

    pub fn post(slug: impl Into<String>) -> Self {
        View::PostDetail { slug: slug.into() }
    }

    /// Parse a top-level view name (`home`, `roadmap`, `projects`, `writing`,
    /// `resume`, `contact`).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "home" => Some(View::Home),
            "roadmap" => Some(View::Roadmap),
            "projects" => Some(View::Projects),
            "writing" | "posts" => Some(View::Writing),
            "resume" => Some(View::Resume),
            "contact" => Some(View::Contact),
            _ => None,
        }
    }

    /// The list a detail view returns to. Top-level views return themselves.
    pub fn parent(&self) -> View {
        match self {
            View::SkillDetail { .. } => View::Roadmap,
            View::ProjectDetail { .. } => View::Projects,
            View::PostDetail { .. } => View::Writing,
            other => other.clone(),
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            View::SkillDetail { .. } | View::ProjectDetail { .. } | View::PostDetail { .. }
        )
    }

    /// Index into [`View::NAV`] of the tab this view belongs to.
    pub fn nav_index(&self) -> usize {
        let top = self.parent();
        View::NAV.iter().position(|v| *v == top).unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Roadmap => "Roadmap",
            View::SkillDetail { .. } => "Skill",
            View::Projects => "Projects",
            View::ProjectDetail { .. } => "Project",
            View::Writing => "Writing",
            View::PostDetail { .. } => "Post",
            View::Resume => "Resume",
            View::Contact => "Contact",
        }
    }
}
