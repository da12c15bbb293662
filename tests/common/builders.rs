//! Test builders — ergonomic constructors for projects, skills and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use folio_core::{
    Catalog, CatalogParts, Integrity, Project, ProjectDifficulty, Skill, SkillLevel, Theory,
};

// ---------------------------------------------------------------------------
// ProjectBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Project`] test fixtures.
///
/// # Example
///
/// ```rust
/// let project = ProjectBuilder::new("churn")
///     .title("Churn Model")
///     .domain("Business")
///     .difficulty(ProjectDifficulty::Advanced)
///     .build();
/// ```
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    /// `slug` doubles as the id.
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            project: Project {
                id: slug.clone(),
                slug: slug.clone(),
                title: format!("Project {slug}"),
                summary: String::new(),
                domain: "General".to_string(),
                tools: Vec::new(),
                methods: Vec::new(),
                difficulty: ProjectDifficulty::Beginner,
                outcome: "shipped".to_string(),
                metrics: None,
                github_url: None,
                notebook_url: None,
                demo_url: None,
                featured: false,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.project.title = title.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.project.summary = summary.into();
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.project.domain = domain.into();
        self
    }

    pub fn difficulty(mut self, difficulty: ProjectDifficulty) -> Self {
        self.project.difficulty = difficulty;
        self
    }

    pub fn tools(mut self, tools: &[&str]) -> Self {
        self.project.tools = tools.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn methods(mut self, methods: &[&str]) -> Self {
        self.project.methods = methods.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.project.id = id.into();
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}

// ---------------------------------------------------------------------------
// SkillBuilder
// ---------------------------------------------------------------------------

pub struct SkillBuilder {
    skill: Skill,
}

impl SkillBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            skill: Skill {
                title: format!("Skill {slug}"),
                slug,
                level: SkillLevel::Practiced,
                theory: Theory {
                    summary: String::new(),
                    concepts: Vec::new(),
                    pitfalls: Vec::new(),
                },
                projects: Vec::new(),
            },
        }
    }

    pub fn projects(mut self, slugs: &[&str]) -> Self {
        self.skill.projects = slugs.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Skill {
        self.skill
    }
}

// ---------------------------------------------------------------------------
// Catalog helpers
// ---------------------------------------------------------------------------

/// Catalog parts with the given projects and skills. The first skill is the
/// default skill.
pub fn parts_with(projects: Vec<Project>, skills: Vec<Skill>) -> CatalogParts {
    CatalogParts {
        default_skill: skills
            .first()
            .map(|s| s.slug.clone())
            .unwrap_or_default(),
        projects,
        skills,
        ..CatalogParts::default()
    }
}

/// Build a lenient catalog, panicking on any load error.
pub fn catalog_with(projects: Vec<Project>, skills: Vec<Skill>) -> Catalog {
    Catalog::new(parts_with(projects, skills), Integrity::Lenient)
        .expect("test catalog must be valid")
}
