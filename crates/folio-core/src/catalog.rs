//! Content store — the immutable catalog of roadmap nodes, projects, skills
//! and posts.
//!
//! The catalog is built once at startup and never written back. The built-in
//! document is embedded with [`include_str!`]; [`Catalog::from_path`] loads a
//! user document of the same shape. Both go through [`Catalog::new`], which
//! enforces key uniqueness and the presence of the default skill.
//!
//! # Document shape
//!
//! ```toml
//! default_skill = "supervised"
//! [profile]            # name, title, tagline, bio, email, github, linkedin
//! [[roadmap]]          # SkillNode
//! [[featured_projects]]
//! [[projects]]
//! [[skills]]           # with a [skills.theory] table
//! [[posts]]
//! [resume]             # skill_groups, education
//! [contact]
//! ```

use crate::error::CatalogError;
use crate::query;
use crate::types::{
    ContactInfo, Post, Profile, Project, Resume, Skill, SkillCategory, SkillNode,
};
use config::{File, FileFormat};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

const BUILTIN_CATALOG_SRC: &str = include_str!("content/portfolio.toml");

// ---------------------------------------------------------------------------
// Load options
// ---------------------------------------------------------------------------

/// How [`Catalog::new`] treats skill → project references that do not
/// resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Integrity {
    /// Log dangling references and keep the catalog. Resolution drops them.
    #[default]
    Lenient,
    /// Reject the catalog on the first dangling reference.
    Strict,
}

impl Integrity {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Integrity::Strict
        } else {
            Integrity::Lenient
        }
    }
}

// ---------------------------------------------------------------------------
// Raw document
// ---------------------------------------------------------------------------

/// Unvalidated catalog contents, as deserialised from a document or
/// assembled by hand.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogParts {
    pub default_skill: String,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub roadmap: Vec<SkillNode>,
    #[serde(default)]
    pub featured_projects: Vec<Project>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub resume: Resume,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl CatalogParts {
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        config::Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Catalog {
    profile: Profile,
    roadmap: Vec<SkillNode>,
    /// Featured projects first, then the rest.
    projects: Vec<Project>,
    featured_len: usize,
    skills: Vec<Skill>,
    skill_index: HashMap<String, usize>,
    default_skill: usize,
    posts: Vec<Post>,
    resume: Resume,
    contact: ContactInfo,
}

impl Catalog {
    /// The catalog embedded in the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document is invalid. It is covered by tests,
    /// so this should never happen in practice.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_CATALOG_SRC, Integrity::Strict)
            .expect("built-in catalog must be valid")
    }

    pub fn from_toml_str(src: &str, integrity: Integrity) -> Result<Self, CatalogError> {
        Self::new(CatalogParts::from_toml_str(src)?, integrity)
    }

    pub fn from_path(path: &Path, integrity: Integrity) -> Result<Self, CatalogError> {
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading catalog document");
        Self::from_toml_str(&src, integrity)
    }

    /// Validate `parts` and freeze them into a catalog.
    ///
    /// `featured_projects` become the featured prefix of [`Catalog::projects`];
    /// the `featured` flag is set from position, not read from the document.
    pub fn new(parts: CatalogParts, integrity: Integrity) -> Result<Self, CatalogError> {
        let CatalogParts {
            default_skill,
            profile,
            roadmap,
            featured_projects,
            projects: rest,
            skills,
            posts,
            resume,
            contact,
        } = parts;

        let featured_len = featured_projects.len();
        let projects: Vec<Project> = featured_projects
            .into_iter()
            .map(|p| Project { featured: true, ..p })
            .chain(rest.into_iter().map(|p| {
                if p.featured {
                    tracing::warn!(slug = %p.slug, "featured flag ignored outside featured_projects");
                }
                Project { featured: false, ..p }
            }))
            .collect();

        ensure_unique("roadmap node", roadmap.iter().map(|n| n.id.as_str()))?;
        ensure_unique("project id", projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("project slug", projects.iter().map(|p| p.slug.as_str()))?;
        ensure_unique("skill", skills.iter().map(|s| s.slug.as_str()))?;
        ensure_unique("post", posts.iter().map(|p| p.slug.as_str()))?;

        for skill in &skills {
            for slug in query::dangling_references(skill, &projects) {
                match integrity {
                    Integrity::Strict => {
                        return Err(CatalogError::DanglingReference {
                            skill: skill.slug.clone(),
                            slug: slug.to_string(),
                        })
                    }
                    Integrity::Lenient => {
                        tracing::warn!(skill = %skill.slug, slug, "dangling project reference");
                    }
                }
            }
        }

        let skill_index: HashMap<String, usize> = skills
            .iter()
            .enumerate()
            .map(|(i, s)| (s.slug.clone(), i))
            .collect();

        let default_skill = *skill_index
            .get(&default_skill)
            .ok_or(CatalogError::MissingDefaultSkill(default_skill))?;

        let catalog = Self {
            profile,
            roadmap,
            projects,
            featured_len,
            skills,
            skill_index,
            default_skill,
            posts,
            resume,
            contact,
        };
        catalog.log_count_drift();
        Ok(catalog)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Every project in insertion order, featured prefix first.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn featured(&self) -> &[Project] {
        &self.projects[..self.featured_len]
    }

    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Look up a skill by slug. `None` when absent.
    pub fn skill(&self, key: &str) -> Option<&Skill> {
        self.skill_index.get(key).map(|&i| &self.skills[i])
    }

    /// Look up a skill by slug, falling back to the designated default.
    pub fn skill_or_default(&self, key: &str) -> &Skill {
        self.skill(key).unwrap_or_else(|| {
            tracing::debug!(key, fallback = %self.default_skill().slug, "skill not found");
            self.default_skill()
        })
    }

    pub fn default_skill(&self) -> &Skill {
        &self.skills[self.default_skill]
    }

    pub fn roadmap_nodes(&self) -> &[SkillNode] {
        &self.roadmap
    }

    pub fn roadmap_node(&self, id: &str) -> Option<&SkillNode> {
        self.roadmap.iter().find(|n| n.id == id)
    }

    /// Roadmap nodes of one category, catalog order.
    pub fn nodes_in(&self, category: SkillCategory) -> impl Iterator<Item = &SkillNode> {
        self.roadmap.iter().filter(move |n| n.category == category)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Distinct project domains in first-appearance order.
    pub fn domains(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|p| p.domain.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    fn log_count_drift(&self) {
        for node in &self.roadmap {
            let counts = query::derived_counts(node, self);
            if counts.projects_derived && counts.projects != node.project_count {
                tracing::warn!(
                    node = %node.id,
                    declared = node.project_count,
                    related = counts.projects,
                    "roadmap project count drifts from skill relations"
                );
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
