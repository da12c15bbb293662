//! folio-core — content store and query layer for the folio portfolio.
//!
//! This crate holds everything the TUI renders and nothing about how it is
//! rendered: the immutable [`Catalog`], the pure filter/resolve functions in
//! [`query`], the serialisable [`View`] value, and the simulated contact form.
//!
//! # Architecture
//!
//! ```text
//! Catalog (immutable) ──► query::filter_projects / resolve_projects ──► UI
//!                                   ▲
//!              View + FilterCriteria (UI-owned, re-applied per event)
//! ```

pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod query;
pub mod types;
pub mod view;

pub use catalog::{Catalog, CatalogParts, Integrity};
pub use config::Config;
pub use contact::{Acknowledgement, ContactForm, Field};
pub use error::{CatalogError, ContactError};
pub use query::{
    derived_counts, filter_projects, resolve_projects, DifficultyFilter, DomainFilter,
    FilterCriteria, NodeCounts,
};
pub use types::{
    ContactInfo, Education, Post, Profile, Project, ProjectDifficulty, Resume, Skill,
    SkillCategory, SkillGroup, SkillLevel, SkillNode, Stat, Theory,
};
pub use view::View;
