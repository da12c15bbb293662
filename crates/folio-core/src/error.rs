//! Error types for folio-core.
//!
//! Query and lookup operations are total and never produce these; they only
//! surface when a catalog document is loaded or a contact form is submitted.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("default skill {0:?} is not defined in the catalog")]
    MissingDefaultSkill(String),

    #[error("skill {skill:?} references unknown project {slug:?}")]
    DanglingReference { skill: String, slug: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}
