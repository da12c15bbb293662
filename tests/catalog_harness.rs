#![allow(unused)]
//! Catalog loading harness.
//!
//! # What this covers
//!
//! - **Built-in document**: parses, holds six projects with a featured prefix
//!   of three, and names `supervised` as the default skill.
//! - **Key uniqueness**: duplicate project slugs, project ids, skill slugs,
//!   post slugs and roadmap ids are rejected at load.
//! - **Default skill**: a document whose default skill is missing is rejected.
//! - **Integrity modes**: dangling skill → project references load in lenient
//!   mode and are rejected in strict mode.
//! - **Files**: documents load from disk; a missing file is an `Io` error and
//!   malformed TOML a `Parse` error.
//! - **Config**: `[catalog]` and `[ui]` settings layer over the defaults.
//!
//! # Running
//!
//! ```sh
//! cargo test --test catalog_harness
//! ```

mod common;
use common::*;
use folio_core::{Catalog, CatalogError, CatalogParts, Config, Integrity, Post};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

#[test]
fn builtin_catalog_shape() {
    let catalog = Catalog::builtin();
    assert_eq!(titles(&catalog.projects().iter().collect::<Vec<_>>()), BUILTIN_TITLES.to_vec());
    assert_eq!(catalog.featured().len(), 3);
    assert!(catalog.featured().iter().all(|p| p.featured));
    assert!(catalog.projects()[3..].iter().all(|p| !p.featured));
    assert_eq!(catalog.default_skill().slug, "supervised");
    assert_eq!(catalog.roadmap_nodes().len(), 14);
    assert_eq!(catalog.posts().len(), 3);
    assert_eq!(catalog.domains(), BUILTIN_DOMAINS.to_vec());
}

#[test]
fn builtin_lookups_return_options() {
    let catalog = Catalog::builtin();
    assert!(catalog.project("stock-forecasting").is_some());
    assert!(catalog.project("ghost").is_none());
    assert!(catalog.post("bias-variance-tradeoff").is_some());
    assert!(catalog.post("ghost").is_none());
    assert!(catalog.roadmap_node("nlp").is_some());
}

// ---------------------------------------------------------------------------
// Document loading
// ---------------------------------------------------------------------------

#[test]
fn featured_flag_comes_from_position() {
    let catalog = Catalog::from_toml_str(MINIMAL_DOC, Integrity::Strict).expect("valid doc");
    assert_eq!(catalog.featured().len(), 1);
    assert!(catalog.projects()[0].featured);

    let mut parts = parts_with(
        vec![ProjectBuilder::new("a").build()],
        vec![SkillBuilder::new("s").build()],
    );
    parts.projects[0].featured = true;
    let catalog = Catalog::new(parts, Integrity::Lenient).expect("valid parts");
    assert!(catalog.featured().is_empty());
    assert!(!catalog.projects()[0].featured);
}

#[test]
fn dangling_references_load_leniently() {
    let catalog = Catalog::from_toml_str(DANGLING_DOC, Integrity::Lenient).expect("lenient load");
    let skill = catalog.skill("stats").expect("skill exists");
    assert_eq!(skill.projects, ["survey", "ghost"]);
    assert_eq!(folio_core::resolve_projects(skill, catalog.projects()).len(), 1);
}

#[test]
fn dangling_references_fail_strict_load() {
    let err = Catalog::from_toml_str(DANGLING_DOC, Integrity::Strict).unwrap_err();
    match err {
        CatalogError::DanglingReference { skill, slug } => {
            assert_eq!(skill, "stats");
            assert_eq!(slug, "ghost");
        }
        other => panic!("expected DanglingReference, got {other:?}"),
    }
}

#[test]
fn missing_default_skill_is_rejected() {
    let mut parts = parts_with(vec![], vec![SkillBuilder::new("s").build()]);
    parts.default_skill = "nope".into();
    let err = Catalog::new(parts, Integrity::Lenient).unwrap_err();
    assert!(matches!(err, CatalogError::MissingDefaultSkill(ref k) if k == "nope"), "{err}");
}

fn post(slug: &str) -> Post {
    Post {
        slug: slug.into(),
        title: slug.into(),
        excerpt: String::new(),
        read_time: 5,
        date: "2024-01-01".into(),
        tags: vec![],
    }
}

#[rstest]
#[case::project_slug("project slug", parts_with(
    vec![ProjectBuilder::new("a").build(), ProjectBuilder::new("a").id("2").build()],
    vec![SkillBuilder::new("s").build()],
))]
#[case::project_id("project id", parts_with(
    vec![ProjectBuilder::new("a").id("1").build(), ProjectBuilder::new("b").id("1").build()],
    vec![SkillBuilder::new("s").build()],
))]
#[case::skill("skill", parts_with(
    vec![],
    vec![SkillBuilder::new("s").build(), SkillBuilder::new("s").build()],
))]
#[case::post("post", {
    let mut p = parts_with(vec![], vec![SkillBuilder::new("s").build()]);
    p.posts = vec![post("x"), post("x")];
    p
})]
fn duplicate_keys_are_rejected(#[case] kind: &str, #[case] parts: CatalogParts) {
    let err = Catalog::new(parts, Integrity::Lenient).unwrap_err();
    match err {
        CatalogError::DuplicateKey { kind: k, .. } => assert_eq!(k, kind),
        other => panic!("expected DuplicateKey, got {other:?}"),
    }
}

#[test]
fn duplicate_across_featured_and_rest_is_rejected() {
    let mut parts = parts_with(
        vec![ProjectBuilder::new("a").id("2").build()],
        vec![SkillBuilder::new("s").build()],
    );
    parts.featured_projects = vec![ProjectBuilder::new("a").build()];
    assert!(matches!(
        Catalog::new(parts, Integrity::Lenient),
        Err(CatalogError::DuplicateKey { .. })
    ));
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn loads_a_catalog_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("portfolio.toml");
    let mut file = std::fs::File::create(&path).expect("create doc");
    file.write_all(MINIMAL_DOC.as_bytes()).expect("write doc");

    let catalog = Catalog::from_path(&path, Integrity::Strict).expect("load from disk");
    assert_eq!(catalog.projects()[0].title, "Survey Analysis");
    assert_eq!(catalog.default_skill().slug, "stats");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Catalog::from_path(&dir.path().join("absent.toml"), Integrity::Lenient).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }), "{err}");
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_document_is_a_parse_error() {
    let err = Catalog::from_toml_str("default_skill = [unterminated", Integrity::Lenient).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)), "{err}");
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("folio").join("config.toml");

    let config = Config::load_from(&path).expect("load config");
    assert!(path.exists());
    assert_eq!(config.ui.theme, "default");
    assert_eq!(config.ui.contact_ack_secs, 3);
    assert!(!config.catalog.strict_references);
    assert!(config.catalog.path.is_none());
}

#[test]
fn user_config_overrides_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[ui]\ntheme = \"gruvbox\"\n\n[catalog]\nstrict_references = true\npath = \"/srv/portfolio.toml\"\n",
    )
    .expect("write config");

    let config = Config::load_from(&path).expect("load config");
    assert_eq!(config.ui.theme, "gruvbox");
    assert_eq!(config.ui.tools_preview, 3);
    assert!(config.catalog.strict_references);
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(std::path::Path::new("/srv/portfolio.toml"))
    );
    assert_eq!(Integrity::from_strict(config.catalog.strict_references), Integrity::Strict);
}
