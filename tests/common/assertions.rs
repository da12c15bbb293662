//! Assertion helpers for folio harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! property being checked.

use folio_core::Project;

/// Titles of `projects`, for comparison against string lists.
pub fn titles<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
    projects.iter().map(|p| p.title.as_str()).collect()
}

/// Assert that a project list has exactly the given titles, in order.
///
/// ```rust
/// assert_titles!(filter_projects(catalog.projects(), &criteria), ["Churn"]);
/// ```
#[macro_export]
macro_rules! assert_titles {
    ($projects:expr, [$($title:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $crate::common::titles(&$projects);
        let expected: Vec<&str> = vec![$($title),*];
        pretty_assertions::assert_eq!(actual, expected, "project titles differ");
    }};
}

/// Assert `sub` appears in `all` in the same relative order (by slug).
pub fn assert_order_preserving(sub: &[&Project], all: &[Project]) {
    let mut rest = all.iter();
    for p in sub {
        assert!(
            rest.any(|q| q.slug == p.slug),
            "{:?} is out of catalog order or not in the catalog",
            p.slug
        );
    }
}
