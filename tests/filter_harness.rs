#![allow(unused)]
//! Project filter integration harness.
//!
//! # What this covers
//!
//! - **AND-composition**: text, domain and difficulty predicates narrow
//!   together; each one is bypassed by its sentinel (empty term, `all`).
//! - **Empty criteria**: the whole catalog comes back in catalog order.
//! - **No match**: an unmatched term yields an empty list, never an error.
//! - **Order preservation**: survivors keep their catalog order.
//! - **Case-insensitivity**: the text predicate folds case but only inspects
//!   `title` and `summary`. Tool names never match on their own.
//! - **Property: intersection**: for random criteria over random catalogs,
//!   the combined result equals the intersection of the three single-predicate
//!   results and is an order-preserving subsequence of the input.
//!
//! # What this does NOT cover
//!
//! - Filter bar rendering and cursor reset (see folio-tui unit tests)
//!
//! # Running
//!
//! ```sh
//! cargo test --test filter_harness
//! ```

mod common;
use common::*;
use folio_core::{
    filter_projects, Catalog, DifficultyFilter, DomainFilter, FilterCriteria, Project,
    ProjectDifficulty,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn builtin() -> Catalog {
    Catalog::builtin()
}

// ---------------------------------------------------------------------------
// Text predicate
// ---------------------------------------------------------------------------

#[test]
fn healthcare_term_matches_only_the_cost_model() {
    let catalog = builtin();
    let found = filter_projects(catalog.projects(), &FilterCriteria::search("healthcare"));
    assert_titles!(found, ["Healthcare Cost Prediction Model"]);
}

#[test]
fn empty_criteria_return_the_whole_catalog_in_order() {
    let catalog = builtin();
    let found = filter_projects(catalog.projects(), &FilterCriteria::default());
    assert_eq!(titles(&found), BUILTIN_TITLES.to_vec());
}

#[test]
fn unmatched_term_returns_empty() {
    let catalog = builtin();
    let found = filter_projects(catalog.projects(), &FilterCriteria::search("zzz-nonexistent"));
    assert!(found.is_empty());
}

#[rstest]
#[case::upper("XGBOOST")]
#[case::lower("xgboost")]
#[case::mixed("XgBoOsT")]
fn text_match_folds_case(#[case] term: &str) {
    let catalog = builtin();
    let found = filter_projects(catalog.projects(), &FilterCriteria::search(term));
    // "XGBoost" appears in the churn summary
    assert_titles!(found, ["Customer Churn Prediction System"]);
}

#[rstest]
#[case::kafka("kafka")]
#[case::pytorch("PyTorch")]
#[case::spacy("spaCy")]
fn tool_only_terms_do_not_match(#[case] term: &str) {
    let catalog = builtin();
    let found = filter_projects(catalog.projects(), &FilterCriteria::search(term));
    assert!(found.is_empty(), "{term} matched {:?}", titles(&found));
}

#[test]
fn method_names_are_not_searched() {
    let catalog = catalog_with(
        vec![ProjectBuilder::new("a")
            .title("Plain")
            .summary("Nothing to see")
            .methods(&["Walk-forward Validation"])
            .build()],
        vec![SkillBuilder::new("s").build()],
    );
    let found = filter_projects(catalog.projects(), &FilterCriteria::search("walk-forward"));
    assert!(found.is_empty());
}

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

#[rstest]
#[case::healthcare("Healthcare", &["Healthcare Cost Prediction Model", "Image Classification: Medical X-Rays"])]
#[case::finance("Finance", &["Time Series Forecasting: Stock Prices"])]
#[case::unknown("Agriculture", &[])]
#[case::wrong_case("healthcare", &[])]
fn domain_is_exact_equality(#[case] domain: &str, #[case] expected: &[&str]) {
    let catalog = builtin();
    let criteria = FilterCriteria::new("", DomainFilter::parse(domain), DifficultyFilter::All);
    let found = filter_projects(catalog.projects(), &criteria);
    assert_eq!(titles(&found), expected.to_vec());
}

#[rstest]
#[case::beginner(ProjectDifficulty::Beginner, 0)]
#[case::intermediate(ProjectDifficulty::Intermediate, 2)]
#[case::advanced(ProjectDifficulty::Advanced, 4)]
fn difficulty_partitions_the_catalog(#[case] level: ProjectDifficulty, #[case] expected: usize) {
    let catalog = builtin();
    let criteria = FilterCriteria::new("", DomainFilter::All, DifficultyFilter::Is(level));
    let found = filter_projects(catalog.projects(), &criteria);
    assert_eq!(found.len(), expected);
    assert!(found.iter().all(|p| p.difficulty == level));
}

#[test]
fn advanced_healthcare_is_only_the_xray_classifier() {
    let catalog = builtin();
    let criteria = FilterCriteria::new(
        "",
        DomainFilter::parse("Healthcare"),
        DifficultyFilter::Is(ProjectDifficulty::Advanced),
    );
    let found = filter_projects(catalog.projects(), &criteria);
    assert_titles!(found, ["Image Classification: Medical X-Rays"]);
}

#[test]
fn all_three_predicates_narrow_together() {
    let catalog = builtin();
    let criteria = FilterCriteria::new(
        "prediction",
        DomainFilter::parse("Business"),
        DifficultyFilter::Is(ProjectDifficulty::Advanced),
    );
    let found = filter_projects(catalog.projects(), &criteria);
    assert_titles!(found, ["Customer Churn Prediction System"]);

    let criteria = FilterCriteria {
        difficulty: DifficultyFilter::Is(ProjectDifficulty::Beginner),
        ..criteria
    };
    assert!(filter_projects(catalog.projects(), &criteria).is_empty());
}

#[test]
fn filtering_is_idempotent_and_leaves_the_catalog_alone() {
    let catalog = builtin();
    let before = catalog.projects().to_vec();
    let criteria = FilterCriteria::search("model");
    let first = filter_projects(catalog.projects(), &criteria);
    let second = filter_projects(catalog.projects(), &criteria);
    assert_eq!(first, second);
    assert_eq!(catalog.projects(), before.as_slice());
    assert_order_preserving(&first, catalog.projects());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const DOMAINS: [&str; 3] = ["Business", "Healthcare", "Finance"];
const WORDS: [&str; 5] = ["churn", "Model", "forecast", "X-Ray", "pipeline"];

fn arb_difficulty() -> impl Strategy<Value = ProjectDifficulty> {
    prop_oneof![
        Just(ProjectDifficulty::Beginner),
        Just(ProjectDifficulty::Intermediate),
        Just(ProjectDifficulty::Advanced),
    ]
}

fn arb_catalog() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(
        (
            prop::sample::select(WORDS.to_vec()),
            prop::sample::select(WORDS.to_vec()),
            prop::sample::select(DOMAINS.to_vec()),
            arb_difficulty(),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, summary, domain, difficulty))| {
                ProjectBuilder::new(format!("p{i}"))
                    .title(format!("{title} {i}"))
                    .summary(format!("about {summary}"))
                    .domain(domain)
                    .difficulty(difficulty)
                    .build()
            })
            .collect()
    })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop_oneof![Just(String::new()), prop::sample::select(WORDS.to_vec()).prop_map(|w| w.to_uppercase())],
        prop_oneof![
            Just(DomainFilter::All),
            prop::sample::select(DOMAINS.to_vec()).prop_map(|d| DomainFilter::Is(d.to_string())),
        ],
        prop_oneof![
            Just(DifficultyFilter::All),
            arb_difficulty().prop_map(DifficultyFilter::Is),
        ],
    )
        .prop_map(|(term, domain, difficulty)| FilterCriteria::new(term, domain, difficulty))
}

proptest! {
    #[test]
    fn combined_result_is_intersection_of_single_predicates(
        projects in arb_catalog(),
        criteria in arb_criteria(),
    ) {
        let combined = filter_projects(&projects, &criteria);

        let by_text = filter_projects(&projects, &FilterCriteria::search(criteria.search_term.clone()));
        let by_domain = filter_projects(
            &projects,
            &FilterCriteria::new("", criteria.domain.clone(), DifficultyFilter::All),
        );
        let by_difficulty = filter_projects(
            &projects,
            &FilterCriteria::new("", DomainFilter::All, criteria.difficulty),
        );

        let intersection: Vec<&Project> = projects
            .iter()
            .filter(|p| {
                by_text.iter().any(|q| q.slug == p.slug)
                    && by_domain.iter().any(|q| q.slug == p.slug)
                    && by_difficulty.iter().any(|q| q.slug == p.slug)
            })
            .collect();

        prop_assert_eq!(&combined, &intersection);
        assert_order_preserving(&combined, &projects);
    }

    #[test]
    fn bypassed_criteria_return_everything(projects in arb_catalog()) {
        let found = filter_projects(&projects, &FilterCriteria::default());
        prop_assert_eq!(found.len(), projects.len());
    }
}
