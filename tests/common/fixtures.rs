//! Fixed data shared across harnesses: the built-in catalog's titles in
//! catalog order, and small catalog documents for load tests.

/// Project titles of the built-in catalog, featured prefix first.
pub const BUILTIN_TITLES: [&str; 6] = [
    "Customer Churn Prediction System",
    "Real-Time Anomaly Detection Dashboard",
    "Healthcare Cost Prediction Model",
    "Sentiment Analysis of Product Reviews",
    "Time Series Forecasting: Stock Prices",
    "Image Classification: Medical X-Rays",
];

pub const BUILTIN_DOMAINS: [&str; 5] = ["Business", "IoT", "Healthcare", "E-commerce", "Finance"];

/// Smallest valid document: one project, one skill pointing at it.
pub const MINIMAL_DOC: &str = r#"
default_skill = "stats"

[[featured_projects]]
id = "1"
slug = "survey"
title = "Survey Analysis"
summary = "Descriptive statistics over a survey"
domain = "Research"
difficulty = "beginner"
outcome = "Published a report"

[[skills]]
slug = "stats"
title = "Statistics"
level = "practiced"
projects = ["survey"]

[skills.theory]
summary = "Describing data."
"#;

/// A skill referencing a project that does not exist.
pub const DANGLING_DOC: &str = r#"
default_skill = "stats"

[[projects]]
id = "1"
slug = "survey"
title = "Survey Analysis"
summary = "Descriptive statistics over a survey"
domain = "Research"
difficulty = "beginner"
outcome = "Published a report"

[[skills]]
slug = "stats"
title = "Statistics"
level = "practiced"
projects = ["survey", "ghost"]

[skills.theory]
summary = "Describing data."
"#;
