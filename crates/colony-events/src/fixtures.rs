//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! ```ignore
//! // [dev-dependencies]
//! // colony-events = { path = "../colony-events", features = ["test-fixtures"] }
//!
//! let catalog = colony_events::fixtures::sample_catalog();
//! ```

use crate::InspirationDef;

/// Returns the sample catalog from the fixtures file.
///
/// Contains 4 definitions, deliberately out of label order:
/// - `insp_inspired` ("Inspired")
/// - `insp_frenzy` ("Frenzy Work", requires manual work)
/// - `insp_trade` ("inspired trade", requires social work)
/// - `insp_unlabelled` (no label)
pub fn sample_catalog() -> Vec<InspirationDef> {
    let json = include_str!("../tests/fixtures/sample_inspirations.json");
    serde_json::from_str(json).expect("Failed to parse sample_inspirations.json")
}

/// The two-entry catalog used by the filter-and-grant scenario.
pub fn scenario_catalog() -> Vec<InspirationDef> {
    vec![
        InspirationDef::new("insp_inspired", "Inspired"),
        InspirationDef::new("insp_frenzy", "Frenzy Work"),
    ]
}
