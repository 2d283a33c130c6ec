//! Mock-data layer supplying entity records.
//!
//! All sample content lives in `fixtures/sample.json` and is replaceable
//! wholesale; the typed contracts in [`crate::model`] are the stable surface.
//! The demo binary can swap in records from disk via [`load_fixtures`].

use std::fs;
use std::path::Path;

use crate::model::EntityRecord;

/// Embedded sample records for the demo dashboard.
const SAMPLE_JSON: &str = include_str!("../fixtures/sample.json");

/// What: Parse the embedded sample records.
///
/// Output:
/// - All sample entities, in fixture order
///
/// Details:
/// - The embedded document failing to parse indicates a packaging defect;
///   the error is logged and an empty list substituted
#[must_use]
pub fn sample_entities() -> Vec<EntityRecord> {
    serde_json::from_str(SAMPLE_JSON).unwrap_or_else(|e| {
        tracing::error!("Embedded fixture data is invalid: {}", e);
        Vec::new()
    })
}

/// What: Load replacement records from a JSON file.
///
/// Inputs:
/// - `path`: File containing a JSON array of entity records
///
/// Output:
/// - `Result<Vec<EntityRecord>, String>` with parsed records or an error
///
/// # Errors
/// - Returns `Err` when the file cannot be read (I/O error)
/// - Returns `Err` when the content is not a JSON array of known records
///
/// Details:
/// - Unknown JSON fields inside a record are ignored; an unknown `kind` is an
///   error
pub fn load_fixtures(path: &Path) -> Result<Vec<EntityRecord>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read fixture file {}: {e}", path.display()))?;
    serde_json::from_str(&contents).map_err(|e| {
        format!(
            "Failed to parse fixture file {}: {}. Expected a JSON array of entity records.",
            path.display(),
            e
        )
    })
}
