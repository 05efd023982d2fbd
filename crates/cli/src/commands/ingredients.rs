//! Ingredient fixture loading.
//!
//! Reads a JSON array such as
//!
//! ```json
//! [
//!   {"name": "абрикосовое варенье", "measurement_unit": "г"},
//!   {"name": "яйца куриные", "measurement_unit": "шт"}
//! ]
//! ```
//!
//! and inserts every ingredient not yet in the catalogue. The whole file is
//! validated before the database is touched.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use foodgram_api::db::IngredientRepository;
use foodgram_core::{IngredientKey, IngredientKeyError};

/// Errors that can occur while reading an ingredient fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry {index}: {source}")]
    InvalidIngredient {
        index: usize,
        #[source]
        source: IngredientKeyError,
    },
}

#[derive(Debug, Deserialize)]
struct IngredientRecord {
    name: String,
    measurement_unit: String,
}

/// Parse and validate a fixture document.
///
/// Surrounding whitespace in either field is trimmed.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or any entry is invalid.
pub fn parse_fixture(content: &str) -> Result<Vec<IngredientKey>, FixtureError> {
    let records: Vec<IngredientRecord> = serde_json::from_str(content)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            IngredientKey::new(record.name.trim(), record.measurement_unit.trim())
                .map_err(|source| FixtureError::InvalidIngredient { index, source })
        })
        .collect()
}

/// Load a fixture file into the ingredient catalogue.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the database
/// insert fails.
pub async fn load(path: &Path) -> Result<u64, Box<dyn std::error::Error>> {
    info!(path = %path.display(), "Loading ingredients from file");

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(FixtureError::from)?;
    let keys = parse_fixture(&content)?;
    info!(ingredients = keys.len(), "Parsed fixture");

    let pool = super::connect().await?;
    let inserted = IngredientRepository::new(&pool).insert_many(&keys).await?;

    let total = u64::try_from(keys.len()).unwrap_or(u64::MAX);
    info!(
        inserted,
        skipped = total.saturating_sub(inserted),
        "Ingredient load complete"
    );
    Ok(inserted)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture() {
        let keys = parse_fixture(
            r#"[
                {"name": "абрикосовое варенье", "measurement_unit": "г"},
                {"name": "яйца куриные", "measurement_unit": "шт"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            keys,
            vec![
                IngredientKey::new("абрикосовое варенье", "г").unwrap(),
                IngredientKey::new("яйца куриные", "шт").unwrap(),
            ]
        );
    }

    #[test]
    fn test_parse_fixture_trims_fields() {
        let keys = parse_fixture(r#"[{"name": " salt ", "measurement_unit": "g "}]"#).unwrap();
        assert_eq!(keys, vec![IngredientKey::new("salt", "g").unwrap()]);
    }

    #[test]
    fn test_parse_fixture_reports_invalid_entry() {
        let err = parse_fixture(
            r#"[
                {"name": "salt", "measurement_unit": "g"},
                {"name": "   ", "measurement_unit": "g"}
            ]"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            FixtureError::InvalidIngredient {
                index: 1,
                source: IngredientKeyError::EmptyName
            }
        ));
    }

    #[test]
    fn test_parse_fixture_rejects_missing_field() {
        let err = parse_fixture(r#"[{"name": "salt"}]"#).unwrap_err();
        assert!(matches!(err, FixtureError::Json(_)));
    }

    #[test]
    fn test_parse_fixture_empty_array() {
        assert!(parse_fixture("[]").unwrap().is_empty());
    }
}
