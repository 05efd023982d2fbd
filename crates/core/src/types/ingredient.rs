//! Ingredient identity and per-recipe ingredient lines.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::{IngredientId, RecipeId};

/// Errors that can occur when building an [`IngredientKey`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IngredientKeyError {
    /// The ingredient name is empty.
    #[error("ingredient name cannot be empty")]
    EmptyName,
    /// The measurement unit is empty.
    #[error("measurement unit cannot be empty")]
    EmptyUnit,
    /// A field exceeds the catalogue column width.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Which field was too long.
        field: &'static str,
        /// Maximum allowed length.
        max: usize,
    },
}

/// The identity of an ingredient: its name together with its measurement unit.
///
/// "sugar (g)" and "sugar (tsp)" are different ingredients. Both fields are
/// case-sensitive free text.
///
/// Ordering is by name first and unit second, comparing strings byte-wise
/// (which for UTF-8 is code-point order).
///
/// ## Examples
///
/// ```
/// use foodgram_core::IngredientKey;
///
/// let grams = IngredientKey::new("Sugar", "g").unwrap();
/// let spoons = IngredientKey::new("Sugar", "tsp").unwrap();
/// assert_ne!(grams, spoons);
/// assert!(grams < spoons);
///
/// assert!(IngredientKey::new("", "g").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IngredientKey {
    /// Ingredient name.
    pub name: String,
    /// Measurement unit the amounts are expressed in.
    pub measurement_unit: String,
}

impl IngredientKey {
    /// Maximum length of either field, matching the catalogue schema.
    pub const MAX_LENGTH: usize = 200;

    /// Build a validated ingredient key.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn new(
        name: impl Into<String>,
        measurement_unit: impl Into<String>,
    ) -> Result<Self, IngredientKeyError> {
        let name = name.into();
        let measurement_unit = measurement_unit.into();

        if name.is_empty() {
            return Err(IngredientKeyError::EmptyName);
        }
        if measurement_unit.is_empty() {
            return Err(IngredientKeyError::EmptyUnit);
        }
        if name.chars().count() > Self::MAX_LENGTH {
            return Err(IngredientKeyError::TooLong {
                field: "name",
                max: Self::MAX_LENGTH,
            });
        }
        if measurement_unit.chars().count() > Self::MAX_LENGTH {
            return Err(IngredientKeyError::TooLong {
                field: "measurement_unit",
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self {
            name,
            measurement_unit,
        })
    }
}

impl fmt::Display for IngredientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.measurement_unit)
    }
}

/// An ingredient in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalogue ID.
    pub id: IngredientId,
    /// Ingredient name.
    pub name: String,
    /// Measurement unit.
    pub measurement_unit: String,
}

/// One ingredient used by one recipe, with the amount that recipe needs.
///
/// Amounts are validated to be at least 1 where lines enter the system; the
/// aggregation does not re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    /// Recipe this line belongs to.
    pub recipe_id: RecipeId,
    /// Ingredient identity.
    pub ingredient: IngredientKey,
    /// Amount in `ingredient.measurement_unit`.
    pub amount: u32,
}

/// One row of a shopping list: an ingredient and its summed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedLine {
    /// Ingredient identity.
    pub ingredient: IngredientKey,
    /// Sum of the amounts of every line with this identity.
    pub total_amount: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_rejects_empty_name() {
        assert_eq!(
            IngredientKey::new("", "g").unwrap_err(),
            IngredientKeyError::EmptyName
        );
    }

    #[test]
    fn test_key_rejects_empty_unit() {
        assert_eq!(
            IngredientKey::new("salt", "").unwrap_err(),
            IngredientKeyError::EmptyUnit
        );
    }

    #[test]
    fn test_key_rejects_too_long_name() {
        let err = IngredientKey::new("a".repeat(201), "g").unwrap_err();
        assert!(matches!(err, IngredientKeyError::TooLong { field: "name", .. }));
    }

    #[test]
    fn test_key_length_counts_characters() {
        // 200 Cyrillic characters are 400 bytes but still fit.
        assert!(IngredientKey::new("я".repeat(200), "г").is_ok());
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let lower = IngredientKey::new("sugar", "g").unwrap();
        let upper = IngredientKey::new("Sugar", "g").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_key_orders_by_name_then_unit() {
        let mut keys = vec![
            IngredientKey::new("Sugar", "tsp").unwrap(),
            IngredientKey::new("Flour", "g").unwrap(),
            IngredientKey::new("Sugar", "g").unwrap(),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["Flour (g)", "Sugar (g)", "Sugar (tsp)"]);
    }
}
