//! Shopping-list aggregation and rendering.
//!
//! Ingredient lines from every recipe in a cart are grouped by
//! [`IngredientKey`] (name *and* unit), summed, sorted, and rendered as the
//! plain-text document users download:
//!
//! ```text
//! Список покупок:␠
//!  Flour (g) — 200
//!  Sugar (g) — 150
//! ```
//!
//! `␠` marks the header's trailing space, which is part of the format. Lines
//! are joined with `\n` and the document has no trailing newline.
//!
//! Units are never converted. "sugar (g)" and "sugar (kg)" stay separate rows.

use std::collections::HashMap;
use std::fmt;

use crate::types::{AggregatedLine, IngredientKey, IngredientLine};

/// First line of every rendered shopping list (note the trailing space).
pub const SHOPPING_LIST_HEADER: &str = "Список покупок: ";

/// File name the rendered list is downloaded as.
pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.txt";

/// Content type of the rendered list.
pub const SHOPPING_LIST_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Group ingredient lines by identity and sum their amounts.
///
/// The result is sorted by ingredient name, then unit, so the output does not
/// depend on the order lines were supplied in. Lines repeating the same
/// ingredient within one recipe are summed like any other.
#[must_use]
pub fn aggregate<'a, I>(lines: I) -> Vec<AggregatedLine>
where
    I: IntoIterator<Item = &'a IngredientLine>,
{
    let mut totals: HashMap<&'a IngredientKey, u64> = HashMap::new();

    for line in lines {
        let total = totals.entry(&line.ingredient).or_insert(0);
        *total = total.saturating_add(u64::from(line.amount));
    }

    let mut aggregated: Vec<AggregatedLine> = totals
        .into_iter()
        .map(|(key, total_amount)| AggregatedLine {
            ingredient: key.clone(),
            total_amount,
        })
        .collect();

    // Keys are unique after grouping, so an unstable sort is still deterministic.
    aggregated.sort_unstable_by(|a, b| a.ingredient.cmp(&b.ingredient));
    aggregated
}

/// A computed shopping list.
///
/// Built fresh for every request and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    lines: Vec<AggregatedLine>,
}

impl ShoppingList {
    /// Aggregate ingredient lines into a shopping list.
    #[must_use]
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a IngredientLine>,
    {
        Self {
            lines: aggregate(lines),
        }
    }

    /// The aggregated rows, sorted by name then unit.
    #[must_use]
    pub fn lines(&self) -> &[AggregatedLine] {
        &self.lines
    }

    /// Number of distinct ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the list has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the list as the downloadable text document.
    ///
    /// An empty list renders as the header alone. No trailing newline is
    /// added.
    #[must_use]
    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.lines.len() + 1);
        parts.push(SHOPPING_LIST_HEADER.to_owned());
        parts.extend(self.lines.iter().map(|line| {
            format!(
                " {} ({}) — {}",
                line.ingredient.name, line.ingredient.measurement_unit, line.total_amount
            )
        }));
        parts.join("\n")
    }
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::RecipeId;

    fn line(recipe: i32, name: &str, unit: &str, amount: u32) -> IngredientLine {
        IngredientLine {
            recipe_id: RecipeId::new(recipe),
            ingredient: IngredientKey::new(name, unit).unwrap(),
            amount,
        }
    }

    fn triples(lines: &[AggregatedLine]) -> Vec<(&str, &str, u64)> {
        lines
            .iter()
            .map(|l| {
                (
                    l.ingredient.name.as_str(),
                    l.ingredient.measurement_unit.as_str(),
                    l.total_amount,
                )
            })
            .collect()
    }

    #[test]
    fn test_sums_and_sorts_by_name() {
        let lines = vec![
            line(1, "Sugar", "g", 100),
            line(1, "Flour", "g", 200),
            line(2, "Sugar", "g", 50),
        ];

        let list = ShoppingList::from_lines(&lines);

        assert_eq!(
            triples(list.lines()),
            [("Flour", "g", 200), ("Sugar", "g", 150)]
        );
        assert_eq!(
            list.render(),
            "Список покупок: \n Flour (g) — 200\n Sugar (g) — 150"
        );
    }

    #[test]
    fn test_empty_input_renders_header_only() {
        let lines: Vec<IngredientLine> = Vec::new();
        let list = ShoppingList::from_lines(&lines);
        assert!(list.is_empty());
        assert_eq!(list.render(), "Список покупок: ");
        assert_eq!(list.to_string(), SHOPPING_LIST_HEADER);
    }

    #[test]
    fn test_units_are_never_merged() {
        let lines = vec![
            line(1, "Sugar", "tsp", 2),
            line(2, "Sugar", "g", 100),
            line(3, "Sugar", "kg", 1),
        ];

        let result = aggregate(&lines);

        assert_eq!(
            triples(&result),
            [("Sugar", "g", 100), ("Sugar", "kg", 1), ("Sugar", "tsp", 2)]
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let lines = vec![line(1, "sugar", "g", 1), line(2, "Sugar", "g", 2)];
        let result = aggregate(&lines);
        // Uppercase sorts before lowercase in code-point order.
        assert_eq!(triples(&result), [("Sugar", "g", 2), ("sugar", "g", 1)]);
    }

    #[test]
    fn test_same_ingredient_twice_in_one_recipe_is_summed() {
        let lines = vec![line(1, "Eggs", "pcs", 2), line(1, "Eggs", "pcs", 3)];
        assert_eq!(triples(&aggregate(&lines)), [("Eggs", "pcs", 5)]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let lines = vec![
            line(1, "Milk", "ml", 200),
            line(1, "Butter", "g", 30),
            line(2, "Milk", "ml", 300),
            line(3, "Salt", "pinch", 1),
            line(3, "Butter", "g", 20),
        ];
        let mut reversed = lines.clone();
        reversed.reverse();
        let mut rotated = lines.clone();
        rotated.rotate_left(2);

        let expected = aggregate(&lines);
        assert_eq!(aggregate(&reversed), expected);
        assert_eq!(aggregate(&rotated), expected);
    }

    #[test]
    fn test_aggregating_twice_is_identical() {
        let lines = vec![
            line(1, "Рис", "г", 150),
            line(2, "Морковь", "шт", 2),
            line(2, "Рис", "г", 100),
        ];
        let first = ShoppingList::from_lines(&lines);
        let second = ShoppingList::from_lines(&lines);
        assert_eq!(first, second);
        assert_eq!(first.render(), second.render());
    }

    #[test]
    fn test_sorts_cyrillic_by_code_point() {
        let lines = vec![
            line(1, "яйца", "шт", 2),
            line(1, "вода", "мл", 500),
            line(1, "Apple", "pcs", 1),
        ];
        let list = ShoppingList::from_lines(&lines);
        assert_eq!(
            list.render(),
            "Список покупок: \n Apple (pcs) — 1\n вода (мл) — 500\n яйца (шт) — 2"
        );
    }

    #[test]
    fn test_totals_do_not_wrap_at_u32() {
        let lines = vec![line(1, "Water", "ml", u32::MAX), line(2, "Water", "ml", 1)];
        let result = aggregate(&lines);
        assert_eq!(result[0].total_amount, u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_large_cart_sums_every_recipe() {
        // 50 recipes, each using the same 10 ingredients with amount = recipe number.
        let mut lines = Vec::new();
        for recipe in 1..=50 {
            for ingredient in 0..10 {
                lines.push(line(
                    recipe,
                    &format!("ingredient-{ingredient}"),
                    "g",
                    u32::try_from(recipe).unwrap(),
                ));
            }
        }

        let list = ShoppingList::from_lines(&lines);

        assert_eq!(list.len(), 10);
        // 1 + 2 + ... + 50
        assert!(list.lines().iter().all(|l| l.total_amount == 1275));
        let names: Vec<&str> = list.lines().iter().map(|l| l.ingredient.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(list.render().lines().count(), 11);
    }

    #[test]
    fn test_render_line_shape() {
        let list = ShoppingList::from_lines(&[line(1, "Соль", "по вкусу", 1)]);
        let rendered = list.render();
        let data_line = rendered.lines().nth(1).unwrap();
        assert_eq!(data_line, " Соль (по вкусу) — 1");
        assert!(!rendered.ends_with('\n'));
    }
}
