/// Ingredient matching against the pantry
///
/// Matching is exact after normalisation: trim, then lowercase. No fuzzy
/// or partial-word matching, no unit conversion.

use crate::db::{PantryItem, Recipe};
use crate::intelligence::Scorer;
use std::collections::HashSet;

/// Canonical form used for every pantry lookup
pub fn normalize_ingredient(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive set of available ingredient names
#[derive(Debug, Clone, Default)]
pub struct PantryIndex {
    names: HashSet<String>,
}

impl PantryIndex {
    /// Build from plain ingredient names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| normalize_ingredient(n.as_ref()))
                .collect(),
        }
    }

    /// Build from pantry items
    pub fn from_pantry(items: &[PantryItem]) -> Self {
        Self::from_names(items.iter().map(|item| item.name.as_str()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize_ingredient(name))
    }

    /// Number of the recipe's ingredients present in the index
    pub fn count_matches(&self, recipe: &Recipe) -> usize {
        recipe
            .ingredients
            .iter()
            .filter(|ingredient| self.contains(&ingredient.name))
            .count()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Percentage (0-100) of the recipe's ingredients found in `available`
///
/// A recipe without ingredients scores 0.
pub fn match_percentage<S: AsRef<str>>(recipe: &Recipe, available: &[S]) -> f64 {
    let total = recipe.ingredients.len();
    if total == 0 {
        return 0.0;
    }

    let index = PantryIndex::from_names(available.iter().map(|s| s.as_ref()));
    Scorer::match_percentage(index.count_matches(recipe), total)
}
