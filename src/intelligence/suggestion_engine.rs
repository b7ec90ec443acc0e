/// Suggestion engine
///
/// Ranks recipes by how much of each one the pantry already covers.

use crate::db::{PantryItem, Recipe};
use crate::intelligence::{PantryIndex, Scorer};
use serde::Serialize;

/// Recipe with its pantry coverage
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Fraction of ingredients available, 0.0-1.0
    pub score: f64,
    pub available_count: usize,
    pub total_count: usize,
}

impl ScoredRecipe {
    /// Score as a 0-100 percentage for display
    pub fn match_percentage(&self) -> f64 {
        self.score * 100.0
    }
}

/// Suggestion engine
pub struct SuggestionEngine;

impl SuggestionEngine {
    /// Suggest recipes for the current pantry
    ///
    /// # Arguments
    /// * `recipes` - All known recipes
    /// * `pantry_items` - What the user has at home
    ///
    /// # Returns
    /// * Recipes with a non-zero score, best first. Equal scores keep
    ///   their input order.
    pub fn suggest(recipes: &[Recipe], pantry_items: &[PantryItem]) -> Vec<ScoredRecipe> {
        let index = PantryIndex::from_pantry(pantry_items);

        let mut scored: Vec<ScoredRecipe> = recipes
            .iter()
            .map(|recipe| Self::score_recipe(recipe, &index))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.retain(|s| s.score > 0.0);

        scored
    }

    /// Score a single recipe against a prebuilt index
    pub fn score_recipe(recipe: &Recipe, index: &PantryIndex) -> ScoredRecipe {
        let total_count = recipe.ingredients.len();
        let available_count = index.count_matches(recipe);

        ScoredRecipe {
            recipe: recipe.clone(),
            score: Scorer::match_fraction(available_count, total_count),
            available_count,
            total_count,
        }
    }
}
