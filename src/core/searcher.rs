/// Recipe and pantry search
///
/// Plain case-insensitive substring filters for list views, plus fuzzy
/// recipe search for when the user can't quite spell "bolognese".

use crate::db::{PantryItem, Recipe};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;

/// Recipes whose name contains `term`, ignoring case. Empty term keeps all.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    let term = term.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| recipe.name.to_lowercase().contains(&term))
        .collect()
}

/// Pantry items whose name contains `term`, ignoring case
pub fn filter_pantry<'a>(items: &'a [PantryItem], term: &str) -> Vec<&'a PantryItem> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&term))
        .collect()
}

/// Fuzzy search hit
#[derive(Debug, Clone, Serialize)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub score: f64,
}

/// Handles recipe searching with fuzzy matching
pub struct RecipeSearcher {
    matcher: SkimMatcherV2,
}

impl Default for RecipeSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeSearcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Search recipe names with fuzzy matching
    ///
    /// # Arguments
    /// * `recipes` - Recipes to search
    /// * `query` - Search query
    /// * `limit` - Maximum results to return
    ///
    /// # Returns
    /// * Matches sorted by score, best first
    pub fn fuzzy_search<'a>(
        &self,
        recipes: &'a [Recipe],
        query: &str,
        limit: usize,
    ) -> Vec<RecipeMatch<'a>> {
        let mut results: Vec<RecipeMatch<'a>> = recipes
            .iter()
            .filter_map(|recipe| {
                self.matcher
                    .fuzzy_match(&recipe.name, query)
                    .map(|score| RecipeMatch {
                        recipe,
                        score: score as f64,
                    })
            })
            .collect();

        // Sort by score (highest first)
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        results.truncate(limit);

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::initial_recipes;

    #[test]
    fn test_filter_recipes() {
        let recipes = initial_recipes();

        let hits = filter_recipes(&recipes, "OMEL");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Classic Omelet");

        assert_eq!(filter_recipes(&recipes, "").len(), 3);
        assert!(filter_recipes(&recipes, "curry").is_empty());
    }

    #[test]
    fn test_filter_pantry() {
        let items = vec![
            PantryItem {
                id: "1".to_string(),
                name: "Olive Oil".to_string(),
                quantity: None,
                unit: None,
            },
            PantryItem {
                id: "2".to_string(),
                name: "rice".to_string(),
                quantity: None,
                unit: None,
            },
        ];

        let hits = filter_pantry(&items, "oil");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_fuzzy_search() {
        let recipes = initial_recipes();
        let searcher = RecipeSearcher::new();

        let results = searcher.fuzzy_search(&recipes, "carb", 10);
        assert!(!results.is_empty());
        assert_eq!(results[0].recipe.name, "Pasta Carbonara");
    }

    #[test]
    fn test_fuzzy_typo() {
        let recipes = initial_recipes();
        let searcher = RecipeSearcher::new();

        // Subsequence still matches
        let results = searcher.fuzzy_search(&recipes, "grnsld", 10);
        assert!(!results.is_empty());
        assert_eq!(results[0].recipe.name, "Simple Green Salad");
    }

    #[test]
    fn test_fuzzy_limit() {
        let recipes = initial_recipes();
        let searcher = RecipeSearcher::new();

        let results = searcher.fuzzy_search(&recipes, "a", 1);
        assert_eq!(results.len(), 1);
    }
}
