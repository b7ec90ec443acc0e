/// Intelligence module
///
/// Pantry matching, recipe suggestions and shopping aisle categories.

pub mod categorizer;
pub mod matcher;
pub mod scorer;
pub mod suggestion_engine;

pub use categorizer::{Categorizer, Category, IngredientName};
pub use matcher::{match_percentage, normalize_ingredient, PantryIndex};
pub use scorer::Scorer;
pub use suggestion_engine::{ScoredRecipe, SuggestionEngine};
