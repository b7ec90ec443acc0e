/// Core functionality modules
///
/// Contains the state container and the business logic for shopping
/// lists, search, ids and formatting.

pub mod format;
pub mod ids;
pub mod searcher;
pub mod seed;
pub mod shopping;
pub mod store;

pub use format::format_time;
pub use ids::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use searcher::{filter_pantry, filter_recipes, RecipeSearcher};
pub use seed::initial_recipes;
pub use shopping::ShoppingListGenerator;
pub use store::Store;
