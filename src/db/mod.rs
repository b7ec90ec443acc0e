/// Database module for pantry-planner
///
/// Persists the store as JSON collections in a SQLite key-value table.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
pub use queries::{
    DatabaseStats, PANTRY_ITEMS_KEY, RECIPES_KEY, SELECTED_RECIPES_KEY, SHOPPING_LIST_KEY,
    USER_KEY,
};
