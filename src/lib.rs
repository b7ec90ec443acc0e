/// pantry-planner library
///
/// Recipes, pantry tracking, recipe suggestions and shopping lists.

pub mod auth;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod intelligence;
pub mod logging;

// Re-exports for convenience
pub use config::Config;
pub use core::Store;
pub use db::Database;
pub use error::{PantryError, Result};
