/// Error types for pantry-planner
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for pantry-planner operations
#[derive(Error, Debug)]
pub enum PantryError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A category pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// No recipe with the given id
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// No pantry item with the given id
    #[error("Pantry item not found: {0}")]
    PantryItemNotFound(String),

    /// Recipe failed validation
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// Pantry item failed validation
    #[error("Invalid pantry item: {0}")]
    InvalidPantryItem(String),

    /// Sign-in or sign-out failed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for pantry-planner operations
pub type Result<T> = std::result::Result<T, PantryError>;

/// Convert PantryError to a user-friendly error message
impl PantryError {
    pub fn user_message(&self) -> String {
        match self {
            PantryError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            PantryError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            PantryError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            PantryError::Pattern(e) => {
                format!("Ingredient categories could not be loaded: {}", e)
            }
            PantryError::RecipeNotFound(id) => {
                format!("Recipe '{}' not found", id)
            }
            PantryError::PantryItemNotFound(id) => {
                format!("Pantry item '{}' not found", id)
            }
            PantryError::InvalidRecipe(reason) => {
                format!("Recipe could not be saved: {}", reason)
            }
            PantryError::InvalidPantryItem(reason) => {
                format!("Pantry item could not be saved: {}", reason)
            }
            PantryError::Auth(msg) => {
                format!("Sign-in problem: {}", msg)
            }
            PantryError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            PantryError::Generic(msg) => msg.clone(),
        }
    }
}
