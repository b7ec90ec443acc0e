/// Key-value queries and store persistence
///
/// Each collection lives under its own key as a JSON array. Missing keys
/// load as defaults, unreadable ones load as empty and get logged.

use crate::core::Store;
use crate::db::models::*;
use crate::db::Database;
use crate::error::Result;
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Storage key for the recipe collection
pub const RECIPES_KEY: &str = "recipes";
/// Storage key for pantry items
pub const PANTRY_ITEMS_KEY: &str = "pantryItems";
/// Storage key for the generated shopping list
pub const SHOPPING_LIST_KEY: &str = "shoppingList";
/// Storage key for the recipe ids picked for shopping
pub const SELECTED_RECIPES_KEY: &str = "selectedRecipesForShopping";
/// Storage key for the locally signed-in user
pub const USER_KEY: &str = "user";

impl Database {
    /// Read the raw text stored under `key`
    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(self.pool())
            .await?;

        Ok(value.map(|(v,)| v))
    }

    /// Store `value` under `key`, replacing whatever was there
    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Delete `key`. Returns whether anything was removed.
    pub async fn remove_item(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Load the full store
    ///
    /// With no saved recipes the starter recipes are used. Any collection
    /// that fails to parse comes back empty.
    pub async fn load_store(&self) -> Result<Store> {
        let recipes = match self.get_item(RECIPES_KEY).await? {
            Some(raw) => parse_or_empty::<Recipe>(RECIPES_KEY, &raw),
            None => crate::core::initial_recipes(),
        };
        let pantry_items = self.load_collection::<PantryItem>(PANTRY_ITEMS_KEY).await?;
        let shopping_list = self
            .load_collection::<ShoppingListItem>(SHOPPING_LIST_KEY)
            .await?;
        let selected = self.load_collection::<String>(SELECTED_RECIPES_KEY).await?;

        debug!(
            "Loaded {} recipes, {} pantry items, {} shopping items",
            recipes.len(),
            pantry_items.len(),
            shopping_list.len()
        );

        Ok(Store::new(recipes, pantry_items, shopping_list, selected))
    }

    /// Write all four collections in one transaction
    pub async fn save_store(&self, store: &Store) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let entries = [
            (RECIPES_KEY, serde_json::to_string(store.recipes())?),
            (PANTRY_ITEMS_KEY, serde_json::to_string(store.pantry_items())?),
            (SHOPPING_LIST_KEY, serde_json::to_string(store.shopping_list())?),
            (
                SELECTED_RECIPES_KEY,
                serde_json::to_string(store.selected_recipes_for_shopping())?,
            ),
        ];

        let mut tx = self.pool().begin().await?;
        for (key, value) in &entries {
            sqlx::query(
                r#"
                INSERT INTO kv_store (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(*key)
            .bind(value.as_str())
            .bind(now.as_str())
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(())
    }

    /// Counts for the status screen
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let store = self.load_store().await?;

        let (last_updated,): (Option<String>,) =
            sqlx::query_as("SELECT MAX(updated_at) FROM kv_store")
                .fetch_one(self.pool())
                .await?;

        Ok(DatabaseStats {
            total_recipes: store.recipes().len(),
            total_pantry_items: store.pantry_items().len(),
            total_shopping_items: store.shopping_list().len(),
            selected_recipes: store.selected_recipes_for_shopping().len(),
            last_updated,
        })
    }

    async fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        Ok(self
            .get_item(key)
            .await?
            .map(|raw| parse_or_empty(key, &raw))
            .unwrap_or_default())
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub total_recipes: usize,
    pub total_pantry_items: usize,
    pub total_shopping_items: usize,
    pub selected_recipes: usize,
    pub last_updated: Option<String>,
}

fn parse_or_empty<T: DeserializeOwned>(key: &str, raw: &str) -> Vec<T> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Stored '{}' is unreadable, starting empty: {}", key, e);
        Vec::new()
    })
}
