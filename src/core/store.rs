// In-memory state for recipes, pantry and shopping
//
// Every mutator returns a new Store and leaves the old one untouched.
// Callers persist the returned snapshot before applying the next change.

use crate::core::ids::IdGenerator;
use crate::core::searcher::{filter_pantry, filter_recipes};
use crate::core::seed::initial_recipes;
use crate::core::shopping::ShoppingListGenerator;
use crate::db::{
    PantryItem, PantryItemPatch, Recipe, RecipeDraft, RecipePatch, ShoppingListItem,
};
use crate::error::{PantryError, Result};
use crate::intelligence::{Categorizer, Category, ScoredRecipe, SuggestionEngine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Snapshot of everything the user has stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    recipes: Vec<Recipe>,
    pantry_items: Vec<PantryItem>,
    shopping_list: Vec<ShoppingListItem>,
    selected_recipes_for_shopping: Vec<String>,
}

impl Store {
    pub fn new(
        recipes: Vec<Recipe>,
        pantry_items: Vec<PantryItem>,
        shopping_list: Vec<ShoppingListItem>,
        selected_recipes_for_shopping: Vec<String>,
    ) -> Self {
        Self {
            recipes,
            pantry_items,
            shopping_list,
            selected_recipes_for_shopping,
        }
    }

    /// Fresh store with the starter recipes
    pub fn seeded() -> Self {
        Self {
            recipes: initial_recipes(),
            ..Default::default()
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn pantry_items(&self) -> &[PantryItem] {
        &self.pantry_items
    }

    pub fn shopping_list(&self) -> &[ShoppingListItem] {
        &self.shopping_list
    }

    pub fn selected_recipes_for_shopping(&self) -> &[String] {
        &self.selected_recipes_for_shopping
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn is_selected_for_shopping(&self, recipe_id: &str) -> bool {
        self.selected_recipes_for_shopping
            .iter()
            .any(|id| id == recipe_id)
    }

    /// Selected recipes that still exist, in recipe order
    pub fn selected_recipes(&self) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| self.is_selected_for_shopping(&r.id))
            .collect()
    }

    #[must_use = "the new snapshot must be kept"]
    pub fn add_recipe(&self, draft: RecipeDraft, ids: &mut dyn IdGenerator) -> Result<Store> {
        draft.validate()?;
        let recipe = draft.into_recipe(ids);
        debug!("Adding recipe {} ({})", recipe.name, recipe.id);

        let mut next = self.clone();
        next.recipes.push(recipe);
        Ok(next)
    }

    #[must_use = "the new snapshot must be kept"]
    pub fn update_recipe(&self, id: &str, patch: RecipePatch) -> Result<Store> {
        patch.validate()?;

        let mut next = self.clone();
        let recipe = next
            .recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| PantryError::RecipeNotFound(id.to_string()))?;
        patch.apply(recipe);
        debug!("Updated recipe {}", id);

        Ok(next)
    }

    /// Remove a recipe. Its id may stay selected; generation skips it.
    #[must_use = "the new snapshot must be kept"]
    pub fn delete_recipe(&self, id: &str) -> Store {
        let mut next = self.clone();
        next.recipes.retain(|r| r.id != id);
        next
    }

    #[must_use = "the new snapshot must be kept"]
    pub fn add_pantry_item(
        &self,
        name: &str,
        quantity: Option<String>,
        unit: Option<String>,
        ids: &mut dyn IdGenerator,
    ) -> Result<Store> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PantryError::InvalidPantryItem(
                "Ingredient name is required".to_string(),
            ));
        }

        let item = PantryItem {
            id: ids.next_id(),
            name: name.to_string(),
            quantity,
            unit,
        };
        debug!("Adding pantry item {} ({})", item.name, item.id);

        let mut next = self.clone();
        next.pantry_items.push(item);
        Ok(next)
    }

    #[must_use = "the new snapshot must be kept"]
    pub fn update_pantry_item(&self, id: &str, patch: PantryItemPatch) -> Result<Store> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(PantryError::InvalidPantryItem(
                    "Ingredient name is required".to_string(),
                ));
            }
        }

        let mut next = self.clone();
        let item = next
            .pantry_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| PantryError::PantryItemNotFound(id.to_string()))?;
        patch.apply(item);

        Ok(next)
    }

    #[must_use = "the new snapshot must be kept"]
    pub fn delete_pantry_item(&self, id: &str) -> Store {
        let mut next = self.clone();
        next.pantry_items.retain(|item| item.id != id);
        next
    }

    /// Add the recipe to the shopping selection, or drop it if already there.
    /// The shopping list itself is not regenerated.
    #[must_use = "the new snapshot must be kept"]
    pub fn toggle_recipe_for_shopping(&self, recipe_id: &str) -> Store {
        let mut next = self.clone();
        if next.is_selected_for_shopping(recipe_id) {
            next.selected_recipes_for_shopping
                .retain(|id| id != recipe_id);
        } else {
            next.selected_recipes_for_shopping
                .push(recipe_id.to_string());
        }
        next
    }

    /// Replace the shopping list with what the selection still needs
    #[must_use = "the new snapshot must be kept"]
    pub fn generate_shopping_list(&self, ids: &mut dyn IdGenerator) -> Store {
        let shopping_list = ShoppingListGenerator::generate(
            &self.selected_recipes_for_shopping,
            &self.recipes,
            &self.pantry_items,
            ids,
        );
        debug!(
            "Generated {} shopping items for {} selected recipes",
            shopping_list.len(),
            self.selected_recipes_for_shopping.len()
        );

        Store {
            shopping_list,
            ..self.clone()
        }
    }

    /// Empty the shopping list and the selection together
    #[must_use = "the new snapshot must be kept"]
    pub fn clear_shopping_list(&self) -> Store {
        Store {
            shopping_list: Vec::new(),
            selected_recipes_for_shopping: Vec::new(),
            ..self.clone()
        }
    }

    pub fn suggested_recipes(&self) -> Vec<ScoredRecipe> {
        SuggestionEngine::suggest(&self.recipes, &self.pantry_items)
    }

    pub fn grouped_shopping_list<'a>(
        &'a self,
        categorizer: &Categorizer,
    ) -> BTreeMap<Category, Vec<&'a ShoppingListItem>> {
        categorizer.categorize(&self.shopping_list)
    }

    /// Pantry items by store section
    pub fn grouped_pantry<'a>(
        &'a self,
        categorizer: &Categorizer,
    ) -> BTreeMap<Category, Vec<&'a PantryItem>> {
        categorizer.categorize(&self.pantry_items)
    }

    pub fn search_recipes(&self, term: &str) -> Vec<&Recipe> {
        filter_recipes(&self.recipes, term)
    }

    pub fn search_pantry(&self, term: &str) -> Vec<&PantryItem> {
        filter_pantry(&self.pantry_items, term)
    }
}
