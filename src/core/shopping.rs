// Builds the shopping list from the recipes picked for shopping
//
// An ingredient is skipped when its name is anywhere in the pantry,
// whatever the quantity. Nothing is merged across recipes: two recipes
// that both need garlic give two garlic lines.

use crate::core::ids::IdGenerator;
use crate::db::{PantryItem, Recipe, ShoppingListItem};
use crate::intelligence::normalize_ingredient;
use std::collections::HashMap;

pub struct ShoppingListGenerator;

impl ShoppingListGenerator {
    /// Missing ingredients for the selected recipes
    ///
    /// # Arguments
    /// * `selected_ids` - Recipes marked for shopping. Unknown ids are skipped.
    /// * `recipes` - All recipes; their order is the output order
    /// * `pantry_items` - What the user already has
    /// * `ids` - Source of ids for the new list entries
    pub fn generate(
        selected_ids: &[String],
        recipes: &[Recipe],
        pantry_items: &[PantryItem],
        ids: &mut dyn IdGenerator,
    ) -> Vec<ShoppingListItem> {
        let selected: Vec<&Recipe> = recipes
            .iter()
            .filter(|recipe| selected_ids.contains(&recipe.id))
            .collect();

        // Later duplicates overwrite earlier ones; only presence matters
        let pantry_map: HashMap<String, &PantryItem> = pantry_items
            .iter()
            .map(|item| (normalize_ingredient(&item.name), item))
            .collect();

        let mut shopping_list = Vec::new();

        for recipe in selected {
            for ingredient in &recipe.ingredients {
                if pantry_map.contains_key(&normalize_ingredient(&ingredient.name)) {
                    continue;
                }

                shopping_list.push(ShoppingListItem {
                    id: ids.next_id(),
                    name: ingredient.name.clone(),
                    quantity: ingredient.quantity.clone(),
                    unit: ingredient.unit.clone(),
                    recipe_id: recipe.id.clone(),
                    recipe_name: recipe.name.clone(),
                });
            }
        }

        shopping_list
    }
}
