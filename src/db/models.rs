/// Data models for recipes, pantry and shopping
///
/// Field names serialize in camelCase so stored collections keep the same
/// shape across versions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::ids::IdGenerator;
use crate::error::{PantryError, Result};

/// A single recipe ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

/// One numbered instruction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub id: String,
    pub step: u32,
    pub text: String,
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
}

impl Recipe {
    /// Append an ingredient with a fresh id
    pub fn add_ingredient(
        &mut self,
        name: &str,
        quantity: &str,
        unit: &str,
        ids: &mut dyn IdGenerator,
    ) -> &Ingredient {
        self.ingredients.push(Ingredient {
            id: ids.next_id(),
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        });
        &self.ingredients[self.ingredients.len() - 1]
    }

    /// Remove the ingredient at `index`. Out-of-range indices are ignored.
    pub fn remove_ingredient(&mut self, index: usize) -> Option<Ingredient> {
        if index < self.ingredients.len() {
            Some(self.ingredients.remove(index))
        } else {
            None
        }
    }

    /// Append an instruction as the next step. Earlier steps are
    /// renumbered so they stay 1..=N.
    pub fn add_instruction(&mut self, text: &str, ids: &mut dyn IdGenerator) -> &Instruction {
        let step = self.instructions.len() as u32 + 1;
        self.instructions.push(Instruction {
            id: ids.next_id(),
            step,
            text: text.to_string(),
        });
        self.renumber_instructions();
        &self.instructions[self.instructions.len() - 1]
    }

    /// Remove the instruction at `index` and renumber the remaining steps
    pub fn remove_instruction(&mut self, index: usize) -> Option<Instruction> {
        if index >= self.instructions.len() {
            return None;
        }
        let removed = self.instructions.remove(index);
        self.renumber_instructions();
        Some(removed)
    }

    /// Reset steps to 1..=N in list order
    pub fn renumber_instructions(&mut self) {
        for (idx, instruction) in self.instructions.iter_mut().enumerate() {
            instruction.step = idx as u32 + 1;
        }
    }
}

/// Ingredient as entered by the user, id optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

/// Instruction as entered by the user, id and step optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub step: Option<u32>,
    pub text: String,
}

/// New recipe before it has been assigned an id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientDraft>,
    #[serde(default)]
    pub instructions: Vec<InstructionDraft>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
}

impl RecipeDraft {
    /// Check names and instruction text before saving
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PantryError::InvalidRecipe(
                "Recipe name is required".to_string(),
            ));
        }
        validate_ingredient_names(self.ingredients.iter().map(|i| i.name.as_str()))?;
        validate_instruction_text(self.instructions.iter().map(|i| i.text.as_str()))
    }

    /// Turn the draft into a recipe, filling in any missing ids.
    /// A repeated id within the ingredient or instruction list is replaced.
    pub fn into_recipe(self, ids: &mut dyn IdGenerator) -> Recipe {
        let mut ingredient_ids = HashSet::new();
        let mut instruction_ids = HashSet::new();
        let mut recipe = Recipe {
            id: ids.next_id(),
            name: self.name,
            ingredients: self
                .ingredients
                .into_iter()
                .map(|draft| Ingredient {
                    id: fill_id(draft.id, &mut ingredient_ids, ids),
                    name: draft.name,
                    quantity: draft.quantity,
                    unit: draft.unit,
                })
                .collect(),
            instructions: self
                .instructions
                .into_iter()
                .map(|draft| Instruction {
                    id: fill_id(draft.id, &mut instruction_ids, ids),
                    step: draft.step.unwrap_or_default(),
                    text: draft.text,
                })
                .collect(),
            image: self.image,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
        };
        recipe.renumber_instructions();
        recipe
    }
}

/// Partial replacement for an existing recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePatch {
    pub name: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<Vec<Instruction>>,
    pub image: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
}

impl RecipePatch {
    /// Reject patches that would leave the recipe with blank fields
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(PantryError::InvalidRecipe(
                    "Recipe name is required".to_string(),
                ));
            }
        }
        if let Some(ingredients) = &self.ingredients {
            validate_ingredient_names(ingredients.iter().map(|i| i.name.as_str()))?;
            validate_unique_ids("ingredient", ingredients.iter().map(|i| i.id.as_str()))?;
        }
        if let Some(instructions) = &self.instructions {
            validate_instruction_text(instructions.iter().map(|i| i.text.as_str()))?;
            validate_unique_ids("instruction", instructions.iter().map(|i| i.id.as_str()))?;
        }
        Ok(())
    }

    /// Apply the set fields on top of `recipe`. The id never changes.
    pub fn apply(self, recipe: &mut Recipe) {
        if let Some(name) = self.name {
            recipe.name = name;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
            recipe.renumber_instructions();
        }
        if self.image.is_some() {
            recipe.image = self.image;
        }
        if self.prep_time.is_some() {
            recipe.prep_time = self.prep_time;
        }
        if self.cook_time.is_some() {
            recipe.cook_time = self.cook_time;
        }
    }
}

/// Something the user already has at home
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Partial replacement for a pantry item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItemPatch {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

impl PantryItemPatch {
    pub fn apply(self, item: &mut PantryItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if self.quantity.is_some() {
            item.quantity = self.quantity;
        }
        if self.unit.is_some() {
            item.unit = self.unit;
        }
    }
}

/// Missing ingredient on the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub recipe_id: String,
    pub recipe_name: String,
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

// Keep the given id unless it is empty or already taken in `used`
fn fill_id(id: Option<String>, used: &mut HashSet<String>, ids: &mut dyn IdGenerator) -> String {
    let mut id = match id {
        Some(id) if !id.is_empty() => id,
        _ => ids.next_id(),
    };
    while used.contains(&id) {
        id = ids.next_id();
    }
    used.insert(id.clone());
    id
}

fn validate_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PantryError::InvalidRecipe(format!(
                "Duplicate {} id '{}'",
                kind, id
            )));
        }
    }
    Ok(())
}

fn validate_ingredient_names<'a>(mut names: impl Iterator<Item = &'a str>) -> Result<()> {
    if names.any(|name| name.trim().is_empty()) {
        return Err(PantryError::InvalidRecipe(
            "All ingredients must have a name".to_string(),
        ));
    }
    Ok(())
}

fn validate_instruction_text<'a>(mut texts: impl Iterator<Item = &'a str>) -> Result<()> {
    if texts.any(|text| text.trim().is_empty()) {
        return Err(PantryError::InvalidRecipe(
            "All instruction steps must have text".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::SequentialIdGenerator;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            name: "Pancakes".to_string(),
            ingredients: vec![
                IngredientDraft {
                    id: Some("keep-me".to_string()),
                    name: "flour".to_string(),
                    quantity: "200".to_string(),
                    unit: "g".to_string(),
                },
                IngredientDraft {
                    id: None,
                    name: "milk".to_string(),
                    quantity: "300".to_string(),
                    unit: "ml".to_string(),
                },
            ],
            instructions: vec![
                InstructionDraft {
                    id: None,
                    step: Some(4),
                    text: "Mix".to_string(),
                },
                InstructionDraft {
                    id: Some(String::new()),
                    step: None,
                    text: "Fry".to_string(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_into_recipe_fills_ids_and_steps() {
        let mut ids = SequentialIdGenerator::new("t");
        let recipe = draft().into_recipe(&mut ids);

        assert_eq!(recipe.id, "t-1");
        assert_eq!(recipe.ingredients[0].id, "keep-me");
        assert_eq!(recipe.ingredients[1].id, "t-2");
        assert_eq!(recipe.instructions[1].id, "t-4");
        let steps: Vec<u32> = recipe.instructions.iter().map(|i| i.step).collect();
        assert_eq!(steps, vec![1, 2]);
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft().validate().is_ok());

        let mut blank_ingredient = draft();
        blank_ingredient.ingredients[1].name = "   ".to_string();
        assert!(matches!(
            blank_ingredient.validate(),
            Err(PantryError::InvalidRecipe(_))
        ));

        let mut blank_step = draft();
        blank_step.instructions[0].text = String::new();
        assert!(blank_step.validate().is_err());

        let mut no_name = draft();
        no_name.name = " ".to_string();
        assert!(no_name.validate().is_err());
    }

    #[test]
    fn test_instruction_steps_stay_contiguous() {
        let mut ids = SequentialIdGenerator::new("s");
        let mut recipe = draft().into_recipe(&mut ids);

        recipe.add_instruction("Serve", &mut ids);
        recipe.add_instruction("Eat", &mut ids);
        assert_eq!(recipe.instructions[3].step, 4);

        let removed = recipe.remove_instruction(1).unwrap();
        assert_eq!(removed.text, "Fry");
        let steps: Vec<u32> = recipe.instructions.iter().map(|i| i.step).collect();
        assert_eq!(steps, vec![1, 2, 3]);
        assert_eq!(recipe.instructions[1].text, "Serve");

        assert!(recipe.remove_instruction(10).is_none());
    }

    #[test]
    fn test_draft_duplicate_ids_replaced() {
        let mut ids = SequentialIdGenerator::new("d");
        let mut dup = draft();
        dup.ingredients[1].id = Some("keep-me".to_string());
        dup.instructions[0].id = Some("step".to_string());
        dup.instructions[1].id = Some("step".to_string());

        let recipe = dup.into_recipe(&mut ids);

        assert_eq!(recipe.ingredients[0].id, "keep-me");
        assert_ne!(recipe.ingredients[1].id, "keep-me");
        assert_eq!(recipe.instructions[0].id, "step");
        assert_ne!(recipe.instructions[1].id, "step");
    }

    #[test]
    fn test_generated_id_skips_supplied_one() {
        let mut ids = SequentialIdGenerator::new("g");
        let mut clash = draft();
        // g-1 goes to the recipe, so the next generated id would be g-2
        clash.ingredients[0].id = Some("g-2".to_string());

        let recipe = clash.into_recipe(&mut ids);
        assert_eq!(recipe.ingredients[0].id, "g-2");
        assert_eq!(recipe.ingredients[1].id, "g-3");
    }

    #[test]
    fn test_patch_rejects_duplicate_ids() {
        let ingredient = Ingredient {
            id: "a".to_string(),
            name: "flour".to_string(),
            quantity: "1".to_string(),
            unit: "cup".to_string(),
        };
        let patch = RecipePatch {
            ingredients: Some(vec![ingredient.clone(), ingredient]),
            ..Default::default()
        };
        assert!(matches!(patch.validate(), Err(PantryError::InvalidRecipe(_))));

        let step = Instruction {
            id: "s".to_string(),
            step: 1,
            text: "Stir".to_string(),
        };
        let patch = RecipePatch {
            instructions: Some(vec![step.clone(), step]),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_add_instruction_closes_step_gaps() {
        let mut ids = SequentialIdGenerator::new("n");
        let mut recipe = draft().into_recipe(&mut ids);
        recipe.instructions[0].step = 3;
        recipe.instructions[1].step = 8;

        let added = recipe.add_instruction("Serve", &mut ids);
        assert_eq!(added.step, 3);
        let steps: Vec<u32> = recipe.instructions.iter().map(|i| i.step).collect();
        assert_eq!(steps, vec![1, 2, 3]);
    }

    #[test]
    fn test_ingredient_add_remove() {
        let mut ids = SequentialIdGenerator::new("i");
        let mut recipe = draft().into_recipe(&mut ids);

        let added = recipe.add_ingredient("eggs", "2", "", &mut ids).clone();
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.remove_ingredient(2), Some(added));
        assert_eq!(recipe.remove_ingredient(5), None);
    }

    #[test]
    fn test_patch_renumbers_instructions() {
        let mut ids = SequentialIdGenerator::new("p");
        let mut recipe = draft().into_recipe(&mut ids);
        let patch = RecipePatch {
            name: Some("Crepes".to_string()),
            instructions: Some(vec![
                Instruction {
                    id: "a".to_string(),
                    step: 7,
                    text: "Whisk".to_string(),
                },
                Instruction {
                    id: "b".to_string(),
                    step: 9,
                    text: "Cook thin".to_string(),
                },
            ]),
            ..Default::default()
        };

        assert!(patch.validate().is_ok());
        patch.apply(&mut recipe);

        assert_eq!(recipe.name, "Crepes");
        assert_eq!(recipe.instructions[0].step, 1);
        assert_eq!(recipe.instructions[1].step, 2);
        assert_eq!(recipe.ingredients.len(), 2);
    }

    #[test]
    fn test_recipe_json_shape() {
        let mut ids = SequentialIdGenerator::new("j");
        let mut recipe = draft().into_recipe(&mut ids);
        recipe.prep_time = Some("10 minutes".to_string());

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["prepTime"], "10 minutes");
        assert!(json.get("cookTime").is_none());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_shopping_item_json_shape() {
        let item = ShoppingListItem {
            id: "x".to_string(),
            name: "flour".to_string(),
            quantity: "200".to_string(),
            unit: "g".to_string(),
            recipe_id: "1".to_string(),
            recipe_name: "Pancakes".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"recipeId\":\"1\""));
        assert!(json.contains("\"recipeName\":\"Pancakes\""));
    }

    #[test]
    fn test_pantry_item_patch() {
        let mut item = PantryItem {
            id: "1".to_string(),
            name: "rice".to_string(),
            quantity: None,
            unit: None,
        };

        PantryItemPatch {
            quantity: Some("2".to_string()),
            unit: Some("kg".to_string()),
            ..Default::default()
        }
        .apply(&mut item);

        assert_eq!(item.name, "rice");
        assert_eq!(item.quantity.as_deref(), Some("2"));
        assert_eq!(item.unit.as_deref(), Some("kg"));
    }
}
