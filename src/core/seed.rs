// Starter recipes for a fresh install

use crate::db::{Ingredient, Instruction, Recipe};

fn ingredient(id: &str, name: &str, quantity: &str, unit: &str) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        quantity: quantity.to_string(),
        unit: unit.to_string(),
    }
}

fn step(id: &str, step: u32, text: &str) -> Instruction {
    Instruction {
        id: id.to_string(),
        step,
        text: text.to_string(),
    }
}

/// Recipes shown before the user has saved anything
pub fn initial_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            name: "Pasta Carbonara".to_string(),
            ingredients: vec![
                ingredient("1-1", "spaghetti", "200", "g"),
                ingredient("1-2", "bacon", "100", "g"),
                ingredient("1-3", "eggs", "2", ""),
                ingredient("1-4", "parmesan cheese", "50", "g"),
                ingredient("1-5", "black pepper", "1", "tsp"),
                ingredient("1-6", "salt", "1", "tsp"),
            ],
            instructions: vec![
                step("1-1", 1, "Boil pasta according to package instructions."),
                step("1-2", 2, "Fry bacon until crispy."),
                step("1-3", 3, "Beat eggs with grated parmesan."),
                step("1-4", 4, "Mix hot pasta with bacon, then quickly stir in egg mixture."),
                step("1-5", 5, "Season with pepper and serve immediately."),
            ],
            image: Some("https://images.unsplash.com/photo-1546549032-9571cd6b27df?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3".to_string()),
            prep_time: Some("10 minutes".to_string()),
            cook_time: Some("15 minutes".to_string()),
        },
        Recipe {
            id: "2".to_string(),
            name: "Classic Omelet".to_string(),
            ingredients: vec![
                ingredient("2-1", "eggs", "3", ""),
                ingredient("2-2", "milk", "2", "tbsp"),
                ingredient("2-3", "butter", "1", "tbsp"),
                ingredient("2-4", "cheese", "30", "g"),
                ingredient("2-5", "salt", "1", "pinch"),
                ingredient("2-6", "pepper", "1", "pinch"),
            ],
            instructions: vec![
                step("2-1", 1, "Whisk eggs, milk, salt, and pepper in a bowl."),
                step("2-2", 2, "Melt butter in a non-stick skillet over medium heat."),
                step("2-3", 3, "Pour in egg mixture and cook until almost set."),
                step("2-4", 4, "Sprinkle cheese on one half, fold omelet over, and cook until cheese melts."),
            ],
            image: Some("https://images.unsplash.com/photo-1579946812754-4dd13c4aa58d?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3".to_string()),
            prep_time: Some("5 minutes".to_string()),
            cook_time: Some("5 minutes".to_string()),
        },
        Recipe {
            id: "3".to_string(),
            name: "Simple Green Salad".to_string(),
            ingredients: vec![
                ingredient("3-1", "mixed greens", "200", "g"),
                ingredient("3-2", "cucumber", "1", ""),
                ingredient("3-3", "cherry tomatoes", "10", ""),
                ingredient("3-4", "olive oil", "2", "tbsp"),
                ingredient("3-5", "lemon juice", "1", "tbsp"),
                ingredient("3-6", "salt", "1", "pinch"),
                ingredient("3-7", "pepper", "1", "pinch"),
            ],
            instructions: vec![
                step("3-1", 1, "Wash and dry all greens and vegetables."),
                step("3-2", 2, "Slice cucumber and halve cherry tomatoes."),
                step("3-3", 3, "Mix olive oil and lemon juice to create dressing."),
                step("3-4", 4, "Combine all vegetables in a bowl, drizzle with dressing, and season with salt and pepper."),
            ],
            image: Some("https://images.unsplash.com/photo-1540420773420-3366772f4999?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3".to_string()),
            prep_time: Some("10 minutes".to_string()),
            cook_time: Some("0 minutes".to_string()),
        },
    ]
}
