// Groups shopping list entries into aisles
//
// Eight fixed categories, checked in order. First pattern that hits wins,
// anything left over goes to Other. Patterns are plain substring
// alternations, so "creamcheese" lands in dairy via "cream".

use crate::db::{PantryItem, ShoppingListItem};
use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

// Order matters here. Earlier categories win ties.
const CATEGORY_PATTERNS: &[(Category, &str)] = &[
    (
        Category::Produce,
        r"lettuce|spinach|kale|arugula|tomato|cucumber|carrot|onion|garlic|potato|bell pepper|broccoli|celery|avocado|mushroom|zucchini|squash|fruit|apple|banana|berry|berries|lemon|lime|orange",
    ),
    (
        Category::MeatAndSeafood,
        r"beef|chicken|pork|lamb|fish|salmon|tuna|shrimp|bacon|sausage|turkey|meat",
    ),
    (
        Category::DairyAndEggs,
        r"milk|cheese|yogurt|cream|butter|egg|dairy",
    ),
    (
        Category::GrainsAndPasta,
        r"pasta|rice|bread|flour|oats|cereal|grain",
    ),
    (
        Category::CannedAndJarred,
        r"canned|jar|sauce|soup|beans|legumes",
    ),
    (
        Category::SpicesAndCondiments,
        r"salt|pepper|spice|herb|oil|vinegar|condiment",
    ),
    (
        Category::Baking,
        r"sugar|baking powder|baking soda|vanilla|chocolate|cocoa",
    ),
];

/// Shopping aisle. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Produce,
    MeatAndSeafood,
    DairyAndEggs,
    GrainsAndPasta,
    CannedAndJarred,
    SpicesAndCondiments,
    Baking,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Produce,
        Category::MeatAndSeafood,
        Category::DairyAndEggs,
        Category::GrainsAndPasta,
        Category::CannedAndJarred,
        Category::SpicesAndCondiments,
        Category::Baking,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::MeatAndSeafood => "Meat & Seafood",
            Category::DairyAndEggs => "Dairy & Eggs",
            Category::GrainsAndPasta => "Grains & Pasta",
            Category::CannedAndJarred => "Canned & Jarred",
            Category::SpicesAndCondiments => "Spices & Condiments",
            Category::Baking => "Baking",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Anything with an ingredient name that can be put in an aisle
pub trait IngredientName {
    fn ingredient_name(&self) -> &str;
}

impl IngredientName for ShoppingListItem {
    fn ingredient_name(&self) -> &str {
        &self.name
    }
}

impl IngredientName for PantryItem {
    fn ingredient_name(&self) -> &str {
        &self.name
    }
}

pub struct Categorizer {
    patterns: Vec<(Category, Regex)>,
}

impl Categorizer {
    pub fn new() -> Result<Self> {
        // Compile once, reuse for every item
        let patterns = CATEGORY_PATTERNS
            .iter()
            .map(|(category, pattern)| {
                Regex::new(&format!("(?i){}", pattern)).map(|regex| (*category, regex))
            })
            .collect::<std::result::Result<Vec<_>, regex::Error>>()?;

        Ok(Self { patterns })
    }

    /// Category for a single ingredient name
    pub fn classify(&self, name: &str) -> Category {
        let name = name.to_lowercase();

        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(&name))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    /// Group items by category, keeping their order inside each group.
    /// Empty categories are left out.
    pub fn categorize<'a, T: IngredientName>(
        &self,
        items: &'a [T],
    ) -> BTreeMap<Category, Vec<&'a T>> {
        let mut groups: BTreeMap<Category, Vec<&'a T>> = BTreeMap::new();

        for item in items {
            groups
                .entry(self.classify(item.ingredient_name()))
                .or_default()
                .push(item);
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> ShoppingListItem {
        ShoppingListItem {
            id: name.to_string(),
            name: name.to_string(),
            quantity: "1".to_string(),
            unit: String::new(),
            recipe_id: "r".to_string(),
            recipe_name: "Recipe".to_string(),
        }
    }

    #[test]
    fn test_basic_grouping() {
        let categorizer = Categorizer::new().unwrap();
        let items = vec![item("chicken breast"), item("salt"), item("kiwi fruit")];

        let groups = categorizer.categorize(&items);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&Category::MeatAndSeafood][0].name, "chicken breast");
        assert_eq!(groups[&Category::SpicesAndCondiments][0].name, "salt");
        assert_eq!(groups[&Category::Produce][0].name, "kiwi fruit");
        assert!(!groups.contains_key(&Category::Other));
    }

    #[test]
    fn test_groups_pantry_items() {
        let categorizer = Categorizer::new().unwrap();
        let pantry = vec![
            PantryItem {
                id: "1".to_string(),
                name: "Eggs".to_string(),
                quantity: Some("6".to_string()),
                unit: None,
            },
            PantryItem {
                id: "2".to_string(),
                name: "tofu".to_string(),
                quantity: None,
                unit: None,
            },
        ];

        let groups = categorizer.categorize(&pantry);
        assert_eq!(groups[&Category::DairyAndEggs][0].id, "1");
        assert_eq!(groups[&Category::Other][0].id, "2");
    }

    #[test]
    fn test_empty_input() {
        let categorizer = Categorizer::new().unwrap();
        let items: Vec<ShoppingListItem> = Vec::new();
        assert!(categorizer.categorize(&items).is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let categorizer = Categorizer::new().unwrap();

        // "bell pepper" is produce before it is a spice
        assert_eq!(categorizer.classify("red bell pepper"), Category::Produce);
        assert_eq!(categorizer.classify("black pepper"), Category::SpicesAndCondiments);
        // "tomato sauce" hits produce before canned
        assert_eq!(categorizer.classify("tomato sauce"), Category::Produce);
        // "peanut butter" hits dairy through "butter"
        assert_eq!(categorizer.classify("peanut butter"), Category::DairyAndEggs);
        assert_eq!(categorizer.classify("chocolate chips"), Category::Baking);
    }

    #[test]
    fn test_substring_matching() {
        let categorizer = Categorizer::new().unwrap();

        assert_eq!(categorizer.classify("creamcheese"), Category::DairyAndEggs);
        assert_eq!(categorizer.classify("EGGS"), Category::DairyAndEggs);
        assert_eq!(categorizer.classify("brown rice"), Category::GrainsAndPasta);
        assert_eq!(categorizer.classify("jarred olives"), Category::CannedAndJarred);
    }

    #[test]
    fn test_fallback_to_other() {
        let categorizer = Categorizer::new().unwrap();

        assert_eq!(categorizer.classify("mixed greens"), Category::Other);
        assert_eq!(categorizer.classify("tofu"), Category::Other);
    }

    #[test]
    fn test_order_within_category_and_across_categories() {
        let categorizer = Categorizer::new().unwrap();
        let items = vec![
            item("tofu"),
            item("milk"),
            item("carrot"),
            item("butter"),
            item("onion"),
        ];

        let groups = categorizer.categorize(&items);
        let order: Vec<Category> = groups.keys().copied().collect();
        assert_eq!(
            order,
            vec![Category::Produce, Category::DairyAndEggs, Category::Other]
        );

        let dairy: Vec<&str> = groups[&Category::DairyAndEggs]
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(dairy, vec!["milk", "butter"]);
    }

    #[test]
    fn test_category_names() {
        let names: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names[1], "Meat & Seafood");
        assert_eq!(names[5], "Spices & Condiments");
        assert_eq!(names[7], "Other");
    }

    #[test]
    fn test_idempotent() {
        let categorizer = Categorizer::new().unwrap();
        let items = vec![item("flour"), item("garlic"), item("olive oil")];

        assert_eq!(categorizer.categorize(&items), categorizer.categorize(&items));
    }
}
