// pantry-planner - knows what's in your kitchen and what you still need
//
// This is the main entry point. Parses CLI args and dispatches to handlers.
// Every mutating command loads the store, applies one change and saves it.

use pantry_planner_lib::{
    auth::{AuthProvider, IdentityProvider},
    core::{format_time, RandomIdGenerator, RecipeSearcher},
    db::{PantryItem, RecipeDraft},
    intelligence::{match_percentage, Categorizer},
    logging, Config, Database, PantryError, Result, Store,
};
use std::env;
use std::sync::Arc;
use tracing::debug;

#[tokio::main]
async fn main() {
    logging::init();

    let args: Vec<String> = env::args().collect();

    if let Err(e) = run(&args).await {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];
    debug!("Running command '{}'", command);

    match command.as_str() {
        "recipes" => handle_recipes(&args[2..]).await,
        "recipe" => handle_recipe(&args[2..]).await,
        "add-recipe" => handle_add_recipe(&args[2..]).await,
        "delete-recipe" => handle_delete_recipe(&args[2..]).await,
        "pantry" => handle_pantry(&args[2..]).await,
        "add-pantry" => handle_add_pantry(&args[2..]).await,
        "remove-pantry" => handle_remove_pantry(&args[2..]).await,
        "suggest" => handle_suggest().await,
        "select" => handle_select(&args[2..]).await,
        "shop" => handle_shop(&args[2..]).await,
        "login" => handle_login().await,
        "logout" => handle_logout().await,
        "whoami" => handle_whoami().await,
        "status" => handle_status().await,
        "version" | "-v" | "--version" => {
            println!("pantry-planner v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

async fn handle_recipes(args: &[String]) -> Result<()> {
    let term = args.join(" ");
    let db = get_database().await?;
    let store = db.load_store().await?;

    let mut recipes = store.search_recipes(&term);
    if recipes.is_empty() && !term.is_empty() {
        // Nothing by substring, try a looser match
        recipes = RecipeSearcher::new()
            .fuzzy_search(store.recipes(), &term, 10)
            .into_iter()
            .map(|m| m.recipe)
            .collect();
    }

    if recipes.is_empty() {
        if term.is_empty() {
            println!("You don't have any recipes yet.");
        } else {
            println!("No recipes match '{}'", term);
        }
        return Ok(());
    }

    println!("\nYour recipes:");
    println!("{}", "=".repeat(60));
    for recipe in recipes {
        let marker = if store.is_selected_for_shopping(&recipe.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{} [{}] {} ({} ingredients)",
            marker,
            recipe.id,
            recipe.name,
            recipe.ingredients.len()
        );
    }
    println!("{}", "=".repeat(60));
    println!("* = selected for shopping");

    Ok(())
}

async fn handle_recipe(args: &[String]) -> Result<()> {
    let id = required_arg(args, "recipe id")?;
    let db = get_database().await?;
    let store = db.load_store().await?;

    let recipe = store
        .recipe(id)
        .ok_or_else(|| PantryError::RecipeNotFound(id.to_string()))?;
    let pantry_names: Vec<&str> = store
        .pantry_items()
        .iter()
        .map(|item| item.name.as_str())
        .collect();

    println!("\n{}", recipe.name);
    println!("{}", "=".repeat(60));
    if let Some(prep) = &recipe.prep_time {
        println!("Prep: {}", prep);
    }
    if let Some(cook) = &recipe.cook_time {
        println!("Cook: {}", cook);
    }
    println!(
        "You have {:.0}% of the ingredients",
        match_percentage(recipe, &pantry_names)
    );

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!(
            "  - {} {} {}",
            ingredient.quantity, ingredient.unit, ingredient.name
        );
    }

    println!("\nInstructions:");
    for instruction in &recipe.instructions {
        println!("  {}. {}", instruction.step, instruction.text);
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn handle_add_recipe(args: &[String]) -> Result<()> {
    let path = required_arg(args, "recipe JSON file")?;
    let raw = std::fs::read_to_string(path)?;
    let draft: RecipeDraft = serde_json::from_str(&raw)?;

    let db = get_database().await?;
    let store = db.load_store().await?;
    let store = store.add_recipe(draft, &mut RandomIdGenerator)?;
    db.save_store(&store).await?;

    if let Some(recipe) = store.recipes().last() {
        println!("Added '{}' with id {}", recipe.name, recipe.id);
    }

    Ok(())
}

async fn handle_delete_recipe(args: &[String]) -> Result<()> {
    let id = required_arg(args, "recipe id")?;
    let db = get_database().await?;
    let store = db.load_store().await?;

    if store.recipe(id).is_none() {
        return Err(PantryError::RecipeNotFound(id.to_string()));
    }

    let store = store.delete_recipe(id);
    db.save_store(&store).await?;
    println!("Deleted recipe {}", id);

    Ok(())
}

async fn handle_pantry(args: &[String]) -> Result<()> {
    let term = args.join(" ");
    let db = get_database().await?;
    let store = db.load_store().await?;

    println!("\nYour pantry ({} items):", store.pantry_items().len());
    println!("{}", "=".repeat(60));

    if term.is_empty() {
        if store.pantry_items().is_empty() {
            println!("Your pantry is empty");
        }
        let categorizer = Categorizer::new()?;
        for (category, items) in store.grouped_pantry(&categorizer) {
            println!("\n{}", category);
            for item in items {
                print_pantry_item(item);
            }
        }
    } else {
        let items = store.search_pantry(&term);
        if items.is_empty() {
            println!("No matching ingredients found");
        }
        for item in items {
            print_pantry_item(item);
        }
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

fn print_pantry_item(item: &PantryItem) {
    let amount = [item.quantity.as_deref(), item.unit.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if amount.is_empty() {
        println!("  [{}] {}", item.id, item.name);
    } else {
        println!("  [{}] {} ({})", item.id, item.name, amount);
    }
}

async fn handle_add_pantry(args: &[String]) -> Result<()> {
    let name = required_arg(args, "ingredient name")?;
    let quantity = args.get(1).cloned();
    let unit = args.get(2).cloned();

    let db = get_database().await?;
    let store = db.load_store().await?;
    let store = store.add_pantry_item(name, quantity, unit, &mut RandomIdGenerator)?;
    db.save_store(&store).await?;

    if let Some(item) = store.pantry_items().last() {
        println!("Added {} to your pantry", item.name);
    }

    Ok(())
}

async fn handle_remove_pantry(args: &[String]) -> Result<()> {
    let id = required_arg(args, "pantry item id")?;
    let db = get_database().await?;
    let store = db.load_store().await?;

    if !store.pantry_items().iter().any(|item| item.id == id) {
        return Err(PantryError::PantryItemNotFound(id.to_string()));
    }

    let store = store.delete_pantry_item(id);
    db.save_store(&store).await?;
    println!("Removed pantry item {}", id);

    Ok(())
}

async fn handle_suggest() -> Result<()> {
    let db = get_database().await?;
    let store = db.load_store().await?;

    if store.pantry_items().is_empty() {
        println!("Add ingredients to your pantry to get suggestions");
        return Ok(());
    }

    let suggestions = store.suggested_recipes();
    if suggestions.is_empty() {
        if store.recipes().is_empty() {
            println!("Add some recipes to get suggestions");
        } else {
            println!("No matches found with your current pantry items");
        }
        return Ok(());
    }

    println!(
        "\nRecipe suggestions (based on {} pantry items)",
        store.pantry_items().len()
    );
    println!("{}", "=".repeat(60));
    for (i, suggestion) in suggestions.iter().enumerate() {
        let recipe = &suggestion.recipe;
        println!(
            "\n{}. {} [{}] - {:.0}% match ({} of {} ingredients)",
            i + 1,
            recipe.name,
            recipe.id,
            suggestion.match_percentage(),
            suggestion.available_count,
            suggestion.total_count
        );
        let minutes = total_minutes(recipe.prep_time.as_deref(), recipe.cook_time.as_deref());
        if let Some(minutes) = minutes {
            println!("   Ready in about {}", format_time(minutes));
        }
    }
    println!("\n{}", "=".repeat(60));

    Ok(())
}

async fn handle_select(args: &[String]) -> Result<()> {
    let id = required_arg(args, "recipe id")?;
    let db = get_database().await?;
    let store = db.load_store().await?;

    let name = store
        .recipe(id)
        .map(|recipe| recipe.name.clone())
        .unwrap_or_else(|| id.to_string());
    let store = toggle_selection(&store, id)?;
    db.save_store(&store).await?;

    if store.is_selected_for_shopping(id) {
        println!("Added '{}' to your shopping selection", name);
    } else {
        println!("Removed '{}' from your shopping selection", name);
    }
    println!("Run 'pantry-planner shop generate' to update the list.");

    Ok(())
}

// Unknown ids can only be selected if they are already selected,
// which lets a deleted recipe be dropped from the selection.
fn toggle_selection(store: &Store, id: &str) -> Result<Store> {
    if store.recipe(id).is_none() && !store.is_selected_for_shopping(id) {
        return Err(PantryError::RecipeNotFound(id.to_string()));
    }
    Ok(store.toggle_recipe_for_shopping(id))
}

async fn handle_shop(args: &[String]) -> Result<()> {
    let action = args.first().map(String::as_str).unwrap_or("show");
    let db = get_database().await?;
    let store = db.load_store().await?;

    match action {
        "generate" => {
            let store = store.generate_shopping_list(&mut RandomIdGenerator);
            db.save_store(&store).await?;
            print_shopping_list(&store)
        }
        "clear" => {
            let store = store.clear_shopping_list();
            db.save_store(&store).await?;
            println!("Shopping list and selection cleared.");
            Ok(())
        }
        "show" => print_shopping_list(&store),
        other => {
            eprintln!("Unknown shop action: {} (use generate, clear or show)", other);
            Ok(())
        }
    }
}

fn print_shopping_list(store: &Store) -> Result<()> {
    let selected = store.selected_recipes();

    println!("\nShopping List");
    println!("{}", "=".repeat(60));
    if selected.is_empty() {
        println!("No recipes selected for shopping list");
    } else {
        let names: Vec<&str> = selected.iter().map(|r| r.name.as_str()).collect();
        println!("For recipes: {}", names.join(", "));
    }

    if store.shopping_list().is_empty() {
        if !selected.is_empty() {
            println!("\nRun 'pantry-planner shop generate' to create your shopping list");
        }
        println!("{}", "=".repeat(60));
        return Ok(());
    }

    let categorizer = Categorizer::new()?;
    for (category, items) in store.grouped_shopping_list(&categorizer) {
        println!("\n{}", category);
        for item in items {
            println!(
                "  [ ] {:<30} {} {}",
                item.name, item.quantity, item.unit
            );
        }
    }
    println!("\n{} items", store.shopping_list().len());
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn handle_login() -> Result<()> {
    let mut auth = get_auth().await?;

    if let Some(user) = auth.current_user() {
        println!("Already signed in as {} <{}>", user.name, user.email);
        return Ok(());
    }

    let user = auth.sign_in().await?;
    println!("Signed in as {} <{}>", user.name, user.email);

    Ok(())
}

async fn handle_logout() -> Result<()> {
    let mut auth = get_auth().await?;

    if !auth.is_authenticated() {
        println!("Not signed in.");
        return Ok(());
    }

    auth.sign_out().await?;
    println!("Signed out.");

    Ok(())
}

async fn handle_whoami() -> Result<()> {
    let auth = get_auth().await?;

    match auth.current_user() {
        Some(user) => {
            println!("{} <{}>", user.name, user.email);
            println!("id: {} (via {} sign-in)", user.id, auth.kind());
        }
        None => println!("Not signed in."),
    }

    Ok(())
}

async fn handle_status() -> Result<()> {
    let db = get_database().await?;
    let stats = db.stats().await?;

    println!("\npantry-planner Status");
    println!("{}", "=".repeat(60));
    println!("\nDatabase: {}", db.path().display());
    println!("  Recipes:          {}", stats.total_recipes);
    println!("  Pantry items:     {}", stats.total_pantry_items);
    println!("  Shopping items:   {}", stats.total_shopping_items);
    println!("  Selected recipes: {}", stats.selected_recipes);
    println!(
        "  Last saved:       {}",
        stats.last_updated.as_deref().unwrap_or("never")
    );
    println!("{}", "=".repeat(60));

    Ok(())
}

// Sum "10 minutes" + "15 minutes" style strings, if both parse
fn total_minutes(prep: Option<&str>, cook: Option<&str>) -> Option<u32> {
    let parse = |s: &str| s.split_whitespace().next()?.parse::<u32>().ok();
    let prep = prep.map(parse).unwrap_or(Some(0))?;
    let cook = cook.map(parse).unwrap_or(Some(0))?;
    let total = prep.checked_add(cook)?;
    (total > 0).then_some(total)
}

fn required_arg<'a>(args: &'a [String], what: &str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| PantryError::Generic(format!("Missing {}", what)))
}

async fn get_database() -> Result<Database> {
    let config = Config::load()?;
    Database::new(&config.db_path).await
}

async fn get_auth() -> Result<AuthProvider> {
    let config = Config::load()?;
    let db = Arc::new(Database::new(&config.db_path).await?);
    // No identity service is linked into the CLI build
    AuthProvider::select(&config, db, None).await
}

fn print_usage() {
    println!(
        r#"pantry-planner v{} - Cook with what you have, shop for what you don't

USAGE:
    pantry-planner <COMMAND> [OPTIONS]

COMMANDS:
    recipes [term]                  List recipes, optionally filtered by name
    recipe <id>                     Show a recipe
    add-recipe <file.json>          Add a recipe from a JSON file
    delete-recipe <id>              Delete a recipe
    pantry [term]                   List pantry items
    add-pantry <name> [qty] [unit]  Add an item to your pantry
    remove-pantry <id>              Remove an item from your pantry
    suggest                         Recipes you can (almost) make now
    select <id>                     Toggle a recipe for shopping
    shop [show|generate|clear]      Work with the shopping list
    login                           Sign in
    logout                          Sign out
    whoami                          Show the signed-in user
    status                          Show status and stats
    version                         Show version
    help                            Show this help

EXAMPLES:
    pantry-planner add-pantry eggs 6
    pantry-planner suggest
    pantry-planner select 1
    pantry-planner shop generate

ENVIRONMENT:
    PANTRY_DB_PATH       Database file (default: ~/.pantry-planner/pantry.db)
    PANTRY_IDENTITY_KEY  Publishable key for an external identity provider
    RUST_LOG             Log level, e.g. debug
"#,
        env!("CARGO_PKG_VERSION")
    );
}
