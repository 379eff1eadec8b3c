//! # Recipe Export Module
//!
//! Renders a recipe as a plain-text document for download. The bot writes
//! the rendered text to a temporary file and sends it back as a Telegram
//! document.

use log::debug;

use crate::recipe_model::Recipe;

/// Render a recipe as a plain-text document
///
/// Sections appear in a fixed order: title, description, labeled
/// ingredients (one per line), labeled numbered instructions, cooking
/// time, serving count.
pub fn render_recipe_text(recipe: &Recipe) -> String {
    let mut document = String::new();

    document.push_str(&recipe.title);
    document.push_str("\n\n");
    document.push_str(&recipe.description);
    document.push_str("\n\nIngredients:\n");

    for ingredient in &recipe.ingredients {
        document.push_str("- ");
        document.push_str(ingredient);
        document.push('\n');
    }

    document.push_str("\nInstructions:\n");
    for (index, step) in recipe.instructions.iter().enumerate() {
        document.push_str(&format!("{}. {}\n", index + 1, step));
    }

    document.push_str(&format!("\nCooking Time: {}\n", recipe.cooking_time));
    document.push_str(&format!("Servings: {}\n", recipe.servings));

    debug!(
        "Rendered recipe '{}' to {} characters of text",
        recipe.title,
        document.len()
    );

    document
}

/// Build a safe download file name from the recipe title
///
/// Lowercases the title, maps anything that is not alphanumeric to a
/// hyphen, collapses runs and appends ".txt". Falls back to "recipe.txt"
/// for titles with no usable characters.
pub fn export_file_name(recipe: &Recipe) -> String {
    let mut slug = String::new();
    let mut last_was_hyphen = true;

    for c in recipe.title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "recipe.txt".to_string()
    } else {
        format!("{slug}.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "1".to_string(),
            title: "Smoky Chickpea Stew".to_string(),
            description: "A hearty stew.".to_string(),
            ingredients: vec!["2 cups chickpeas".to_string(), "1 onion".to_string()],
            instructions: vec!["Chop the onion".to_string(), "Simmer everything".to_string()],
            cooking_time: "45 minutes".to_string(),
            servings: 4,
            vector: vec![],
        }
    }

    #[test]
    fn test_sections_appear_in_order() {
        let text = render_recipe_text(&sample_recipe());

        let title_pos = text.find("Smoky Chickpea Stew").unwrap();
        let description_pos = text.find("A hearty stew.").unwrap();
        let ingredients_pos = text.find("Ingredients:").unwrap();
        let instructions_pos = text.find("Instructions:").unwrap();
        let time_pos = text.find("Cooking Time: 45 minutes").unwrap();
        let servings_pos = text.find("Servings: 4").unwrap();

        assert!(title_pos < description_pos);
        assert!(description_pos < ingredients_pos);
        assert!(ingredients_pos < instructions_pos);
        assert!(instructions_pos < time_pos);
        assert!(time_pos < servings_pos);
    }

    #[test]
    fn test_ingredients_are_listed_one_per_line() {
        let text = render_recipe_text(&sample_recipe());
        assert!(text.contains("- 2 cups chickpeas\n"));
        assert!(text.contains("- 1 onion\n"));
    }

    #[test]
    fn test_instructions_are_numbered() {
        let text = render_recipe_text(&sample_recipe());
        assert!(text.contains("1. Chop the onion\n"));
        assert!(text.contains("2. Simmer everything\n"));
    }

    #[test]
    fn test_file_name_is_slugified() {
        assert_eq!(
            export_file_name(&sample_recipe()),
            "smoky-chickpea-stew.txt"
        );
    }

    #[test]
    fn test_file_name_falls_back_for_unusable_titles() {
        let mut recipe = sample_recipe();
        recipe.title = "🍲🍲🍲".to_string();
        assert_eq!(export_file_name(&recipe), "recipe.txt");
    }
}
