//! UI Builder module for formatting recipe cards and creating keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// Import localization
use crate::localization::{t_args_lang, t_lang};

use crate::dialogue::DisplayedRecipe;
use crate::generation::enhance_description;
use crate::generation_errors::GenerationError;

/// Callback data for the regenerate button
pub const CALLBACK_REGENERATE: &str = "regenerate";
/// Callback data for the download button
pub const CALLBACK_DOWNLOAD: &str = "download";
/// Callback data for the new-search button
pub const CALLBACK_NEW_SEARCH: &str = "new_search";

/// Format a generated recipe as a chat message
///
/// Shows the match badges, the description with the match percentage
/// appended, the ingredient list with matched lines marked, the numbered
/// instructions, and the cooking time and serving count.
pub fn format_recipe_card(shown: &DisplayedRecipe, language_code: Option<&str>) -> String {
    let result = &shown.result;
    let recipe = &result.recipe;
    let mut card = String::new();

    card.push_str(&format!("🍳 **{}**\n\n", recipe.title));

    card.push_str(&format!(
        "✨ {}: {}% • ✅ {} {}\n",
        t_lang("match-score", language_code),
        result.match_percent(),
        result.matched_ingredients.len(),
        t_lang("matched-ingredients", language_code),
    ));
    if let Some(trail) = result.graph_path.first() {
        card.push_str(&format!("🔎 {}\n", trail));
    }
    card.push('\n');

    card.push_str(&enhance_description(result));
    card.push_str("\n\n");

    card.push_str(&format!(
        "🥘 **{}**\n",
        t_lang("ingredients-section", language_code)
    ));
    for ingredient in &recipe.ingredients {
        if is_matched_ingredient(ingredient, &result.matched_ingredients) {
            card.push_str(&format!("• {} ✓\n", ingredient));
        } else {
            card.push_str(&format!("• {}\n", ingredient));
        }
    }
    card.push('\n');

    card.push_str(&format!(
        "👨‍🍳 **{}**\n",
        t_lang("instructions-section", language_code)
    ));
    for (index, step) in recipe.instructions.iter().enumerate() {
        card.push_str(&format!("{}. {}\n", index + 1, step));
    }
    card.push('\n');

    card.push_str(&format!(
        "⏱️ {}: {} • 🍽️ {}: {}",
        t_lang("cooking-time", language_code),
        recipe.cooking_time,
        t_lang("servings", language_code),
        recipe.servings,
    ));

    card
}

/// Whether an ingredient line was matched by the user's input
///
/// Same bidirectional substring check used when the match list was built,
/// so marking stays consistent with duplicated matches.
fn is_matched_ingredient(ingredient: &str, matched: &[String]) -> bool {
    let ingredient_lower = ingredient.to_lowercase();
    matched.iter().any(|m| {
        let matched_lower = m.to_lowercase();
        matched_lower.contains(&ingredient_lower) || ingredient_lower.contains(&matched_lower)
    })
}

/// Create the inline keyboard attached to every recipe card
pub fn create_recipe_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    let buttons = vec![
        vec![
            InlineKeyboardButton::callback(
                format!("🔄 {}", t_lang("btn-regenerate", language_code)),
                CALLBACK_REGENERATE.to_string(),
            ),
            InlineKeyboardButton::callback(
                format!("📥 {}", t_lang("btn-download", language_code)),
                CALLBACK_DOWNLOAD.to_string(),
            ),
        ],
        vec![InlineKeyboardButton::callback(
            format!("🔍 {}", t_lang("btn-new-search", language_code)),
            CALLBACK_NEW_SEARCH.to_string(),
        )],
    ];

    InlineKeyboardMarkup::new(buttons)
}

/// User-facing notification for a failed generation attempt
///
/// Every error class gets its own message; unclassified remote errors
/// carry the underlying message through verbatim.
pub fn generation_error_message(error: &GenerationError, language_code: Option<&str>) -> String {
    match error {
        GenerationError::Configuration(_) => t_lang("error-config", language_code),
        GenerationError::InvalidApiKey(_) => t_lang("error-invalid-key", language_code),
        GenerationError::QuotaExceeded(_) => t_lang("error-quota", language_code),
        GenerationError::RateLimited(_) => t_lang("error-rate-limit", language_code),
        GenerationError::MalformedResponse(_) => t_lang("error-bad-response", language_code),
        GenerationError::Remote(msg) => {
            t_args_lang("error-remote", &[("message", msg)], language_code)
        }
    }
}
