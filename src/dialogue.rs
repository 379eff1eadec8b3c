//! Recipe dialogue module for handling conversation state with users.
//!
//! The state machine mirrors the three mutually exclusive UI phases of the
//! generator (idle, loading, result shown) plus an initial credential-entry
//! phase. The API key lives only inside this in-memory state and is
//! discarded with it.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::recipe_model::RecipeSearchResult;
use crate::session::SessionContext;

/// A rendered result the chat is currently showing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayedRecipe {
    /// The ingredient text the result was generated from
    pub ingredient_text: String,
    /// The generated result
    pub result: RecipeSearchResult,
}

/// Represents the conversation state for the recipe dialogue
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum RecipeDialogueState {
    /// No credential yet; the next text message is treated as the API key
    #[default]
    Start,
    /// Credential configured, waiting for an ingredient list
    Ready {
        api_key: String,
        session: SessionContext,
    },
    /// A generation request is in flight; further input is asked to wait
    Generating {
        api_key: String,
        session: SessionContext,
        ingredient_text: String,
        /// Result to fall back to if the request fails
        previous: Option<DisplayedRecipe>,
    },
    /// A recipe is displayed with its action keyboard
    RecipeShown {
        api_key: String,
        session: SessionContext,
        shown: DisplayedRecipe,
    },
}

/// Type alias for our recipe dialogue
pub type RecipeDialogue = Dialogue<RecipeDialogueState, InMemStorage<RecipeDialogueState>>;

/// Validates an API key entered by the user
pub fn validate_api_key(key: &str) -> Result<String, &'static str> {
    let trimmed = key.trim();

    if trimmed.is_empty() {
        return Err("empty");
    }

    if trimmed.chars().any(char::is_whitespace) {
        return Err("whitespace");
    }

    if trimmed.len() > 200 {
        return Err("too_long");
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_validation() {
        // Valid keys
        assert!(validate_api_key("AIzaSyExample-Key_123").is_ok());
        assert!(validate_api_key("  AIzaSyExample  ").is_ok());

        // Invalid keys
        assert_eq!(validate_api_key(""), Err("empty"));
        assert_eq!(validate_api_key("   "), Err("empty"));
        assert_eq!(validate_api_key("two words"), Err("whitespace"));
        assert_eq!(validate_api_key(&"a".repeat(201)), Err("too_long"));
    }

    #[test]
    fn test_api_key_trimming() {
        let result = validate_api_key("  AIzaSyExample  ");
        assert_eq!(result.unwrap(), "AIzaSyExample");
    }
}
