//! # Recipe Generation Module
//!
//! This module turns a free-text ingredient string into a structured
//! `Recipe` via a hosted text model.
//!
//! ## Pipeline
//!
//! 1. Validate the credential and ingredient input (before any network)
//! 2. Pick random style facets and build the instruction prompt
//! 3. Call the text model with high-diversity decoding parameters
//! 4. Strip a Markdown fence from the reply and parse it strictly as JSON
//! 5. Assemble the `Recipe` and record its title in the session context
//!
//! The caller owns a `SessionContext` per chat and passes it into each
//! call; `SessionContext::clear` is the cache-reset used by "regenerate".

use chrono::Utc;
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::gemini::{GeminiModel, TextModel};
use crate::generation_errors::GenerationError;
use crate::prompt::{build_prompt, PromptStyle};
use crate::recipe_model::{Recipe, RecipeSearchResult, RECIPE_VECTOR_LEN};
use crate::session::SessionContext;
use crate::text_processing::{
    find_matched_ingredients, similarity_score, strip_markdown_fence, tokenize_ingredients,
};

/// Shape of the JSON object the model is instructed to reply with
#[derive(Debug, Deserialize)]
struct GeneratedRecipe {
    title: String,
    ingredients: Vec<String>,
    description: String,
    instructions: Vec<String>,
    #[serde(rename = "cookingTime")]
    cooking_time: String,
    servings: u32,
}

/// Client that generates recipes through a text model
pub struct RecipeGenerator {
    api_key: String,
    model: Box<dyn TextModel>,
}

impl RecipeGenerator {
    /// Create a generator backed by the Gemini API
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = Box::new(GeminiModel::new(api_key.clone()));
        Self { api_key, model }
    }

    /// Create a generator with an explicit text model backend
    ///
    /// This is the seam tests use to supply a stub model.
    pub fn with_model(api_key: impl Into<String>, model: Box<dyn TextModel>) -> Self {
        Self {
            api_key: api_key.into(),
            model,
        }
    }

    /// Generate one recipe for the given ingredient text
    ///
    /// `exclude_id` is accepted for interface compatibility but does not
    /// influence facet selection or filter the output; the model is only
    /// asked, in prose, not to repeat itself.
    ///
    /// # Arguments
    ///
    /// * `session` - Per-chat bookkeeping (call counter, title set)
    /// * `ingredient_text` - Raw user input, embedded verbatim in the prompt
    /// * `exclude_id` - Unenforced exclusion hint, see above
    /// * `rng` - Randomness source for facets, request id and the legacy vector
    ///
    /// # Errors
    ///
    /// `Configuration` when the credential or input is empty (no network
    /// call is made), `MalformedResponse` when the reply is not valid JSON
    /// after fence stripping, and the remote error classes from the model
    /// backend otherwise.
    pub async fn generate<R: Rng + Send>(
        &self,
        session: &mut SessionContext,
        ingredient_text: &str,
        exclude_id: Option<&str>,
        rng: &mut R,
    ) -> Result<Recipe, GenerationError> {
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::Configuration(
                "A Google API key is required".to_string(),
            ));
        }

        let ingredient_text = ingredient_text.trim();
        if ingredient_text.is_empty() {
            return Err(GenerationError::Configuration(
                "Ingredient list must not be empty".to_string(),
            ));
        }

        if let Some(id) = exclude_id {
            // Compatibility hint only; nothing downstream consumes it.
            debug!(exclude_id = %id, "Exclusion hint received and ignored");
        }

        let request_number = session.begin_request();
        let style = PromptStyle::pick(rng);
        let request_id = new_request_id(rng, request_number);
        let vector: Vec<f64> = (0..RECIPE_VECTOR_LEN).map(|_| rng.gen::<f64>()).collect();

        let prompt = build_prompt(ingredient_text, &style, &request_id);
        debug!(
            request_number,
            cuisine = style.cuisine,
            method = style.method,
            dish = style.dish,
            "Built generation prompt"
        );

        let reply = self.model.generate_text(&prompt).await?;

        let cleaned = strip_markdown_fence(&reply);
        let parsed: GeneratedRecipe = serde_json::from_str(cleaned).map_err(|e| {
            warn!(error = %e, reply_chars = reply.len(), "Model reply was not a valid recipe object");
            GenerationError::MalformedResponse(e.to_string())
        })?;

        let recipe = Recipe {
            id: request_id,
            title: parsed.title,
            description: parsed.description,
            ingredients: parsed.ingredients,
            instructions: parsed.instructions,
            cooking_time: parsed.cooking_time,
            servings: parsed.servings,
            vector,
        };

        session.record_title(&recipe.title);
        info!(title = %recipe.title, "Generated recipe");

        Ok(recipe)
    }

    /// Generate a recipe and compute the overlap against the user's input
    ///
    /// Wraps `generate` and adds tokenization, ingredient matching, the
    /// clamped similarity score and the one-element descriptive trail.
    pub async fn search_recipes<R: Rng + Send>(
        &self,
        session: &mut SessionContext,
        ingredient_text: &str,
        exclude_id: Option<&str>,
        rng: &mut R,
    ) -> Result<RecipeSearchResult, GenerationError> {
        let recipe = self
            .generate(session, ingredient_text, exclude_id, rng)
            .await?;

        let input_tokens = tokenize_ingredients(ingredient_text);
        let matched_ingredients = find_matched_ingredients(&input_tokens, &recipe.ingredients);
        let score = similarity_score(
            matched_ingredients.len(),
            input_tokens.len(),
            recipe.ingredients.len(),
        );

        let graph_path = vec![format!(
            "{} → AI Generated Recipe",
            input_tokens.join(", ")
        )];

        Ok(RecipeSearchResult {
            recipe,
            similarity_score: score,
            matched_ingredients,
            graph_path,
        })
    }
}

/// Description of a result with the match percentage appended
///
/// The display layer shows this instead of the raw model description.
pub fn enhance_description(result: &RecipeSearchResult) -> String {
    format!(
        "{} This recipe is {}% matched to your available ingredients.",
        result.recipe.description,
        result.match_percent()
    )
}

// Request ids sum the wall-clock milliseconds, a random fraction and the
// session counter, then string-encode the total. Not globally unique.
fn new_request_id<R: Rng + ?Sized>(rng: &mut R, request_number: u64) -> String {
    let millis = Utc::now().timestamp_millis();
    let composite = millis as f64 + rng.gen::<f64>() + request_number as f64;
    composite.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_request_ids_reflect_the_timestamp() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = new_request_id(&mut rng, 1);
        let value: f64 = id.parse().unwrap();
        assert!(value > 1_000_000_000_000.0);
    }

    #[test]
    fn test_enhanced_description_appends_match_percent() {
        let result = RecipeSearchResult {
            recipe: Recipe {
                id: "1".to_string(),
                title: "t".to_string(),
                description: "A cozy stew.".to_string(),
                ingredients: vec![],
                instructions: vec![],
                cooking_time: "1 hour".to_string(),
                servings: 4,
                vector: vec![],
            },
            similarity_score: 0.8,
            matched_ingredients: vec![],
            graph_path: vec![],
        };
        assert_eq!(
            enhance_description(&result),
            "A cozy stew. This recipe is 80% matched to your available ingredients."
        );
    }
}
