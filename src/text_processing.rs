//! # Text Processing Module
//!
//! This module provides the text processing utilities for the PantryChef
//! bot: splitting a free-text ingredient list into tokens, matching those
//! tokens against a generated recipe's ingredient lines, scoring the
//! overlap, and cleaning up model replies before JSON parsing.
//!
//! ## Features
//!
//! - Ingredient tokenization on commas, semicolons and the word "and"
//! - Case-insensitive, bidirectional substring matching between input
//!   tokens and recipe ingredient lines
//! - A clamped similarity score for display
//! - Markdown code-fence stripping for model replies

use lazy_static::lazy_static;
use regex::Regex;

/// Lower clamp of the similarity score
pub const MIN_SIMILARITY: f64 = 0.75;
/// Upper clamp of the similarity score
pub const MAX_SIMILARITY: f64 = 0.95;

// Separators between ingredient tokens: runs of commas/semicolons, or the
// standalone word "and" with whitespace on both sides.
const TOKEN_SEPARATOR_PATTERN: &str = r"(?i)[,;]+|\s+and\s+";

lazy_static! {
    static ref TOKEN_SEPARATOR: Regex =
        Regex::new(TOKEN_SEPARATOR_PATTERN).expect("Token separator pattern should be valid");
}

/// Split a raw ingredient string into lowercase tokens
///
/// Splits on commas, semicolons, or the literal word "and" surrounded by
/// whitespace; trims and lowercases each piece and drops empty ones.
/// Order is preserved and duplicates are kept.
///
/// # Examples
///
/// ```rust
/// use pantrychef::text_processing::tokenize_ingredients;
///
/// let tokens = tokenize_ingredients("chicken, broccoli and soy sauce");
/// assert_eq!(tokens, vec!["chicken", "broccoli", "soy sauce"]);
/// ```
pub fn tokenize_ingredients(input: &str) -> Vec<String> {
    TOKEN_SEPARATOR
        .split(input)
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Find which recipe ingredients match the user's input tokens
///
/// For each input token the recipe ingredient lines are scanned in order
/// for a case-insensitive substring relationship in either direction; the
/// first hit is recorded and scanning for that token stops. First match
/// wins, not best match, and two tokens may record the same recipe line.
///
/// # Arguments
///
/// * `input_tokens` - Tokenized user input (already lowercased)
/// * `recipe_ingredients` - Ingredient lines from the generated recipe
///
/// # Returns
///
/// Matched recipe-side ingredient strings in input-token order
pub fn find_matched_ingredients(
    input_tokens: &[String],
    recipe_ingredients: &[String],
) -> Vec<String> {
    let mut matches = Vec::new();

    for token in input_tokens {
        for recipe_ingredient in recipe_ingredients {
            let recipe_lower = recipe_ingredient.to_lowercase();
            if recipe_lower.contains(token.as_str()) || token.contains(&recipe_lower) {
                matches.push(recipe_ingredient.clone());
                break;
            }
        }
    }

    matches
}

/// Similarity score between the user's input and a generated recipe
///
/// `min(0.95, max(0.75, matches / max(input_len, recipe_len)))`. The
/// clamping means unrelated inputs still land on 0.75 and near-complete
/// overlap caps at 0.95; this is a display heuristic, not a measured
/// confidence.
pub fn similarity_score(match_count: usize, input_count: usize, recipe_count: usize) -> f64 {
    let denominator = input_count.max(recipe_count);
    if denominator == 0 {
        return MIN_SIMILARITY;
    }
    let ratio = match_count as f64 / denominator as f64;
    ratio.max(MIN_SIMILARITY).min(MAX_SIMILARITY)
}

/// Strip a single Markdown code fence wrapping a model reply
///
/// Removes a leading ```` ```json ```` or ```` ``` ```` fence and the
/// trailing ```` ``` ```` if present, so the remainder can be parsed
/// strictly as JSON. Anything else is returned trimmed but otherwise
/// untouched; there is intentionally no more lenient recovery than this.
///
/// # Examples
///
/// ```rust
/// use pantrychef::text_processing::strip_markdown_fence;
///
/// assert_eq!(strip_markdown_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_markdown_fence("{\"a\":1}"), "{\"a\":1}");
/// ```
pub fn strip_markdown_fence(reply: &str) -> &str {
    let trimmed = reply.trim();

    for fence in ["```json", "```"] {
        if let Some(body) = trimmed.strip_prefix(fence) {
            let body = body.strip_prefix('\n').unwrap_or(body);
            let body = match body.strip_suffix("```") {
                Some(inner) => inner.strip_suffix('\n').unwrap_or(inner),
                None => body,
            };
            return body.trim();
        }
    }

    trimmed
}
