//! # Recipe Data Model
//!
//! This module defines the data structures for AI-generated recipes and the
//! search-style wrapper the bot renders from.
//!
//! ## Core Concepts
//!
//! - **Recipe**: One generated recipe with its ingredients, instructions and
//!   display metadata
//! - **RecipeSearchResult**: A recipe plus the ingredient-overlap bookkeeping
//!   computed against the user's input (match list, similarity score, trail)
//!
//! Both structures are serializable because they live inside per-chat
//! dialogue state between updates.

use serde::{Deserialize, Serialize};

/// Length of the legacy embedding vector attached to every recipe.
///
/// The vector carries no meaning anymore; downstream consumers of the old
/// interface shape still expect eight floats, so we keep filling it with
/// random values.
pub const RECIPE_VECTOR_LEN: usize = 8;

/// An AI-generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identifier derived from timestamp + random fraction + call counter.
    /// Unique enough for display purposes, not globally unique.
    pub id: String,

    /// Recipe title as returned by the model
    pub title: String,

    /// Free-text description of the dish
    pub description: String,

    /// Ordered ingredient lines, measurements included
    pub ingredients: Vec<String>,

    /// Ordered instruction steps
    pub instructions: Vec<String>,

    /// Unstructured cooking time (e.g. "25 minutes")
    pub cooking_time: String,

    /// Number of servings
    pub servings: u32,

    /// Legacy embedding slot, random values only
    pub vector: Vec<f64>,
}

/// A generated recipe together with the overlap computed against the
/// user's ingredient input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSearchResult {
    /// The generated recipe
    pub recipe: Recipe,

    /// Display heuristic in [0.75, 0.95], not a calibrated confidence
    pub similarity_score: f64,

    /// Recipe-side ingredient strings that matched the user's input,
    /// in input-token order. Always a by-value subset of
    /// `recipe.ingredients`.
    pub matched_ingredients: Vec<String>,

    /// Single descriptive trail entry for display
    pub graph_path: Vec<String>,
}

impl RecipeSearchResult {
    /// Percentage form of the similarity score, rounded for display.
    pub fn match_percent(&self) -> u32 {
        (self.similarity_score * 100.0).round() as u32
    }
}
