//! # Generation Configuration Module
//!
//! This module defines configuration structures for the recipe generation
//! client: which Gemini model to call, where, and with which decoding
//! parameters.

// Constants for recipe generation
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEMPERATURE: f32 = 0.95;
pub const DEFAULT_TOP_P: f32 = 0.9;
pub const DEFAULT_TOP_K: u32 = 50;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Decoding parameters sent with every generation request
///
/// Tuned for high output diversity so repeated requests over the same
/// ingredients produce different recipes. There is deliberately no retry
/// or timeout here; a failed call surfaces immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodingConfig {
    /// Sampling temperature, near maximum for creativity
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    /// Top-k sampling cutoff
    pub top_k: u32,
    /// Output token budget
    pub max_output_tokens: u32,
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// Configuration for the Gemini-backed text model
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model identifier (e.g. "gemini-1.5-flash")
    pub model: String,
    /// Base URL of the generative language API
    pub base_url: String,
    /// Decoding parameters
    pub decoding: DecodingConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: API_BASE_URL.to_string(),
            decoding: DecodingConfig::default(),
        }
    }
}
