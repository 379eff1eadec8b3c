//! # Generation Error Types Module
//!
//! This module defines the error taxonomy for recipe generation. Every
//! failure a generation attempt can produce maps onto exactly one variant,
//! and each variant maps onto a distinct user-facing notification.

/// Errors produced by the recipe generation pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Missing/empty credential or empty ingredient input, caught before
    /// any network call
    Configuration(String),
    /// The remote API rejected the supplied credential
    InvalidApiKey(String),
    /// The remote API reports an exhausted quota
    QuotaExceeded(String),
    /// The remote API is throttling requests
    RateLimited(String),
    /// The model reply was not valid JSON after fence stripping
    MalformedResponse(String),
    /// Any other transport or remote failure, message passed through
    Remote(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            GenerationError::InvalidApiKey(msg) => write!(f, "Invalid API key: {msg}"),
            GenerationError::QuotaExceeded(msg) => write!(f, "Quota exceeded: {msg}"),
            GenerationError::RateLimited(msg) => write!(f, "Rate limited: {msg}"),
            GenerationError::MalformedResponse(msg) => write!(f, "Malformed model response: {msg}"),
            GenerationError::Remote(msg) => write!(f, "Remote error: {msg}"),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Remote(err.to_string())
    }
}
