//! # Generation Session Module
//!
//! Per-chat bookkeeping for the recipe generator: the set of titles
//! produced so far and a monotonically increasing call counter. The title
//! set is record-only; nothing ever consults it to prevent duplicates, it
//! exists so a "regenerate" action can wipe it for a fresh start.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Session-scoped generation context, owned by the caller
///
/// The caller (the bot's dialogue state) holds one of these per chat and
/// passes it mutably into each generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    generated_titles: HashSet<String>,
    request_counter: u64,
}

impl SessionContext {
    /// Create an empty session context
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the call counter and return its new value
    pub fn begin_request(&mut self) -> u64 {
        self.request_counter += 1;
        self.request_counter
    }

    /// Record a generated title, case-folded
    pub fn record_title(&mut self, title: &str) {
        self.generated_titles.insert(title.to_lowercase());
    }

    /// Number of distinct titles recorded since the last clear
    pub fn generated_count(&self) -> usize {
        self.generated_titles.len()
    }

    /// Current value of the call counter
    pub fn request_counter(&self) -> u64 {
        self.request_counter
    }

    /// Reset the title set and call counter
    pub fn clear(&mut self) {
        self.generated_titles.clear();
        self.request_counter = 0;
    }
}
