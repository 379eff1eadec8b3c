//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles incoming text messages, commands and API key entry
//! - `callback_handler`: Handles the recipe card's inline keyboard buttons
//! - `ui_builder`: Formats recipe cards and creates keyboards

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use message_handler::run_generation;
pub use ui_builder::{create_recipe_keyboard, format_recipe_card, generation_error_message};
