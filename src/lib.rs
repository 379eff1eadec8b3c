//! # PantryChef Telegram Bot
//!
//! A Telegram bot that turns a free-text ingredient list into an
//! AI-generated recipe via Google Gemini, renders it as a card with
//! regenerate/download actions, and keeps the user's API key only in
//! transient per-chat state.

pub mod bot;
pub mod dialogue;
pub mod export;
pub mod gemini;
pub mod generation;
pub mod generation_config;
pub mod generation_errors;
pub mod localization;
pub mod prompt;
pub mod recipe_model;
pub mod session;
pub mod text_processing;
