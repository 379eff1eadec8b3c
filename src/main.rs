use anyhow::Result;
use log::info;
use std::env;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;

use pantrychef::bot;
use pantrychef::dialogue::RecipeDialogueState;
use pantrychef::localization::init_localization;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (tracing events and plain log records both land here)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting PantryChef Telegram bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Load user-facing strings
    init_localization()?;

    // Get bot token from environment
    let bot_token = env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");

    // Initialize the bot
    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with per-chat dialogue state
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .enter_dialogue::<Message, InMemStorage<RecipeDialogueState>, RecipeDialogueState>()
                .endpoint(bot::message_handler),
        )
        .branch(
            Update::filter_callback_query()
                .enter_dialogue::<CallbackQuery, InMemStorage<RecipeDialogueState>, RecipeDialogueState>()
                .endpoint(bot::callback_handler),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<RecipeDialogueState>::new()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
