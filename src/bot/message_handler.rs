//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use teloxide::prelude::*;
use tracing::{debug, error, info, warn};

// Import localization
use crate::localization::t_lang;

// Import dialogue types
use crate::dialogue::{validate_api_key, DisplayedRecipe, RecipeDialogue, RecipeDialogueState};

// Import generation types
use crate::generation::RecipeGenerator;
use crate::session::SessionContext;

// Import UI builder functions
use super::ui_builder::{create_recipe_keyboard, format_recipe_card, generation_error_message};

/// Run one generation attempt and drive the dialogue through it
///
/// Transitions the chat into the loading state, invokes the generator and
/// either shows the fresh recipe or reports the error and restores the
/// previous state. A failed attempt never clears an already displayed
/// recipe.
pub async fn run_generation(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &RecipeDialogue,
    language_code: Option<&str>,
    api_key: String,
    mut session: SessionContext,
    ingredient_text: String,
    exclude_id: Option<String>,
    previous: Option<DisplayedRecipe>,
    progress_key: &str,
) -> Result<()> {
    dialogue
        .update(RecipeDialogueState::Generating {
            api_key: api_key.clone(),
            session: session.clone(),
            ingredient_text: ingredient_text.clone(),
            previous: previous.clone(),
        })
        .await?;

    bot.send_message(chat_id, t_lang(progress_key, language_code))
        .await?;

    let generator = RecipeGenerator::new(api_key.clone());
    let mut rng = StdRng::from_entropy();

    match generator
        .search_recipes(&mut session, &ingredient_text, exclude_id.as_deref(), &mut rng)
        .await
    {
        Ok(result) => {
            info!(
                user_id = %chat_id,
                title = %result.recipe.title,
                match_count = result.matched_ingredients.len(),
                "Generation succeeded"
            );

            let shown = DisplayedRecipe {
                ingredient_text,
                result,
            };
            let card = format_recipe_card(&shown, language_code);
            let keyboard = create_recipe_keyboard(language_code);

            bot.send_message(chat_id, card)
                .reply_markup(keyboard)
                .await?;

            dialogue
                .update(RecipeDialogueState::RecipeShown {
                    api_key,
                    session,
                    shown,
                })
                .await?;
        }
        Err(e) => {
            error!(user_id = %chat_id, error = %e, "Generation failed");

            bot.send_message(chat_id, generation_error_message(&e, language_code))
                .await?;

            // Whatever was on screen before the attempt stays valid
            let restored = match previous {
                Some(shown) => RecipeDialogueState::RecipeShown {
                    api_key,
                    session,
                    shown,
                },
                None => RecipeDialogueState::Ready { api_key, session },
            };
            dialogue.update(restored).await?;
        }
    }

    Ok(())
}

async fn handle_api_key_entry(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &RecipeDialogue,
    text: &str,
    language_code: Option<&str>,
) -> Result<()> {
    match validate_api_key(text) {
        Ok(api_key) => {
            // Never log the key itself
            info!(user_id = %chat_id, "API key configured for chat");

            dialogue
                .update(RecipeDialogueState::Ready {
                    api_key,
                    session: SessionContext::new(),
                })
                .await?;

            let confirmation = format!(
                "{}\n\n{}",
                t_lang("key-saved", language_code),
                t_lang("key-ready", language_code)
            );
            bot.send_message(chat_id, confirmation).await?;
        }
        Err(reason) => {
            debug!(user_id = %chat_id, reason, "Rejected API key input");
            bot.send_message(chat_id, t_lang("key-invalid-format", language_code))
                .await?;
        }
    }
    Ok(())
}

async fn handle_text_message(bot: &Bot, msg: &Message, dialogue: RecipeDialogue) -> Result<()> {
    if let Some(text) = msg.text() {
        debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");

        // Extract user's language code from Telegram
        let language_code = msg
            .from
            .as_ref()
            .and_then(|user| user.language_code.as_ref())
            .map(|s| s.as_str());

        // Handle /start command
        if text == "/start" {
            let welcome_message = format!(
                "👋 **{}**\n\n{}\n\n{}\n{}",
                t_lang("welcome-title", language_code),
                t_lang("welcome-description", language_code),
                t_lang("welcome-key-prompt", language_code),
                t_lang("welcome-key-hint", language_code)
            );
            bot.send_message(msg.chat.id, welcome_message).await?;
            return Ok(());
        }
        // Handle /help command
        else if text == "/help" {
            let help_message = vec![
                t_lang("help-title", language_code),
                t_lang("help-step1", language_code),
                t_lang("help-step2", language_code),
                t_lang("help-step3", language_code),
                t_lang("help-step4", language_code),
                t_lang("help-commands", language_code),
            ]
            .join("\n\n");
            bot.send_message(msg.chat.id, help_message).await?;
            return Ok(());
        }
        // Handle /newkey command
        else if text == "/newkey" {
            dialogue.update(RecipeDialogueState::Start).await?;
            bot.send_message(msg.chat.id, t_lang("key-cleared", language_code))
                .await?;
            return Ok(());
        }
        // Unknown commands get a pointer to /help
        else if text.starts_with('/') {
            bot.send_message(msg.chat.id, t_lang("unknown-command", language_code))
                .await?;
            return Ok(());
        }

        // Plain text: meaning depends on the dialogue state
        let state = dialogue.get().await?.unwrap_or_default();
        match state {
            RecipeDialogueState::Start => {
                handle_api_key_entry(bot, msg.chat.id, &dialogue, text, language_code).await?;
            }
            RecipeDialogueState::Ready { api_key, session } => {
                if text.trim().is_empty() {
                    bot.send_message(msg.chat.id, t_lang("error-empty-ingredients", language_code))
                        .await?;
                } else {
                    run_generation(
                        bot,
                        msg.chat.id,
                        &dialogue,
                        language_code,
                        api_key,
                        session,
                        text.to_string(),
                        None,
                        None,
                        "generating",
                    )
                    .await?;
                }
            }
            RecipeDialogueState::RecipeShown {
                api_key,
                session,
                shown,
            } => {
                if text.trim().is_empty() {
                    bot.send_message(msg.chat.id, t_lang("error-empty-ingredients", language_code))
                        .await?;
                } else {
                    // New search from the result screen; keep the old recipe
                    // around in case this one fails
                    run_generation(
                        bot,
                        msg.chat.id,
                        &dialogue,
                        language_code,
                        api_key,
                        session,
                        text.to_string(),
                        None,
                        Some(shown),
                        "generating",
                    )
                    .await?;
                }
            }
            RecipeDialogueState::Generating { .. } => {
                warn!(user_id = %msg.chat.id, "Input received while a request is in flight");
                bot.send_message(msg.chat.id, t_lang("generating-wait", language_code))
                    .await?;
            }
        }
    }
    Ok(())
}

async fn handle_unsupported_message(bot: &Bot, msg: &Message) -> Result<()> {
    // Extract user's language code from Telegram
    let language_code = msg
        .from
        .as_ref()
        .and_then(|user| user.language_code.as_ref())
        .map(|s| s.as_str());

    debug!(user_id = %msg.chat.id, "Received unsupported message type from user");

    bot.send_message(msg.chat.id, t_lang("unsupported-message", language_code))
        .await?;
    Ok(())
}

pub async fn message_handler(bot: Bot, msg: Message, dialogue: RecipeDialogue) -> Result<()> {
    if msg.text().is_some() {
        handle_text_message(&bot, &msg, dialogue).await?;
    } else {
        handle_unsupported_message(&bot, &msg).await?;
    }

    Ok(())
}
