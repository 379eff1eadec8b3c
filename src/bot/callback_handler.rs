//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::io::Write;
use teloxide::prelude::*;
use teloxide::types::InputFile;
use tempfile::NamedTempFile;
use tracing::{debug, error};

// Import localization
use crate::localization::t_lang;

// Import dialogue types
use crate::dialogue::{DisplayedRecipe, RecipeDialogue, RecipeDialogueState};

use crate::export::{export_file_name, render_recipe_text};

// Import message handler functions
use super::message_handler::run_generation;

// Import UI builder constants
use super::ui_builder::{CALLBACK_DOWNLOAD, CALLBACK_NEW_SEARCH, CALLBACK_REGENERATE};

/// Send the currently shown recipe as a plain-text document
async fn send_recipe_download(
    bot: &Bot,
    chat_id: ChatId,
    shown: &DisplayedRecipe,
    language_code: Option<&str>,
) -> Result<()> {
    let document = render_recipe_text(&shown.result.recipe);

    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(document.as_bytes())?;

    let input = InputFile::file(temp_file.path().to_path_buf())
        .file_name(export_file_name(&shown.result.recipe));

    bot.send_document(chat_id, input)
        .caption(t_lang("download-caption", language_code))
        .await?;

    // The temp file stays on disk until temp_file drops, after the upload
    debug!(user_id = %chat_id, title = %shown.result.recipe.title, "Recipe exported");
    Ok(())
}

/// Handle callback queries from the recipe card keyboard
pub async fn callback_handler(bot: Bot, q: CallbackQuery, dialogue: RecipeDialogue) -> Result<()> {
    debug!(user_id = %q.from.id, "Received callback query from user");

    let language_code = q.from.language_code.as_deref();

    // Check dialogue state
    let dialogue_state = dialogue.get().await?.unwrap_or_default();

    match dialogue_state {
        RecipeDialogueState::RecipeShown {
            api_key,
            mut session,
            shown,
        } => {
            let data = q.data.as_deref().unwrap_or("");
            if let Some(msg) = &q.message {
                let chat_id = msg.chat().id;

                if data == CALLBACK_REGENERATE {
                    // Wipe the bookkeeping so the next prompt starts from a
                    // fresh counter; the previous recipe id travels along as
                    // an unenforced exclusion hint
                    session.clear();

                    let exclude_id = shown.result.recipe.id.clone();
                    let ingredient_text = shown.ingredient_text.clone();

                    run_generation(
                        &bot,
                        chat_id,
                        &dialogue,
                        language_code,
                        api_key,
                        session,
                        ingredient_text,
                        Some(exclude_id),
                        Some(shown),
                        "regenerating",
                    )
                    .await?;
                } else if data == CALLBACK_DOWNLOAD {
                    if let Err(e) = send_recipe_download(&bot, chat_id, &shown, language_code).await
                    {
                        error!(user_id = %q.from.id, error = %e, "Failed to send recipe download");
                        bot.send_message(chat_id, t_lang("download-failed", language_code))
                            .await?;
                    }
                    // Download does not change the dialogue state
                } else if data == CALLBACK_NEW_SEARCH {
                    bot.send_message(chat_id, t_lang("key-ready", language_code))
                        .await?;

                    dialogue
                        .update(RecipeDialogueState::Ready { api_key, session })
                        .await?;
                }
            }
        }
        RecipeDialogueState::Generating { .. } => {
            // Buttons are inert while a request is in flight
            if let Some(msg) = &q.message {
                bot.send_message(msg.chat().id, t_lang("generating-wait", language_code))
                    .await?;
            }
        }
        _ => {
            // Keyboard from a stale card; the recipe behind it is gone
            if let Some(msg) = &q.message {
                bot.send_message(msg.chat().id, t_lang("stale-keyboard", language_code))
                    .await?;
            }
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
