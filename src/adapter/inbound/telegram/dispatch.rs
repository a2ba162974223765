//! Update dispatching for the Telegram frontend.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{BotCommand, MaybeInaccessibleMessage};
use tracing::{error, info, warn};

use crate::application::bot::{bot_commands, BotController};
use crate::domain::MessageRef;

/// Long-poll Telegram and route updates to `controller` until Ctrl-C.
pub async fn run(bot: Bot, controller: BotController, register_commands: bool) {
    if register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    info!("Telegram bot started");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(controller)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Telegram bot stopped");
}

async fn handle_message(msg: Message, controller: Arc<BotController>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if let Err(e) = controller.on_command(msg.chat.id.0, text).await {
        error!(chat_id = msg.chat.id.0, error = %e, "Failed to handle command");
    }
    Ok(())
}

async fn handle_callback(
    query: CallbackQuery,
    controller: Arc<BotController>,
) -> ResponseResult<()> {
    let message = query.message.as_ref().and_then(editable_message);
    let data = query.data.as_deref().unwrap_or_default();

    if let Err(e) = controller.on_button_press(&query.id, message, data).await {
        error!(error = %e, "Failed to handle button press");
    }
    Ok(())
}

/// Reference to a callback's message, if it can still be edited.
fn editable_message(message: &MaybeInaccessibleMessage) -> Option<MessageRef> {
    match message {
        MaybeInaccessibleMessage::Regular(msg) => Some(MessageRef::new(msg.chat.id.0, msg.id.0)),
        MaybeInaccessibleMessage::Inaccessible(_) => None,
    }
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
