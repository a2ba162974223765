//! [`ChatSurface`] implementation backed by the Telegram Bot API.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode};
use teloxide::{ApiError, RequestError};

use crate::domain::{MarkupHints, MessageRef, TextFormat};
use crate::error::{Error, Result};
use crate::port::ChatSurface;

/// Sends and edits messages through a teloxide [`Bot`].
#[derive(Clone)]
pub struct TelegramSurface {
    bot: Bot,
}

impl TelegramSurface {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatSurface for TelegramSurface {
    async fn send_text(&self, chat_id: i64, text: &str, hints: &MarkupHints) -> Result<MessageRef> {
        let mut request = self.bot.send_message(ChatId(chat_id), text);
        if let Some(mode) = parse_mode(hints) {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = keyboard(hints) {
            request = request.reply_markup(keyboard);
        }
        let sent = request.await?;
        Ok(MessageRef::new(sent.chat.id.0, sent.id.0))
    }

    async fn edit_text(&self, message: MessageRef, text: &str, hints: &MarkupHints) -> Result<()> {
        let mut request = self.bot.edit_message_text(
            ChatId(message.chat_id),
            MessageId(message.message_id),
            text,
        );
        if let Some(mode) = parse_mode(hints) {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = keyboard(hints) {
            request = request.reply_markup(keyboard);
        }
        request.await.map_err(edit_error)?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: &str) -> Result<()> {
        let mut request = self.bot.answer_callback_query(callback_id.to_string());
        if !text.is_empty() {
            request = request.text(text);
        }
        request.await?;
        Ok(())
    }
}

/// Refusals to edit become [`Error::Delivery`]; other failures stay
/// Telegram errors.
fn edit_error(error: RequestError) -> Error {
    match error {
        RequestError::Api(ApiError::MessageNotModified) => {
            Error::Delivery("message is not modified".to_string())
        }
        RequestError::Api(ApiError::MessageToEditNotFound) => {
            Error::Delivery("message to edit not found".to_string())
        }
        other => other.into(),
    }
}

fn parse_mode(hints: &MarkupHints) -> Option<ParseMode> {
    match hints.format {
        TextFormat::Html => Some(ParseMode::Html),
        TextFormat::Plain => None,
    }
}

/// Single-row inline keyboard, or `None` when there are no buttons.
fn keyboard(hints: &MarkupHints) -> Option<InlineKeyboardMarkup> {
    if hints.buttons.is_empty() {
        return None;
    }
    let row: Vec<InlineKeyboardButton> = hints
        .buttons
        .iter()
        .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.trigger.clone()))
        .collect();
    Some(InlineKeyboardMarkup::new(vec![row]))
}
