//! Chat surface port consumed by the bot controller.

use async_trait::async_trait;

use crate::domain::{MarkupHints, MessageRef};
use crate::error::Result;

/// Message delivery operations of a chat platform.
#[async_trait]
pub trait ChatSurface: Send + Sync {
    /// Send a new message to a chat.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the message.
    async fn send_text(&self, chat_id: i64, text: &str, hints: &MarkupHints) -> Result<MessageRef>;

    /// Replace the text (and buttons) of an existing message.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the edit, including edits
    /// that would not change the message.
    async fn edit_text(&self, message: MessageRef, text: &str, hints: &MarkupHints) -> Result<()>;

    /// Acknowledge a button press with a short toast.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the answer.
    async fn answer_callback(&self, callback_id: &str, text: &str) -> Result<()>;
}
