//! Recording [`ChatSurface`] for controller tests.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{MarkupHints, MessageRef};
use crate::error::{Error, Result};
use crate::port::ChatSurface;

/// One delivery made through the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent {
        message: MessageRef,
        text: String,
        hints: MarkupHints,
    },
    Edited {
        message: MessageRef,
        text: String,
        hints: MarkupHints,
    },
    Answered {
        callback_id: String,
        text: String,
    },
}

/// Surface that records every delivery and hands out sequential message ids.
#[derive(Default)]
pub struct RecordingSurface {
    deliveries: Mutex<Vec<Delivery>>,
    next_message_id: AtomicI32,
    reject_edits: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose edits always fail, like an unmodified Telegram message.
    pub fn rejecting_edits() -> Self {
        Self {
            reject_edits: true,
            ..Self::default()
        }
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().expect("lock deliveries").clone()
    }

    fn record(&self, delivery: Delivery) {
        self.deliveries.lock().expect("lock deliveries").push(delivery);
    }
}

#[async_trait]
impl ChatSurface for RecordingSurface {
    async fn send_text(&self, chat_id: i64, text: &str, hints: &MarkupHints) -> Result<MessageRef> {
        let message_id = self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1;
        let message = MessageRef::new(chat_id, message_id);
        self.record(Delivery::Sent {
            message,
            text: text.to_string(),
            hints: hints.clone(),
        });
        Ok(message)
    }

    async fn edit_text(&self, message: MessageRef, text: &str, hints: &MarkupHints) -> Result<()> {
        if self.reject_edits {
            return Err(Error::Delivery("message is not modified".to_string()));
        }
        self.record(Delivery::Edited {
            message,
            text: text.to_string(),
            hints: hints.clone(),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: &str) -> Result<()> {
        self.record(Delivery::Answered {
            callback_id: callback_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}
