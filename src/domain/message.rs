//! Chat-platform agnostic message descriptors.

/// Callback trigger bound to the refresh button.
pub const REFRESH_TRIGGER: &str = "get_rates";

/// How the chat frontend should interpret message text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFormat {
    #[default]
    Plain,
    Html,
}

/// Inline action button attached under a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    /// Trigger identifier delivered back on press.
    pub trigger: String,
}

impl ActionButton {
    #[must_use]
    pub fn new(label: impl Into<String>, trigger: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            trigger: trigger.into(),
        }
    }
}

/// Rendering hints passed along with message text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupHints {
    pub format: TextFormat,
    pub buttons: Vec<ActionButton>,
}

impl MarkupHints {
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn html() -> Self {
        Self {
            format: TextFormat::Html,
            buttons: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_button(mut self, button: ActionButton) -> Self {
        self.buttons.push(button);
        self
    }
}

/// Reference to a message already delivered to a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: i64,
    pub message_id: i32,
}

impl MessageRef {
    #[must_use]
    pub const fn new(chat_id: i64, message_id: i32) -> Self {
        Self {
            chat_id,
            message_id,
        }
    }
}
