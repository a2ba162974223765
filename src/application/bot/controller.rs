//! Trigger dispatch against a chat surface.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::command::{parse_callback, parse_command, BotCommand, ButtonAction, CommandParseError};
use super::text;
use crate::application::report::ReportComposer;
use crate::domain::{ActionButton, MarkupHints, MessageRef, TextFormat, REFRESH_TRIGGER};
use crate::error::Result;
use crate::port::ChatSurface;

/// Handles bot triggers by composing reports and driving a [`ChatSurface`].
#[derive(Clone)]
pub struct BotController {
    composer: ReportComposer,
    surface: Arc<dyn ChatSurface>,
}

impl BotController {
    #[must_use]
    pub fn new(composer: ReportComposer, surface: Arc<dyn ChatSurface>) -> Self {
        Self { composer, surface }
    }

    /// Handle a text message. Non-commands and unknown commands are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects a delivery.
    pub async fn on_command(&self, chat_id: i64, text: &str) -> Result<()> {
        match parse_command(text) {
            Ok(command) => self.dispatch_command(chat_id, command).await,
            Err(CommandParseError::NotACommand) => Ok(()),
            Err(e) => {
                debug!(chat_id, error = %e, "Ignoring command");
                Ok(())
            }
        }
    }

    /// Handle an inline button press on `message`.
    ///
    /// The press is always acknowledged. `message` is `None` when the
    /// platform no longer exposes the original message.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the acknowledgement.
    pub async fn on_button_press(
        &self,
        callback_id: &str,
        message: Option<MessageRef>,
        data: &str,
    ) -> Result<()> {
        let Some(action) = parse_callback(data) else {
            debug!(data, "Ignoring unknown callback");
            return self.surface.answer_callback(callback_id, "").await;
        };

        match action {
            ButtonAction::Refresh => {
                self.surface
                    .answer_callback(callback_id, text::REFRESHING)
                    .await?;
                match message {
                    Some(message) => self.refresh(message).await,
                    None => {
                        warn!("Refresh pressed on an inaccessible message");
                        Ok(())
                    }
                }
            }
        }
    }

    async fn dispatch_command(&self, chat_id: i64, command: BotCommand) -> Result<()> {
        info!(chat_id, ?command, "Handling command");
        match command {
            BotCommand::Start => self.greet(chat_id).await,
            BotCommand::Rates => self.send_rates(chat_id).await,
            BotCommand::Help => self.help(chat_id).await,
        }
    }

    async fn greet(&self, chat_id: i64) -> Result<()> {
        let hints = MarkupHints::plain()
            .with_button(ActionButton::new(text::GET_RATES_LABEL, REFRESH_TRIGGER));
        self.surface
            .send_text(chat_id, text::GREETING, &hints)
            .await?;
        Ok(())
    }

    async fn help(&self, chat_id: i64) -> Result<()> {
        self.surface
            .send_text(chat_id, text::HELP, &MarkupHints::html())
            .await?;
        Ok(())
    }

    async fn send_rates(&self, chat_id: i64) -> Result<()> {
        let placeholder = self
            .surface
            .send_text(chat_id, text::LOADING, &MarkupHints::plain())
            .await?;
        let report = self.composer.render(TextFormat::Html).await;
        self.surface
            .edit_text(placeholder, &report, &report_hints())
            .await
    }

    async fn refresh(&self, message: MessageRef) -> Result<()> {
        let report = self.composer.render(TextFormat::Html).await;
        if let Err(e) = self
            .surface
            .edit_text(message, &report, &report_hints())
            .await
        {
            // Unchanged reports are rejected by the platform.
            debug!(error = %e, "Refresh edit rejected");
        }
        Ok(())
    }
}

fn report_hints() -> MarkupHints {
    MarkupHints::html().with_button(ActionButton::new(text::REFRESH_LABEL, REFRESH_TRIGGER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriceQuote, TickerQuote};
    use crate::testkit::source::{StaticP2p, StaticTicker};
    use crate::testkit::surface::{Delivery, RecordingSurface};
    use rust_decimal_macros::dec;

    fn controller(surface: Arc<RecordingSurface>) -> BotController {
        let composer = ReportComposer::new(
            Arc::new(StaticP2p::quote(PriceQuote::new(
                Some(dec!(95.20)),
                Some(dec!(94.80)),
            ))),
            Arc::new(StaticTicker::quote(TickerQuote::price_only(
                "USDT/CNY (OTC)",
                dec!(7.1234),
            ))),
        );
        BotController::new(composer, surface)
    }

    #[tokio::test]
    async fn start_sends_greeting_with_rates_button() {
        let surface = Arc::new(RecordingSurface::new());
        controller(surface.clone()).on_command(42, "/start").await.unwrap();

        let deliveries = surface.deliveries();
        assert_eq!(deliveries.len(), 1);
        let Delivery::Sent { message, text, hints } = &deliveries[0] else {
            panic!("expected a sent message, got {deliveries:?}");
        };
        assert_eq!(message.chat_id, 42);
        assert_eq!(text, text::GREETING);
        assert_eq!(hints.format, TextFormat::Plain);
        assert_eq!(
            hints.buttons,
            vec![ActionButton::new("💹 Получить курс", "get_rates")]
        );
    }

    #[tokio::test]
    async fn help_is_html() {
        let surface = Arc::new(RecordingSurface::new());
        controller(surface.clone()).on_command(7, "/help@bot").await.unwrap();

        let deliveries = surface.deliveries();
        let Delivery::Sent { text, hints, .. } = &deliveries[0] else {
            panic!("expected a sent message");
        };
        assert!(text.contains("/rates — курс USDT"));
        assert_eq!(hints.format, TextFormat::Html);
        assert!(hints.buttons.is_empty());
    }

    #[tokio::test]
    async fn rates_sends_placeholder_then_edits_it() {
        let surface = Arc::new(RecordingSurface::new());
        controller(surface.clone()).on_command(42, "/rates").await.unwrap();

        let deliveries = surface.deliveries();
        assert_eq!(deliveries.len(), 2);
        let Delivery::Sent { message: sent, text: loading, .. } = &deliveries[0] else {
            panic!("expected placeholder first");
        };
        assert_eq!(loading, text::LOADING);
        let Delivery::Edited { message, text, hints } = &deliveries[1] else {
            panic!("expected edit second");
        };
        assert_eq!(message, sent);
        assert!(text.contains("Спред: <code>0.40 ₽</code>"));
        assert!(text.contains("Цена: <code>7.1234 ¥</code>"));
        assert_eq!(hints.format, TextFormat::Html);
        assert_eq!(hints.buttons, vec![ActionButton::new("🔄 Обновить", "get_rates")]);
    }

    #[tokio::test]
    async fn refresh_acknowledges_then_edits_in_place() {
        let surface = Arc::new(RecordingSurface::new());
        let pressed = MessageRef::new(42, 9);
        controller(surface.clone())
            .on_button_press("cb-1", Some(pressed), "get_rates")
            .await
            .unwrap();

        let deliveries = surface.deliveries();
        assert_eq!(
            deliveries[0],
            Delivery::Answered {
                callback_id: "cb-1".to_string(),
                text: "Обновляю данные...".to_string(),
            }
        );
        let Delivery::Edited { message, text, .. } = &deliveries[1] else {
            panic!("expected edit");
        };
        assert_eq!(*message, pressed);
        assert!(text.contains("Покупка: <code>95.20 ₽</code>"));
    }

    #[tokio::test]
    async fn refresh_swallows_rejected_edit() {
        let surface = Arc::new(RecordingSurface::rejecting_edits());
        let result = controller(surface.clone())
            .on_button_press("cb-1", Some(MessageRef::new(1, 1)), "get_rates")
            .await;

        assert!(result.is_ok());
        assert_eq!(surface.deliveries().len(), 1);
    }

    #[tokio::test]
    async fn refresh_without_message_only_acknowledges() {
        let surface = Arc::new(RecordingSurface::new());
        controller(surface.clone())
            .on_button_press("cb-2", None, "get_rates")
            .await
            .unwrap();

        assert_eq!(surface.deliveries().len(), 1);
    }

    #[tokio::test]
    async fn unknown_callback_is_acknowledged_silently() {
        let surface = Arc::new(RecordingSurface::new());
        controller(surface.clone())
            .on_button_press("cb-3", Some(MessageRef::new(1, 1)), "something_else")
            .await
            .unwrap();

        assert_eq!(
            surface.deliveries(),
            vec![Delivery::Answered {
                callback_id: "cb-3".to_string(),
                text: String::new(),
            }]
        );
    }

    #[tokio::test]
    async fn non_commands_and_unknown_commands_are_ignored() {
        let surface = Arc::new(RecordingSurface::new());
        let controller = controller(surface.clone());

        controller.on_command(1, "hello there").await.unwrap();
        controller.on_command(1, "/status").await.unwrap();

        assert!(surface.deliveries().is_empty());
    }
}
