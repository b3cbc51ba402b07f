//! Telegram notification delivery

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::io::HttpClient;
use crate::notifier::Notifier;
use crate::{BotError, Result};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Notifier that sends messages to a chat via the Telegram Bot API
pub struct TelegramNotifier {
    send_message_url: String,
    chat_id: String,
    http: Arc<dyn HttpClient>,
}

// The bot token is part of send_message_url, keep it out of Debug output.
impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self {
            send_message_url: format!(
                "{}/bot{}/sendMessage",
                TELEGRAM_API_URL, config.messaging_token
            ),
            chat_id: config.chat_id.clone(),
            http,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> Result<()> {
        let params = [("chat_id", self.chat_id.as_str()), ("text", message)];
        let response = self.http.post_form(&self.send_message_url, &params).await?;

        if response.status != 200 {
            return Err(BotError::Notifier(format!(
                "Telegram API returned status {}: {}",
                response.status, response.body
            )));
        }

        let decoded: SendMessageResponse = serde_json::from_str(&response.body)
            .map_err(|e| BotError::Notifier(format!("decoding Telegram response: {e}")))?;
        if !decoded.ok {
            return Err(BotError::Notifier(format!(
                "Telegram API rejected the message: {}",
                decoded.description.unwrap_or_else(|| "no description".into())
            )));
        }

        tracing::debug!("Delivered message to chat {}: {}", self.chat_id, message);
        Ok(())
    }
}
