use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for sending messages via Telegram Bot API.
pub struct TelegramBot {
    client: Client,
    api_base: String,
    api_key: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Error envelope returned by the Bot API alongside a non-2xx status.
#[derive(Deserialize)]
struct ApiErrorResponse {
    description: Option<String>,
}

impl TelegramBot {
    /// Creates a new `TelegramBot` with the given API key and chat ID.
    pub fn new(client: Client, api_key: String, chat_id: String) -> Self {
        Self::with_api_base(client, TELEGRAM_API_BASE.to_string(), api_key, chat_id)
    }

    /// Same as [`TelegramBot::new`] but against a custom Bot API server.
    pub fn with_api_base(client: Client, api_base: String, api_key: String, chat_id: String) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            chat_id,
        }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Sends a text message to the configured chat.
    ///
    /// Fails when the request cannot be sent or the API answers with a non-success status.
    pub async fn push_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.api_key);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow!("telegram request failed: {}", e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            debug!(chat_id = %self.chat_id, "telegram message delivered");
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let description = serde_json::from_str::<ApiErrorResponse>(&text)
            .ok()
            .and_then(|r| r.description)
            .unwrap_or(text);
        Err(anyhow!(
            "telegram sendMessage returned {}: {}",
            status,
            description
        ))
    }
}
