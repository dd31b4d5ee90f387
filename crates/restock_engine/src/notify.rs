use std::time::Duration;

use monitor_logging::monitor_info;
use serde_json::json;
use thiserror::Error;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub request_timeout: Duration,
    /// Overridable for tests against a local mock server.
    pub api_base: String,
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            request_timeout: Duration::from_secs(10),
            api_base: TELEGRAM_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("missing telegram credential: {0}")]
    MissingCredentials(&'static str),
    #[error("telegram request failed: {0}")]
    Request(String),
    #[error("telegram api rejected message: http {status}, {description}")]
    Api { status: u16, description: String },
}

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Sends alert messages through the Telegram Bot API (`sendMessage`).
pub struct TelegramNotifier {
    settings: TelegramSettings,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(settings: TelegramSettings) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| NotifyError::Request(err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let token = self
            .settings
            .bot_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(NotifyError::MissingCredentials("bot token"))?;
        let chat_id = self
            .settings
            .chat_id
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(NotifyError::MissingCredentials("chat id"))?;

        let url = format!("{}/bot{}/sendMessage", self.settings.api_base, token);
        let payload = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
            "disable_web_page_preview": false,
        });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| NotifyError::Request(err.to_string()))?;

        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let ok = body.get("ok").and_then(|v| v.as_bool()).unwrap_or(false);
        if !status.is_success() || !ok {
            let description = body
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or("no description")
                .to_string();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                description,
            });
        }

        monitor_info!("Telegram message delivered to chat {}", chat_id);
        Ok(())
    }
}
