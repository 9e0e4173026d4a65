//! Low-level HTTP client for the Telegram Bot API.
//!
//! The bot token is embedded in the URL path; every call is a POST with
//! a JSON body. Each call is exactly one round trip — rate limiting and
//! retry belong to the caller.

use crate::error::{TelegramError, TelegramResult};
use crate::types::{ApiResponse, TelegramConfig, TgUser};
use log::debug;
use postflow_core::{build_http_client, mask_secret, send};
use serde::de::DeserializeOwned;
use serde::Serialize;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Telegram Bot API client.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

impl TelegramClient {
    /// Create a new client from a [`TelegramConfig`].
    pub fn new(config: &TelegramConfig) -> TelegramResult<Self> {
        if config.token.is_empty() {
            return Err(TelegramError::Config("bot token must not be empty".into()));
        }

        Ok(Self {
            http: build_http_client(config.timeout_seconds)?,
            token: config.token.clone(),
            api_base: config
                .api_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }

    /// Build the full URL for a Bot API method.
    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// Call a Bot API method with a JSON body and unwrap the envelope.
    pub(crate) async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: &P,
    ) -> TelegramResult<R> {
        let url = self.method_url(method);
        debug!("POST {} (bot {})", method, mask_secret(&self.token));

        let resp = send(self.http.post(&url).json(params)).await?;

        let envelope: ApiResponse<R> = match resp.json() {
            Ok(envelope) => envelope,
            // Not a Bot API envelope at all: fall back to the HTTP status.
            Err(_) if !resp.is_success() => {
                return Err(TelegramError::Api(format!("HTTP {}", resp.status)));
            }
            Err(e) => return Err(e.into()),
        };

        if envelope.ok {
            envelope
                .result
                .ok_or_else(|| TelegramError::Api(format!("{method}: ok=true but no result")))
        } else {
            Err(TelegramError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| format!("HTTP {}", resp.status)),
            ))
        }
    }

    /// Call a Bot API method that takes no parameters.
    pub(crate) async fn call_no_params<R: DeserializeOwned>(
        &self,
        method: &str,
    ) -> TelegramResult<R> {
        self.call(method, &serde_json::json!({})).await
    }

    /// Get the bot's own user via `getMe`.
    pub async fn get_me(&self) -> TelegramResult<TgUser> {
        self.call_no_params("getMe").await
    }

    /// The API base URL in use.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Bot token masked for log output.
    pub fn masked_token(&self) -> String {
        mask_secret(&self.token)
    }

    /// Build the download URL for a file path from `getFile`.
    pub fn file_download_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.api_base, self.token, file_path)
    }
}
