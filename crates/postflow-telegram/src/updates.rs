//! Update polling and command registration.

use crate::client::TelegramClient;
use crate::error::TelegramResult;
use crate::types::{BotCommand, TgUpdate};
use serde_json::json;

impl TelegramClient {
    /// Fetch updates via long polling.
    ///
    /// `offset` should be one greater than the highest `update_id` already
    /// processed; `timeout` is the long-poll duration in seconds.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        limit: Option<u32>,
        timeout: Option<u32>,
    ) -> TelegramResult<Vec<TgUpdate>> {
        let mut body = json!({});
        if let Some(offset) = offset {
            body["offset"] = json!(offset);
        }
        if let Some(limit) = limit {
            body["limit"] = json!(limit);
        }
        if let Some(timeout) = timeout {
            body["timeout"] = json!(timeout);
        }
        self.call("getUpdates", &body).await
    }

    /// Register the bot's command list shown in clients.
    pub async fn set_my_commands(&self, commands: &[BotCommand]) -> TelegramResult<bool> {
        self.call("setMyCommands", &json!({"commands": commands}))
            .await
    }
}
