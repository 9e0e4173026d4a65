//! Webhook configuration.

use crate::client::TelegramClient;
use crate::error::TelegramResult;
use crate::types::WebhookInfo;
use serde_json::json;

impl TelegramClient {
    /// Point the bot at a webhook URL. `allowed_updates` limits the update
    /// types delivered (empty list = platform default).
    pub async fn set_webhook(&self, url: &str, allowed_updates: &[&str]) -> TelegramResult<bool> {
        let mut body = json!({"url": url});
        if !allowed_updates.is_empty() {
            body["allowed_updates"] = json!(allowed_updates);
        }
        self.call("setWebhook", &body).await
    }

    /// Current webhook status.
    pub async fn get_webhook_info(&self) -> TelegramResult<WebhookInfo> {
        self.call_no_params("getWebhookInfo").await
    }

    /// Remove the webhook. `drop_pending_updates` discards the backlog.
    pub async fn delete_webhook(&self, drop_pending_updates: bool) -> TelegramResult<bool> {
        self.call(
            "deleteWebhook",
            &json!({"drop_pending_updates": drop_pending_updates}),
        )
        .await
    }
}
