//! Event webhook registration.

use crate::client::EvolutionClient;
use crate::error::EvolutionResult;
use crate::types::WebhookSettings;
use serde_json::json;

impl EvolutionClient {
    /// Register (or replace) the instance's event webhook.
    pub async fn set_webhook(&self, settings: &WebhookSettings) -> EvolutionResult<serde_json::Value> {
        let url = self.instance_url("webhook/set");
        self.post(&url, &json!({"webhook": settings})).await
    }

    /// Fetch the current webhook registration.
    pub async fn fetch_webhook(&self) -> EvolutionResult<WebhookSettings> {
        let url = self.instance_url("webhook/find");
        self.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_settings_wire_shape() {
        let value = serde_json::to_value(WebhookSettings {
            enabled: true,
            url: "https://hooks.example.com/wa".into(),
            events: vec!["MESSAGES_UPSERT".into(), "CONNECTION_UPDATE".into()],
            webhook_by_events: false,
        })
        .unwrap();
        assert_eq!(value["enabled"], true);
        assert_eq!(value["events"][1], "CONNECTION_UPDATE");
        assert_eq!(value["webhookByEvents"], false);
    }
}
