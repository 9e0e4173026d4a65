//! Direct messages.

use crate::client::TwitterClient;
use crate::error::TwitterResult;
use serde_json::json;

impl TwitterClient {
    /// Send a DM to a participant, creating the 1:1 conversation if needed.
    pub async fn send_dm(
        &self,
        participant_id: &str,
        text: &str,
    ) -> TwitterResult<serde_json::Value> {
        self.post(
            &format!("/2/dm_conversations/with/{participant_id}/messages"),
            &json!({"text": text}),
        )
        .await
    }

    /// Recent DM events visible to the authenticated user.
    pub async fn get_dm_events(&self, max_results: u32) -> TwitterResult<serde_json::Value> {
        let max = max_results.to_string();
        self.get(
            "/2/dm_events",
            &[
                ("max_results", max.as_str()),
                ("dm_event.fields", "id,text,created_at,sender_id"),
            ],
        )
        .await
    }
}
