//! Page Inbox — conversation listing and message send.

use crate::client::FacebookClient;
use crate::error::GraphResult;
use crate::types::{Conversation, ConversationMessage, Paged};
use serde_json::json;

impl FacebookClient {
    /// List the page's inbox conversations.
    pub async fn get_conversations(&self) -> GraphResult<Paged<Conversation>> {
        self.get(
            &format!("{}/conversations", self.page_id()),
            &[("fields", "id,snippet,updated_time,participants,unread_count")],
        )
        .await
    }

    /// Messages inside one conversation.
    pub async fn get_conversation_messages(
        &self,
        conversation_id: &str,
    ) -> GraphResult<Paged<ConversationMessage>> {
        self.get(
            &format!("{conversation_id}/messages"),
            &[("fields", "id,message,from,created_time")],
        )
        .await
    }

    /// Send a message to a user who has messaged the page.
    ///
    /// Uses the Send API with `messaging_type=RESPONSE`, which is only
    /// valid within the platform's reply window.
    pub async fn send_message(
        &self,
        recipient_id: &str,
        text: &str,
    ) -> GraphResult<serde_json::Value> {
        let body = json!({
            "recipient": {"id": recipient_id},
            "messaging_type": "RESPONSE",
            "message": {"text": text},
        });
        self.post(&format!("{}/messages", self.page_id()), body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::FacebookClient;
    use crate::types::FacebookConfig;
    use axum::{routing::post, Json, Router};
    use serde_json::json;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn send_message_shape() {
        let app = Router::new().route(
            "/v18.0/55/messages",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["recipient"]["id"], "user-1");
                assert_eq!(body["messaging_type"], "RESPONSE");
                assert_eq!(body["message"]["text"], "thanks for reaching out");
                Json(json!({"recipient_id": "user-1", "message_id": "m_1"}))
            }),
        );
        let base = spawn(app).await;
        let client = FacebookClient::new(&FacebookConfig {
            access_token: "EAAGtoken".into(),
            page_id: "55".into(),
            base_url: base,
            ..Default::default()
        })
        .unwrap();

        let resp = client
            .send_message("user-1", "thanks for reaching out")
            .await
            .unwrap();
        assert_eq!(resp["message_id"], "m_1");
    }
}
