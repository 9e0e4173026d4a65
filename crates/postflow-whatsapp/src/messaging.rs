//! Text and media sends.
//!
//! Both operations accept a per-message `delay` (milliseconds) that the
//! server applies before dispatch. The client performs no throttling of
//! its own; bulk campaigns must space their calls out caller-side.

use crate::client::EvolutionClient;
use crate::error::EvolutionResult;
use crate::types::{SendMediaParams, SendTextParams, SentMessage};

impl EvolutionClient {
    /// Send a plain text message.
    pub async fn send_text(&self, params: &SendTextParams) -> EvolutionResult<SentMessage> {
        let url = self.instance_url("message/sendText");
        self.post(&url, params).await
    }

    /// Send an image, video, audio, or document.
    pub async fn send_media(&self, params: &SendMediaParams) -> EvolutionResult<SentMessage> {
        let url = self.instance_url("message/sendMedia");
        self.post(&url, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EvolutionConfig, MediaKind};
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

    #[test]
    fn send_text_serializes_delay_only_when_set() {
        let value = serde_json::to_value(SendTextParams {
            number: "5511999999999".into(),
            text: "hi".into(),
            delay: None,
            link_preview: false,
        })
        .unwrap();
        assert!(value.get("delay").is_none());
        assert!(value.get("linkPreview").is_none());

        let value = serde_json::to_value(SendTextParams {
            number: "5511999999999".into(),
            text: "hi".into(),
            delay: Some(1200),
            link_preview: true,
        })
        .unwrap();
        assert_eq!(value["delay"], 1200);
        assert_eq!(value["linkPreview"], true);
    }

    #[test]
    fn send_media_wire_field_names() {
        let value = serde_json::to_value(SendMediaParams {
            number: "5511999999999".into(),
            media_kind: MediaKind::Image,
            media: "https://cdn.example.com/promo.png".into(),
            mime_type: Some("image/png".into()),
            caption: Some("new drop".into()),
            file_name: None,
            delay: None,
        })
        .unwrap();
        assert_eq!(value["mediatype"], "image");
        assert_eq!(value["mimetype"], "image/png");
        assert!(value.get("fileName").is_none());
    }

    #[tokio::test]
    async fn send_text_round_trip() {
        let app = Router::new().route(
            "/message/sendText/marketing",
            post(|| async {
                Json(json!({
                    "key": {"remoteJid": "5511999999999@s.whatsapp.net", "fromMe": true, "id": "BAE5"},
                    "status": "PENDING"
                }))
            }),
        );
        let base = spawn(app).await;
        let client = EvolutionClient::new(&EvolutionConfig {
            base_url: base,
            api_key: "secret".into(),
            instance: "marketing".into(),
            ..Default::default()
        })
        .unwrap();

        let sent = client
            .send_text(&SendTextParams {
                number: "5511999999999".into(),
                text: "hello".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(sent.key.from_me);
        assert_eq!(sent.status.as_deref(), Some("PENDING"));
    }
}
