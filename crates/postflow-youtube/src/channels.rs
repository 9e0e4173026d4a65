//! Channel info.

use crate::client::YouTubeClient;
use crate::error::{YouTubeError, YouTubeResult};
use crate::types::{Channel, ListResponse};

const CHANNEL_PARTS: &str = "snippet,statistics";

impl YouTubeClient {
    /// The authenticated user's channel (requires the OAuth token).
    pub async fn my_channel(&self) -> YouTubeResult<Channel> {
        self.require_token()?;
        let list: ListResponse<Channel> = self
            .get(
                "/youtube/v3/channels",
                &[("part", CHANNEL_PARTS), ("mine", "true")],
            )
            .await?;
        list.items
            .into_iter()
            .next()
            .ok_or_else(|| YouTubeError::Api("no channel for the authenticated user".into()))
    }

    /// A channel by id.
    pub async fn get_channel(&self, channel_id: &str) -> YouTubeResult<Channel> {
        let list: ListResponse<Channel> = self
            .get(
                "/youtube/v3/channels",
                &[("part", CHANNEL_PARTS), ("id", channel_id)],
            )
            .await?;
        list.items
            .into_iter()
            .next()
            .ok_or_else(|| YouTubeError::Api(format!("channel {channel_id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::YouTubeClient;
    use crate::types::YouTubeConfig;
    use axum::{routing::get, Json, Router};
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
    async fn get_channel_unwraps_first_item() {
        let app = Router::new().route(
            "/youtube/v3/channels",
            get(|| async {
                Json(json!({
                    "items": [{
                        "id": "UCabc",
                        "snippet": {"title": "Acme"},
                        "statistics": {"subscriberCount": "1200", "videoCount": "34"}
                    }]
                }))
            }),
        );
        let base = spawn(app).await;
        let client = YouTubeClient::new(&YouTubeConfig {
            api_key: Some("AIzaKey".into()),
            base_url: base,
            ..Default::default()
        })
        .unwrap();

        let channel = client.get_channel("UCabc").await.unwrap();
        assert_eq!(channel.id, "UCabc");
        assert_eq!(
            channel.statistics.unwrap().subscriber_count.as_deref(),
            Some("1200")
        );
    }

    #[tokio::test]
    async fn my_channel_requires_token() {
        let client = YouTubeClient::new(&YouTubeConfig {
            api_key: Some("AIzaKey".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(client.my_channel().await.is_err());
    }
}
