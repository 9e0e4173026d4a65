//! Account profile, media and story listings.

use crate::client::InstagramClient;
use crate::error::InstagramResult;
use crate::types::{AccountInfo, Media, Paged};

const MEDIA_FIELDS: &str =
    "id,caption,media_type,media_url,permalink,timestamp,like_count,comments_count";

impl InstagramClient {
    /// Profile fields for the configured account.
    pub async fn account_info(&self) -> InstagramResult<AccountInfo> {
        self.get(
            self.ig_user_id(),
            &[(
                "fields",
                "id,username,name,followers_count,follows_count,media_count,profile_picture_url",
            )],
        )
        .await
    }

    /// Recent media on the account.
    pub async fn get_media(&self, limit: Option<u32>) -> InstagramResult<Paged<Media>> {
        let limit = limit.unwrap_or(25).to_string();
        self.get(
            &format!("{}/media", self.ig_user_id()),
            &[("fields", MEDIA_FIELDS), ("limit", &limit)],
        )
        .await
    }

    /// Currently live stories.
    pub async fn get_stories(&self) -> InstagramResult<Paged<Media>> {
        self.get(
            &format!("{}/stories", self.ig_user_id()),
            &[("fields", "id,media_type,media_url,timestamp")],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::InstagramClient;
    use crate::types::InstagramConfig;
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
    async fn account_info_parses() {
        let app = Router::new().route(
            "/v18.0/178414",
            get(|| async {
                Json(json!({
                    "id": "178414",
                    "username": "acme.shop",
                    "followers_count": 1024,
                    "media_count": 77
                }))
            }),
        );
        let base = spawn(app).await;
        let client = InstagramClient::new(&InstagramConfig {
            access_token: "IGQVtoken".into(),
            ig_user_id: "178414".into(),
            base_url: base,
            ..Default::default()
        })
        .unwrap();

        let info = client.account_info().await.unwrap();
        assert_eq!(info.username.as_deref(), Some("acme.shop"));
        assert_eq!(info.followers_count, Some(1024));
    }
}
