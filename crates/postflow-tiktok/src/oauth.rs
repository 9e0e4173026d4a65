//! OAuth for the Open API — authorize URL, code exchange, token refresh.
//!
//! Both grants return an [`AccessToken`] by value for the caller to
//! persist; the client's own configuration is never mutated.

use crate::business::TikTokClient;
use crate::error::{TikTokError, TikTokResult};
use crate::types::AccessToken;
use log::debug;
use postflow_core::{encode_param, send};

const AUTHORIZE_URL: &str = "https://www.tiktok.com/v2/auth/authorize/";
const TOKEN_PATH: &str = "/v2/oauth/token/";

/// OAuth scopes the product requests.
pub mod scopes {
    pub const USER_INFO_BASIC: &str = "user.info.basic";
    pub const USER_INFO_PROFILE: &str = "user.info.profile";
    pub const USER_INFO_STATS: &str = "user.info.stats";
    pub const VIDEO_LIST: &str = "video.list";
    pub const VIDEO_PUBLISH: &str = "video.publish";
    pub const COMMENT_LIST: &str = "comment.list";

    /// Everything the dashboard needs for sync + publishing.
    pub const DEFAULT: &[&str] = &[
        USER_INFO_BASIC,
        USER_INFO_STATS,
        VIDEO_LIST,
        VIDEO_PUBLISH,
        COMMENT_LIST,
    ];
}

impl TikTokClient {
    /// Build the user-facing authorization URL.
    pub fn build_authorize_url(&self, redirect_uri: &str, scopes: &[&str], state: &str) -> String {
        format!(
            "{}?client_key={}&scope={}&response_type=code&redirect_uri={}&state={}",
            AUTHORIZE_URL,
            encode_param(&self.config.client_key),
            encode_param(&scopes.join(",")),
            encode_param(redirect_uri),
            encode_param(state),
        )
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> TikTokResult<AccessToken> {
        self.token_request(&[
            ("client_key", self.config.client_key.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", redirect_uri),
        ])
        .await
    }

    /// Refresh an access token using the refresh token.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> TikTokResult<AccessToken> {
        self.token_request(&[
            ("client_key", self.config.client_key.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ])
        .await
    }

    /// The token endpoint is form-encoded and NOT enveloped: a flat token
    /// payload on success, `error`/`error_description` on failure.
    async fn token_request(&self, form: &[(&str, &str)]) -> TikTokResult<AccessToken> {
        let url = self.url(TOKEN_PATH);
        debug!("POST {url}");
        let resp = send(self.http.post(&url).form(form)).await?;

        let value: serde_json::Value = match resp.json() {
            Ok(value) => value,
            Err(_) => return Err(TikTokError::Api(format!("HTTP {}", resp.status))),
        };

        if value.get("access_token").is_some() {
            Ok(serde_json::from_value(value)?)
        } else {
            let message = value
                .get("error_description")
                .or_else(|| value.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", resp.status));
            Err(TikTokError::Api(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TikTokConfig;
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

    fn client_for(base: &str) -> TikTokClient {
        TikTokClient::new(&TikTokConfig {
            client_key: "awkey".into(),
            client_secret: "shhh".into(),
            access_token: "act.old".into(),
            base_url: base.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn authorize_url_contains_encoded_params() {
        let client = client_for("https://open.tiktokapis.com");
        let url = client.build_authorize_url(
            "https://app.example.com/callback",
            scopes::DEFAULT,
            "st4te",
        );
        assert!(url.starts_with("https://www.tiktok.com/v2/auth/authorize/?client_key=awkey"));
        assert!(url.contains("scope=user.info.basic%2Cuser.info.stats"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fapp.example.com%2Fcallback"));
        assert!(url.contains("state=st4te"));
        assert!(url.contains("response_type=code"));
    }

    #[tokio::test]
    async fn refresh_returns_new_tokens_without_mutating_config() {
        let app = Router::new().route(
            "/v2/oauth/token/",
            post(|| async {
                Json(json!({
                    "access_token": "act.new",
                    "refresh_token": "rft.new",
                    "expires_in": 86400,
                    "open_id": "o-1",
                    "scope": "user.info.basic",
                    "token_type": "Bearer"
                }))
            }),
        );
        let base = spawn(app).await;
        let client = client_for(&base);

        let token = client.refresh_access_token("rft.old").await.unwrap();
        assert_eq!(token.access_token, "act.new");
        assert_eq!(token.refresh_token.as_deref(), Some("rft.new"));
        // held config is untouched
        assert_eq!(client.config.access_token, "act.old");
    }

    #[tokio::test]
    async fn token_error_surfaces_description() {
        let app = Router::new().route(
            "/v2/oauth/token/",
            post(|| async {
                (
                    axum::http::StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "invalid_grant",
                        "error_description": "Authorization code is expired.",
                        "log_id": "2024x"
                    })),
                )
            }),
        );
        let base = spawn(app).await;

        let err = client_for(&base)
            .exchange_code("expired", "https://app.example.com/callback")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Authorization code is expired.");
    }
}
