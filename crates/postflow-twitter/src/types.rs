//! Shared types for the Twitter client.

use serde::{Deserialize, Serialize};

/// Configuration for a Twitter client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterConfig {
    /// App-only bearer token (or an OAuth2 user token from the PKCE flow).
    pub bearer_token: String,
    /// OAuth2 client id (PKCE flow only).
    #[serde(default)]
    pub client_id: String,
    /// OAuth2 client secret (confidential clients only).
    #[serde(default)]
    pub client_secret: Option<String>,
    /// API base URL override (tests / proxies).
    #[serde(default = "default_api_base")]
    pub base_url: String,
    /// v1.1 upload host override.
    #[serde(default = "default_upload_base")]
    pub upload_base_url: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_api_base() -> String {
    "https://api.twitter.com".to_string()
}

fn default_upload_base() -> String {
    "https://upload.twitter.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            bearer_token: String::new(),
            client_id: String::new(),
            client_secret: None,
            base_url: default_api_base(),
            upload_base_url: default_upload_base(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// v2 single-object envelope: `{"data": {...}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Single<T> {
    pub data: T,
}

/// v2 list envelope: `{"data": [...], "meta": {...}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

/// A user object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public_metrics: Option<UserMetrics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMetrics {
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub tweet_count: u64,
}

/// A tweet object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub public_metrics: Option<TweetMetrics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetMetrics {
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub impression_count: u64,
}

/// Parameters for `create_tweet`.
#[derive(Debug, Clone, Default)]
pub struct TweetParams {
    pub text: String,
    /// Tweet id to reply to.
    pub in_reply_to: Option<String>,
    /// Tweet id to quote.
    pub quote_tweet_id: Option<String>,
    /// Previously uploaded media ids.
    pub media_ids: Vec<String>,
}

/// A list object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub private: Option<bool>,
}

/// A Space object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub host_ids: Option<Vec<String>>,
}

/// Token payload from the OAuth2 PKCE code exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// v1.1 media upload response.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedMedia {
    #[serde(default)]
    pub media_id: Option<u64>,
    pub media_id_string: String,
    #[serde(default)]
    pub expires_after_secs: Option<u64>,
}
