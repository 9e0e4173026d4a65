//! Shared types for the Instagram Graph client.

use serde::{Deserialize, Serialize};

/// Configuration for an Instagram Graph client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramConfig {
    /// Long-lived user access token with instagram scopes.
    pub access_token: String,
    /// Instagram professional account id.
    pub ig_user_id: String,
    /// Graph API version segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Base URL override (tests / proxies).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_api_version() -> String {
    "v18.0".to_string()
}

fn default_base_url() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for InstagramConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            ig_user_id: String::new(),
            api_version: default_api_version(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Account profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub follows_count: Option<u64>,
    #[serde(default)]
    pub media_count: Option<u64>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

/// What to publish through `create_and_publish`.
#[derive(Debug, Clone)]
pub enum MediaSpec {
    /// Single image post.
    Image { url: String, caption: Option<String> },
    /// Video post (processed asynchronously).
    Video { url: String, caption: Option<String> },
    /// Reel (processed asynchronously).
    Reel {
        url: String,
        caption: Option<String>,
        share_to_feed: bool,
    },
    /// Image story.
    Story { image_url: String },
}

/// Id payload returned by container creation and publishing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaId {
    pub id: String,
}

/// Container processing status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerStatus {
    pub id: String,
    /// `IN_PROGRESS`, `FINISHED`, `ERROR`, `EXPIRED`, or `PUBLISHED`.
    #[serde(default)]
    pub status_code: Option<String>,
    /// Human-readable status detail, when present.
    #[serde(default)]
    pub status: Option<String>,
}

/// A published media object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comments_count: Option<u64>,
}

/// A comment on a media object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One metric entry of an insights response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightMetric {
    pub name: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub values: Vec<InsightValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightValue {
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Hashtag search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hashtag {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Graph list envelope: `{"data": [...], "paging": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Paged<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub paging: Option<serde_json::Value>,
}
