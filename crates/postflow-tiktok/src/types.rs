//! Shared types for both TikTok clients.

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Configuration for the Open API for Business client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TikTokConfig {
    /// App client key.
    pub client_key: String,
    /// App client secret (OAuth grants only).
    pub client_secret: String,
    /// User access token from the OAuth flow.
    pub access_token: String,
    /// Base URL override (tests / proxies).
    #[serde(default = "default_open_api_base")]
    pub base_url: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_open_api_base() -> String {
    "https://open.tiktokapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for TikTokConfig {
    fn default() -> Self {
        Self {
            client_key: String::new(),
            client_secret: String::new(),
            access_token: String::new(),
            base_url: default_open_api_base(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Configuration for the TikTok Shop client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    /// Shop app key.
    pub app_key: String,
    /// Shop app secret — also the HMAC signing key.
    pub app_secret: String,
    /// Shop access token from the Shop OAuth flow.
    pub access_token: String,
    /// Shop id, appended to every shop-scoped request.
    #[serde(default)]
    pub shop_id: Option<String>,
    /// API base URL override (tests / proxies).
    #[serde(default = "default_shop_api_base")]
    pub base_url: String,
    /// Auth service base URL override.
    #[serde(default = "default_shop_auth_base")]
    pub auth_base_url: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_shop_api_base() -> String {
    "https://open-api.tiktokglobalshop.com".to_string()
}

fn default_shop_auth_base() -> String {
    "https://auth.tiktok-shops.com".to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            app_key: String::new(),
            app_secret: String::new(),
            access_token: String::new(),
            shop_id: None,
            base_url: default_shop_api_base(),
            auth_base_url: default_shop_auth_base(),
            timeout_seconds: default_timeout(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Open API envelope
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Open API envelope: `{"data": ..., "error": {"code", "message"}}`.
///
/// An `error.code` other than `"ok"` is an API error even on HTTP 200.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct OpenApiEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<OpenApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub log_id: Option<String>,
}

/// Shop envelope: `{"code": 0, "message": "success", "data": ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ShopEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub request_id: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Open API DTOs
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// User profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub open_id: Option<String>,
    #[serde(default)]
    pub union_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub follower_count: Option<u64>,
    #[serde(default)]
    pub following_count: Option<u64>,
    #[serde(default)]
    pub likes_count: Option<u64>,
    #[serde(default)]
    pub video_count: Option<u64>,
}

/// A published video with its counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_description: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub share_url: Option<String>,
    #[serde(default)]
    pub create_time: Option<i64>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub share_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub cursor: Option<i64>,
    #[serde(default)]
    pub has_more: bool,
}

/// A comment on a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoComment {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub create_time: Option<i64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub reply_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentList {
    #[serde(default)]
    pub comments: Vec<VideoComment>,
    #[serde(default)]
    pub cursor: Option<i64>,
    #[serde(default)]
    pub has_more: bool,
}

/// Creator publishing capabilities from `creator_info/query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorInfo {
    #[serde(default)]
    pub creator_username: Option<String>,
    #[serde(default)]
    pub creator_nickname: Option<String>,
    #[serde(default)]
    pub privacy_level_options: Vec<String>,
    #[serde(default)]
    pub max_video_post_duration_sec: Option<u32>,
    #[serde(default)]
    pub comment_disabled: bool,
}

/// Token payload from the OAuth grants.
///
/// Returned by value — the caller persists it; the client's own config is
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_expires_in: Option<i64>,
    #[serde(default)]
    pub open_id: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `publish_id` handle from `video/init`.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishInit {
    pub publish_id: String,
}

/// Publish progress from `status/fetch`.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishStatus {
    /// `PROCESSING_DOWNLOAD`, `PROCESSING_UPLOAD`, `SEND_TO_USER_INBOX`,
    /// `PUBLISH_COMPLETE`, or `FAILED`.
    pub status: String,
    #[serde(default)]
    pub fail_reason: Option<String>,
    #[serde(default)]
    pub publicaly_available_post_id: Vec<i64>,
}

/// Parameters for `publish_video`.
#[derive(Debug, Clone, Default)]
pub struct VideoPublishParams {
    pub title: String,
    /// Must be one of the creator's `privacy_level_options`.
    pub privacy_level: String,
    /// Public URL the platform pulls the video from.
    pub video_url: String,
    pub disable_comment: bool,
    pub disable_duet: bool,
    pub disable_stitch: bool,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Shop DTOs
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// An authorized shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub shop_id: String,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub shop_cipher: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopList {
    #[serde(default)]
    pub shop_list: Vec<Shop>,
}

/// A catalog product (subset of fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub skus: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub create_time: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<i64>,
}

/// An order (subset of fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    #[serde(default)]
    pub order_status: Option<i32>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub create_time: Option<i64>,
    #[serde(default)]
    pub item_list: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderList {
    #[serde(default)]
    pub order_list: Vec<Order>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub more: bool,
}

/// Shop token payload from the Shop OAuth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub access_token_expire_in: Option<i64>,
    #[serde(default)]
    pub refresh_token_expire_in: Option<i64>,
    #[serde(default)]
    pub open_id: Option<String>,
    #[serde(default)]
    pub seller_name: Option<String>,
}
