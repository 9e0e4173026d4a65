//! # postflow-tiktok
//!
//! Two distinct TikTok APIs are wrapped here.
//!
//! **Open API for Business** ([`TikTokClient`]): user info, video listings
//! and insights, comments, creator info, the OAuth authorization-code and
//! refresh-token grants, and direct-post video publishing. Publishing
//! polls the publish status every 5 seconds for at most 60 attempts and
//! fails closed — note the cadence is deliberately independent from the
//! Instagram container poll.
//!
//! **TikTok Shop** ([`shop::ShopClient`]): the server-side commerce API.
//! Every request is HMAC-SHA256 signed over the app secret, endpoint path,
//! lexicographically sorted query parameters, and the JSON body — see
//! [`shop::sign`] for the exact construction, which must match TikTok's
//! documented algorithm bit for bit.

pub mod business;
pub mod error;
pub mod oauth;
pub mod publish;
pub mod shop;
pub mod types;

pub use business::TikTokClient;
pub use error::{TikTokError, TikTokResult};
pub use oauth::scopes;
pub use shop::ShopClient;
pub use types::{ShopConfig, TikTokConfig};

/// Build a [`TikTokClient`] (Open API for Business) from a config.
pub fn create_tiktok_client(config: &TikTokConfig) -> TikTokResult<TikTokClient> {
    TikTokClient::new(config)
}

/// Build a [`ShopClient`] from a config.
pub fn create_tiktok_shop_client(config: &ShopConfig) -> TikTokResult<ShopClient> {
    ShopClient::new(config)
}
