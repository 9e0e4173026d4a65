//! # postflow
//!
//! The client index: one crate re-exporting every platform client the
//! product talks to, plus the shared constant tables (insight metrics,
//! OAuth scopes).
//!
//! Callers build a client from its config via the `create_*_client`
//! factory (or `Client::new`), call one typed method, and get back a
//! parsed DTO or an error whose `Display` text is the platform's own
//! message. Clients hold their credentials immutably; the TikTok token
//! helpers return fresh tokens by value for the caller to persist.

pub use postflow_facebook as facebook;
pub use postflow_instagram as instagram;
pub use postflow_telegram as telegram;
pub use postflow_tiktok as tiktok;
pub use postflow_twitter as twitter;
pub use postflow_whatsapp as whatsapp;
pub use postflow_youtube as youtube;

pub use postflow_facebook::{create_facebook_client, FacebookClient, FacebookConfig};
pub use postflow_instagram::{create_instagram_client, InstagramClient, InstagramConfig};
pub use postflow_telegram::{create_telegram_client, TelegramClient, TelegramConfig};
pub use postflow_tiktok::{
    create_tiktok_client, create_tiktok_shop_client, ShopClient, ShopConfig, TikTokClient,
    TikTokConfig,
};
pub use postflow_twitter::{create_twitter_client, TwitterClient, TwitterConfig};
pub use postflow_whatsapp::{create_whatsapp_client, EvolutionClient, EvolutionConfig};
pub use postflow_youtube::{create_youtube_client, YouTubeClient, YouTubeConfig};

/// Constant tables shared across the dashboard.
pub mod constants {
    /// Facebook page/post insight metric names.
    pub use postflow_facebook::metrics as facebook_metrics;
    /// Instagram media/account insight metric names.
    pub use postflow_instagram::metrics as instagram_metrics;
    /// TikTok Open API OAuth scopes.
    pub use postflow_tiktok::scopes as tiktok_scopes;
    /// Twitter OAuth2 scopes.
    pub use postflow_twitter::scopes as twitter_scopes;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_capture_credentials_at_construction() {
        let config = TelegramConfig {
            token: "123456:ABC-DEF".to_string(),
            ..Default::default()
        };
        let client = create_telegram_client(&config).unwrap();
        // The config can be dropped/mutated freely afterwards.
        drop(config);
        assert!(client.masked_token().starts_with("12345"));
    }

    #[test]
    fn constant_tables_are_reachable_from_the_index() {
        assert!(!constants::facebook_metrics::PAGE.is_empty());
        assert!(!constants::instagram_metrics::MEDIA.is_empty());
        assert!(!constants::tiktok_scopes::DEFAULT.is_empty());
        assert!(!constants::twitter_scopes::DEFAULT.is_empty());
    }
}
