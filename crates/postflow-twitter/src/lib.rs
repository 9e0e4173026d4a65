//! # postflow-twitter
//!
//! Twitter/X API v2 client.
//!
//! Functionally correct auth is app-only bearer token. OAuth 1.0a
//! user-context signing is NOT implemented; the legacy v1.1 media upload
//! sends a placeholder `OAuth oauth_token=…` header and is documented as
//! such rather than silently fixed (see [`media`]).
//!
//! The engagement endpoints (like, retweet, bookmark) are user-scoped by
//! id, so each performs a `users/me` lookup first.

pub mod client;
pub mod dms;
pub mod engagement;
pub mod error;
pub mod lists;
pub mod media;
pub mod oauth;
pub mod spaces;
pub mod tweets;
pub mod types;
pub mod users;

pub use client::TwitterClient;
pub use error::{TwitterError, TwitterResult};
pub use oauth::{code_challenge_s256, generate_code_verifier, scopes};
pub use types::TwitterConfig;

/// Build a [`TwitterClient`] from a config.
pub fn create_twitter_client(config: &TwitterConfig) -> TwitterResult<TwitterClient> {
    TwitterClient::new(config)
}
