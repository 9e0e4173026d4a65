//! # postflow-youtube
//!
//! YouTube Data API v3 client, plus Analytics v2 report fetches.
//!
//! Auth: `Authorization: Bearer` when an OAuth access token is configured,
//! otherwise the API key as a `key=` query parameter (read-only,
//! quota-based access). Analytics and any mutating call require the
//! bearer token.
//!
//! Video uploads are resumable: [`VideoUploads`](videos) only *initiates*
//! the session and returns the upload `Location` URL — the chunked byte
//! transfer is the caller's job.

pub mod analytics;
pub mod channels;
pub mod client;
pub mod comments;
pub mod error;
pub mod live;
pub mod playlists;
pub mod search;
pub mod types;
pub mod videos;

pub use client::YouTubeClient;
pub use error::{YouTubeError, YouTubeResult};
pub use types::YouTubeConfig;

/// Build a [`YouTubeClient`] from a config.
pub fn create_youtube_client(config: &YouTubeConfig) -> YouTubeResult<YouTubeClient> {
    YouTubeClient::new(config)
}
