//! OAuth2 PKCE — authorize URL construction and code exchange.

use crate::client::TwitterClient;
use crate::error::{TwitterError, TwitterResult};
use crate::types::OAuthToken;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use log::debug;
use postflow_core::{encode_param, send};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

const AUTHORIZE_URL: &str = "https://twitter.com/i/oauth2/authorize";
const TOKEN_PATH: &str = "/2/oauth2/token";

/// OAuth2 scopes the product requests.
pub mod scopes {
    pub const TWEET_READ: &str = "tweet.read";
    pub const TWEET_WRITE: &str = "tweet.write";
    pub const USERS_READ: &str = "users.read";
    pub const FOLLOWS_WRITE: &str = "follows.write";
    pub const LIKE_WRITE: &str = "like.write";
    pub const DM_WRITE: &str = "dm.write";
    pub const BOOKMARK_WRITE: &str = "bookmark.write";
    pub const LIST_WRITE: &str = "list.write";
    pub const SPACE_READ: &str = "space.read";
    pub const OFFLINE_ACCESS: &str = "offline.access";

    /// Everything the dashboard needs, refresh token included.
    pub const DEFAULT: &[&str] = &[
        TWEET_READ,
        TWEET_WRITE,
        USERS_READ,
        LIKE_WRITE,
        OFFLINE_ACCESS,
    ];
}

/// Generate a PKCE code verifier (43–128 unreserved characters).
pub fn generate_code_verifier() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// S256 code challenge: base64url, no padding, of the verifier's SHA-256.
pub fn code_challenge_s256(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

impl TwitterClient {
    /// Build the user-facing authorization URL for the PKCE flow.
    ///
    /// The caller keeps `code_verifier` and passes it back to
    /// [`exchange_code`](Self::exchange_code).
    pub fn build_authorize_url(
        &self,
        redirect_uri: &str,
        scopes: &[&str],
        state: &str,
        code_verifier: &str,
    ) -> String {
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&state={}&code_challenge={}&code_challenge_method=S256",
            AUTHORIZE_URL,
            encode_param(&self.config.client_id),
            encode_param(redirect_uri),
            encode_param(&scopes.join(" ")),
            encode_param(state),
            code_challenge_s256(code_verifier),
        )
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
        code_verifier: &str,
    ) -> TwitterResult<OAuthToken> {
        let url = self.url(TOKEN_PATH);
        debug!("POST {url}");

        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("code_verifier", code_verifier),
        ];

        let mut request = self.http.post(&url).form(&form);
        // Confidential clients authenticate with basic auth on top of PKCE.
        if let Some(ref secret) = self.config.client_secret {
            request = request.basic_auth(&self.config.client_id, Some(secret));
        }

        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(TwitterError::from_response(&resp));
        }
        Ok(resp.json()?)
    }
}
