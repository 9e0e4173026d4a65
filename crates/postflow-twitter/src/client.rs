//! Low-level HTTP client for the Twitter API v2.

use crate::error::{TwitterError, TwitterResult};
use crate::types::TwitterConfig;
use log::debug;
use postflow_core::{build_http_client, mask_secret, send};
use serde::de::DeserializeOwned;

/// Twitter API v2 client.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: TwitterConfig,
    pub(crate) base_url: String,
}

impl TwitterClient {
    /// Create a new client from a [`TwitterConfig`].
    pub fn new(config: &TwitterConfig) -> TwitterResult<Self> {
        if config.bearer_token.is_empty() && config.client_id.is_empty() {
            return Err(TwitterError::Config(
                "either bearer_token or client_id is required".into(),
            ));
        }

        Ok(Self {
            http: build_http_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config: config.clone(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a v2 endpoint.
    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> TwitterResult<R> {
        let url = self.url(path);
        debug!(
            "GET {} (bearer {})",
            url,
            mask_secret(&self.config.bearer_token)
        );
        let request = self
            .http
            .get(&url)
            .bearer_auth(&self.config.bearer_token)
            .query(params);
        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(TwitterError::from_response(&resp));
        }
        Ok(resp.json()?)
    }

    /// POST a v2 endpoint with a JSON body.
    pub(crate) async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> TwitterResult<R> {
        let url = self.url(path);
        debug!(
            "POST {} (bearer {})",
            url,
            mask_secret(&self.config.bearer_token)
        );
        let request = self
            .http
            .post(&url)
            .bearer_auth(&self.config.bearer_token)
            .json(body);
        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(TwitterError::from_response(&resp));
        }
        Ok(resp.json()?)
    }

    /// DELETE a v2 endpoint.
    pub(crate) async fn delete<R: DeserializeOwned>(&self, path: &str) -> TwitterResult<R> {
        let url = self.url(path);
        debug!(
            "DELETE {} (bearer {})",
            url,
            mask_secret(&self.config.bearer_token)
        );
        let request = self.http.delete(&url).bearer_auth(&self.config.bearer_token);
        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(TwitterError::from_response(&resp));
        }
        Ok(resp.json()?)
    }
}
