//! Low-level HTTP client for the Data API.
//!
//! Bearer token when present, API key query parameter otherwise.

use crate::error::{YouTubeError, YouTubeResult};
use crate::types::YouTubeConfig;
use log::debug;
use postflow_core::{build_http_client, send};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// YouTube Data API client.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: YouTubeConfig,
}

impl YouTubeClient {
    /// Create a new client from a [`YouTubeConfig`].
    pub fn new(config: &YouTubeConfig) -> YouTubeResult<Self> {
        if config.access_token.is_none() && config.api_key.is_none() {
            return Err(YouTubeError::Config(
                "either access_token or api_key is required".into(),
            ));
        }

        Ok(Self {
            http: build_http_client(config.timeout_seconds)?,
            config: config.clone(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Bearer token when configured, else the API key as `key=`.
    pub(crate) fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref token) = self.config.access_token {
            request.bearer_auth(token)
        } else if let Some(ref key) = self.config.api_key {
            request.query(&[("key", key.as_str())])
        } else {
            request
        }
    }

    /// Whether a bearer token is configured (required for mutations and
    /// Analytics).
    pub(crate) fn require_token(&self) -> YouTubeResult<()> {
        if self.config.access_token.is_none() {
            return Err(YouTubeError::Config(
                "this operation requires an OAuth access token".into(),
            ));
        }
        Ok(())
    }

    pub(crate) async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        params: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> YouTubeResult<R> {
        debug!("{method} {url}");
        let mut request = self.apply_auth(self.http.request(method, url)).query(params);
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(YouTubeError::from_response(&resp));
        }
        // DELETE returns 204 with an empty body.
        if resp.body.is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(resp.json()?)
    }

    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> YouTubeResult<R> {
        let url = self.url(path);
        self.request(Method::GET, &url, params, None).await
    }

    pub(crate) async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> YouTubeResult<R> {
        self.require_token()?;
        let url = self.url(path);
        self.request(Method::POST, &url, params, Some(body)).await
    }

    pub(crate) async fn put<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> YouTubeResult<R> {
        self.require_token()?;
        let url = self.url(path);
        self.request(Method::PUT, &url, params, Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str, params: &[(&str, &str)]) -> YouTubeResult<()> {
        self.require_token()?;
        let url = self.url(path);
        let _: Option<serde_json::Value> = self.request(Method::DELETE, &url, params, None).await?;
        Ok(())
    }
}
