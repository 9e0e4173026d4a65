//! Low-level HTTP client for the Evolution API.
//!
//! Every request carries the static API key in an `apikey` header. The
//! error body format varies across Evolution endpoints, so extraction is
//! best-effort: `response.message` (string or array), then `message`,
//! then `error`, then the bare HTTP status.

use crate::error::{EvolutionError, EvolutionResult};
use crate::types::EvolutionConfig;
use log::debug;
use postflow_core::{build_http_client, mask_secret, send, HttpResponse};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Evolution API client, bound to one instance.
#[derive(Debug, Clone)]
pub struct EvolutionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    instance: String,
}

impl EvolutionClient {
    /// Create a new client from an [`EvolutionConfig`].
    pub fn new(config: &EvolutionConfig) -> EvolutionResult<Self> {
        if config.base_url.is_empty() {
            return Err(EvolutionError::Config("base_url must not be empty".into()));
        }
        if config.api_key.is_empty() {
            return Err(EvolutionError::Config("api_key must not be empty".into()));
        }

        Ok(Self {
            http: build_http_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            instance: config.instance.clone(),
        })
    }

    /// Instance name this client is bound to.
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Build `{base}/{path}/{instance}` for instance-scoped endpoints.
    pub(crate) fn instance_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, path, self.instance)
    }

    /// Build `{base}/{path}` for server-scoped endpoints.
    pub(crate) fn server_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, url: &str) -> EvolutionResult<R> {
        self.request::<(), R>(Method::GET, url, None).await
    }

    pub(crate) async fn post<P: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &P,
    ) -> EvolutionResult<R> {
        self.request(Method::POST, url, Some(body)).await
    }

    pub(crate) async fn delete<R: DeserializeOwned>(&self, url: &str) -> EvolutionResult<R> {
        self.request::<(), R>(Method::DELETE, url, None).await
    }

    async fn request<P: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&P>,
    ) -> EvolutionResult<R> {
        debug!("{} {} (apikey {})", method, url, mask_secret(&self.api_key));

        let mut request = self
            .http
            .request(method, url)
            .header("apikey", &self.api_key);
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(EvolutionError::Api(extract_error_message(&resp)));
        }
        // Some lifecycle endpoints reply 200 with an empty body.
        if resp.body.is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(resp.json()?)
    }
}

/// Pull the most specific error message out of an Evolution error body.
fn extract_error_message(resp: &HttpResponse) -> String {
    if let Some(value) = resp.json_value() {
        let candidates = [
            value.pointer("/response/message"),
            value.get("message"),
            value.get("error"),
        ];
        for candidate in candidates.into_iter().flatten() {
            if let Some(text) = first_string(candidate) {
                return text;
            }
        }
    }
    format!("HTTP {}", resp.status)
}

/// A message field may be a string or an array of strings; take the first.
fn first_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_string),
        _ => None,
    }
}
