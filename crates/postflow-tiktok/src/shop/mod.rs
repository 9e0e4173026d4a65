//! TikTok Shop server-side API client.
//!
//! Every catalog/order call is signed (see [`sign`]) and carries the
//! common parameters `app_key`, `timestamp`, `sign`, `access_token`, and
//! `shop_id` where one is configured. The Shop OAuth token endpoints live
//! on a separate auth host and are unsigned.

pub mod sign;

use crate::error::{TikTokError, TikTokResult};
use crate::types::{
    Order, OrderList, ProductList, ShopConfig, ShopEnvelope, ShopList, ShopToken,
};
use log::debug;
use postflow_core::{build_http_client, mask_secret, send, sorted_query, HttpResponse};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// TikTok Shop API client.
#[derive(Debug, Clone)]
pub struct ShopClient {
    http: reqwest::Client,
    config: ShopConfig,
}

impl ShopClient {
    /// Create a new client from a [`ShopConfig`].
    pub fn new(config: &ShopConfig) -> TikTokResult<Self> {
        if config.app_key.is_empty() || config.app_secret.is_empty() {
            return Err(TikTokError::Config(
                "app_key and app_secret must not be empty".into(),
            ));
        }

        Ok(Self {
            http: build_http_client(config.timeout_seconds)?,
            config: config.clone(),
        })
    }

    fn timestamp() -> TikTokResult<String> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|t| t.as_secs().to_string())
            .map_err(|_| TikTokError::Config("system clock before unix epoch".into()))
    }

    /// Perform one signed request against the Shop API.
    async fn signed_call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        extra_params: &[(&str, &str)],
        body: Option<serde_json::Value>,
    ) -> TikTokResult<R> {
        let mut params = BTreeMap::new();
        params.insert("app_key".to_string(), self.config.app_key.clone());
        params.insert("timestamp".to_string(), Self::timestamp()?);
        if let Some(ref shop_id) = self.config.shop_id {
            params.insert("shop_id".to_string(), shop_id.clone());
        }
        for (key, value) in extra_params {
            params.insert((*key).to_string(), (*value).to_string());
        }
        params.insert("access_token".to_string(), self.config.access_token.clone());

        let body_json = body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let signature = sign::sign_request(
            &self.config.app_secret,
            path,
            &params,
            body_json.as_deref(),
        );
        params.insert("sign".to_string(), signature);

        let url = format!(
            "{}{}?{}",
            self.config.base_url.trim_end_matches('/'),
            path,
            sorted_query(&params)
        );
        debug!(
            "{} {} (app_key {})",
            method,
            path,
            mask_secret(&self.config.app_key)
        );

        let mut request = self.http.request(method, &url);
        if let Some(body_json) = body_json {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body_json);
        }

        let resp = send(request).await?;
        unwrap_shop_envelope(resp)
    }

    // ─── Shops ───────────────────────────────────────────────────────

    /// Shops the app is authorized for.
    pub async fn get_authorized_shops(&self) -> TikTokResult<ShopList> {
        self.signed_call(Method::GET, "/api/shop/get_authorized_shop", &[], None)
            .await
    }

    // ─── Products ────────────────────────────────────────────────────

    /// Search the product catalog.
    pub async fn search_products(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> TikTokResult<ProductList> {
        let body = json!({
            "page_number": page_number,
            "page_size": page_size,
        });
        self.signed_call(Method::POST, "/api/products/search", &[], Some(body))
            .await
    }

    /// Product details by id.
    pub async fn get_product(&self, product_id: &str) -> TikTokResult<serde_json::Value> {
        self.signed_call(
            Method::GET,
            "/api/products/details",
            &[("product_id", product_id)],
            None,
        )
        .await
    }

    // ─── Orders ──────────────────────────────────────────────────────

    /// Search orders, newest first.
    pub async fn search_orders(
        &self,
        page_size: u32,
        cursor: Option<&str>,
    ) -> TikTokResult<OrderList> {
        let mut body = json!({"page_size": page_size, "sort_by": "CREATE_TIME", "sort_type": 2});
        if let Some(cursor) = cursor {
            body["cursor"] = json!(cursor);
        }
        self.signed_call(Method::POST, "/api/orders/search", &[], Some(body))
            .await
    }

    /// Full detail for a batch of orders.
    pub async fn get_order_detail(&self, order_ids: &[&str]) -> TikTokResult<Vec<Order>> {
        let body = json!({"order_id_list": order_ids});
        let detail: OrderList = self
            .signed_call(Method::POST, "/api/orders/detail/query", &[], Some(body))
            .await?;
        Ok(detail.order_list)
    }

    // ─── Affiliate ───────────────────────────────────────────────────

    /// Search affiliate-attributed orders.
    pub async fn search_affiliate_orders(
        &self,
        page_size: u32,
        cursor: Option<&str>,
    ) -> TikTokResult<serde_json::Value> {
        let mut body = json!({"page_size": page_size});
        if let Some(cursor) = cursor {
            body["cursor"] = json!(cursor);
        }
        self.signed_call(Method::POST, "/api/affiliate/orders/search", &[], Some(body))
            .await
    }

    // ─── Shop OAuth (unsigned, separate auth host) ───────────────────

    /// Exchange an authorized code for a shop token.
    pub async fn get_access_token(&self, auth_code: &str) -> TikTokResult<ShopToken> {
        let url = format!(
            "{}/api/v2/token/get",
            self.config.auth_base_url.trim_end_matches('/')
        );
        let request = self.http.get(&url).query(&[
            ("app_key", self.config.app_key.as_str()),
            ("app_secret", self.config.app_secret.as_str()),
            ("auth_code", auth_code),
            ("grant_type", "authorized_code"),
        ]);
        let resp = send(request).await?;
        unwrap_shop_envelope(resp)
    }

    /// Refresh a shop token. Returns the new token pair by value; the
    /// client's held config is not mutated.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> TikTokResult<ShopToken> {
        let url = format!(
            "{}/api/v2/token/refresh",
            self.config.auth_base_url.trim_end_matches('/')
        );
        let request = self.http.get(&url).query(&[
            ("app_key", self.config.app_key.as_str()),
            ("app_secret", self.config.app_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ]);
        let resp = send(request).await?;
        unwrap_shop_envelope(resp)
    }
}

/// Decode a Shop response and unwrap its `{code, message, data}` envelope.
fn unwrap_shop_envelope<R: DeserializeOwned>(resp: HttpResponse) -> TikTokResult<R> {
    let envelope: ShopEnvelope<R> = match resp.json() {
        Ok(envelope) => envelope,
        Err(_) if !resp.is_success() => {
            return Err(TikTokError::Api(format!("HTTP {}", resp.status)));
        }
        Err(e) => return Err(e.into()),
    };

    if envelope.code != 0 {
        let message = if envelope.message.is_empty() {
            format!("shop error code {}", envelope.code)
        } else {
            envelope.message
        };
        return Err(TikTokError::Api(message));
    }
    if !resp.is_success() {
        return Err(TikTokError::Api(format!("HTTP {}", resp.status)));
    }
    envelope
        .data
        .ok_or_else(|| TikTokError::Api("response carried no data".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::{
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base: &str) -> ShopClient {
        ShopClient::new(&ShopConfig {
            app_key: "6a8qe9crvo0vg".into(),
            app_secret: "0d0a26577c8db84cbeb7df5ba42e0c73".into(),
            access_token: "shop-token".into(),
            shop_id: Some("7495-shop".into()),
            base_url: base.to_string(),
            auth_base_url: base.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn signed_call_carries_common_params_and_valid_sign() {
        let app = Router::new().route(
            "/api/shop/get_authorized_shop",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                // Everything the signing scheme requires is on the wire.
                assert_eq!(params["app_key"], "6a8qe9crvo0vg");
                assert_eq!(params["access_token"], "shop-token");
                assert_eq!(params["shop_id"], "7495-shop");
                assert!(params.contains_key("timestamp"));

                // Recompute the signature server-side; it must match.
                let mut signed: std::collections::BTreeMap<String, String> = params
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                let client_sign = signed.remove("sign").unwrap();
                let expected = crate::shop::sign::sign_request(
                    "0d0a26577c8db84cbeb7df5ba42e0c73",
                    "/api/shop/get_authorized_shop",
                    &signed,
                    None,
                );
                assert_eq!(client_sign, expected);

                Json(json!({
                    "code": 0,
                    "message": "success",
                    "data": {"shop_list": [{"shop_id": "7495-shop", "shop_name": "acme"}]}
                }))
            }),
        );
        let base = spawn(app).await;

        let shops = client_for(&base).get_authorized_shops().await.unwrap();
        assert_eq!(shops.shop_list.len(), 1);
        assert_eq!(shops.shop_list[0].shop_name.as_deref(), Some("acme"));
    }

    #[tokio::test]
    async fn shop_error_code_surfaces_message() {
        let app = Router::new().route(
            "/api/products/search",
            post(|| async {
                Json(json!({
                    "code": 105001,
                    "message": "access_token is invalid",
                    "data": null
                }))
            }),
        );
        let base = spawn(app).await;

        let err = client_for(&base).search_products(1, 50).await.unwrap_err();
        assert_eq!(err.to_string(), "access_token is invalid");
    }

    #[tokio::test]
    async fn body_is_signed_along_with_params() {
        let app = Router::new().route(
            "/api/products/search",
            post(
                |Query(params): Query<HashMap<String, String>>, body_str: String| async move {
                    let mut signed: std::collections::BTreeMap<String, String> = params
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect();
                    let client_sign = signed.remove("sign").unwrap();
                    let expected = crate::shop::sign::sign_request(
                        "0d0a26577c8db84cbeb7df5ba42e0c73",
                        "/api/products/search",
                        &signed,
                        Some(&body_str),
                    );
                    assert_eq!(client_sign, expected);

                    Json(json!({
                        "code": 0,
                        "message": "success",
                        "data": {"products": [], "total": 0}
                    }))
                },
            ),
        );
        let base = spawn(app).await;

        let products = client_for(&base).search_products(1, 50).await.unwrap();
        assert_eq!(products.total, Some(0));
    }

    #[tokio::test]
    async fn shop_oauth_refresh_returns_new_tokens() {
        let app = Router::new().route(
            "/api/v2/token/refresh",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params["grant_type"], "refresh_token");
                assert_eq!(params["refresh_token"], "rft.old");
                Json(json!({
                    "code": 0,
                    "message": "success",
                    "data": {
                        "access_token": "shop.new",
                        "refresh_token": "rft.new",
                        "access_token_expire_in": 604800,
                        "seller_name": "acme"
                    }
                }))
            }),
        );
        let base = spawn(app).await;
        let client = client_for(&base);

        let token = client.refresh_access_token("rft.old").await.unwrap();
        assert_eq!(token.access_token, "shop.new");
        // held config is untouched
        assert_eq!(client.config.access_token, "shop-token");
    }
}
