//! TikTok Shop request signing.
//!
//! The documented construction, reproduced exactly:
//!
//! ```text
//! base = app_secret + path + concat(sorted_by_key(key + value)) [+ body_json] + app_secret
//! sign = lowercase_hex(HMAC_SHA256(key = app_secret, base))
//! ```
//!
//! `sign` and `access_token` are excluded from the signed parameter set —
//! `access_token` (and `shop_id`) still travel as plain query parameters.
//! Getting the parameter order or the exclusions wrong does not fail
//! loudly: every signed call just comes back with a Shop error code.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

/// Compute the `sign` parameter for a Shop API request.
///
/// `params` must hold every query parameter that will be sent (including
/// `access_token`; it is filtered out here). `body` is the exact JSON
/// string of the request body, when there is one.
pub fn sign_request(
    app_secret: &str,
    path: &str,
    params: &BTreeMap<String, String>,
    body: Option<&str>,
) -> String {
    let mut base = String::with_capacity(
        app_secret.len() * 2
            + path.len()
            + params.iter().map(|(k, v)| k.len() + v.len()).sum::<usize>()
            + body.map_or(0, str::len),
    );

    base.push_str(app_secret);
    base.push_str(path);
    // BTreeMap iterates in key order, which is exactly the required
    // lexicographic ordering.
    for (key, value) in params {
        if key == "sign" || key == "access_token" {
            continue;
        }
        base.push_str(key);
        base.push_str(value);
    }
    if let Some(body) = body {
        base.push_str(body);
    }
    base.push_str(app_secret);

    let mut mac = HmacSha256::new_from_slice(app_secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(base.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_SECRET: &str = "0d0a26577c8db84cbeb7df5ba42e0c73";

    fn base_params() -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("app_key".to_string(), "6a8qe9crvo0vg".to_string());
        params.insert("timestamp".to_string(), "1700000000".to_string());
        params.insert("shop_id".to_string(), "7495-shop".to_string());
        params
    }

    #[test]
    fn known_signature_for_get_request() {
        let mut params = base_params();
        params.insert(
            "access_token".to_string(),
            "tok-should-be-ignored".to_string(),
        );
        let sign = sign_request(
            APP_SECRET,
            "/api/shop/get_authorized_shop",
            &params,
            None,
        );
        assert_eq!(
            sign,
            "1972a1e78744911794b85a7345cb5db25cca7008958a52fd762d330cef53544c"
        );
    }

    #[test]
    fn access_token_never_affects_the_signature() {
        let with_token = {
            let mut params = base_params();
            params.insert("access_token".to_string(), "anything".to_string());
            sign_request(APP_SECRET, "/api/shop/get_authorized_shop", &params, None)
        };
        let without_token =
            sign_request(APP_SECRET, "/api/shop/get_authorized_shop", &base_params(), None);
        assert_eq!(with_token, without_token);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        // Insert in reverse; BTreeMap re-sorts by key.
        let mut params = BTreeMap::new();
        params.insert("timestamp".to_string(), "1700000000".to_string());
        params.insert("shop_id".to_string(), "7495-shop".to_string());
        params.insert("app_key".to_string(), "6a8qe9crvo0vg".to_string());
        let sign = sign_request(APP_SECRET, "/api/shop/get_authorized_shop", &params, None);
        assert_eq!(
            sign,
            "1972a1e78744911794b85a7345cb5db25cca7008958a52fd762d330cef53544c"
        );
    }

    #[test]
    fn body_is_part_of_the_signature() {
        let mut params = base_params();
        params.insert("access_token".to_string(), "tok".to_string());
        let body = r#"{"page_size":50,"search_status":0}"#;
        let sign = sign_request(APP_SECRET, "/api/products/search", &params, Some(body));
        assert_eq!(
            sign,
            "9f83bb999f0083c90ce86df02ccd56bc0aa71524c328507d1548959dd84f0903"
        );

        let unsigned_body =
            sign_request(APP_SECRET, "/api/products/search", &params, None);
        assert_ne!(sign, unsigned_body);
    }

    #[test]
    fn signature_is_lowercase_hex() {
        let sign = sign_request(APP_SECRET, "/api/x", &base_params(), None);
        assert_eq!(sign.len(), 64);
        assert!(sign.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
