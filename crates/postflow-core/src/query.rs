//! Query-string helpers.
//!
//! Percent-encoding per RFC 3986 unreserved characters, and a sorted
//! query builder used wherever a platform requires parameters in
//! lexicographic key order (TikTok Shop signing, OAuth URLs).

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;

// Encode everything except RFC 3986 unreserved characters.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode a single query parameter value or key.
pub fn encode_param(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

/// Build a `k=v&k=v` query string with keys in lexicographic order.
pub fn sorted_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode_param(k), encode_param(v)))
        .collect::<Vec<_>>()
        .join("&")
}
