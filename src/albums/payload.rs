//! Decoding of AJAX response bodies.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use tracing::debug;

lazy_static! {
    // The endpoint occasionally leaks a `targetLink...` token into the JSON.
    // It is removed along with anything up to the next structural character.
    static ref CORRUPT_TOKEN: Regex =
        Regex::new(r#"targetLink[^{}\[\]",]*,?"#).expect("Failed to compile token regex");
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(rename = "arraySet", default)]
    array_set: Option<Vec<RawId>>,
    #[serde(default)]
    album: Option<String>,
    #[serde(default)]
    data: Option<String>,
}

/// One decoded response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePayload {
    /// Every ID matching the request, when the endpoint reports it.
    pub array_set: Option<Vec<u64>>,
    /// HTML fragment carrying the album nodes of this page.
    pub fragment: String,
}

pub fn sanitize(body: &str) -> Cow<'_, str> {
    CORRUPT_TOKEN.replace_all(body, "")
}

/// Decode a response body, or `None` when it is not a usable JSON object.
pub fn decode_page(body: &str) -> Option<PagePayload> {
    let cleaned = sanitize(body);
    let value: serde_json::Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            debug!("Response body is not valid JSON: {}", e);
            return None;
        }
    };
    if !value.is_object() {
        debug!("Response body decoded to a non-object value");
        return None;
    }
    let raw: RawPage = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("Response body has unexpected field types: {}", e);
            return None;
        }
    };

    let array_set = raw.array_set.map(|ids| {
        ids.into_iter()
            .filter_map(|id| match id {
                RawId::Number(n) => Some(n),
                RawId::Text(s) => s.trim().parse().ok(),
            })
            .collect()
    });

    Some(PagePayload {
        array_set,
        fragment: raw.album.or(raw.data).unwrap_or_default(),
    })
}
