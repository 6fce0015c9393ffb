//! Wire types for the search API response body

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::SuggestError;

/// Top-level response body
///
/// A search with no matches omits `query` entirely.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<QueryResult>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResult {
    /// Records that fail to decode are dropped one by one
    #[serde(default, deserialize_with = "decode_pages")]
    pub pages: HashMap<String, PageRecord>,
}

/// One page of the result map, keyed by an opaque page id
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageRecord {
    /// 1-based rank assigned by the provider
    #[serde(default, deserialize_with = "decode_index")]
    pub index: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub terms: Option<PageTerms>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageTerms {
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub source: Option<String>,
}

/// `error` object returned with HTTP 200 for invalid requests
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

fn decode_pages<'de, D>(deserializer: D) -> Result<HashMap<String, PageRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, Value>::deserialize(deserializer)?;
    let pages = raw
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value::<PageRecord>(value) {
            Ok(record) => Some((key, record)),
            Err(e) => {
                log::debug!("Skipping undecodable page {}: {}", key, e);
                None
            }
        })
        .collect();
    Ok(pages)
}

/// Accepts integers and integer strings; anything else reads as no index
fn decode_index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let index = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(index)
}

impl SearchResponse {
    /// Decode a response body
    pub fn from_json(body: &str) -> Result<Self, SuggestError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Fail on an API-level error body
    pub fn check(self) -> Result<Self, SuggestError> {
        match self.error {
            Some(err) => Err(SuggestError::Api {
                code: err.code,
                message: err.info,
            }),
            None => Ok(self),
        }
    }

    /// The page map, empty when the search had no matches
    pub fn pages(&self) -> Option<&HashMap<String, PageRecord>> {
        self.query.as_ref().map(|q| &q.pages)
    }
}
