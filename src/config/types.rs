// Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default search endpoint (English Wikipedia action API)
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Default value of the `Api-User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!(
    "article-suggest/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/article-suggest/article-suggest)"
);

/// Search API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Sent as `Api-User-Agent` so the API operators can identify the client
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            url: default_api_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Suggestion pipeline settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SuggestConfig {
    /// Quiet period after the last keystroke before a query is issued
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    250
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Placeholder rotation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaceholderConfig {
    #[serde(default = "default_rotate_secs")]
    pub rotate_secs: u64,
}

fn default_rotate_secs() -> u64 {
    5
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        PlaceholderConfig {
            rotate_secs: default_rotate_secs(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
}
