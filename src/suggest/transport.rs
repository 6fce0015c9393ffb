//! Search transport
//!
//! [`SearchTransport`] is the seam between the suggestion pipeline and the
//! network. [`WikipediaClient`] is the production implementation; tests plug
//! in scripted transports.

use std::time::Duration;

use futures::future::BoxFuture;

use super::query::SearchQuery;
use super::response::SearchResponse;
use crate::config::ApiConfig;
use crate::error::SuggestError;

/// Header used by the MediaWiki API to identify browser-style clients
pub const API_USER_AGENT_HEADER: &str = "Api-User-Agent";

/// Issues a prefix search and decodes the response body
pub trait SearchTransport: Send + Sync {
    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, Result<SearchResponse, SuggestError>>;
}

/// reqwest-backed client for the MediaWiki action API
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    endpoint: String,
    user_agent: String,
}

impl WikipediaClient {
    pub fn new(config: &ApiConfig) -> Result<Self, SuggestError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the GET request without sending it
    fn request(&self, query: &SearchQuery) -> reqwest::RequestBuilder {
        self.http
            .get(&self.endpoint)
            .query(&query.params())
            .header(API_USER_AGENT_HEADER, &self.user_agent)
    }

    async fn fetch(&self, query: &SearchQuery) -> Result<SearchResponse, SuggestError> {
        let response = self.request(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SuggestError::Api {
                code: status.as_u16().to_string(),
                message,
            });
        }

        let body = response.text().await?;
        SearchResponse::from_json(&body)?.check()
    }
}

impl SearchTransport for WikipediaClient {
    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, Result<SearchResponse, SuggestError>> {
        Box::pin(self.fetch(query))
    }
}
