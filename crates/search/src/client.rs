//! HTTP client for the joke search endpoint

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::joke::SearchResponse;
use crate::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use tracing::debug;

/// Anything that can answer a joke search
///
/// The controller only talks to this trait, so tests can stand in a fake.
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Search jokes matching `term`
    async fn search(&self, term: &str) -> Result<SearchResponse>;
}

/// Client for the icanhazdadjoke search API
#[derive(Debug, Clone)]
pub struct JokeClient {
    /// HTTP client
    client: Client,
    /// Search endpoint, without query string
    endpoint: Url,
}

impl JokeClient {
    /// Create a client from configuration
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| SearchError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Endpoint this client sends requests to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the request URL for `term`
    fn search_url(&self, term: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("term", term);
        url
    }
}

#[async_trait]
impl JokeSource for JokeClient {
    async fn search(&self, term: &str) -> Result<SearchResponse> {
        let url = self.search_url(term);
        debug!("Searching jokes: {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        debug!(
            "Search for '{}' returned {} jokes",
            term,
            parsed.results.len()
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_term() {
        let client = JokeClient::new(&SearchConfig::default()).unwrap();

        let url = client.search_url("cat & dog");
        assert_eq!(
            url.as_str(),
            "https://icanhazdadjoke.com/search?term=cat+%26+dog"
        );
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = SearchConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };

        let err = JokeClient::new(&config).unwrap_err();
        assert!(matches!(err, SearchError::InvalidEndpoint { .. }));
    }
}
