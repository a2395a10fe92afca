use async_trait::async_trait;
use serde_json::Value;
use tudien_types::SourceKind;

use crate::{FetchError, PayloadSource};

/// Client for the structured dictionary REST endpoint.
#[derive(Clone)]
pub struct DefinitionClient {
    client: reqwest::Client,
    base_url: String,
}

impl DefinitionClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn term_url(&self, term: &str) -> Result<reqwest::Url, FetchError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| FetchError::Api(format!("invalid endpoint URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Api("endpoint URL cannot carry a path".to_string()))?
            .push(term);
        Ok(url)
    }
}

#[async_trait]
impl PayloadSource for DefinitionClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Definitions
    }

    async fn fetch(&self, term: &str) -> Result<Value, FetchError> {
        let url = self.term_url(term)?;
        tracing::debug!("definition request: {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() == 404 {
            return Err(FetchError::NotFound);
        }

        if response.status() == 429 {
            return Err(FetchError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(FetchError::Api(format!("HTTP {}", response.status())));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Api(format!("Failed to parse response: {}", e)))
    }
}
