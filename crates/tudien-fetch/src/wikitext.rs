use async_trait::async_trait;
use serde_json::Value;
use tudien_types::SourceKind;

use crate::{FetchError, PayloadSource};

/// Client for raw wiki page markup (`action=raw`).
///
/// The body is plain markup text, not JSON; it is wrapped as a string
/// value so every source hands the engine the same payload representation.
#[derive(Clone)]
pub struct WikitextClient {
    client: reqwest::Client,
    base_url: String,
}

impl WikitextClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl PayloadSource for WikitextClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Wikitext
    }

    async fn fetch(&self, term: &str) -> Result<Value, FetchError> {
        tracing::debug!("wikitext request for '{}'", term);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("action", "raw"), ("title", term)])
            .send()
            .await?;

        if response.status() == 404 {
            return Err(FetchError::NotFound);
        }

        if !response.status().is_success() {
            return Err(FetchError::Api(format!("HTTP {}", response.status())));
        }

        let document = response
            .text()
            .await
            .map_err(|e| FetchError::Api(format!("Failed to read response body: {}", e)))?;
        Ok(Value::String(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_wikitext_kind() {
        let client = WikitextClient::new(
            reqwest::Client::new(),
            "https://vi.wiktionary.org/w/index.php".to_string(),
        );
        assert_eq!(client.kind(), SourceKind::Wikitext);
    }
}
