use async_trait::async_trait;
use serde_json::Value;
use tudien_types::SourceKind;

use crate::{FetchError, PayloadSource};

/// Client for the unofficial machine-translation endpoint.
///
/// The `dt` parameters request translation, dictionary and transliteration
/// blocks; the response is the nested-array payload the normalization
/// engine expects.
#[derive(Clone)]
pub struct TranslateClient {
    client: reqwest::Client,
    base_url: String,
    source_lang: String,
    target_lang: String,
}

impl TranslateClient {
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        source_lang: String,
        target_lang: String,
    ) -> Self {
        Self {
            client,
            base_url,
            source_lang,
            target_lang,
        }
    }
}

#[async_trait]
impl PayloadSource for TranslateClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Translate
    }

    async fn fetch(&self, term: &str) -> Result<Value, FetchError> {
        tracing::debug!("translate request for '{}'", term);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", self.target_lang.as_str()),
                ("dt", "t"),
                ("dt", "bd"),
                ("dt", "rm"),
                ("q", term),
            ])
            .send()
            .await?;

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
