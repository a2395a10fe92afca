use async_trait::async_trait;
use serde_json::Value;
use tudien_types::SourceKind;

pub mod definitions;
pub mod translate;
pub mod wikitext;

pub use definitions::DefinitionClient;
pub use translate::TranslateClient;
pub use wikitext::WikitextClient;

/// Upstream payload retrieval interface
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// Which upstream this client reaches
    fn kind(&self) -> SourceKind;

    /// Retrieve the raw, deserialized payload for a term
    async fn fetch(&self, term: &str) -> Result<Value, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("word not found upstream")]
    NotFound,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("API error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
