use std::env;

use serde::{Deserialize, Serialize};

fn default_translate_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_definition_url() -> String {
    "https://en.wiktionary.org/api/rest_v1/page/definition".to_string()
}

fn default_wikitext_url() -> String {
    "https://vi.wiktionary.org/w/index.php".to_string()
}

/// Upstream endpoint URLs. These belong to the retrieval layer only; the
/// normalization engine never sees them.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_translate_url")]
    pub translate_url: String,
    #[serde(default = "default_definition_url")]
    pub definition_url: String,
    #[serde(default = "default_wikitext_url")]
    pub wikitext_url: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self {
            translate_url: env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| default_translate_url()),
            definition_url: env::var("DEFINITION_API_URL")
                .unwrap_or_else(|_| default_definition_url()),
            wikitext_url: env::var("WIKITEXT_API_URL")
                .unwrap_or_else(|_| default_wikitext_url()),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            translate_url: default_translate_url(),
            definition_url: default_definition_url(),
            wikitext_url: default_wikitext_url(),
        }
    }
}
