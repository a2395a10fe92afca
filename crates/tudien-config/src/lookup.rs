use std::env;

use serde::{Deserialize, Serialize};

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "vi".to_string()
}

fn default_definition_language() -> String {
    "en".to_string()
}

fn default_section_label() -> String {
    "Tiếng Việt".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Language the queried word is written in
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    /// Language translations are requested in
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Key selecting sense groups in structured payloads
    #[serde(default = "default_definition_language")]
    pub definition_language: String,
    /// Heading label of the wiki language section to analyze
    #[serde(default = "default_section_label")]
    pub section_label: String,
}

impl LookupConfig {
    pub fn new() -> Self {
        Self {
            source_lang: env::var("SOURCE_LANG").unwrap_or_else(|_| default_source_lang()),
            target_lang: env::var("TARGET_LANG").unwrap_or_else(|_| default_target_lang()),
            definition_language: env::var("DEFINITION_LANGUAGE")
                .unwrap_or_else(|_| default_definition_language()),
            section_label: env::var("WIKI_SECTION_LABEL")
                .unwrap_or_else(|_| default_section_label()),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            definition_language: default_definition_language(),
            section_label: default_section_label(),
        }
    }
}
