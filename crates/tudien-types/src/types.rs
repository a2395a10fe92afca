use std::fmt;

use serde::{Deserialize, Serialize};

/// One sense of a word under one part of speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionItem {
    /// Display text with markup already stripped; never empty.
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Alternate words; carried in the model but not populated by every source.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

impl DefinitionItem {
    pub fn new(meaning: impl Into<String>) -> Self {
        Self {
            meaning: meaning.into(),
            examples: Vec::new(),
            synonyms: Vec::new(),
        }
    }
}

/// Senses sharing one grammatical category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartOfSpeechGroup {
    /// Label as reported by the source, original casing preserved.
    pub part_of_speech: String,
    /// Invariant: never empty; a group without meanings is not emitted.
    pub meanings: Vec<DefinitionItem>,
}

/// Unified dictionary entry produced by normalization.
///
/// A fresh value per lookup, owned by the caller; carries no reference back
/// to the raw payload it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Canonical form of the looked-up word; never empty.
    pub headword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Best-effort short translation/definition used as a headline.
    pub primary_gloss: String,
    /// Source order, not alphabetical; may be empty.
    pub groups: Vec<PartOfSpeechGroup>,
}

/// Which upstream produced a raw payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Machine-translation endpoint, nested-array response.
    Translate,
    /// Structured dictionary REST endpoint, language-keyed JSON.
    Definitions,
    /// Raw encyclopedic-wiki markup.
    Wikitext,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Translate => "translate",
            SourceKind::Definitions => "definitions",
            SourceKind::Wikitext => "wikitext",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
