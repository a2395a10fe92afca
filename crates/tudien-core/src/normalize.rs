use serde_json::Value;
use tudien_types::{DictionaryEntry, SourceKind};

use crate::error::NormalizeError;
use crate::{definitions, translate, wikitext};

/// Language key selecting sense groups in structured payloads.
const DEFAULT_DEFINITION_LANGUAGE: &str = "en";
/// Heading label of the wiki language section to analyze.
const DEFAULT_SECTION_LABEL: &str = "Tiếng Việt";

/// Dispatches raw payloads to the parser matching their declared source.
///
/// Language selectors are fixed at construction; every call is a pure
/// function of its arguments and allocates a fresh entry. Exactly one
/// parser runs per call; the declared source kind is never second-guessed
/// from the payload shape, and no merging happens across sources.
#[derive(Debug, Clone)]
pub struct Normalizer {
    definition_language: String,
    section_label: String,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::with_languages(DEFAULT_DEFINITION_LANGUAGE, DEFAULT_SECTION_LABEL)
    }

    pub fn with_languages(
        definition_language: impl Into<String>,
        section_label: impl Into<String>,
    ) -> Self {
        Self {
            definition_language: definition_language.into(),
            section_label: section_label.into(),
        }
    }

    /// Convert a raw payload into a unified entry.
    pub fn normalize(
        &self,
        payload: Value,
        kind: SourceKind,
        term: &str,
    ) -> Result<DictionaryEntry, NormalizeError> {
        match kind {
            SourceKind::Translate => {
                if !payload.is_array() {
                    return Err(malformed(kind, "expected a top-level array"));
                }
                Ok(translate::parse(&payload, term))
            }
            SourceKind::Definitions => {
                if !payload.is_object() {
                    return Err(malformed(kind, "expected a top-level object"));
                }
                definitions::parse(payload, &self.definition_language, term)
            }
            SourceKind::Wikitext => {
                let document = payload
                    .as_str()
                    .ok_or_else(|| malformed(kind, "expected a markup string"))?;
                Ok(wikitext::parse(document, term, &self.section_label))
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize with the default language selectors.
pub fn normalize(
    payload: Value,
    kind: SourceKind,
    term: &str,
) -> Result<DictionaryEntry, NormalizeError> {
    Normalizer::new().normalize(payload, kind, term)
}

fn malformed(kind: SourceKind, detail: &str) -> NormalizeError {
    NormalizeError::MalformedPayload {
        kind,
        detail: detail.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn translate_kind_requires_an_array() {
        let err = normalize(json!({"a": 1}), SourceKind::Translate, "x").unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::MalformedPayload {
                kind: SourceKind::Translate,
                ..
            }
        ));
    }

    #[test]
    fn definitions_kind_requires_an_object() {
        let err = normalize(json!([1, 2]), SourceKind::Definitions, "x").unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::MalformedPayload {
                kind: SourceKind::Definitions,
                ..
            }
        ));
    }

    #[test]
    fn wikitext_kind_requires_a_string() {
        let err = normalize(json!(["== x =="]), SourceKind::Wikitext, "x").unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::MalformedPayload {
                kind: SourceKind::Wikitext,
                ..
            }
        ));
    }

    #[test]
    fn kind_is_never_inferred_from_shape() {
        // A perfectly valid wiki document declared as translate data fails
        // instead of being rerouted.
        let payload = json!("== Tiếng Việt ==\n=== Danh từ ===\n# nghĩa\n");
        assert!(normalize(payload, SourceKind::Translate, "x").is_err());
    }

    #[test]
    fn configured_section_label_reaches_the_wiki_parser() {
        let normalizer = Normalizer::with_languages("en", "English");
        let payload = json!("== English ==\n=== Noun ===\n# a sense\n");
        let entry = normalizer
            .normalize(payload, SourceKind::Wikitext, "word")
            .unwrap();
        assert_eq!(entry.primary_gloss, "a sense");
    }
}
