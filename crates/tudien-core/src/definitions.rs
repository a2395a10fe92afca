use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tudien_types::{DefinitionItem, DictionaryEntry, PartOfSpeechGroup, SourceKind};

use crate::error::NormalizeError;
use crate::text::strip_markup;

/// Sense group as served by the structured dictionary REST endpoint.
#[derive(Debug, Deserialize)]
struct RawSenseGroup {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<RawDefinition>,
}

#[derive(Debug, Deserialize)]
struct RawDefinition {
    /// Markup-bearing definition text.
    #[serde(default)]
    definition: String,
    #[serde(default)]
    examples: Vec<String>,
}

/// Parse the language-keyed structured payload.
///
/// A payload that fails to deserialize is malformed; a payload with no
/// sense groups for the requested language is the distinct, expected
/// `NoStructuredData` outcome so the caller can tell "no structured data"
/// apart from "word exists but ungrouped".
pub fn parse(
    payload: Value,
    language: &str,
    term: &str,
) -> Result<DictionaryEntry, NormalizeError> {
    let mut by_language: HashMap<String, Vec<RawSenseGroup>> = serde_json::from_value(payload)
        .map_err(|err| NormalizeError::MalformedPayload {
            kind: SourceKind::Definitions,
            detail: err.to_string(),
        })?;

    let raw_groups = by_language
        .remove(language)
        .filter(|groups| !groups.is_empty())
        .ok_or_else(|| NormalizeError::NoStructuredData {
            language: language.to_owned(),
        })?;

    let groups: Vec<PartOfSpeechGroup> = raw_groups.into_iter().filter_map(sense_group).collect();

    let primary_gloss = groups
        .first()
        .and_then(|group| group.meanings.first())
        .map(|item| item.meaning.clone())
        .unwrap_or_default();

    Ok(DictionaryEntry {
        headword: term.to_owned(),
        // The structured endpoint has no reliable transliteration field.
        phonetic: None,
        primary_gloss,
        groups,
    })
}

fn sense_group(raw: RawSenseGroup) -> Option<PartOfSpeechGroup> {
    let meanings: Vec<DefinitionItem> = raw
        .definitions
        .into_iter()
        .filter_map(|definition| {
            let meaning = strip_markup(&definition.definition).trim().to_owned();
            if meaning.is_empty() {
                return None;
            }
            let examples = definition
                .examples
                .iter()
                .map(|example| strip_markup(example).trim().to_owned())
                .filter(|example| !example.is_empty())
                .collect();
            Some(DefinitionItem {
                meaning,
                examples,
                synonyms: Vec::new(),
            })
        })
        .collect();

    if meanings.is_empty() {
        return None;
    }
    Some(PartOfSpeechGroup {
        part_of_speech: raw.part_of_speech,
        meanings,
    })
}
