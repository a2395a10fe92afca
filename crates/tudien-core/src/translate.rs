use serde_json::Value;
use tudien_types::{DefinitionItem, DictionaryEntry, PartOfSpeechGroup};

use crate::phonetic::first_phonetic;

/// Parse the nested-array payload of the machine-translation endpoint.
///
/// Position 0 holds translation/phonetic rows, position 1 dictionary
/// groups. The shape is informal and shifts between queries and upstream
/// revisions, so every access pattern-matches defensively: a missing or
/// oddly typed position degrades to an empty value. This parser never
/// fails; a partial entry is the contract.
pub fn parse(payload: &Value, term: &str) -> DictionaryEntry {
    let translation_row = payload.get(0);

    let primary_gloss = translation_row
        .and_then(|row| row.get(0))
        .and_then(|cell| cell.get(0))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let headword = translation_row
        .and_then(|row| row.get(0))
        .and_then(|cell| cell.get(1))
        .and_then(Value::as_str)
        .filter(|word| !word.is_empty())
        .unwrap_or(term)
        .to_owned();

    let phonetic = translation_row
        .and_then(Value::as_array)
        .and_then(|row| row.get(1..))
        .and_then(first_phonetic);

    let groups = payload
        .get(1)
        .and_then(Value::as_array)
        .map(|raw_groups| raw_groups.iter().filter_map(sense_group).collect())
        .unwrap_or_default();

    DictionaryEntry {
        headword,
        phonetic,
        primary_gloss,
        groups,
    }
}

fn sense_group(raw: &Value) -> Option<PartOfSpeechGroup> {
    let part_of_speech = raw
        .get(0)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let meanings: Vec<DefinitionItem> = raw
        .get(1)
        .and_then(Value::as_array)
        .map(|candidates| {
            candidates
                .iter()
                .filter_map(Value::as_str)
                .map(DefinitionItem::new)
                .collect()
        })
        .unwrap_or_default();

    if meanings.is_empty() {
        return None;
    }
    Some(PartOfSpeechGroup {
        part_of_speech,
        meanings,
    })
}
