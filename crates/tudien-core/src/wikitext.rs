use tudien_types::{DefinitionItem, DictionaryEntry, PartOfSpeechGroup};

use crate::section::{language_section, subsections};

/// Headline used when no definition line could be collected.
const FALLBACK_GLOSS: &str = "Xem chi tiết bên dưới";

/// Parse raw wiki markup into an entry.
///
/// Wiki coverage is inherently uneven, so zero collected groups still
/// yields a usable entry carrying the placeholder gloss, never an error.
/// Pronunciation notation in raw markup is not reliably extractable and is
/// not attempted.
pub fn parse(document: &str, term: &str, section_label: &str) -> DictionaryEntry {
    let section = language_section(document, section_label);

    let groups: Vec<PartOfSpeechGroup> = subsections(section)
        .into_iter()
        .filter_map(|span| {
            let meanings = collect_meanings(span.body);
            if meanings.is_empty() {
                return None;
            }
            Some(PartOfSpeechGroup {
                part_of_speech: span.label.to_owned(),
                meanings,
            })
        })
        .collect();

    let primary_gloss = groups
        .first()
        .and_then(|group| group.meanings.first())
        .map(|item| item.meaning.clone())
        .unwrap_or_else(|| FALLBACK_GLOSS.to_owned());

    DictionaryEntry {
        headword: term.to_owned(),
        phonetic: None,
        primary_gloss,
        groups,
    }
}

/// Walk a span body line by line: `# ` opens a definition, `#:` appends an
/// example to the currently open one.
fn collect_meanings(body: &str) -> Vec<DefinitionItem> {
    let mut meanings = Vec::new();
    let mut current: Option<DefinitionItem> = None;

    for line in body.lines() {
        let line = line.trim();
        if let Some(text) = line.strip_prefix("# ") {
            if let Some(done) = current.take() {
                meanings.push(done);
            }
            current = Some(DefinitionItem::new(text.trim()));
        } else if let Some(example) = line.strip_prefix("#:") {
            if let Some(item) = current.as_mut() {
                item.examples.push(example.trim().to_owned());
            }
        }
    }
    if let Some(done) = current {
        meanings.push(done);
    }
    meanings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_and_example_lines_pair_up() {
        let items = collect_meanings("# first sense\n#: example one\n# second sense");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].meaning, "first sense");
        assert_eq!(items[0].examples, ["example one"]);
        assert_eq!(items[1].meaning, "second sense");
        assert_eq!(items[1].examples, Vec::<String>::new());
    }

    #[test]
    fn orphan_example_lines_are_discarded() {
        let items = collect_meanings("#: lạc lõng\n# nghĩa thật");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].meaning, "nghĩa thật");
        assert!(items[0].examples.is_empty());
    }

    #[test]
    fn plain_and_double_hash_lines_are_ignored() {
        let items = collect_meanings("mô tả\n## sub-item\n# nghĩa");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].meaning, "nghĩa");
    }

    #[test]
    fn full_document_parses_into_groups() {
        let document = "\
== Tiếng Việt ==\n\
=== Cách phát âm ===\nipa\n\
=== Danh từ ===\n# sự thử\n#: một ví dụ\n\
=== Động từ ===\n# thử\n\
== English ==\n=== Noun ===\n# english sense\n";
        let entry = parse(document, "thử", "Tiếng Việt");

        assert_eq!(entry.headword, "thử");
        assert_eq!(entry.phonetic, None);
        assert_eq!(entry.primary_gloss, "sự thử");
        assert_eq!(entry.groups.len(), 2);
        assert_eq!(entry.groups[0].part_of_speech, "Danh từ");
        assert_eq!(entry.groups[0].meanings[0].examples, ["một ví dụ"]);
        assert_eq!(entry.groups[1].part_of_speech, "Động từ");
    }

    #[test]
    fn empty_document_still_yields_entry_with_placeholder() {
        let entry = parse("", "thử", "Tiếng Việt");
        assert_eq!(entry.headword, "thử");
        assert!(entry.groups.is_empty());
        assert_eq!(entry.primary_gloss, FALLBACK_GLOSS);
    }

    #[test]
    fn section_without_definition_lines_keeps_no_groups() {
        let document = "== Tiếng Việt ==\n=== Danh từ ===\nchỉ mô tả, không có nghĩa\n";
        let entry = parse(document, "x", "Tiếng Việt");
        assert!(entry.groups.is_empty());
        assert_eq!(entry.primary_gloss, FALLBACK_GLOSS);
    }
}
