use std::collections::HashMap;

use lazy_static::lazy_static;
use tudien_types::{DictionaryEntry, PartOfSpeechGroup};

lazy_static! {
    /// Display names for part-of-speech labels the upstreams report.
    /// Matched case-insensitively; unknown labels fall back to the
    /// capitalized original.
    static ref POS_DISPLAY: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("noun", "Danh từ");
        m.insert("verb", "Động từ");
        m.insert("adjective", "Tính từ");
        m.insert("adverb", "Trạng từ");
        m.insert("pronoun", "Đại từ");
        m.insert("preposition", "Giới từ");
        m.insert("conjunction", "Liên từ");
        m.insert("interjection", "Thán từ");
        m.insert("abbreviation", "Viết tắt");
        m
    };
}

/// Normalize a raw part-of-speech label for display: drop stray heading
/// characters, look up the display name, else capitalize the original.
pub fn pos_label(raw: &str) -> String {
    let clean = raw.replace('=', "");
    let clean = clean.trim();
    if let Some(display) = POS_DISPLAY.get(clean.to_lowercase().as_str()) {
        return (*display).to_string();
    }
    let mut chars = clean.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render an entry as terminal text.
pub fn entry(entry: &DictionaryEntry) -> String {
    let mut out = String::new();
    out.push_str(&entry.headword);
    if let Some(phonetic) = &entry.phonetic {
        out.push_str("  ");
        out.push_str(phonetic);
    }
    out.push('\n');
    if !entry.primary_gloss.is_empty() {
        out.push_str("  ");
        out.push_str(&entry.primary_gloss);
        out.push('\n');
    }
    for group in &entry.groups {
        out.push('\n');
        out.push_str(&render_group(group));
    }
    out
}

fn render_group(group: &PartOfSpeechGroup) -> String {
    let mut out = format!("{}\n", pos_label(&group.part_of_speech));
    for (index, item) in group.meanings.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, item.meaning));
        for example in &item.examples {
            out.push_str(&format!("     \"{example}\"\n"));
        }
        if !item.synonyms.is_empty() {
            out.push_str(&format!("     ≈ {}\n", item.synonyms.join(", ")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use tudien_types::DefinitionItem;

    use super::*;

    #[test]
    fn known_labels_use_the_display_table() {
        assert_eq!(pos_label("noun"), "Danh từ");
        assert_eq!(pos_label("NOUN"), "Danh từ");
        assert_eq!(pos_label("= verb ="), "Động từ");
    }

    #[test]
    fn unknown_labels_keep_their_text_capitalized() {
        assert_eq!(pos_label("danh từ riêng"), "Danh từ riêng");
        assert_eq!(pos_label(""), "");
    }

    #[test]
    fn renders_headword_gloss_and_groups() {
        let entry = DictionaryEntry {
            headword: "test".to_string(),
            phonetic: Some("[tɛst]".to_string()),
            primary_gloss: "bản dịch".to_string(),
            groups: vec![PartOfSpeechGroup {
                part_of_speech: "noun".to_string(),
                meanings: vec![DefinitionItem {
                    meaning: "thử nghiệm".to_string(),
                    examples: vec!["một ví dụ".to_string()],
                    synonyms: vec![],
                }],
            }],
        };

        let text = super::entry(&entry);
        assert_eq!(
            text,
            "test  [tɛst]\n  bản dịch\n\nDanh từ\n  1. thử nghiệm\n     \"một ví dụ\"\n"
        );
    }
}
