use serde_json::Value;

/// Scan heterogeneous translation-row values for the first one that reads
/// like a pronunciation guide.
///
/// The upstream carries no schema for this field. A nested array sometimes
/// wraps the transliteration as its trailing element; a flat string counts
/// when it opens with a bracket or contains a space. The first match wins,
/// and no match is a normal outcome; callers render an absent phonetic as
/// empty display state.
pub fn first_phonetic(candidates: &[Value]) -> Option<String> {
    for candidate in candidates {
        if let Some(items) = candidate.as_array() {
            if let Some(trailing) = items.last().and_then(Value::as_str) {
                return Some(trailing.to_owned());
            }
            continue;
        }
        if let Some(text) = candidate.as_str() {
            if text.trim_start().starts_with('[') || text.contains(' ') {
                return Some(text.to_owned());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bracketed_string_wins_over_earlier_plain_words() {
        let candidates = [json!("run"), json!("[rʌn]"), json!("to move fast")];
        assert_eq!(first_phonetic(&candidates), Some("[rʌn]".to_owned()));
    }

    #[test]
    fn spaced_string_is_accepted() {
        let candidates = [json!("word"), json!("tʊ muːv")];
        assert_eq!(first_phonetic(&candidates), Some("tʊ muːv".to_owned()));
    }

    #[test]
    fn nested_array_contributes_its_trailing_string() {
        let candidates = [json!([null, null, "hɛˈloʊ"]), json!("[ignored]")];
        assert_eq!(first_phonetic(&candidates), Some("hɛˈloʊ".to_owned()));
    }

    #[test]
    fn nested_array_without_trailing_string_is_skipped() {
        let candidates = [json!(["x", 3]), json!("[rʌn]")];
        assert_eq!(first_phonetic(&candidates), Some("[rʌn]".to_owned()));
    }

    #[test]
    fn single_gloss_words_never_match() {
        let candidates = [json!("run"), json!("chạy")];
        assert_eq!(first_phonetic(&candidates), None);
    }

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(first_phonetic(&[]), None);
    }
}
