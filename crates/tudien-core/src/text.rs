use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKUP_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Remove markup tags, returning the visible text untouched.
///
/// Only the tags themselves are dropped; surrounding whitespace is
/// preserved exactly.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_inner_text() {
        assert_eq!(strip_markup("<i>hello</i>"), "hello");
    }

    #[test]
    fn strips_tags_with_attributes() {
        assert_eq!(
            strip_markup(r#"a <span class="usage">marked</span> word"#),
            "a marked word"
        );
    }

    #[test]
    fn stripping_does_not_touch_whitespace() {
        assert_eq!(strip_markup("one  <b>two</b>  three"), "one  two  three");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_markup("no markup here"), "no markup here");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize_whitespace("  thử \t nghiệm \n kiểm tra "), "thử nghiệm kiểm tra");
    }
}
