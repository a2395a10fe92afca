use unicode_normalization::UnicodeNormalization;

use crate::text::normalize_whitespace;

pub trait Preprocessor {
    // Default Vietnamese/English query preprocessor
    fn process(&self, term: &str) -> String {
        let mut term = term.trim().to_string();

        if term.is_empty() {
            return term;
        }

        // Unicode normalization (NFC)
        term = term.nfc().collect();

        term = normalize_whitespace(&term);

        term
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
