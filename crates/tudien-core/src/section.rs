use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Subsection headings delimited by a run of 3-4 `=` on each side,
    /// e.g. `=== Danh từ ===`.
    static ref SUBSECTION_HEADING: Regex = Regex::new(r"={3,4}\s*(.*?)\s*={3,4}").unwrap();
}

/// Subsection labels that never describe a part of speech: pronunciation
/// notes, references, synonym/antonym lists, translation tables.
/// Matched by substring containment, case-sensitive as authored.
const ADMINISTRATIVE_LABELS: [&str; 6] = [
    "Cách phát âm",
    "Tham khảo",
    "Ghi chú",
    "Đồng nghĩa",
    "Trái nghĩa",
    "Dịch",
];

/// A heading-delimited span of a language section.
#[derive(Debug, Clone, PartialEq)]
pub struct Subsection<'a> {
    pub label: &'a str,
    pub body: &'a str,
}

/// Slice out the section belonging to one language.
///
/// Wiki documents interleave languages under level-2 headings. The section
/// runs from just after `== {label} ==` to the next level-2 heading or end
/// of document. A missing label falls back to the whole document: lossy
/// but non-fatal.
pub fn language_section<'a>(document: &'a str, label: &str) -> &'a str {
    let marker = format!("== {label} ==");
    let Some(start) = document.find(&marker) else {
        return document;
    };
    let rest = &document[start + marker.len()..];
    match rest.find("\n== ") {
        Some(next) => &rest[..next],
        None => rest,
    }
}

/// Partition a language section into labeled subsection spans, dropping
/// administrative ones entirely.
///
/// Each span's body runs from the end of its own heading to the start of
/// the next heading (administrative or not) or end of section.
pub fn subsections(section: &str) -> Vec<Subsection<'_>> {
    let headings: Vec<(usize, usize, &str)> = SUBSECTION_HEADING
        .captures_iter(section)
        .map(|cap| {
            let whole = cap.get(0).unwrap();
            (whole.start(), whole.end(), cap.get(1).unwrap().as_str())
        })
        .collect();

    let mut spans = Vec::new();
    for (index, &(_, heading_end, label)) in headings.iter().enumerate() {
        if is_administrative(label) {
            continue;
        }
        let body_end = headings
            .get(index + 1)
            .map_or(section.len(), |next| next.0);
        spans.push(Subsection {
            label,
            body: &section[heading_end..body_end],
        });
    }
    spans
}

fn is_administrative(label: &str) -> bool {
    ADMINISTRATIVE_LABELS
        .iter()
        .any(|admin| label.contains(admin))
}
