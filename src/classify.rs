use serde::Serialize;

use crate::patterns::PatternSet;

/// Which signal decided a page's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum Classification {
    Empty,
    RunningHeader { line: String, label: String },
    BareNumber { line: String },
    NoSignal,
}

impl Classification {
    pub fn is_chapter(&self) -> bool {
        matches!(self, Self::RunningHeader { .. } | Self::BareNumber { .. })
    }
}

/// Everything treated as a line boundary: `\n`, `\r` (so `\r\n` too), vertical
/// tab, form feed, the file/group/record separators, NEL and the Unicode
/// line and paragraph separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

pub fn is_chapter_page(page_text: &str, patterns: &PatternSet) -> bool {
    classify_page(page_text, patterns).is_chapter()
}

/// Scans lines top to bottom; the first qualifying line decides the page.
///
/// Running headers (`12 | Label` or `Label | 12`) are tried before the bare
/// page-number fallback, which additionally needs the word "chapter" somewhere
/// on the page. Excluded labels and the watermark turn a header line into a
/// non-match, and scanning continues with the next line.
pub fn classify_page(page_text: &str, patterns: &PatternSet) -> Classification {
    if page_text.is_empty() {
        return Classification::Empty;
    }

    for line in page_text.split(LINE_BREAKS).map(str::trim) {
        if line.is_empty() {
            continue;
        }

        let header = patterns
            .number_then_label
            .captures(line)
            .or_else(|| patterns.label_then_number.captures(line));

        if let Some(captures) = header {
            let label = captures
                .name("label")
                .map(|value| value.as_str().to_lowercase())
                .unwrap_or_default();

            if patterns.ignored_labels.is_match(&label) || patterns.has_ignored_text(page_text) {
                continue;
            }

            return Classification::RunningHeader {
                line: line.to_string(),
                label,
            };
        }

        if patterns.bare_number.is_match(line)
            && patterns.chapter_marker.is_match(page_text)
            && !patterns.has_ignored_text(page_text)
        {
            return Classification::BareNumber {
                line: line.to_string(),
            };
        }
    }

    Classification::NoSignal
}
