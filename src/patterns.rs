use regex::Regex;

use crate::error::ExtractError;

/// Regex sources for one book layout. Compiled into a [`PatternSet`] once per
/// run.
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    pub name: &'static str,
    pub number_then_label: &'static str,
    pub label_then_number: &'static str,
    pub bare_number: &'static str,
    pub chapter_marker: &'static str,
    pub ignored_labels: &'static str,
    pub ignored_text: Option<&'static str>,
}

const NUMBER_THEN_LABEL: &str = r"^(?P<num>\d+)\s\|\s(?P<label>.+)$";
const LABEL_THEN_NUMBER: &str = r"^(?P<label>.+?)\s\|\s(?P<num>\d+)$";
const BARE_NUMBER: &str = r"^\s*(?P<page_num>\d+?)\s*$";
const CHAPTER_MARKER: &str = r"(?i)\bchapter\b";
const IGNORED_LABELS: &str = r"(?i)index|afterword";

/// Running-header layout with the publisher's domain stamped on boilerplate
/// pages.
pub const OREILLY: PatternSpec = PatternSpec {
    name: "oreilly",
    number_then_label: NUMBER_THEN_LABEL,
    label_then_number: LABEL_THEN_NUMBER,
    bare_number: BARE_NUMBER,
    chapter_marker: CHAPTER_MARKER,
    ignored_labels: IGNORED_LABELS,
    ignored_text: Some(r"(?i)oreilly\.com"),
};

pub const PLAIN: PatternSpec = PatternSpec {
    name: "plain",
    number_then_label: NUMBER_THEN_LABEL,
    label_then_number: LABEL_THEN_NUMBER,
    bare_number: BARE_NUMBER,
    chapter_marker: CHAPTER_MARKER,
    ignored_labels: IGNORED_LABELS,
    ignored_text: None,
};

#[derive(Debug, Clone)]
pub struct PatternSet {
    pub name: &'static str,
    pub number_then_label: Regex,
    pub label_then_number: Regex,
    pub bare_number: Regex,
    pub chapter_marker: Regex,
    pub ignored_labels: Regex,
    pub ignored_text: Option<Regex>,
}

impl PatternSet {
    pub fn compile(spec: &PatternSpec) -> Result<Self, ExtractError> {
        let compile = |name: &'static str, source: &str| {
            Regex::new(source).map_err(|source| ExtractError::Pattern {
                set: spec.name,
                name,
                source,
            })
        };

        Ok(Self {
            name: spec.name,
            number_then_label: compile("number_then_label", spec.number_then_label)?,
            label_then_number: compile("label_then_number", spec.label_then_number)?,
            bare_number: compile("bare_number", spec.bare_number)?,
            chapter_marker: compile("chapter_marker", spec.chapter_marker)?,
            ignored_labels: compile("ignored_labels", spec.ignored_labels)?,
            ignored_text: spec
                .ignored_text
                .map(|source| compile("ignored_text", source))
                .transpose()?,
        })
    }

    pub fn has_ignored_text(&self, page_text: &str) -> bool {
        self.ignored_text
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(page_text))
    }
}

#[cfg(test)]
mod tests {
    use super::{OREILLY, PLAIN, PatternSet, PatternSpec};
    use crate::error::ExtractError;

    #[test]
    fn registry_specs_compile() {
        for spec in [OREILLY, PLAIN] {
            let set = PatternSet::compile(&spec).expect("pattern set should compile");
            assert_eq!(set.name, spec.name);
        }
    }

    #[test]
    fn header_patterns_are_whole_line_anchored() {
        let set = PatternSet::compile(&OREILLY).expect("pattern set should compile");

        let captures = set
            .number_then_label
            .captures("42 | Getting Started")
            .expect("number then label should match");
        assert_eq!(&captures["num"], "42");
        assert_eq!(&captures["label"], "Getting Started");

        let captures = set
            .label_then_number
            .captures("Getting Started | 43")
            .expect("label then number should match");
        assert_eq!(&captures["label"], "Getting Started");
        assert_eq!(&captures["num"], "43");

        assert!(!set.number_then_label.is_match("see page 42 | Getting Started"));
        assert!(!set.label_then_number.is_match("Getting Started | 43 more"));
        assert!(!set.number_then_label.is_match("42|Getting Started"));
    }

    #[test]
    fn bare_number_matches_only_digit_lines() {
        let set = PatternSet::compile(&PLAIN).expect("pattern set should compile");
        assert!(set.bare_number.is_match("17"));
        assert!(set.bare_number.is_match("  17  "));
        assert!(!set.bare_number.is_match("17 apples"));
        assert!(!set.bare_number.is_match("page 17"));
    }

    #[test]
    fn chapter_marker_requires_whole_word() {
        let set = PatternSet::compile(&PLAIN).expect("pattern set should compile");
        assert!(set.chapter_marker.is_match("In this CHAPTER we"));
        assert!(!set.chapter_marker.is_match("chapters and chaptered"));
    }

    #[test]
    fn ignored_text_is_optional() {
        let oreilly = PatternSet::compile(&OREILLY).expect("pattern set should compile");
        let plain = PatternSet::compile(&PLAIN).expect("pattern set should compile");

        assert!(oreilly.has_ignored_text("Visit WWW.OREILLY.COM today"));
        assert!(!oreilly.has_ignored_text("Visit example.com today"));
        assert!(!plain.has_ignored_text("Visit www.oreilly.com today"));
    }

    #[test]
    fn invalid_source_reports_set_and_pattern_name() {
        let broken = PatternSpec {
            name: "broken",
            chapter_marker: r"(unclosed",
            ..PLAIN
        };

        let err = PatternSet::compile(&broken).expect_err("broken spec should fail");
        match err {
            ExtractError::Pattern { set, name, .. } => {
                assert_eq!(set, "broken");
                assert_eq!(name, "chapter_marker");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
