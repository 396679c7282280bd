use std::ops::Range;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::ExtractError;
use crate::patterns::{OREILLY, PLAIN, PatternSet, PatternSpec};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookKind {
    It,
    Chem,
    ItChapters,
}

impl BookKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::It => "it",
            Self::Chem => "chem",
            Self::ItChapters => "it-chapters",
        }
    }

    pub fn spec(self) -> &'static ProfileSpec {
        match self {
            Self::It => &IT,
            Self::Chem => &CHEM,
            Self::ItChapters => &IT_CHAPTERS,
        }
    }
}

/// How a profile picks pages when no explicit range is given.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Drop the front and back matter by page count.
    Slice,
    /// Keep pages the classifier marks as chapter content.
    Classify,
}

impl SelectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slice => "slice",
            Self::Classify => "classify",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProfileSpec {
    pub kind: BookKind,
    pub name: &'static str,
    pub mode: SelectionMode,
    pub front_matter_pages: usize,
    pub back_matter_pages: usize,
    pub patterns: PatternSpec,
}

const IT: ProfileSpec = ProfileSpec {
    kind: BookKind::It,
    name: "IT textbook",
    mode: SelectionMode::Slice,
    front_matter_pages: 29,
    back_matter_pages: 24,
    patterns: OREILLY,
};

const CHEM: ProfileSpec = ProfileSpec {
    kind: BookKind::Chem,
    name: "Chemistry textbook",
    mode: SelectionMode::Slice,
    front_matter_pages: 36,
    back_matter_pages: 58,
    patterns: PLAIN,
};

const IT_CHAPTERS: ProfileSpec = ProfileSpec {
    kind: BookKind::ItChapters,
    name: "IT textbook (classified)",
    mode: SelectionMode::Classify,
    front_matter_pages: 29,
    back_matter_pages: 24,
    patterns: OREILLY,
};

pub const REGISTRY: &[ProfileSpec] = &[IT, CHEM, IT_CHAPTERS];

#[derive(Debug, Clone)]
pub struct BookProfile {
    pub kind: BookKind,
    pub name: &'static str,
    pub mode: SelectionMode,
    pub patterns: PatternSet,
    pub front_matter_pages: usize,
    pub back_matter_pages: usize,
}

impl BookProfile {
    pub fn load(kind: BookKind) -> Result<Self, ExtractError> {
        Self::from_spec(kind.spec())
    }

    pub fn from_spec(spec: &ProfileSpec) -> Result<Self, ExtractError> {
        Ok(Self {
            kind: spec.kind,
            name: spec.name,
            mode: spec.mode,
            patterns: PatternSet::compile(&spec.patterns)?,
            front_matter_pages: spec.front_matter_pages,
            back_matter_pages: spec.back_matter_pages,
        })
    }

    /// Page indices left once front and back matter are cut. Empty when the
    /// document is not longer than both combined.
    pub fn slice_window(&self, page_count: usize) -> Range<usize> {
        let start = self.front_matter_pages;
        let end = page_count.saturating_sub(self.back_matter_pages);
        start..end.max(start)
    }
}

#[cfg(test)]
mod tests {
    use super::{BookKind, BookProfile, REGISTRY, SelectionMode};

    #[test]
    fn every_registry_row_loads() {
        for spec in REGISTRY {
            let profile = BookProfile::from_spec(spec).expect("profile should load");
            assert_eq!(profile.kind, spec.kind);
            assert_eq!(profile.kind.spec().name, spec.name);
        }
    }

    #[test]
    fn registry_carries_book_offsets() {
        let it = BookProfile::load(BookKind::It).expect("profile should load");
        assert_eq!(it.front_matter_pages, 29);
        assert_eq!(it.back_matter_pages, 24);
        assert_eq!(it.mode, SelectionMode::Slice);

        let chem = BookProfile::load(BookKind::Chem).expect("profile should load");
        assert_eq!(chem.front_matter_pages, 36);
        assert_eq!(chem.back_matter_pages, 58);
        assert!(chem.patterns.ignored_text.is_none());

        let classified = BookProfile::load(BookKind::ItChapters).expect("profile should load");
        assert_eq!(classified.mode, SelectionMode::Classify);
        assert!(classified.patterns.ignored_text.is_some());
    }

    #[test]
    fn slice_window_cuts_front_and_back_matter() {
        let it = BookProfile::load(BookKind::It).expect("profile should load");
        assert_eq!(it.slice_window(100), 29..76);
    }

    #[test]
    fn slice_window_is_empty_for_short_documents() {
        let it = BookProfile::load(BookKind::It).expect("profile should load");
        assert!(it.slice_window(53).is_empty());
        assert!(it.slice_window(10).is_empty());
        assert!(it.slice_window(0).is_empty());
    }
}
