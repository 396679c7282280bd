use serde::Serialize;

use crate::classify::Classification;
use crate::profile::{BookKind, SelectionMode};

#[derive(Debug, Clone, Serialize)]
pub struct PageVerdict {
    pub index: usize,
    pub is_chapter: bool,
    pub in_slice_window: bool,
    pub text_available: bool,
    pub classification: Classification,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub report_version: u32,
    pub generated_at: String,
    pub input_path: String,
    pub sha256: String,
    pub book_type: BookKind,
    pub profile: String,
    pub mode: SelectionMode,
    pub pattern_set: String,
    pub front_matter_pages: usize,
    pub back_matter_pages: usize,
    pub page_count: usize,
    pub chapter_page_count: usize,
    pub pages: Vec<PageVerdict>,
}
