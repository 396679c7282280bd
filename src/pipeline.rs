use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::classify::classify_page;
use crate::document::{PageSink, PageSource};
use crate::error::ExtractError;
use crate::profile::{BookProfile, SelectionMode};
use crate::range::{PageRange, resolve_indices};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeptPage<H> {
    pub index: usize,
    pub handle: H,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Written { path: PathBuf, page_count: usize },
    NoPagesSelected,
}

/// Chooses the pages to keep, in ascending index order.
///
/// An explicit range is shifted past the front matter and must fit inside
/// the document. Without one, the profile's mode decides between cutting
/// front/back matter by count and running the page classifier.
pub fn select_pages<S: PageSource>(
    source: &S,
    profile: &BookProfile,
    range: Option<PageRange>,
) -> Result<Vec<KeptPage<S::Handle>>, ExtractError> {
    let page_count = source.page_count();

    if let Some(range) = range {
        let mut kept = Vec::new();
        for index in resolve_indices(range, profile.front_matter_pages) {
            let handle = source
                .page_handle(index)
                .ok_or(ExtractError::IndexOutOfRange { index, page_count })?;
            kept.push(KeptPage { index, handle });
        }
        info!(range = %range, kept = kept.len(), "selected explicit page range");
        return Ok(kept);
    }

    let kept = match profile.mode {
        SelectionMode::Slice => profile
            .slice_window(page_count)
            .filter_map(|index| {
                source
                    .page_handle(index)
                    .map(|handle| KeptPage { index, handle })
            })
            .collect::<Vec<_>>(),
        SelectionMode::Classify => classify_pages(source, profile),
    };

    info!(
        profile = profile.name,
        mode = profile.mode.as_str(),
        page_count,
        kept = kept.len(),
        "selected pages"
    );
    Ok(kept)
}

fn classify_pages<S: PageSource>(source: &S, profile: &BookProfile) -> Vec<KeptPage<S::Handle>> {
    let mut kept = Vec::new();
    for index in 0..source.page_count() {
        let text = source.page_text(index).unwrap_or_else(|| {
            warn!(page = index, "page text unavailable, treating as empty");
            String::new()
        });

        let classification = classify_page(&text, &profile.patterns);
        debug!(
            page = index,
            verdict = classification.is_chapter(),
            ?classification,
            "classified page"
        );

        if classification.is_chapter() {
            if let Some(handle) = source.page_handle(index) {
                kept.push(KeptPage { index, handle });
            }
        }
    }
    kept
}

/// Appends `pages` to `sink` and saves it to `output`. Nothing is written
/// when `pages` is empty.
pub fn write_pages<K: PageSink>(
    pages: Vec<KeptPage<K::Handle>>,
    sink: &mut K,
    output: &Path,
) -> Result<ExtractionOutcome, ExtractError> {
    if pages.is_empty() {
        return Ok(ExtractionOutcome::NoPagesSelected);
    }

    for page in pages {
        debug!(page = page.index, "appending page");
        sink.append(page.handle);
    }
    sink.save_to(output)?;

    Ok(ExtractionOutcome::Written {
        path: output.to_path_buf(),
        page_count: sink.page_count(),
    })
}

pub fn run_extraction<S, K>(
    source: &S,
    sink: &mut K,
    profile: &BookProfile,
    range: Option<PageRange>,
    output: &Path,
) -> Result<ExtractionOutcome, ExtractError>
where
    S: PageSource,
    K: PageSink<Handle = S::Handle>,
{
    let pages = select_pages(source, profile, range)?;
    write_pages(pages, sink, output)
}
