use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::classify::classify_page;
use crate::cli::InspectArgs;
use crate::document::{PageSource, PdfDocument};
use crate::model::{InspectReport, PageVerdict};
use crate::profile::BookProfile;
use crate::util::{now_utc_string, sha256_file};

pub fn run(args: InspectArgs) -> Result<()> {
    let profile = BookProfile::load(args.book_type).context("failed to load book profile")?;
    let document = PdfDocument::open(&args.input_pdf)?;

    let pages = inspect_pages(&document, &profile);
    let chapter_page_count = pages.iter().filter(|page| page.is_chapter).count();

    let report = InspectReport {
        report_version: 1,
        generated_at: now_utc_string(),
        input_path: args.input_pdf.display().to_string(),
        sha256: sha256_file(&args.input_pdf)?,
        book_type: profile.kind,
        profile: profile.name.to_string(),
        mode: profile.mode,
        pattern_set: profile.patterns.name.to_string(),
        front_matter_pages: profile.front_matter_pages,
        back_matter_pages: profile.back_matter_pages,
        page_count: document.page_count(),
        chapter_page_count,
        pages,
    };

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize inspect report")?;
        println!("{rendered}");
        return Ok(());
    }

    for page in report.pages.iter().filter(|page| page.is_chapter) {
        debug!(
            page = page.index,
            in_slice_window = page.in_slice_window,
            classification = ?page.classification,
            "chapter page"
        );
    }

    let window = profile.slice_window(report.page_count);
    let outside_window = report
        .pages
        .iter()
        .filter(|page| page.is_chapter && !page.in_slice_window)
        .count();
    let first_chapter = report.pages.iter().find(|page| page.is_chapter);
    let last_chapter = report.pages.iter().rev().find(|page| page.is_chapter);

    info!(
        path = %report.input_path,
        profile = %report.profile,
        mode = profile.mode.as_str(),
        page_count = report.page_count,
        chapter_pages = report.chapter_page_count,
        first_chapter_page = ?first_chapter.map(|page| page.index),
        last_chapter_page = ?last_chapter.map(|page| page.index),
        slice_window = ?window,
        chapter_pages_outside_window = outside_window,
        "inspection completed"
    );

    Ok(())
}

/// Classifies every page with the profile's patterns, whatever its selection
/// mode, and flags whether the page sits inside the slice window.
pub fn inspect_pages<S: PageSource>(source: &S, profile: &BookProfile) -> Vec<PageVerdict> {
    let window = profile.slice_window(source.page_count());

    (0..source.page_count())
        .map(|index| {
            let text = source.page_text(index);
            let classification =
                classify_page(text.as_deref().unwrap_or_default(), &profile.patterns);
            PageVerdict {
                index,
                is_chapter: classification.is_chapter(),
                in_slice_window: window.contains(&index),
                text_available: text.is_some(),
                classification,
            }
        })
        .collect()
}
