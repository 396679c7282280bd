use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::ExtractArgs;
use crate::document::{PageSource, PdfDocument, PdfPageSink};
use crate::pipeline::{ExtractionOutcome, run_extraction};
use crate::error::ExtractError;
use crate::profile::BookProfile;
use crate::util::{remove_stale_output, same_file};


pub fn run(args: ExtractArgs) -> Result<()> {
    let profile = BookProfile::load(args.book_type).context("failed to load book profile")?;

    info!(
        input = %args.input_pdf.display(),
        output = %args.output_pdf.display(),
        profile = profile.name,
        pages = ?args.pages,
        "starting extraction"
    );

    if same_file(&args.input_pdf, &args.output_pdf) {
        return Err(ExtractError::OutputIsInput {
            path: args.output_pdf,
        }
        .into());
    }

    if remove_stale_output(&args.output_pdf)? {
        info!(path = %args.output_pdf.display(), "removed stale output");
    }

    let document = PdfDocument::open(&args.input_pdf)?;
    info!(
        path = %document.path().display(),
        page_count = document.page_count(),
        "opened input"
    );

    let mut sink = PdfPageSink::new(&document);
    let outcome = run_extraction(
        &document,
        &mut sink,
        &profile,
        args.pages,
        &args.output_pdf,
    )?;

    match outcome {
        ExtractionOutcome::Written { path, page_count } => {
            info!(path = %path.display(), page_count, "extraction completed");
            println!("New PDF saved as '{}'.", path.display());
        }
        ExtractionOutcome::NoPagesSelected => {
            warn!(input = %args.input_pdf.display(), "no pages selected, nothing written");
            println!("No valid chapter pages found.");
        }
    }

    Ok(())
}
