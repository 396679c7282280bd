use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::profile::BookKind;
use crate::range::{PageRange, parse_page_range};

#[derive(Parser, Debug)]
#[command(
    name = "textbook-pages",
    version,
    about = "Extract chapter pages or a page range from textbook PDFs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the selected pages to a new PDF.
    Extract(ExtractArgs),
    /// Report per-page classification without writing anything.
    Inspect(InspectArgs),
    /// List the built-in book profiles.
    Profiles,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Path to the input PDF file.
    pub input_pdf: PathBuf,

    /// Path for the output PDF file.
    pub output_pdf: PathBuf,

    /// Content-relative page range, e.g. '(1,10)', '[1-10]' or '1,10'.
    #[arg(long, value_parser = parse_page_range)]
    pub pages: Option<PageRange>,

    #[arg(long, value_enum)]
    pub book_type: BookKind,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    pub input_pdf: PathBuf,

    #[arg(long, value_enum)]
    pub book_type: BookKind,

    /// Print the report as JSON on stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};
    use crate::profile::BookKind;
    use crate::range::PageRange;

    #[test]
    fn extract_parses_range_and_book_type() {
        let cli = Cli::try_parse_from([
            "textbook-pages",
            "extract",
            "in.pdf",
            "out.pdf",
            "--pages",
            "[2-5]",
            "--book-type",
            "it-chapters",
        ])
        .expect("arguments should parse");

        let Commands::Extract(args) = cli.command else {
            panic!("expected extract command");
        };
        assert_eq!(args.pages, Some(PageRange { start: 2, end: 5 }));
        assert_eq!(args.book_type, BookKind::ItChapters);
    }

    #[test]
    fn extract_rejects_improper_range_at_parse_time() {
        let result = Cli::try_parse_from([
            "textbook-pages",
            "extract",
            "in.pdf",
            "out.pdf",
            "--pages",
            "(1,10,20)",
            "--book-type",
            "it",
        ]);
        let err = result.expect_err("improper range should be rejected");
        assert!(err.to_string().contains("improper page range"));
    }

    #[test]
    fn extract_requires_book_type() {
        let result = Cli::try_parse_from(["textbook-pages", "extract", "in.pdf", "out.pdf"]);
        assert!(result.is_err());
    }
}
