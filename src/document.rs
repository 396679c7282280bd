use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::debug;

use crate::error::ExtractError;

#[cfg(test)]
pub(crate) mod fixtures;

/// Sequential, read-only access to a document's pages (0-indexed).
pub trait PageSource {
    type Handle: Copy;

    fn page_count(&self) -> usize;

    /// `None` when the page has no extractable text layer.
    fn page_text(&self, index: usize) -> Option<String>;

    fn page_handle(&self, index: usize) -> Option<Self::Handle>;
}

/// Append-only collector of pages that serializes them to a new file.
pub trait PageSink {
    type Handle;

    fn append(&mut self, handle: Self::Handle);

    fn page_count(&self) -> usize;

    fn save_to(&mut self, path: &Path) -> Result<(), ExtractError>;
}

/// lopdf page number (1-based) of a page in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageHandle(u32);

pub struct PdfDocument {
    path: PathBuf,
    inner: Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        let is_file = fs::metadata(path)
            .map(|metadata| metadata.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(ExtractError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|err| {
            debug!(path = %path.display(), error = %err, "input is not readable");
            ExtractError::NotFound {
                path: path.to_path_buf(),
            }
        })?;

        let inner = Document::load_mem(&bytes).map_err(|err| ExtractError::EmptyOrCorrupt {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        let page_numbers = inner.get_pages().into_keys().collect::<Vec<u32>>();
        if page_numbers.is_empty() {
            return Err(ExtractError::EmptyOrCorrupt {
                path: path.to_path_buf(),
                reason: "document has no pages".to_string(),
            });
        }

        debug!(path = %path.display(), pages = page_numbers.len(), "opened PDF");

        Ok(Self {
            path: path.to_path_buf(),
            inner,
            page_numbers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSource for PdfDocument {
    type Handle = PageHandle;

    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Option<String> {
        let number = *self.page_numbers.get(index)?;
        match self.inner.extract_text(&[number]) {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(page = index, error = %err, "text extraction failed");
                None
            }
        }
    }

    fn page_handle(&self, index: usize) -> Option<PageHandle> {
        self.page_numbers.get(index).copied().map(PageHandle)
    }
}

/// Writes a copy of the source document that keeps only the appended pages,
/// in source order.
pub struct PdfPageSink<'a> {
    source: &'a PdfDocument,
    selected: BTreeSet<PageHandle>,
}

impl<'a> PdfPageSink<'a> {
    pub fn new(source: &'a PdfDocument) -> Self {
        Self {
            source,
            selected: BTreeSet::new(),
        }
    }
}

impl PageSink for PdfPageSink<'_> {
    type Handle = PageHandle;

    fn append(&mut self, handle: PageHandle) {
        self.selected.insert(handle);
    }

    fn page_count(&self) -> usize {
        self.selected.len()
    }

    fn save_to(&mut self, path: &Path) -> Result<(), ExtractError> {
        let mut document = self.source.inner.clone();
        let discarded = self
            .source
            .page_numbers
            .iter()
            .copied()
            .filter(|number| !self.selected.contains(&PageHandle(*number)))
            .collect::<Vec<u32>>();
        document.delete_pages(&discarded);
        document.prune_objects();

        let partial = partial_path(path);
        if let Err(err) = write_document(&mut document, &partial) {
            let _ = fs::remove_file(&partial);
            return Err(err);
        }

        fs::rename(&partial, path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), pages = self.selected.len(), "saved PDF");
        Ok(())
    }
}

fn write_document(document: &mut Document, path: &Path) -> Result<(), ExtractError> {
    let io_error = |source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    document
        .save_to(&mut writer)
        .map_err(|source| ExtractError::Save {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_error)?;
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}
