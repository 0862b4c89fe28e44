//! PDF export of the rendered document.

pub mod layout;
mod writer;

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("The document is empty - nothing to export")]
    EmptyDocument,
    #[error("Could not create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Export the document to an A4 PDF at `out`.
///
/// Typesets the rendered content stream (the same stream the preview
/// consumes), wrapped to the usable width with a fixed top margin and
/// page breaks as pages fill. An empty document is refused before any
/// file is created.
pub fn export_pdf(markdown: &str, title: &str, out: &Path) -> Result<(), PdfError> {
    let blocks = layout::collect_blocks(markdown);
    if blocks.is_empty() {
        return Err(PdfError::EmptyDocument);
    }

    let lines = layout::layout_lines(&blocks);
    let pages = layout::paginate(lines);
    writer::write_pages(title, &pages, out)
}
