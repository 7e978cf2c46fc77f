// ============================================================
// Layer 4 — PDF Loader
// ============================================================
// Extracts text from a PDF file using the pdf-extract crate,
// one string per physical page.
//
// Why per-page extraction?
//   Chunks carry the page number they came from, so answers can
//   be traced back to a location in the source document. A flat
//   whole-document string would lose that provenance.
//
// Scanned (image-only) PDFs have no text layer — extraction
// succeeds but yields empty pages, and a document where EVERY
// page is empty is rejected here so the caller gets a clear
// message instead of a silent zero-chunk document.
//
// Reference: pdf-extract crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::traits::DocumentSource;

/// Loads one PDF file and exposes it as a sequence of page texts.
/// Implements the DocumentSource trait from Layer 3.
pub struct PdfLoader {
    /// Path to the .pdf file
    path: PathBuf,
}

impl PdfLoader {
    /// Create a new PdfLoader pointed at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for PdfLoader {
    fn load_pages(&self) -> Result<Vec<String>> {
        // Read the raw bytes of the PDF file
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        // Extract the text layer page by page
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .with_context(|| {
                format!("PDF text extraction failed for '{}'", self.path.display())
            })?;

        if pages.is_empty() {
            anyhow::bail!("No pages found in '{}'", self.path.display());
        }

        // A PDF whose every page is blank is almost certainly a
        // scanned document with no text layer — reject it up front.
        if pages.iter().all(|p| p.trim().is_empty()) {
            anyhow::bail!(
                "No text content found in '{}' (scanned PDF?)",
                self.path.display()
            );
        }

        tracing::info!(
            "Extracted {} pages ({} chars) from '{}'",
            pages.len(),
            pages.iter().map(|p| p.len()).sum::<usize>(),
            self.path.display()
        );

        Ok(pages)
    }
}
