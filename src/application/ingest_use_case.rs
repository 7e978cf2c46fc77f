// ============================================================
// Layer 2 — Ingest Use Case
// ============================================================
// Takes one PDF file into the store:
//   1. Extract page texts (Layer 4)
//   2. Derive the document id from the file stem
//   3. Build the ingest-time summary (Layer 5)
//   4. Segment the pages into chunks (Layer 4)
//   5. Persist document record + chunks (Layer 6)
//
// Re-ingesting the same file overwrites the previous record and
// chunk sequence, so ingestion is idempotent.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::loader::PdfLoader;
use crate::data::segmenter::Segmenter;
use crate::domain::document::Document;
use crate::domain::traits::{DocumentSource, QaStore};
use crate::infra::JsonStore;
use crate::qa::composer::document_summary;

pub struct IngestConfig {
    /// Path of the PDF to ingest
    pub pdf_path: PathBuf,

    /// Display title; the file stem when absent
    pub title: Option<String>,

    /// Root directory of the document store
    pub store_dir: PathBuf,
}

pub struct IngestUseCase {
    config: IngestConfig,
}

impl IngestUseCase {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Run the full ingestion workflow. Returns the stored
    /// document record together with its chunk count.
    pub fn run(&self) -> Result<(Document, usize)> {
        let loader = PdfLoader::new(&self.config.pdf_path);
        let pages = loader.load_pages()?;

        let doc_id = self
            .config
            .pdf_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .context("PDF path has no file name")?;

        let title = self.config.title.clone().unwrap_or_else(|| doc_id.clone());
        let summary = document_summary(&pages.join(" "));

        let document = Document::new(
            doc_id.clone(),
            title,
            self.config.pdf_path.to_string_lossy(),
            summary,
        );

        let chunks = Segmenter::new().segment(&doc_id, &pages);

        let store = JsonStore::new(&self.config.store_dir)?;
        store.save_document(&document)?;
        store.save_chunks(&doc_id, &chunks)?;

        tracing::info!(
            "Ingested '{}' as document '{}' ({} chunks)",
            self.config.pdf_path.display(),
            doc_id,
            chunks.len()
        );

        Ok((document, chunks.len()))
    }
}
