// ============================================================
// Layer 2 — Rechunk Use Case
// ============================================================
// Regenerates the chunk sequences of stored documents from
// their source PDFs. Needed after the segmentation rules
// change: stored chunks would otherwise keep the old shape
// forever.
//
// Works on one document or on every document in the store. A
// document whose source PDF has moved fails with context rather
// than being silently skipped.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::loader::PdfLoader;
use crate::data::segmenter::Segmenter;
use crate::domain::traits::{DocumentSource, QaStore};
use crate::infra::JsonStore;

pub struct RechunkConfig {
    /// Single document to re-chunk; `None` with `all` covers the store
    pub doc_id: Option<String>,

    /// Re-chunk every stored document
    pub all: bool,

    /// Root directory of the document store
    pub store_dir: PathBuf,
}

pub struct RechunkUseCase {
    config: RechunkConfig,
}

impl RechunkUseCase {
    pub fn new(config: RechunkConfig) -> Self {
        Self { config }
    }

    /// Re-chunk the selected documents. Returns (doc_id, new
    /// chunk count) per document, in processing order.
    pub fn run(&self) -> Result<Vec<(String, usize)>> {
        let store = JsonStore::new(&self.config.store_dir)?;

        let doc_ids = if self.config.all {
            store.list_documents()?
        } else {
            match &self.config.doc_id {
                Some(id) => vec![id.clone()],
                None => anyhow::bail!("Nothing to re-chunk: pass a document id or --all"),
            }
        };

        let segmenter = Segmenter::new();
        let mut results = Vec::with_capacity(doc_ids.len());

        for doc_id in doc_ids {
            let document = store.load_document(&doc_id)?;

            let loader = PdfLoader::new(&document.source);
            let pages = loader
                .load_pages()
                .with_context(|| format!("Cannot re-chunk '{doc_id}' from '{}'", document.source))?;

            store.clear_chunks(&doc_id)?;
            let chunks = segmenter.segment(&doc_id, &pages);
            store.save_chunks(&doc_id, &chunks)?;

            tracing::info!("Re-chunked '{}' into {} chunks", doc_id, chunks.len());
            results.push((doc_id, chunks.len()));
        }

        Ok(results)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neither_id_nor_all_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = RechunkUseCase::new(RechunkConfig {
            doc_id:    None,
            all:       false,
            store_dir: dir.path().to_path_buf(),
        });
        assert!(use_case.run().is_err());
    }

    #[test]
    fn test_all_on_empty_store_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = RechunkUseCase::new(RechunkConfig {
            doc_id:    None,
            all:       true,
            store_dir: dir.path().to_path_buf(),
        });
        assert!(use_case.run().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_document_errors() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = RechunkUseCase::new(RechunkConfig {
            doc_id:    Some("missing".to_string()),
            all:       false,
            store_dir: dir.path().to_path_buf(),
        });
        assert!(use_case.run().is_err());
    }
}
