// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - PdfLoader implements DocumentSource
//   - A future EpubLoader could also implement DocumentSource
//   - The application layer only sees DocumentSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::document::{Answer, Chunk, Document};

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can extract page texts from a source file.
///
/// Implementations:
///   - PdfLoader → extracts one string per physical page of a PDF
///   - (future) EpubLoader → one string per spine item
pub trait DocumentSource {
    /// Extract the document as an ordered sequence of page texts,
    /// one string per physical page (1-indexed by position).
    /// Pages that fail to extract are skipped, not errors.
    fn load_pages(&self) -> Result<Vec<String>>;
}

// ─── QaStore ──────────────────────────────────────────────────────────────────
/// Narrow read/write interface over document persistence.
///
/// The answer pipeline only ever READS chunks; the two write
/// operations (chunks at ingest, answers after composition) are
/// sequenced by the application layer. The core never needs to
/// know the storage engine behind this trait.
///
/// Implementations:
///   - JsonStore → one directory per document with JSON files
///   - (future) SqliteStore → a single database file
pub trait QaStore {
    /// Persist (or overwrite) a document record
    fn save_document(&self, doc: &Document) -> Result<()>;

    /// Load a document record by id
    fn load_document(&self, doc_id: &str) -> Result<Document>;

    /// List the ids of every stored document
    fn list_documents(&self) -> Result<Vec<String>>;

    /// Replace the full chunk sequence for a document
    fn save_chunks(&self, doc_id: &str, chunks: &[Chunk]) -> Result<()>;

    /// Load the full chunk sequence for a document, in index order
    fn load_chunks(&self, doc_id: &str) -> Result<Vec<Chunk>>;

    /// Delete all chunks for a document (used before re-chunking)
    fn clear_chunks(&self, doc_id: &str) -> Result<()>;

    /// Append one generated answer to the document's answer log
    fn append_answer(&self, doc_id: &str, answer: &Answer) -> Result<()>;
}

// ─── QuestionAnswerer ─────────────────────────────────────────────────────────
/// Any component that can answer natural language questions
/// about one document.
///
/// Implementations:
///   - AskUseCase → the rule-based retrieval pipeline
pub trait QuestionAnswerer {
    /// Answer a question in the given display language.
    /// Always produces SOME answer — failures degrade to a
    /// localized fallback message, never an error.
    fn answer(&self, question: &str, language: &str) -> Result<Answer>;
}
