// ============================================================
// Layer 3 — Document Domain Types
// ============================================================
// Plain data structs describing a document and everything the
// pipeline derives from it:
//
//   Document — one ingested PDF (id, title, source path, summary)
//   Chunk    — one bounded, page-tagged unit of document text
//   Answer   — one generated answer with grounding + confidence
//
// Using #[derive(Serialize, Deserialize)] lets the store layer
// persist all three as JSON without any custom code.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// One ingested PDF document.
/// The id is the file stem of the source PDF — re-ingesting the
/// same file overwrites the previous record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Opaque identifier, unique within the store
    pub id: String,

    /// Human-readable title shown in CLI output
    pub title: String,

    /// Path of the source PDF — kept for re-chunking
    pub source: String,

    /// Summary generated at ingest time (first sentences of the text)
    pub summary: String,
}

impl Document {
    pub fn new(
        id:      impl Into<String>,
        title:   impl Into<String>,
        source:  impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id:      id.into(),
            title:   title.into(),
            source:  source.into(),
            summary: summary.into(),
        }
    }
}

/// A bounded unit of document text produced by the Segmenter.
///
/// Chunks are created once at segmentation time and never mutated.
/// For a given document the indices form a contiguous 0-based
/// sequence in emission order — selection logic depends on that
/// ordering, so it must survive persistence round-trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Id of the owning document
    pub document_id: String,

    /// 0-based position within the document, gap-free
    pub index: usize,

    /// Whitespace-normalised, non-empty text
    pub text: String,

    /// 1-based physical page the text came from
    pub page_number: Option<u32>,
}

impl Chunk {
    pub fn new(
        document_id: impl Into<String>,
        index:       usize,
        text:        impl Into<String>,
        page_number: Option<u32>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            index,
            text: text.into(),
            page_number,
        }
    }
}

/// One generated answer. Created once per question, never mutated.
///
/// `is_grounded` is false (and `confidence` exactly 0.0) when the
/// answer is a fallback message rather than real document content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The question as the user asked it
    pub question: String,

    /// Localized answer text (or a localized fallback message)
    pub text: String,

    /// Display language code: "en", "gu", or "hi"
    pub language: String,

    /// True iff at least one chunk scored above zero
    pub is_grounded: bool,

    /// Heuristic score in [0.0, 0.95] — NOT a calibrated probability
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_serialization_round_trip() {
        let chunk = Chunk::new("doc", 3, "Some text.", Some(2));
        let json  = serde_json::to_string(&chunk).unwrap();
        let back: Chunk = serde_json::from_str(&json).unwrap();

        assert_eq!(back.document_id, "doc");
        assert_eq!(back.index, 3);
        assert_eq!(back.text, "Some text.");
        assert_eq!(back.page_number, Some(2));
    }

    #[test]
    fn test_document_builder_accepts_str_and_string() {
        let doc = Document::new("id", String::from("Title"), "a.pdf", "Summary.");
        assert_eq!(doc.id, "id");
        assert_eq!(doc.title, "Title");
    }
}
