// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from a raw PDF file
// to persisted, addressable text chunks.
//
// The pipeline flows in this order:
//
//   PDF file
//       │
//       ▼
//   PdfLoader         → extracts raw text, one string per page
//       │
//       ▼
//   Preprocessor      → collapses whitespace runs, trims
//       │
//       ▼
//   Segmenter         → accumulates sentences into bounded chunks
//       │
//       ▼
//   JsonStore         → persists chunks for the question pipeline
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Extracts per-page text from PDF files using pdf-extract
pub mod loader;

/// Normalises whitespace in extracted text
pub mod preprocessor;

/// Splits page texts into bounded, page-tagged chunks
pub mod segmenter;
