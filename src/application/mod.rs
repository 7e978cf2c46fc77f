// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (ingesting a PDF, answering a question, or
// re-chunking stored documents).
//
// Rules for this layer:
//   - No scoring or text-analysis logic here (that's Layer 5)
//   - No UI or printing here (that's Layer 1)
//   - No direct file-format or JSON handling (Layers 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The PDF ingestion workflow
pub mod ingest_use_case;

// The question-answering workflow
pub mod ask_use_case;

// The re-chunking maintenance workflow
pub mod rechunk_use_case;
