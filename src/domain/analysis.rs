// ============================================================
// Layer 3 — Question Analysis Types
// ============================================================
// The analysed form of a question. This is an ephemeral value —
// it is derived fresh for every question and never persisted.
//
// IntentTag is a closed enum rather than strings so the scorer
// can dispatch on it exhaustively: adding a new intent without
// handling it everywhere becomes a compile error.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// The classified purpose category of a question.
///
/// `General` is the fallback when no category's keyword table
/// matches — it is not detectable directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentTag {
    Summary,
    ChapterSpecific,
    Character,
    Plot,
    Setting,
    Time,
    Comparison,
    Definition,
    List,
    How,
    Why,
    Quantity,
    General,
}

/// Structured entities pulled out of the question text.
/// Empty vectors are normal — extraction never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entities {
    /// Integers immediately following the word "chapter"
    pub chapter_numbers: Vec<u32>,

    /// Every standalone integer token in the question
    pub numbers: Vec<u32>,

    /// Capitalised words from the ORIGINAL (non-lowercased) text —
    /// candidate character names
    pub capitalized_tokens: Vec<String>,

    /// The token following a locational preposition (in/at/from/...)
    pub location_cues: Vec<String>,
}

/// Everything the analyzer derives from one question string.
#[derive(Debug, Clone)]
pub struct QuestionAnalysis {
    /// The question exactly as asked
    pub original_text: String,

    /// Lowercased, trimmed question — what all matching runs against
    pub normalized_text: String,

    /// Every intent whose keyword table matched (may be several)
    pub detected_intents: Vec<IntentTag>,

    /// The winning intent after priority resolution
    pub primary_intent: IntentTag,

    /// Extracted structured entities
    pub entities: Entities,

    /// Meaningful keywords for chunk matching
    pub keywords: Vec<String>,
}
