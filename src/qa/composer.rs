// ============================================================
// Layer 5 — Answer Composer
// ============================================================
// Turns the selected chunks into one bounded answer string, and
// also builds the ingest-time document summary.
//
// Composition: join the selected chunks' text (re-normalised,
// in selection order) with single spaces, then enforce a length
// budget — 1000 chars for summaries, 600 otherwise. Truncation
// never cuts mid-sentence: the text is re-split on ". " and
// sentences are taken greedily while they fit; the first one
// that would overflow is dropped entirely. A truncated answer
// that doesn't end in "." gets a literal "..." marker.

use crate::data::preprocessor::normalize_whitespace;
use crate::domain::analysis::{IntentTag, QuestionAnalysis};
use crate::domain::document::Chunk;

/// Budget for summary answers — they may run longer
const SUMMARY_MAX_CHARS: usize = 1000;

/// Budget for every other intent
const DEFAULT_MAX_CHARS: usize = 600;

/// How many sentences the ingest-time document summary keeps
const SUMMARY_SENTENCES: usize = 5;

/// Prefix length used when a document has too few sentences to
/// summarise sentence-wise
const SUMMARY_PREFIX_CHARS: usize = 300;

/// Compose the final (pre-localization) answer text.
pub fn compose_answer(selected: &[(&Chunk, u32)], analysis: &QuestionAnalysis) -> String {
    let parts: Vec<String> = selected
        .iter()
        .map(|(chunk, _)| normalize_whitespace(chunk.text.trim()))
        .collect();

    let answer = parts.join(" ");

    let max_chars = if analysis.primary_intent == IntentTag::Summary {
        SUMMARY_MAX_CHARS
    } else {
        DEFAULT_MAX_CHARS
    };

    if answer.chars().count() <= max_chars {
        return answer;
    }

    // Over budget: rebuild sentence by sentence, dropping the
    // first sentence that would overflow
    let mut truncated = String::new();
    for sentence in answer.split(". ") {
        if truncated.chars().count() + sentence.chars().count() < max_chars {
            truncated.push_str(sentence);
            truncated.push_str(". ");
        } else {
            break;
        }
    }

    let mut result = truncated.trim().to_string();
    if !result.ends_with('.') {
        result.push_str("...");
    }
    result
}

/// Build the ingest-time summary of a whole document.
///
/// With 3 or more sentences: the first 5, re-joined. With fewer,
/// a 300-char prefix (plus "..." when it actually truncates).
pub fn document_summary(text: &str) -> String {
    let sentences: Vec<&str> = text
        .split('.')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.len() < 3 {
        if text.chars().count() > SUMMARY_PREFIX_CHARS {
            let prefix: String = text.chars().take(SUMMARY_PREFIX_CHARS).collect();
            format!("{prefix}...")
        } else {
            text.to_string()
        }
    } else {
        let mut summary = sentences
            .iter()
            .take(SUMMARY_SENTENCES)
            .copied()
            .collect::<Vec<_>>()
            .join(". ");
        summary.push('.');
        summary
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::qa::analyzer::analyze;

    fn chunk(index: usize, text: &str) -> Chunk {
        Chunk::new("doc", index, text, Some(1))
    }

    #[test]
    fn test_join_in_selection_order() {
        let a = analyze("who is the hero?");
        let c0 = chunk(0, "First part.");
        let c1 = chunk(1, "Second part.");
        let selected = vec![(&c1, 9u32), (&c0, 3u32)];

        assert_eq!(compose_answer(&selected, &a), "Second part. First part.");
    }

    #[test]
    fn test_under_budget_text_untouched() {
        let a = analyze("who is the hero?");
        let c = chunk(0, "Short answer.");
        let selected = vec![(&c, 5u32)];
        assert_eq!(compose_answer(&selected, &a), "Short answer.");
    }

    #[test]
    fn test_truncation_respects_budget_and_sentences() {
        let a = analyze("who is the hero?");
        // 20 sentences of ~50 chars each ≈ 1000 chars total
        let sentence = "The hero walked the long road through the mist";
        let text = vec![sentence; 20].join(". ");
        let c = chunk(0, &text);
        let selected = vec![(&c, 5u32)];

        let answer = compose_answer(&selected, &a);
        assert!(answer.chars().count() <= 600 + 3);
        assert!(answer.ends_with('.') || answer.ends_with("..."));
        // Truncation happens between sentences, never inside one
        for piece in answer.trim_end_matches("...").split(". ") {
            assert!(piece.is_empty() || piece.starts_with("The hero"));
        }
    }

    #[test]
    fn test_summary_budget_is_larger() {
        let summary_q = analyze("give me a summary");
        let other_q   = analyze("who is the hero?");
        let sentence = "Words keep flowing into the page as the story grows";
        let text = vec![sentence; 20].join(". ");
        let c = chunk(0, &text);
        let selected = vec![(&c, 5u32)];

        let long  = compose_answer(&selected, &summary_q);
        let short = compose_answer(&selected, &other_q);
        assert!(long.chars().count() > short.chars().count());
        assert!(long.chars().count() <= 1000 + 3);
    }

    #[test]
    fn test_truncated_answer_gets_ellipsis() {
        let a = analyze("who is the hero?");
        // One sentence ending without ". " followed by overflow
        let text = format!("{} and then", "w".repeat(700));
        let c = chunk(0, &text);
        let selected = vec![(&c, 5u32)];

        let answer = compose_answer(&selected, &a);
        assert!(answer.ends_with("..."));
    }

    #[test]
    fn test_document_summary_takes_five_sentences() {
        let text = "One. Two. Three. Four. Five. Six. Seven.";
        assert_eq!(document_summary(text), "One. Two. Three. Four. Five.");
    }

    #[test]
    fn test_document_summary_short_text_passthrough() {
        let text = "Barely two sentences here. That is all";
        assert_eq!(document_summary(text), text);
    }

    #[test]
    fn test_document_summary_long_sentence_prefix() {
        // Fewer than 3 sentences but over 300 chars → prefix + "..."
        let text = "x".repeat(400);
        let summary = document_summary(&text);
        assert_eq!(summary.chars().count(), 303);
        assert!(summary.ends_with("..."));
    }
}
