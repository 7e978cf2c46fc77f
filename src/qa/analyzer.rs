// ============================================================
// Layer 5 — Question Analyzer
// ============================================================
// Turns a raw question string into a QuestionAnalysis:
//
//   1. Lowercase + trim.
//   2. Detect intent categories by keyword-table substring match
//      (several categories may fire at once).
//   3. Resolve ONE primary intent using a fixed priority order —
//      more specific categories beat broader ones, so
//      "what happens in chapter 3" is chapter_specific, not plot.
//   4. Extract entities: chapter numbers, standalone numbers,
//      capitalised tokens (candidate names), location cues.
//   5. Extract keywords: drop stop words and short words, with a
//      relaxed fallback so no question ends up keyword-less.
//
// Analysis never fails: unparseable inputs just produce empty
// entity lists, and a question matching no table is `general`.
//
// All matching is plain substring containment — deliberately not
// word-boundary-aware, to keep scoring behaviour consistent with
// the scorer's matching rules.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use crate::domain::analysis::{Entities, IntentTag, QuestionAnalysis};

// ─── Fixed rule tables ────────────────────────────────────────────────────────

/// Keyword table per intent category, tested in this order.
const INTENT_KEYWORDS: &[(IntentTag, &[&str])] = &[
    (IntentTag::Summary,         &["summary", "brief", "overview", "general", "about", "what is this"]),
    (IntentTag::ChapterSpecific, &["chapter", "section", "part"]),
    (IntentTag::Character,       &["character", "who", "person", "name", "protagonist", "hero", "villain"]),
    (IntentTag::Plot,            &["plot", "story", "narrative", "what happens", "events", "action"]),
    (IntentTag::Setting,         &["where", "place", "location", "world", "realm", "setting"]),
    (IntentTag::Time,            &["when", "time", "period", "era", "century", "year"]),
    (IntentTag::Comparison,      &["compare", "difference", "similar", "versus", "vs", "better", "worse"]),
    (IntentTag::Definition,      &["what is", "define", "meaning", "explain", "describe"]),
    (IntentTag::List,            &["list", "all", "every", "each", "names", "types", "kinds"]),
    (IntentTag::How,             &["how", "method", "process", "way", "technique"]),
    (IntentTag::Why,             &["why", "reason", "cause", "because", "purpose"]),
    (IntentTag::Quantity,        &["how many", "count", "number", "amount", "size", "length", "longest", "shortest"]),
];

/// Tie-break order for the primary intent — earlier wins.
/// `List` is deliberately absent: a question matching only the
/// list table resolves to `General`.
const PRIORITY_ORDER: &[IntentTag] = &[
    IntentTag::ChapterSpecific,
    IntentTag::Character,
    IntentTag::Quantity,
    IntentTag::Comparison,
    IntentTag::Definition,
    IntentTag::Plot,
    IntentTag::Setting,
    IntentTag::Time,
    IntentTag::How,
    IntentTag::Why,
    IntentTag::Summary,
];

/// Words dropped during keyword extraction
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
    "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
];

/// If any of these appears (as a substring) the question is a
/// generic request, and the generic content words below are added
/// as soft matches against any chunk.
const GENERIC_REQUEST_WORDS: &[&str] = &[
    "give", "me", "tell", "about", "what", "how", "why", "when", "where", "brief",
    "detail", "summary",
];
const GENERIC_CONTENT_WORDS: &[&str] = &[
    "story", "content", "information", "text", "document", "pdf",
];

/// Prepositions whose following token is taken as a location cue
const LOCATION_PREPOSITIONS: &[&str] = &["in", "at", "from", "to", "near", "around"];

// ─── Analysis ─────────────────────────────────────────────────────────────────

/// Analyse one question string. Never fails.
pub fn analyze(question: &str) -> QuestionAnalysis {
    let normalized = question.to_lowercase().trim().to_string();

    // Intent detection: a category fires when ANY of its keywords
    // occurs as a substring of the normalised question
    let detected: Vec<IntentTag> = INTENT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(tag, _)| *tag)
        .collect();

    // Primary intent: first detected category in priority order
    let primary = PRIORITY_ORDER
        .iter()
        .find(|tag| detected.contains(tag))
        .copied()
        .unwrap_or(IntentTag::General);

    let entities = Entities {
        chapter_numbers:    extract_chapter_numbers(&normalized),
        numbers:            extract_numbers(&normalized),
        capitalized_tokens: extract_capitalized_tokens(question),
        location_cues:      extract_location_cues(&normalized),
    };

    let keywords = extract_keywords(&normalized);

    QuestionAnalysis {
        original_text: question.to_string(),
        normalized_text: normalized,
        detected_intents: detected,
        primary_intent: primary,
        entities,
        keywords,
    }
}

// ─── Entity extraction ────────────────────────────────────────────────────────

/// Is `c` a word character for boundary purposes?
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Every integer that immediately follows the literal "chapter"
/// (separated by whitespace), in order of appearance.
/// e.g. "summarise chapter 3 and chapter 12" → [3, 12]
pub fn extract_chapter_numbers(text_lower: &str) -> Vec<u32> {
    let mut numbers = Vec::new();

    for (pos, _) in text_lower.match_indices("chapter") {
        let rest = &text_lower[pos + "chapter".len()..];

        // Require at least one whitespace char after the word
        let after_ws = rest.trim_start();
        if after_ws.len() == rest.len() {
            continue;
        }

        // Collect the digit run that follows
        let digits: String = after_ws.chars().take_while(|c| c.is_ascii_digit()).collect();
        if let Ok(n) = digits.parse::<u32>() {
            numbers.push(n);
        }
    }

    numbers
}

/// Every standalone integer token (digit runs bounded by
/// non-word characters), in order of appearance.
pub fn extract_numbers(text: &str) -> Vec<u32> {
    let chars: Vec<char> = text.chars().collect();
    let mut numbers = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            // Word boundaries on both sides — "3" in "3 pigs" counts,
            // the "3" in "abc3" does not
            let before_ok = start == 0 || !is_word_char(chars[start - 1]);
            let after_ok  = i == chars.len() || !is_word_char(chars[i]);
            if before_ok && after_ok {
                let run: String = chars[start..i].iter().collect();
                if let Ok(n) = run.parse::<u32>() {
                    numbers.push(n);
                }
            }
        } else {
            i += 1;
        }
    }

    numbers
}

/// Words of the shape [A-Z][a-z]+ in the ORIGINAL text — an
/// uppercase letter followed by one or more lowercase letters,
/// bounded on both sides. Candidate character names.
pub fn extract_capitalized_tokens(original: &str) -> Vec<String> {
    let chars: Vec<char> = original.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let boundary_before = i == 0 || !is_word_char(chars[i - 1]);

        if boundary_before && chars[i].is_ascii_uppercase() {
            let start = i;
            i += 1;
            let mut lower_count = 0;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
                lower_count += 1;
            }
            let boundary_after = i == chars.len() || !is_word_char(chars[i]);
            if lower_count > 0 && boundary_after {
                tokens.push(chars[start..i].iter().collect());
            }
        } else {
            i += 1;
        }
    }

    tokens
}

/// The token following any locational preposition in the
/// whitespace-split, lowercased question.
pub fn extract_location_cues(text_lower: &str) -> Vec<String> {
    let words: Vec<&str> = text_lower.split_whitespace().collect();
    let mut cues = Vec::new();

    for i in 0..words.len() {
        if LOCATION_PREPOSITIONS.contains(&words[i]) && i + 1 < words.len() {
            cues.push(words[i + 1].to_string());
        }
    }

    cues
}

// ─── Keyword extraction ───────────────────────────────────────────────────────

/// Extract meaningful keywords from the lowercased question.
///
/// Drops stop words and words of length ≤ 2; if that removes
/// everything, the LENGTH filter is relaxed (not the stop-word
/// filter) so there is always something to match on.
pub fn extract_keywords(text_lower: &str) -> Vec<String> {
    let mut keywords: Vec<String> = text_lower
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(w) && w.len() > 2)
        .map(|w| w.to_string())
        .collect();

    if keywords.is_empty() {
        keywords = text_lower
            .split_whitespace()
            .filter(|w| w.len() > 1)
            .map(|w| w.to_string())
            .collect();
    }

    // Generic requests ("tell me about...") get soft content words
    // appended so generic questions still match ordinary chunks
    if GENERIC_REQUEST_WORDS.iter().any(|w| text_lower.contains(w)) {
        keywords.extend(GENERIC_CONTENT_WORDS.iter().map(|w| w.to_string()));
    }

    keywords
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_question() {
        let a = analyze("What is Chapter 3 about?");
        assert_eq!(a.primary_intent, IntentTag::ChapterSpecific);
        assert_eq!(a.entities.chapter_numbers, vec![3]);
    }

    #[test]
    fn test_priority_order_prefers_specific_intents() {
        // "story" fires plot, "chapter" fires chapter_specific —
        // chapter_specific is earlier in the priority order
        let a = analyze("what happens in the story of chapter 2?");
        assert!(a.detected_intents.contains(&IntentTag::Plot));
        assert!(a.detected_intents.contains(&IntentTag::ChapterSpecific));
        assert_eq!(a.primary_intent, IntentTag::ChapterSpecific);
    }

    #[test]
    fn test_no_detection_falls_back_to_general() {
        let a = analyze("zzz qqq");
        assert!(a.detected_intents.is_empty());
        assert_eq!(a.primary_intent, IntentTag::General);
    }

    #[test]
    fn test_list_alone_resolves_to_general() {
        // "list" is detectable but absent from the priority order
        let a = analyze("list everything");
        assert!(a.detected_intents.contains(&IntentTag::List));
        assert_eq!(a.primary_intent, IntentTag::General);
    }

    #[test]
    fn test_capitalized_tokens_come_from_original_text() {
        let a = analyze("Who is Haruto?");
        assert!(a.entities.capitalized_tokens.contains(&"Haruto".to_string()));
        // "Who" is also [A-Z][a-z]+ shaped
        assert!(a.entities.capitalized_tokens.contains(&"Who".to_string()));
    }

    #[test]
    fn test_all_caps_words_are_not_capitalized_tokens() {
        // Needs at least one lowercase letter after the capital
        let tokens = extract_capitalized_tokens("the PDF and the Book");
        assert_eq!(tokens, vec!["Book".to_string()]);
    }

    #[test]
    fn test_numbers_require_word_boundaries() {
        assert_eq!(extract_numbers("the 3 pigs built 12 houses"), vec![3, 12]);
        assert!(extract_numbers("abc123").is_empty());
    }

    #[test]
    fn test_chapter_number_needs_whitespace() {
        assert!(extract_chapter_numbers("chapter3 is short").is_empty());
        assert_eq!(extract_chapter_numbers("chapter  7 is long"), vec![7]);
    }

    #[test]
    fn test_location_cues_follow_prepositions() {
        let cues = extract_location_cues("what lives in kurogami near the river?");
        assert_eq!(cues, vec!["kurogami".to_string(), "the".to_string()]);
    }

    #[test]
    fn test_keywords_drop_stop_words_and_short_words() {
        let kw = extract_keywords("who is the main villain");
        assert!(kw.contains(&"main".to_string()));
        assert!(kw.contains(&"villain".to_string()));
        assert!(!kw.contains(&"the".to_string()));
        assert!(!kw.contains(&"is".to_string()));
    }

    #[test]
    fn test_keyword_length_filter_relaxes_when_empty() {
        // Every word here is a stop word or ≤ 2 chars, so the
        // relaxed pass keeps words of length ≥ 2 instead
        let kw = extract_keywords("is it he");
        assert_eq!(kw, vec!["is".to_string(), "it".to_string(), "he".to_string()]);
    }

    #[test]
    fn test_generic_request_appends_content_words() {
        let kw = extract_keywords("tell me about the ending");
        assert!(kw.contains(&"document".to_string()));
        assert!(kw.contains(&"story".to_string()));
        assert!(kw.contains(&"pdf".to_string()));
    }

    #[test]
    fn test_analysis_never_fails_on_odd_input() {
        let a = analyze("   ?!?   ");
        assert_eq!(a.primary_intent, IntentTag::General);
        assert!(a.entities.chapter_numbers.is_empty());
        assert!(a.entities.capitalized_tokens.is_empty());
    }
}
