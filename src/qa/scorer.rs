// ============================================================
// Layer 5 — Chunk Scorer
// ============================================================
// Computes how relevant ONE chunk is to ONE analysed question.
//
// Pure function: same (chunk, analysis) always gives the same
// score, and every rule only ever ADDS — so adding a matching
// keyword to a chunk can never lower its score.
//
// The rules fall in three groups, all additive:
//   - shared base rules (keyword overlap, generic-question floor)
//   - intent-specific bonuses, dispatched on the primary intent
//   - context bonuses (exact phrase, "about", "happens")
//
// All matching is case-insensitive SUBSTRING containment, not
// word-boundary-aware — "story" matches inside "history". That
// looseness is intentional and the selector/composer downstream
// are tuned to it.
//
// A chunk matching no rule at all scores 0 and is dropped from
// the candidate set by the caller.

use crate::domain::analysis::{IntentTag, QuestionAnalysis};
use crate::domain::document::Chunk;

// ─── Fixed word tables ────────────────────────────────────────────────────────

const PLOT_WORDS: &[&str] = &["story", "plot", "narrative", "events", "action", "happens"];

const CHARACTER_ROLE_WORDS: &[&str] =
    &["character", "person", "protagonist", "hero", "villain", "main"];

/// Proper nouns of the corpus this system was tuned on
const CHARACTER_PROPER_NOUNS: &[&str] = &["haruto", "akebane", "kurogami"];

const QUANTITY_SUPERLATIVE_WORDS: &[&str] =
    &["longest", "shortest", "biggest", "smallest", "number", "count", "size"];
const QUANTITY_UNIT_WORDS: &[&str] = &["pages", "length", "size", "amount"];

const COMPARISON_WORDS: &[&str] =
    &["compare", "difference", "similar", "versus", "better", "worse"];

const SETTING_WORDS: &[&str] = &["place", "location", "world", "realm", "setting", "where"];

const SUMMARY_INTRO_WORDS: &[&str] =
    &["introduction", "beginning", "start", "overview", "summary"];
const SUMMARY_MAIN_WORDS: &[&str] = &["main", "primary", "central", "key"];

const ABOUT_WORDS: &[&str] = &["about", "concerning", "regarding"];
const HAPPENS_WORDS: &[&str] = &["happens", "occurs", "events", "action"];

/// True when any word of `table` occurs as a substring of `text`
fn any_in(text: &str, table: &[&str]) -> bool {
    table.iter().any(|w| text.contains(w))
}

// ─── Scoring ──────────────────────────────────────────────────────────────────

/// Score one chunk against one question analysis.
pub fn score_chunk(chunk: &Chunk, analysis: &QuestionAnalysis) -> u32 {
    let text = chunk.text.to_lowercase();
    let mut score = 0u32;

    // Basic keyword matching: +1 per keyword present
    for keyword in &analysis.keywords {
        if text.contains(keyword.as_str()) {
            score += 1;
        }
    }

    // Relevance floor for generic questions, so "tell me about
    // this pdf" doesn't zero out every chunk
    if matches!(analysis.primary_intent, IntentTag::Summary | IntentTag::General) {
        score += 1;
    }

    // Plot questions get a floor too, weighted towards chunks
    // that talk about story events
    if analysis.primary_intent == IntentTag::Plot {
        if any_in(&text, PLOT_WORDS) {
            score += 2;
        } else {
            score += 1;
        }
    }

    // Intent-specific bonus rules, dispatched on the primary intent
    score += intent_bonus(&text, analysis);

    // Exact phrase match: the whole normalised question appears
    // verbatim inside the chunk
    if text.contains(analysis.normalized_text.as_str()) {
        score += 25;
    }

    // Context-specific bonuses
    if analysis.normalized_text.contains("about") && any_in(&text, ABOUT_WORDS) {
        score += 10;
    }
    if analysis.normalized_text.contains("happens") && any_in(&text, HAPPENS_WORDS) {
        score += 10;
    }

    score
}

/// The per-intent bonus table. Each arm is independent of the
/// shared rules in `score_chunk` and only fires for the primary
/// intent.
fn intent_bonus(text: &str, analysis: &QuestionAnalysis) -> u32 {
    match analysis.primary_intent {
        IntentTag::ChapterSpecific => chapter_bonus(text, analysis),
        IntentTag::Character       => character_bonus(text, analysis),
        IntentTag::Quantity        => quantity_bonus(text),
        IntentTag::Comparison      => comparison_bonus(text),
        IntentTag::Plot            => plot_bonus(text),
        IntentTag::Setting         => setting_bonus(text),
        IntentTag::Summary         => summary_bonus(text),
        _ => 0,
    }
}

/// +50 per requested chapter found verbatim, +10 for any chapter
/// mention at all
fn chapter_bonus(text: &str, analysis: &QuestionAnalysis) -> u32 {
    let mut bonus = 0;

    for n in &analysis.entities.chapter_numbers {
        let plain = format!("chapter {n}");
        let titled = format!("chapter {n}:");
        if text.contains(&plain) || text.contains(&titled) {
            bonus += 50;
        }
    }

    if text.contains("chapter") {
        bonus += 10;
    }

    bonus
}

/// +30 per named entity present, +15 for character-role words,
/// +20 for known proper nouns, +1 floor
fn character_bonus(text: &str, analysis: &QuestionAnalysis) -> u32 {
    let mut bonus = 0;

    for name in &analysis.entities.capitalized_tokens {
        if text.contains(&name.to_lowercase()) {
            bonus += 30;
        }
    }

    if any_in(text, CHARACTER_ROLE_WORDS) {
        bonus += 15;
    }
    if any_in(text, CHARACTER_PROPER_NOUNS) {
        bonus += 20;
    }

    bonus + 1
}

fn quantity_bonus(text: &str) -> u32 {
    let mut bonus = 0;
    if any_in(text, QUANTITY_SUPERLATIVE_WORDS) {
        bonus += 20;
    }
    if any_in(text, QUANTITY_UNIT_WORDS) {
        bonus += 15;
    }
    bonus
}

fn comparison_bonus(text: &str) -> u32 {
    if any_in(text, COMPARISON_WORDS) { 20 } else { 0 }
}

fn plot_bonus(text: &str) -> u32 {
    if any_in(text, PLOT_WORDS) { 15 } else { 0 }
}

fn setting_bonus(text: &str) -> u32 {
    if any_in(text, SETTING_WORDS) { 15 } else { 0 }
}

fn summary_bonus(text: &str) -> u32 {
    let mut bonus = 0;
    if any_in(text, SUMMARY_INTRO_WORDS) {
        bonus += 20;
    }
    if any_in(text, SUMMARY_MAIN_WORDS) {
        bonus += 10;
    }
    bonus
}
