// ============================================================
// Layer 5 — Chunk Selector
// ============================================================
// Picks which scored chunks actually make it into the answer.
//
// Input is the candidate list already sorted by score descending
// (ties keep chunk-index order — the sort upstream is stable).
// The cap and the walk depend on the primary intent:
//
//   chapter_specific — walk the list deduplicating by chapter
//                      number, so two high-scoring chunks from
//                      the SAME chapter don't crowd out the
//                      chapter actually asked about
//   summary          — top 3 (summaries want more material)
//   everything else  — top 2
//
// If fewer candidates exist than the cap, all of them are used.

use crate::domain::analysis::{IntentTag, QuestionAnalysis};
use crate::domain::document::Chunk;
use crate::qa::analyzer::extract_chapter_numbers;

/// Select the chunks the composer will use, in selection order.
pub fn select_best_chunks<'a>(
    scored:   &[(&'a Chunk, u32)],
    analysis: &QuestionAnalysis,
) -> Vec<(&'a Chunk, u32)> {
    match analysis.primary_intent {
        IntentTag::ChapterSpecific => select_by_chapter(scored),
        IntentTag::Summary => scored.iter().take(3).copied().collect(),
        _ => scored.iter().take(2).copied().collect(),
    }
}

/// Walk the ranked list keeping at most one chunk per chapter.
///
/// Chunks without any chapter pattern are taken only while fewer
/// than 2 chunks are selected overall. The walk stops after a
/// chapter-bearing chunk brings the selection to 2 — which means
/// a late chapter chunk can still land as a third entry when two
/// pattern-less chunks were taken first. That quirk is load-bearing:
/// it keeps the asked-about chapter in the answer even when two
/// generic chunks outscored it.
fn select_by_chapter<'a>(scored: &[(&'a Chunk, u32)]) -> Vec<(&'a Chunk, u32)> {
    let mut best = Vec::new();
    let mut seen_chapters: Vec<u32> = Vec::new();

    for &(chunk, score) in scored {
        let text_lower = chunk.text.to_lowercase();

        if let Some(&chapter) = extract_chapter_numbers(&text_lower).first() {
            if !seen_chapters.contains(&chapter) {
                best.push((chunk, score));
                seen_chapters.push(chapter);
            }
            if best.len() >= 2 {
                break;
            }
        } else if best.len() < 2 {
            best.push((chunk, score));
        }
    }

    best
}
