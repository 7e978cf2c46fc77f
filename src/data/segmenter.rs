// ============================================================
// Layer 4 — Segmenter
// ============================================================
// Splits page texts into bounded, page-tagged chunks.
//
// Why chunk at all?
//   The question pipeline scores each unit of text separately.
//   Whole pages are too coarse (one good sentence drowns in
//   noise) and single sentences are too fine (no context), so
//   we accumulate a few sentences at a time.
//
// Algorithm, per page:
//   1. Normalise whitespace.
//   2. Split on the sentence delimiter ". ".
//   3. Accumulate sentences into a buffer; emit the buffer as a
//      chunk when it holds 3 sentences OR reaches 300 characters,
//      whichever comes first, then reset.
//   4. Emit any trailing buffered content as a final chunk.
//
// Chunk indices run 0,1,2,... ACROSS pages with no gaps — the
// selector depends on that ordering, so empty pages and empty
// sentences are skipped without consuming an index.
//
// Reference: Rust Book §8 (Slices)

use crate::data::preprocessor::normalize_whitespace;
use crate::domain::document::Chunk;

/// Sentences per chunk before the buffer is emitted
const MAX_SENTENCES_PER_CHUNK: usize = 3;

/// Character length at which the buffer is emitted early
const MAX_CHUNK_CHARS: usize = 300;

pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Segment a document's page texts into chunks.
    ///
    /// `pages` holds one string per physical page, in order;
    /// page numbers in the output are 1-based positions in that
    /// sequence. Deterministic: the same pages always produce
    /// the same chunk sequence.
    pub fn segment(&self, document_id: &str, pages: &[String]) -> Vec<Chunk> {
        let mut chunks = Vec::new();

        for (page_idx, page) in pages.iter().enumerate() {
            let page_number = (page_idx + 1) as u32;

            // Whitespace-only pages are skipped without consuming
            // a chunk index
            if page.trim().is_empty() {
                tracing::debug!("Page {} is empty — skipping", page_number);
                continue;
            }

            let text = normalize_whitespace(page);

            let mut current_chunk  = String::new();
            let mut sentence_count = 0usize;

            for sentence in text.split(". ") {
                let sentence = sentence.trim();
                if sentence.is_empty() {
                    continue;
                }

                // Re-join accumulated sentences with the delimiter
                // that split() removed
                if current_chunk.is_empty() {
                    current_chunk.push_str(sentence);
                } else {
                    current_chunk.push_str(". ");
                    current_chunk.push_str(sentence);
                }
                sentence_count += 1;

                if sentence_count >= MAX_SENTENCES_PER_CHUNK
                    || current_chunk.chars().count() >= MAX_CHUNK_CHARS
                {
                    if !current_chunk.trim().is_empty() {
                        chunks.push(Chunk::new(
                            document_id,
                            chunks.len(),
                            current_chunk.trim(),
                            Some(page_number),
                        ));
                    }
                    current_chunk.clear();
                    sentence_count = 0;
                }
            }

            // Don't forget the trailing buffer at the end of a page
            if !current_chunk.trim().is_empty() {
                chunks.push(Chunk::new(
                    document_id,
                    chunks.len(),
                    current_chunk.trim(),
                    Some(page_number),
                ));
            }
        }

        tracing::info!(
            "Segmented {} pages into {} chunks",
            pages.len(),
            chunks.len()
        );

        chunks
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn segment(pages: &[&str]) -> Vec<Chunk> {
        let pages: Vec<String> = pages.iter().map(|p| p.to_string()).collect();
        Segmenter::new().segment("doc", &pages)
    }

    #[test]
    fn test_four_short_sentences_make_two_chunks() {
        // 3 sentences fill the first chunk, the 4th spills into a second
        let chunks = segment(&["A. B. C. D."]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "A. B. C");
        assert_eq!(chunks[1].text, "D.");
    }

    #[test]
    fn test_indices_are_contiguous_across_pages() {
        let chunks = segment(&["A. B. C. D.", "E. F. G. H."]);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
        }
        assert_eq!(chunks[0].page_number, Some(1));
        assert_eq!(chunks.last().unwrap().page_number, Some(2));
    }

    #[test]
    fn test_character_limit_emits_early() {
        // One "sentence" longer than 300 chars must be emitted on its own
        // even though the sentence counter never reaches 3
        let long = "x".repeat(400);
        let page = format!("{}. Short one. Another. And more", long);
        let chunks = segment(&[page.as_str()]);
        assert!(chunks.len() >= 2);
        assert!(chunks[0].text.chars().count() >= 300);
    }

    #[test]
    fn test_empty_pages_skipped_without_index_gap() {
        let chunks = segment(&["", "   \n ", "A. B. C."]);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        // Page numbers still count the skipped pages
        assert_eq!(chunks[0].page_number, Some(3));
    }

    #[test]
    fn test_whitespace_is_normalized_inside_chunks() {
        let chunks = segment(&["Some\n broken   text. More\ttext. End here."]);
        assert_eq!(chunks[0].text, "Some broken text. More text. End here");
    }

    #[test]
    fn test_zero_pages_yield_zero_chunks() {
        let chunks = segment(&[]);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let pages = ["First idea. Second idea. Third idea. Fourth idea."];
        let a = segment(&pages);
        let b = segment(&pages);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.text, y.text);
            assert_eq!(x.index, y.index);
            assert_eq!(x.page_number, y.page_number);
        }
    }
}
