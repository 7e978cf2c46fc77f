// ============================================================
// Layer 4 — Whitespace Normaliser
// ============================================================
// PDF text extraction produces messy whitespace:
//   - hard line breaks in the middle of sentences
//   - runs of spaces from column layouts
//   - tabs and non-breaking spaces from tables
//
// Every piece of text the pipeline stores or matches against is
// first normalised here: all whitespace runs (spaces, newlines,
// tabs, Unicode spaces) collapse to a single ASCII space, and
// the ends are trimmed. Both the segmenter and the answer
// composer apply the same normalisation, so chunk text and
// composed answers always compare consistently.
//
// Reference: Rust Book §8 (Strings in Rust)

/// Collapse every whitespace run to a single space and trim.
///
/// `split_whitespace` treats any Unicode whitespace as a
/// separator and skips empty items, so consecutive separators
/// collapse for free.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_multiple_spaces() {
        assert_eq!(normalize_whitespace("hello   world"), "hello world");
    }

    #[test]
    fn test_collapses_newlines_and_tabs() {
        assert_eq!(normalize_whitespace("a\nb\t\tc"), "a b c");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize_whitespace("  hello world  "), "hello world");
    }

    #[test]
    fn test_empty_and_blank_strings() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   \n  "), "");
    }
}
