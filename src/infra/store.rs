// ============================================================
// Layer 6 — JSON Document Store
// ============================================================
// Filesystem-backed implementation of `QaStore`.
//
// Layout, one directory per document under the store root:
//
//   <root>/
//     <doc_id>/
//       document.json   — the Document record
//       chunks.json     — the full chunk sequence, index order
//       answers.json    — append-only log of generated answers
//
// Writes go through serde_json with pretty formatting so the
// files stay diffable and hand-inspectable. A document with no
// chunks.json yet reads as an empty chunk list, but asking for
// a document id that was never ingested is an error.
//
// Reference: Rust Book §12 (An I/O Project)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::domain::document::{Answer, Chunk, Document};
use crate::domain::traits::QaStore;

const DOCUMENT_FILE: &str = "document.json";
const CHUNKS_FILE: &str = "chunks.json";
const ANSWERS_FILE: &str = "answers.json";

pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create store directory {}", root.display()))?;
        Ok(Self { root })
    }

    fn document_dir(&self, doc_id: &str) -> PathBuf {
        self.root.join(doc_id)
    }

    /// Errors when `doc_id` was never ingested
    fn require_document_dir(&self, doc_id: &str) -> Result<PathBuf> {
        let dir = self.document_dir(doc_id);
        if !dir.is_dir() {
            bail!("No document with id '{doc_id}' in store {}", self.root.display());
        }
        Ok(dir)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", path.display()))?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

impl QaStore for JsonStore {
    fn save_document(&self, doc: &Document) -> Result<()> {
        let dir = self.document_dir(&doc.id);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        self.write_json(&dir.join(DOCUMENT_FILE), doc)?;
        tracing::info!("Saved document '{}' to {}", doc.id, dir.display());
        Ok(())
    }

    fn load_document(&self, doc_id: &str) -> Result<Document> {
        let dir = self.require_document_dir(doc_id)?;
        self.read_json(&dir.join(DOCUMENT_FILE))
    }

    fn list_documents(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to list store {}", self.root.display()))?;

        for entry in entries {
            let entry = entry?;
            if entry.path().join(DOCUMENT_FILE).is_file() {
                ids.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        // Directory iteration order is platform-defined
        ids.sort();
        Ok(ids)
    }

    fn save_chunks(&self, doc_id: &str, chunks: &[Chunk]) -> Result<()> {
        let dir = self.require_document_dir(doc_id)?;
        self.write_json(&dir.join(CHUNKS_FILE), &chunks)?;
        tracing::info!("Saved {} chunks for document '{}'", chunks.len(), doc_id);
        Ok(())
    }

    fn load_chunks(&self, doc_id: &str) -> Result<Vec<Chunk>> {
        let dir = self.require_document_dir(doc_id)?;
        let path = dir.join(CHUNKS_FILE);
        if !path.is_file() {
            // Ingested but never chunked reads as empty, not an error
            return Ok(Vec::new());
        }
        self.read_json(&path)
    }

    fn clear_chunks(&self, doc_id: &str) -> Result<()> {
        let dir = self.require_document_dir(doc_id)?;
        let path = dir.join(CHUNKS_FILE);
        if path.is_file() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }

    fn append_answer(&self, doc_id: &str, answer: &Answer) -> Result<()> {
        let dir = self.require_document_dir(doc_id)?;
        let path = dir.join(ANSWERS_FILE);

        let mut answers: Vec<Answer> = if path.is_file() {
            self.read_json(&path)?
        } else {
            Vec::new()
        };
        answers.push(answer.clone());

        self.write_json(&path, &answers)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document(id: &str) -> Document {
        Document::new(id, "A Title", "/tmp/a.pdf", "A summary.")
    }

    fn sample_chunks(id: &str) -> Vec<Chunk> {
        vec![
            Chunk::new(id, 0, "First chunk.", Some(1)),
            Chunk::new(id, 1, "Second chunk.", Some(2)),
        ]
    }

    #[test]
    fn test_document_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        let doc = sample_document("book");
        store.save_document(&doc).unwrap();

        let loaded = store.load_document("book").unwrap();
        assert_eq!(loaded.id, "book");
        assert_eq!(loaded.title, "A Title");
        assert_eq!(loaded.summary, "A summary.");
    }

    #[test]
    fn test_unknown_document_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        assert!(store.load_document("missing").is_err());
        assert!(store.load_chunks("missing").is_err());
    }

    #[test]
    fn test_chunks_round_trip_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        store.save_document(&sample_document("book")).unwrap();
        store.save_chunks("book", &sample_chunks("book")).unwrap();

        let loaded = store.load_chunks("book").unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].index, 0);
        assert_eq!(loaded[1].text, "Second chunk.");
    }

    #[test]
    fn test_document_without_chunks_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        store.save_document(&sample_document("book")).unwrap();
        assert!(store.load_chunks("book").unwrap().is_empty());
    }

    #[test]
    fn test_clear_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        store.save_document(&sample_document("book")).unwrap();
        store.save_chunks("book", &sample_chunks("book")).unwrap();
        store.clear_chunks("book").unwrap();

        assert!(store.load_chunks("book").unwrap().is_empty());
        // Clearing twice is fine
        store.clear_chunks("book").unwrap();
    }

    #[test]
    fn test_list_documents_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        store.save_document(&sample_document("zebra")).unwrap();
        store.save_document(&sample_document("alpha")).unwrap();

        assert_eq!(store.list_documents().unwrap(), vec!["alpha", "zebra"]);
    }

    #[test]
    fn test_answers_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        store.save_document(&sample_document("book")).unwrap();

        let first = Answer {
            question:    "q1".into(),
            text:        "a1".into(),
            language:    "en".into(),
            is_grounded: true,
            confidence:  0.5,
        };
        let mut second = first.clone();
        second.question = "q2".into();

        store.append_answer("book", &first).unwrap();
        store.append_answer("book", &second).unwrap();

        let path = dir.path().join("book").join("answers.json");
        let json = std::fs::read_to_string(path).unwrap();
        let answers: Vec<Answer> = serde_json::from_str(&json).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[1].question, "q2");
    }
}
