// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// Answers one question about one stored document:
//   1. Load the document's chunks (Layer 6)
//   2. Run the rule-based answering pipeline (Layer 5)
//   3. Append the answer to the document's answer log
//
// This use case never fails the caller: storage errors degrade
// to a localized error answer with zero confidence, so the CLI
// always has something to print.

use anyhow::Result;

use crate::domain::document::Answer;
use crate::domain::traits::{QaStore, QuestionAnswerer};
use crate::qa::{self, localizer};

pub struct AskUseCase<S: QaStore> {
    store: S,
    doc_id: String,
}

impl<S: QaStore> AskUseCase<S> {
    pub fn new(store: S, doc_id: impl Into<String>) -> Self {
        Self { store, doc_id: doc_id.into() }
    }
}

impl<S: QaStore> QuestionAnswerer for AskUseCase<S> {
    fn answer(&self, question: &str, language: &str) -> Result<Answer> {
        let chunks = match self.store.load_chunks(&self.doc_id) {
            Ok(chunks) => chunks,
            Err(e) => {
                tracing::warn!("Failed to load chunks for '{}': {e:#}", self.doc_id);
                let message = format!("{} {e:#}", qa::ERROR_PREFIX);
                return Ok(Answer {
                    question:    question.to_string(),
                    text:        localizer::localize(&message, language),
                    language:    language.to_string(),
                    is_grounded: false,
                    confidence:  0.0,
                });
            }
        };

        let (text, is_grounded, confidence) = qa::answer_question(question, &chunks, language);

        let answer = Answer {
            question: question.to_string(),
            text,
            language: language.to_string(),
            is_grounded,
            confidence,
        };

        // The log is best-effort: a failed append must not eat
        // the answer we already have
        if let Err(e) = self.store.append_answer(&self.doc_id, &answer) {
            tracing::warn!("Failed to log answer for '{}': {e:#}", self.doc_id);
        }

        Ok(answer)
    }
}
