// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `ingest`, `ask` and `rechunk`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → PathBuf, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::ingest_use_case::IngestConfig;
use crate::application::rechunk_use_case::RechunkConfig;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest a PDF into the document store
    Ingest(IngestArgs),

    /// Ask a question about an ingested document
    Ask(AskArgs),

    /// Regenerate chunks for stored documents from their PDFs
    Rechunk(RechunkArgs),
}

/// All arguments for the `ingest` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Path of the PDF file to ingest
    #[arg(long)]
    pub pdf: PathBuf,

    /// Display title; defaults to the PDF file stem
    #[arg(long)]
    pub title: Option<String>,

    /// Root directory of the document store
    #[arg(long, default_value = "store")]
    pub store_dir: PathBuf,
}

/// Convert CLI IngestArgs into the application-layer IngestConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<IngestArgs> for IngestConfig {
    fn from(a: IngestArgs) -> Self {
        IngestConfig {
            pdf_path:  a.pdf,
            title:     a.title,
            store_dir: a.store_dir,
        }
    }
}

/// All arguments for the `ask` command
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The natural language question to answer
    #[arg(long)]
    pub question: String,

    /// Id of the ingested document (the PDF file stem)
    #[arg(long)]
    pub doc_id: String,

    /// Display language for the answer: en, gu or hi
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Root directory of the document store
    #[arg(long, default_value = "store")]
    pub store_dir: PathBuf,
}

/// All arguments for the `rechunk` command
#[derive(Args, Debug)]
pub struct RechunkArgs {
    /// Id of a single document to re-chunk
    #[arg(long)]
    pub doc_id: Option<String>,

    /// Re-chunk every document in the store
    #[arg(long)]
    pub all: bool,

    /// Root directory of the document store
    #[arg(long, default_value = "store")]
    pub store_dir: PathBuf,
}

impl From<RechunkArgs> for RechunkConfig {
    fn from(a: RechunkArgs) -> Self {
        RechunkConfig {
            doc_id:    a.doc_id,
            all:       a.all,
            store_dir: a.store_dir,
        }
    }
}
