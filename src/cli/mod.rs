// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `ingest`  — extracts and stores a PDF's text and chunks
//   2. `ask`     — answers a question about a stored document
//   3. `rechunk` — regenerates stored chunks from the source PDFs
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AskArgs, Commands, IngestArgs, RechunkArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "pdf-doc-qa",
    version = "0.1.0",
    about = "Ingest PDF documents, then ask questions answered from their text."
)]
pub struct Cli {
    /// The subcommand to run (ingest, ask or rechunk)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Ingest(args)  => Self::run_ingest(args),
            Commands::Ask(args)     => Self::run_ask(args),
            Commands::Rechunk(args) => Self::run_rechunk(args),
        }
    }

    /// Handles the `ingest` subcommand.
    /// Converts CLI args into an IngestConfig and hands off to Layer 2.
    fn run_ingest(args: IngestArgs) -> Result<()> {
        use crate::application::ingest_use_case::IngestUseCase;

        tracing::info!("Ingesting PDF: {}", args.pdf.display());

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = IngestUseCase::new(args.into());
        let (document, chunk_count) = use_case.run()?;

        println!("Ingested '{}' as '{}' ({} chunks).", document.title, document.id, chunk_count);
        println!("Summary: {}", document.summary);
        Ok(())
    }

    /// Handles the `ask` subcommand.
    /// Loads the document's chunks and prints the generated answer.
    fn run_ask(args: AskArgs) -> Result<()> {
        use crate::application::ask_use_case::AskUseCase;
        use crate::domain::traits::QuestionAnswerer;
        use crate::infra::JsonStore;

        let store = JsonStore::new(&args.store_dir)?;
        let use_case = AskUseCase::new(store, args.doc_id.as_str());

        let answer = use_case.answer(&args.question, &args.language)?;
        println!("\nAnswer: {}", answer.text);
        if answer.is_grounded {
            println!("Confidence: {:.2}", answer.confidence);
        }
        Ok(())
    }

    /// Handles the `rechunk` subcommand.
    fn run_rechunk(args: RechunkArgs) -> Result<()> {
        use crate::application::rechunk_use_case::RechunkUseCase;

        let use_case = RechunkUseCase::new(args.into());
        let results = use_case.run()?;

        for (doc_id, chunk_count) in &results {
            println!("Re-chunked '{}' into {} chunks.", doc_id, chunk_count);
        }
        println!("Done: {} document(s) re-chunked.", results.len());
        Ok(())
    }
}
