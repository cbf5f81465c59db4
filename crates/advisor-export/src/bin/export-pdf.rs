//! Export a conversation session JSON to a PDF document
//!
//! Usage: `export-pdf [input.json] [output.pdf]`. Events are rendered one
//! numbered entry each; see the HTML exporter for classified rendering.

use advisor_export::{Session, render_session_pdf};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "export-pdf")]
#[command(about = "Export a conversation session JSON to PDF", long_about = None)]
struct Args {
    /// Input session JSON file
    input: Option<PathBuf>,
    /// Output PDF file
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    advisor_utils::init_tracing();

    let args = Args::parse();
    let (input, output) = resolve_paths(args.input, args.output);

    let session = Session::from_json_file(&input)
        .with_context(|| format!("failed to load session from {}", input.display()))?;

    let bytes = render_session_pdf(&session)?;
    std::fs::write(&output, bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(messages = session.events.len(), output = %output.display(), "PDF exported");

    println!("\u{2713} PDF exported successfully: {}", output.display());
    println!("  - Total messages: {}", session.events.len());

    Ok(())
}

fn resolve_paths(input: Option<PathBuf>, output: Option<PathBuf>) -> (PathBuf, PathBuf) {
    match (input, output) {
        (Some(input), Some(output)) => (input, output),
        (Some(input), None) => {
            let output = input.with_extension("pdf");
            (input, output)
        }
        (None, output) => (
            PathBuf::from("session.json"),
            output.unwrap_or_else(|| PathBuf::from("conversation_export.pdf")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let (input, output) = resolve_paths(None, None);
        assert_eq!(input, PathBuf::from("session.json"));
        assert_eq!(output, PathBuf::from("conversation_export.pdf"));
    }

    #[test]
    fn test_derived_output_path() {
        let (_, output) = resolve_paths(Some(PathBuf::from("trace.json")), None);
        assert_eq!(output, PathBuf::from("trace.pdf"));
    }
}
