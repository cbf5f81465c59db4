//! Export a conversation session JSON to a styled HTML page
//!
//! Usage: `export-html [input.json] [output.html]`. With one argument the
//! output path is derived from the input; with none, defaults are used.

use advisor_export::{Session, classified_message_count, render_session_html};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "export-html")]
#[command(about = "Export a conversation session JSON to HTML", long_about = None)]
struct Args {
    /// Input session JSON file
    input: Option<PathBuf>,
    /// Output HTML file
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    advisor_utils::init_tracing();

    let args = Args::parse();
    let (input, output) = resolve_paths(args.input, args.output);

    let session = Session::from_json_file(&input)
        .with_context(|| format!("failed to load session from {}", input.display()))?;

    let html = render_session_html(&session);
    std::fs::write(&output, html)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let count = classified_message_count(&session);
    info!(messages = count, output = %output.display(), "conversation exported");

    println!("\u{2713} Conversation exported successfully: {}", output.display());
    println!("  - Total messages: {count}");
    println!("\nTo convert to PDF, open the file in a browser and use the Print to PDF button.");

    Ok(())
}

fn resolve_paths(input: Option<PathBuf>, output: Option<PathBuf>) -> (PathBuf, PathBuf) {
    match (input, output) {
        (Some(input), Some(output)) => (input, output),
        (Some(input), None) => {
            let output = input.with_extension("html");
            (input, output)
        }
        (None, output) => (
            PathBuf::from("session.json"),
            output.unwrap_or_else(|| PathBuf::from("conversation_export.html")),
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
        assert_eq!(output, PathBuf::from("conversation_export.html"));
    }

    #[test]
    fn test_derived_output_path() {
        let (input, output) = resolve_paths(Some(PathBuf::from("run/trace.json")), None);
        assert_eq!(input, PathBuf::from("run/trace.json"));
        assert_eq!(output, PathBuf::from("run/trace.html"));
    }

    #[test]
    fn test_explicit_paths() {
        let (input, output) = resolve_paths(
            Some(PathBuf::from("a.json")),
            Some(PathBuf::from("b.html")),
        );
        assert_eq!(input, PathBuf::from("a.json"));
        assert_eq!(output, PathBuf::from("b.html"));
    }
}
