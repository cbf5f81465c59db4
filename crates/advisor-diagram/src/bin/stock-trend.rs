//! Render a 30-day stock trend chart from a market analysis report
//!
//! Usage: `stock-trend <analysis.txt> [output.png]`. The report is the text
//! produced by the data analyst step; the output path defaults to
//! `stock_trend_<TICKER>.png`.

use advisor_diagram::{parse_price_trend, render_trend_png};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stock-trend")]
#[command(about = "Render a stock trend chart from a market analysis report", long_about = None)]
struct Args {
    /// Market analysis report text file
    input: PathBuf,
    /// Output PNG file
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    advisor_utils::init_tracing();

    let args = Args::parse();
    let analysis = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let output = args
        .output
        .unwrap_or_else(|| default_output(&analysis));
    render_trend_png(&analysis, &output)?;
    println!("\u{2713} Trend chart saved to {}", output.display());

    Ok(())
}

fn default_output(analysis: &str) -> PathBuf {
    let ticker = parse_price_trend(analysis).ticker;
    PathBuf::from(format!("stock_trend_{ticker}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_names_ticker() {
        let output = default_output("Market Analysis Report for: MSFT (DEMO MODE)");
        assert_eq!(output, PathBuf::from("stock_trend_MSFT.png"));
    }
}
