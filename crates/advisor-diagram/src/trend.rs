//! Stock trend chart from a market analysis report
//!
//! The analysis report is free text, so the price facts are scraped back
//! out with regexes keyed to the report's field labels. Without historical
//! data points the 30-day series is synthesized: a straight line from the
//! derived start price to the current price, flat when no change figure is
//! present.

use crate::{BLUE, RED};
use anyhow::{Context, Result};
use plotters::prelude::*;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

const TREND_DAYS: usize = 30;

static TICKER: LazyLock<Regex> =
    LazyLock::new(|| re(r"Market Analysis Report for:\s*(\w+)"));
static CURRENT_PRICE: LazyLock<Regex> =
    LazyLock::new(|| re(r"Current Stock Price:\*{0,2}\s*\$?([\d,]+\.?\d*)"));
static PRICE_CHANGE: LazyLock<Regex> =
    LazyLock::new(|| re(r"Price Change:\*{0,2}\s*\$?([+-]?[\d,]+\.?\d*)\s*\(([+-]?[\d.]+)%\)"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid trend pattern")
}

/// Price facts scraped from one market analysis report
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTrend {
    /// Ticker symbol, "STOCK" when the report header is missing
    pub ticker: String,
    /// Current price, 0.0 when absent
    pub current_price: f64,
    /// Absolute and percent change when the report states them
    pub change: Option<(f64, f64)>,
}

impl PriceTrend {
    /// Direction label derived from the change sign
    pub fn direction(&self) -> &'static str {
        match self.change {
            Some((change, _)) if change > 0.0 => "UPTREND",
            Some((change, _)) if change < 0.0 => "DOWNTREND",
            _ => "SIDEWAYS",
        }
    }

    /// Synthesized 30-day price series ending at the current price
    fn series(&self) -> Vec<(f64, f64)> {
        let change = self.change.map_or(0.0, |(change, _)| change);
        let start = self.current_price - change;
        (0..TREND_DAYS)
            .map(|day| {
                let t = day as f64 / (TREND_DAYS - 1) as f64;
                (day as f64, start + change * t)
            })
            .collect()
    }
}

/// Scrape the ticker, current price, and change out of an analysis report
pub fn parse_price_trend(market_analysis: &str) -> PriceTrend {
    let ticker = TICKER
        .captures(market_analysis)
        .map_or_else(|| "STOCK".to_string(), |caps| caps[1].to_string());

    let current_price = CURRENT_PRICE
        .captures(market_analysis)
        .and_then(|caps| caps[1].replace(',', "").parse::<f64>().ok())
        .unwrap_or(0.0);

    let change = PRICE_CHANGE.captures(market_analysis).and_then(|caps| {
        let change = caps[1].replace(',', "").parse::<f64>().ok()?;
        let percent = caps[2].parse::<f64>().ok()?;
        Some((change, percent))
    });

    PriceTrend {
        ticker,
        current_price,
        change,
    }
}

/// Render a 30-day trend chart for an analysis report as a PNG at `path`
pub fn render_trend_png(market_analysis: &str, path: &Path) -> Result<()> {
    let trend = parse_price_trend(market_analysis);
    if trend.current_price <= 0.0 {
        anyhow::bail!("no price data found in the analysis report");
    }

    let series = trend.series();
    let (low, high) = series
        .iter()
        .fold((f64::MAX, f64::MIN), |(low, high), &(_, price)| {
            (low.min(price), high.max(price))
        });
    let pad = ((high - low) * 0.1).max(trend.current_price * 0.01);

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!(
        "{} - 30-Day Price Trend ({})",
        trend.ticker,
        trend.direction()
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24).into_font().style(FontStyle::Bold))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..(TREND_DAYS - 1) as f64, (low - pad)..(high + pad))
        .context("failed to build trend chart axes")?;

    chart
        .configure_mesh()
        .x_desc("Days (29 = today)")
        .y_desc("Price ($)")
        .y_label_formatter(&|price| format!("${price:.2}"))
        .light_line_style(WHITE.mix(0.3))
        .draw()?;

    chart
        .draw_series(LineSeries::new(series, BLUE.stroke_width(2)))?
        .label(format!("{} price", trend.ticker))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    chart
        .draw_series(std::iter::once(Circle::new(
            ((TREND_DAYS - 1) as f64, trend.current_price),
            5,
            RED.filled(),
        )))?
        .label(format!("Current: ${:.2}", trend.current_price))
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!(ticker = %trend.ticker, path = %path.display(), "trend chart rendered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_market::demo_market_analysis;

    #[test]
    fn test_parse_demo_report() {
        let trend = parse_price_trend(&demo_market_analysis("MSFT"));
        assert_eq!(trend.ticker, "MSFT");
        assert!((trend.current_price - 425.50).abs() < f64::EPSILON);
        let (change, percent) = trend.change.expect("change present");
        assert!((change - 5.25).abs() < f64::EPSILON);
        assert!((percent - 1.25).abs() < f64::EPSILON);
        assert_eq!(trend.direction(), "UPTREND");
    }

    #[test]
    fn test_parse_negative_change() {
        let trend = parse_price_trend(&demo_market_analysis("TSLA"));
        assert_eq!(trend.ticker, "TSLA");
        assert_eq!(trend.direction(), "DOWNTREND");
    }

    #[test]
    fn test_parse_missing_fields() {
        let trend = parse_price_trend("nothing useful here");
        assert_eq!(trend.ticker, "STOCK");
        assert!(trend.current_price.abs() < f64::EPSILON);
        assert!(trend.change.is_none());
        assert_eq!(trend.direction(), "SIDEWAYS");
    }

    #[test]
    fn test_series_ends_at_current_price() {
        let trend = parse_price_trend(&demo_market_analysis("AAPL"));
        let series = trend.series();
        assert_eq!(series.len(), 30);
        let (_, last) = series[29];
        assert!((last - trend.current_price).abs() < 1e-9);
        let (_, first) = series[0];
        assert!((first - (trend.current_price - 2.75)).abs() < 1e-9);
    }

    #[test]
    fn test_render_trend_chart() {
        let path = std::env::temp_dir().join("advisor_trend_render_test.png");
        render_trend_png(&demo_market_analysis("AAPL"), &path).expect("renders");
        let bytes = std::fs::read(&path).expect("file exists");
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_render_without_price_fails() {
        let path = std::env::temp_dir().join("advisor_trend_no_price.png");
        assert!(render_trend_png("no report", &path).is_err());
    }
}
