//! Box-and-arrow diagram rendering
//!
//! A diagram is a set of labelled boxes plus directed edges between them.
//! Rendering clips each edge at the box borders and draws an arrowhead at
//! the target (both ends when the edge is bidirectional).

use anyhow::{Result, bail};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::info;

pub mod trend;

pub use trend::{PriceTrend, parse_price_trend, render_trend_png};

// Palette shared by all diagrams
pub const BLUE: RGBColor = RGBColor(66, 133, 244);
pub const RED: RGBColor = RGBColor(234, 67, 53);
pub const YELLOW: RGBColor = RGBColor(251, 188, 4);
pub const GREEN: RGBColor = RGBColor(52, 168, 83);
pub const GRAY: RGBColor = RGBColor(95, 99, 104);

const ARROW_SIZE: f64 = 9.0;
const LINE_SPACING: i32 = 16;

/// A labelled box centred at `center`
#[derive(Debug, Clone)]
pub struct Node {
    pub id: &'static str,
    /// Label lines, drawn stacked inside the box
    pub lines: &'static [&'static str],
    pub center: (i32, i32),
    pub size: (i32, i32),
    pub fill: RGBColor,
}

/// A directed edge between two node ids
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: &'static str,
    pub to: &'static str,
    pub bidirectional: bool,
}

impl Edge {
    pub fn new(from: &'static str, to: &'static str) -> Self {
        Self {
            from,
            to,
            bidirectional: false,
        }
    }

    pub fn both_ways(from: &'static str, to: &'static str) -> Self {
        Self {
            from,
            to,
            bidirectional: true,
        }
    }
}

/// A complete diagram ready to render
#[derive(Debug, Clone)]
pub struct Diagram {
    pub title: &'static str,
    pub size: (u32, u32),
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Diagram {
    fn node(&self, id: &str) -> Result<&Node> {
        match self.nodes.iter().find(|node| node.id == id) {
            Some(node) => Ok(node),
            None => bail!("diagram references unknown node: {id}"),
        }
    }
}

/// Render the diagram as a PNG at `path`
pub fn render_png(diagram: &Diagram, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, diagram.size).into_drawing_area();
    root.fill(&WHITE)?;

    let centered = Pos::new(HPos::Center, VPos::Center);
    let title_style = ("sans-serif", 24)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(centered);
    root.draw(&Text::new(
        diagram.title,
        (diagram.size.0 as i32 / 2, 28),
        title_style,
    ))?;

    // Edges first so boxes sit on top of the line endpoints
    for edge in &diagram.edges {
        let from = diagram.node(edge.from)?;
        let to = diagram.node(edge.to)?;
        let start = border_point(from, to.center);
        let end = border_point(to, from.center);

        root.draw(&PathElement::new(
            vec![to_pixel(start), to_pixel(end)],
            GRAY.stroke_width(2),
        ))?;
        root.draw(&Polygon::new(arrow_head(end, start), GRAY.filled()))?;
        if edge.bidirectional {
            root.draw(&Polygon::new(arrow_head(start, end), GRAY.filled()))?;
        }
    }

    let label_style = ("sans-serif", 15)
        .into_font()
        .style(FontStyle::Bold)
        .color(&WHITE)
        .pos(centered);
    for node in &diagram.nodes {
        let (cx, cy) = node.center;
        let (hw, hh) = (node.size.0 / 2, node.size.1 / 2);
        let corners = [(cx - hw, cy - hh), (cx + hw, cy + hh)];
        root.draw(&Rectangle::new(corners, node.fill.filled()))?;
        root.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;

        let top = cy - (node.lines.len() as i32 - 1) * LINE_SPACING / 2;
        for (index, line) in node.lines.iter().enumerate() {
            let y = top + index as i32 * LINE_SPACING;
            root.draw(&Text::new(*line, (cx, y), label_style.clone()))?;
        }
    }

    root.present()?;
    info!(path = %path.display(), "diagram rendered");
    Ok(())
}

/// Point where the line from the node centre toward `toward` crosses the
/// node's border
fn border_point(node: &Node, toward: (i32, i32)) -> (f64, f64) {
    let (cx, cy) = (f64::from(node.center.0), f64::from(node.center.1));
    let (dx, dy) = (f64::from(toward.0) - cx, f64::from(toward.1) - cy);
    if dx == 0.0 && dy == 0.0 {
        return (cx, cy);
    }
    let half_w = f64::from(node.size.0) / 2.0;
    let half_h = f64::from(node.size.1) / 2.0;
    let scale_x = if dx == 0.0 { f64::INFINITY } else { half_w / dx.abs() };
    let scale_y = if dy == 0.0 { f64::INFINITY } else { half_h / dy.abs() };
    let t = scale_x.min(scale_y);
    (cx + dx * t, cy + dy * t)
}

fn arrow_head(tip: (f64, f64), from: (f64, f64)) -> Vec<(i32, i32)> {
    let (dx, dy) = (tip.0 - from.0, tip.1 - from.1);
    let len = dx.hypot(dy).max(1.0);
    let (ux, uy) = (dx / len, dy / len);
    let base = (tip.0 - ux * ARROW_SIZE, tip.1 - uy * ARROW_SIZE);
    let (px, py) = (-uy, ux);
    vec![
        to_pixel(tip),
        to_pixel((base.0 + px * ARROW_SIZE / 2.0, base.1 + py * ARROW_SIZE / 2.0)),
        to_pixel((base.0 - px * ARROW_SIZE / 2.0, base.1 - py * ARROW_SIZE / 2.0)),
    ]
}

fn to_pixel(point: (f64, f64)) -> (i32, i32) {
    (point.0.round() as i32, point.1.round() as i32)
}
