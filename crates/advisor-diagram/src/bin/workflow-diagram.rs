//! Render the sequential workflow diagram
//!
//! Usage: `workflow-diagram [output.png]`

use advisor_diagram::{BLUE, Diagram, Edge, GRAY, GREEN, Node, YELLOW, render_png};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "workflow-diagram")]
#[command(about = "Render the advisory workflow diagram", long_about = None)]
struct Args {
    /// Output PNG file
    output: Option<PathBuf>,
}

const STEPS: &[(&str, &[&str])] = &[
    ("data_analyst", &["1. Data Analyst", "market analysis"]),
    ("trading_analyst", &["2. Trading Analyst", "top 2 strategies"]),
    ("execution_analyst", &["3. Execution Analyst", "order plan"]),
    ("risk_analyst", &["4. Risk Analyst", "risk assessment"]),
    ("summary", &["5. Summary Agent", "executive summary"]),
];

fn diagram() -> Diagram {
    let mut nodes = vec![
        Node {
            id: "query",
            lines: &["User Query"],
            center: (130, 150),
            size: (160, 60),
            fill: GRAY,
        },
        Node {
            id: "coordinator",
            lines: &["Coordinator"],
            center: (360, 150),
            size: (170, 60),
            fill: BLUE,
        },
        Node {
            id: "state",
            lines: &["Shared Session State"],
            center: (950, 360),
            size: (1100, 60),
            fill: YELLOW,
        },
        Node {
            id: "response",
            lines: &["Response"],
            center: (1770, 150),
            size: (150, 60),
            fill: GRAY,
        },
    ];
    for (index, &(id, lines)) in STEPS.iter().enumerate() {
        nodes.push(Node {
            id,
            lines,
            center: (620 + index as i32 * 235, 150),
            size: (200, 70),
            fill: GREEN,
        });
    }

    let mut edges = vec![
        Edge::new("query", "coordinator"),
        Edge::new("coordinator", "data_analyst"),
        Edge::new("data_analyst", "trading_analyst"),
        Edge::new("trading_analyst", "execution_analyst"),
        Edge::new("execution_analyst", "risk_analyst"),
        Edge::new("risk_analyst", "summary"),
        Edge::new("summary", "response"),
    ];
    for &(id, _) in STEPS {
        edges.push(Edge::both_ways(id, "state"));
    }

    Diagram {
        title: "Financial Advisor - Sequential Workflow",
        size: (1900, 480),
        nodes,
        edges,
    }
}

fn main() -> anyhow::Result<()> {
    advisor_utils::init_tracing();

    let args = Args::parse();
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from("workflow_diagram.png"));

    render_png(&diagram(), &output)?;
    println!("\u{2713} Workflow diagram saved to {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_run_in_order() {
        let diagram = diagram();
        let order = [
            "data_analyst",
            "trading_analyst",
            "execution_analyst",
            "risk_analyst",
            "summary",
        ];
        for pair in order.windows(2) {
            assert!(
                diagram
                    .edges
                    .iter()
                    .any(|edge| edge.from == pair[0] && edge.to == pair[1]),
                "missing edge {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_summary_feeds_response() {
        let diagram = diagram();
        assert!(
            diagram
                .edges
                .iter()
                .any(|edge| edge.from == "summary" && edge.to == "response")
        );
    }
}
