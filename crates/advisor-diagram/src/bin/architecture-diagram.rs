//! Render the system architecture diagram
//!
//! Usage: `architecture-diagram [output.png]`

use advisor_diagram::{BLUE, Diagram, Edge, GRAY, GREEN, Node, RED, YELLOW, render_png};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "architecture-diagram")]
#[command(about = "Render the advisory system architecture diagram", long_about = None)]
struct Args {
    /// Output PNG file
    output: Option<PathBuf>,
}

fn diagram() -> Diagram {
    let nodes = vec![
        Node {
            id: "user",
            lines: &["User"],
            center: (700, 110),
            size: (160, 60),
            fill: GRAY,
        },
        Node {
            id: "coordinator",
            lines: &["Financial Coordinator", "(root agent)"],
            center: (700, 280),
            size: (260, 80),
            fill: BLUE,
        },
        Node {
            id: "data_analyst",
            lines: &["Data Analyst"],
            center: (160, 500),
            size: (190, 60),
            fill: GREEN,
        },
        Node {
            id: "trading_analyst",
            lines: &["Trading Analyst"],
            center: (430, 500),
            size: (190, 60),
            fill: GREEN,
        },
        Node {
            id: "execution_analyst",
            lines: &["Execution Analyst"],
            center: (700, 500),
            size: (190, 60),
            fill: GREEN,
        },
        Node {
            id: "risk_analyst",
            lines: &["Risk Analyst"],
            center: (970, 500),
            size: (190, 60),
            fill: GREEN,
        },
        Node {
            id: "summary",
            lines: &["Summary Agent"],
            center: (1240, 500),
            size: (190, 60),
            fill: GREEN,
        },
        Node {
            id: "state",
            lines: &["Shared Session State", "(output keys)"],
            center: (700, 720),
            size: (280, 80),
            fill: YELLOW,
        },
        Node {
            id: "mcp",
            lines: &["Alpha Vantage", "MCP Server"],
            center: (160, 720),
            size: (200, 80),
            fill: RED,
        },
    ];

    let mut edges = vec![Edge::both_ways("user", "coordinator")];
    for agent in [
        "data_analyst",
        "trading_analyst",
        "execution_analyst",
        "risk_analyst",
        "summary",
    ] {
        edges.push(Edge::both_ways("coordinator", agent));
        edges.push(Edge::both_ways(agent, "state"));
    }
    edges.push(Edge::both_ways("data_analyst", "mcp"));

    Diagram {
        title: "Financial Advisor - System Architecture",
        size: (1400, 860),
        nodes,
        edges,
    }
}

fn main() -> anyhow::Result<()> {
    advisor_utils::init_tracing();

    let args = Args::parse();
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from("architecture_diagram.png"));

    render_png(&diagram(), &output)?;
    println!("\u{2713} Architecture diagram saved to {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sub_agent_touches_state() {
        let diagram = diagram();
        for agent in [
            "data_analyst",
            "trading_analyst",
            "execution_analyst",
            "risk_analyst",
            "summary",
        ] {
            assert!(
                diagram
                    .edges
                    .iter()
                    .any(|edge| edge.from == agent && edge.to == "state"),
                "{agent} is not wired to the session state"
            );
        }
    }

    #[test]
    fn test_only_data_analyst_uses_mcp() {
        let diagram = diagram();
        let mcp_edges: Vec<_> = diagram
            .edges
            .iter()
            .filter(|edge| edge.from == "mcp" || edge.to == "mcp")
            .collect();
        assert_eq!(mcp_edges.len(), 1);
        assert_eq!(mcp_edges[0].from, "data_analyst");
    }
}
