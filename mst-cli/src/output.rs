use serde::Serialize;

use mst::config::GraphConfig;
use mst::{Algorithm, Edge, MstResult};

#[derive(Serialize)]
pub struct OutputEdge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

#[derive(Serialize)]
pub struct OutputTree {
    pub algorithm: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub edges: Vec<OutputEdge>,
    pub total_weight: u64,
    /// False when the graph is disconnected and only a forest or partial
    /// tree was found.
    pub spanning: bool,
}

#[derive(Serialize)]
pub struct OutputGraph {
    pub vertices: Vec<String>,
    pub edges: Vec<OutputEdge>,
}

fn label(config: &GraphConfig, vertex: usize) -> String {
    config
        .label(vertex)
        .map(str::to_string)
        .unwrap_or_else(|| vertex.to_string())
}

pub fn output_edge(config: &GraphConfig, edge: &Edge) -> OutputEdge {
    OutputEdge {
        from: label(config, edge.source),
        to: label(config, edge.target),
        weight: edge.weight,
    }
}

pub fn output_tree(config: &GraphConfig, algorithm: Algorithm, result: &MstResult) -> OutputTree {
    let start = match algorithm {
        Algorithm::Kruskal => None,
        Algorithm::Prim { start } => Some(label(config, start)),
    };
    OutputTree {
        algorithm: algorithm.name(),
        start,
        edges: result.edges.iter().map(|e| output_edge(config, e)).collect(),
        total_weight: result.total_weight,
        spanning: result.is_spanning_tree(config.vertices.len()),
    }
}

pub fn output_graph(config: &GraphConfig) -> OutputGraph {
    let edges = config
        .edges
        .iter()
        .map(|e| OutputEdge {
            from: e.from.clone(),
            to: e.to.clone(),
            weight: e.weight,
        })
        .collect();
    OutputGraph {
        vertices: config.vertices.clone(),
        edges,
    }
}

fn edge_line(edge: &OutputEdge) -> String {
    format!("{}-{}:{}", edge.from, edge.to, edge.weight)
}

/// Plain-text rendering: heading, one `A-B:14` line per edge, then the total.
pub fn tree_text(tree: &OutputTree) -> String {
    let mut out = match &tree.start {
        Some(start) => format!("{}'S MST (from {start}):\n", tree.algorithm.to_uppercase()),
        None => format!("{}'S MST:\n", tree.algorithm.to_uppercase()),
    };
    for edge in &tree.edges {
        out.push_str(&edge_line(edge));
        out.push('\n');
    }
    out.push_str(&format!("Total: {}\n", tree.total_weight));
    if !tree.spanning {
        out.push_str("(graph is disconnected; result is a spanning forest)\n");
    }
    out
}

pub fn graph_text(graph: &OutputGraph) -> String {
    let mut out = String::from("Graph Edges:\n");
    for edge in &graph.edges {
        out.push_str(&edge_line(edge));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mst::config::EdgeConfig;

    #[test]
    fn kruskal_text_matches_panel_layout() {
        let config = GraphConfig::reference();
        let graph = config.build().unwrap();
        let result = mst::kruskal(&graph);
        let text = tree_text(&output_tree(&config, Algorithm::Kruskal, &result));
        assert_eq!(
            text,
            "KRUSKAL'S MST:\nG-H:7\nA-H:8\nD-E:10\nF-G:10\nC-D:12\nE-F:12\nB-F:13\nTotal: 72\n"
        );
    }

    #[test]
    fn prim_text_names_start() {
        let config = GraphConfig::reference();
        let graph = config.build().unwrap();
        let algorithm = Algorithm::Prim { start: 0 };
        let result = algorithm.run(&graph).unwrap();
        let text = tree_text(&output_tree(&config, algorithm, &result));
        assert!(text.starts_with("PRIM'S MST (from A):\nA-H:8\nG-H:7\n"));
        assert!(text.ends_with("Total: 72\n"));
    }

    #[test]
    fn disconnected_is_flagged() {
        let config = GraphConfig {
            vertices: vec!["a".into(), "b".into(), "c".into()],
            edges: vec![EdgeConfig {
                from: "a".into(),
                to: "b".into(),
                weight: 2,
            }],
        };
        let graph = config.build().unwrap();
        let tree = output_tree(&config, Algorithm::Kruskal, &mst::kruskal(&graph));
        assert!(!tree.spanning);
        assert!(tree_text(&tree).contains("spanning forest"));
    }

    #[test]
    fn graph_listing() {
        let text = graph_text(&output_graph(&GraphConfig::reference()));
        assert!(text.starts_with("Graph Edges:\nA-B:14\nA-F:21\n"));
        assert_eq!(text.lines().count(), 15);
    }

    #[test]
    fn json_shape() {
        let config = GraphConfig::reference();
        let graph = config.build().unwrap();
        let algorithm = Algorithm::Prim { start: 7 };
        let result = algorithm.run(&graph).unwrap();
        let json = serde_json::to_value(output_tree(&config, algorithm, &result)).unwrap();
        assert_eq!(json["algorithm"], "prim");
        assert_eq!(json["start"], "H");
        assert_eq!(json["total_weight"], 72);
        assert_eq!(json["spanning"], true);
        assert_eq!(json["edges"][0]["from"], "G");
        assert_eq!(json["edges"][0]["to"], "H");
        assert_eq!(json["edges"][0]["weight"], 7);
    }
}
