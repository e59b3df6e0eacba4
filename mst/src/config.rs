use serde::Deserialize;

use crate::error::MstError;
use crate::graph::{Edge, Graph};

/// Serde-driven labelled graph description. Only the built-in
/// `graphs/reference.toml` is parsed; graphs are not read from user files.
///
/// ```toml
/// vertices = ["A", "B", "C"]
/// edges = [
///     { from = "A", to = "B", weight = 4 },
///     { from = "B", to = "C", weight = 1 },
/// ]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Vertex labels; position in this list is the vertex index.
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

impl GraphConfig {
    /// Parse a TOML string. Labels are not resolved until [`GraphConfig::build`].
    fn from_toml(toml_str: &str) -> Result<GraphConfig, MstError> {
        toml::from_str(toml_str).map_err(|e| MstError::Config(e.to_string()))
    }

    /// The labelled 8-vertex reference graph (`A`..`H`).
    pub fn reference() -> GraphConfig {
        GraphConfig::from_toml(include_str!("../graphs/reference.toml"))
            .expect("built-in reference.toml should be valid")
    }

    /// Index of the vertex labelled `label`.
    pub fn index_of(&self, label: &str) -> Result<usize, MstError> {
        self.vertices
            .iter()
            .position(|v| v == label)
            .ok_or_else(|| MstError::UnknownLabel(label.to_string()))
    }

    /// Label of vertex `index`, if in range.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.vertices.get(index).map(String::as_str)
    }

    /// Resolve labels and build a validated [`Graph`].
    pub fn build(&self) -> Result<Graph, MstError> {
        for (i, v) in self.vertices.iter().enumerate() {
            if self.vertices[..i].contains(v) {
                return Err(MstError::DuplicateLabel(v.clone()));
            }
        }

        let edges = self
            .edges
            .iter()
            .map(|e| -> Result<Edge, MstError> {
                Ok(Edge::new(self.index_of(&e.from)?, self.index_of(&e.to)?, e.weight))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Graph::new(self.vertices.len(), edges)
    }
}
