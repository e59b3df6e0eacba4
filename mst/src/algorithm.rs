use std::fmt;
use std::str::FromStr;

use crate::error::MstError;
use crate::graph::Graph;
use crate::kruskal::kruskal;
use crate::prim::prim;
use crate::tree::MstResult;

/// Which spanning-tree algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Kruskal,
    Prim { start: usize },
}

impl Algorithm {
    pub fn run(&self, graph: &Graph) -> Result<MstResult, MstError> {
        match *self {
            Algorithm::Kruskal => Ok(kruskal(graph)),
            Algorithm::Prim { start } => prim(graph, start),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim { .. } => "prim",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Kruskal => write!(f, "kruskal"),
            Algorithm::Prim { start } => write!(f, "prim (from {start})"),
        }
    }
}

/// Parses `"kruskal"` or `"prim"`, case-insensitive. Prim starts at vertex 0.
impl FromStr for Algorithm {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim { start: 0 }),
            _ => Err(MstError::UnknownAlgorithm(s.to_string())),
        }
    }
}
