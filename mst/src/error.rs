use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MstError {
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("edge {index} ({from}-{to}) is invalid for a graph of {vertex_count} vertices")]
    InvalidEdge {
        index: usize,
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("unknown algorithm '{0}' (expected 'kruskal' or 'prim')")]
    UnknownAlgorithm(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown vertex label '{0}'")]
    UnknownLabel(String),

    #[error("vertex label '{0}' is defined more than once")]
    DuplicateLabel(String),
}
