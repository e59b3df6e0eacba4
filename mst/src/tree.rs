use crate::graph::Edge;
use crate::unionfind::UnionFind;

/// Edges picked by a spanning-tree algorithm, in the order they were picked,
/// and their summed weight.
///
/// On a disconnected graph this holds fewer than `vertex_count - 1` edges.
/// That is a valid result, not an error; use [`MstResult::is_spanning_tree`]
/// to tell the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstResult {
    pub edges: Vec<Edge>,
    pub total_weight: u64,
}

impl MstResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            total_weight: 0,
        }
    }

    pub(crate) fn push(&mut self, edge: Edge) {
        self.total_weight += u64::from(edge.weight);
        self.edges.push(edge);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the edges span all `vertex_count` vertices.
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count
    }

    /// Replay the edges through a fresh union-find and report whether any of
    /// them closes a cycle.
    pub fn is_acyclic(&self, vertex_count: usize) -> bool {
        let mut uf = UnionFind::new(vertex_count);
        self.edges.iter().all(|e| uf.union(e.source, e.target))
    }
}
