//! Undirected weighted graph over integer vertex indices.

use crate::error::MstError;

/// An undirected edge. `(u, v, w)` and `(v, u, w)` describe the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: u32,
}

impl Edge {
    pub const fn new(source: usize, target: usize, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Whether `vertex` is one of the two endpoints.
    #[inline]
    pub fn touches(&self, vertex: usize) -> bool {
        self.source == vertex || self.target == vertex
    }

    /// The endpoint opposite `vertex`. `vertex` must be an endpoint.
    #[inline]
    pub fn other(&self, vertex: usize) -> usize {
        debug_assert!(self.touches(vertex));
        if self.source == vertex {
            self.target
        } else {
            self.source
        }
    }
}

/// Ordering key shared by Kruskal's sort and Prim's frontier.
#[inline]
pub fn by_weight(edge: &Edge) -> u32 {
    edge.weight
}

/// Immutable graph with `vertex_count` vertices and an edge list kept in
/// insertion order. Incident edge lists are built once at construction.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    incidence: Vec<Vec<usize>>,
}

impl Graph {
    /// Validate `edges` against `vertex_count` and build the graph.
    ///
    /// Fails with [`MstError::EmptyGraph`] when `vertex_count` is zero and with
    /// [`MstError::InvalidEdge`] on the first edge that has an out-of-range
    /// endpoint or is a self-loop.
    pub fn new<I>(vertex_count: usize, edges: I) -> Result<Self, MstError>
    where
        I: IntoIterator<Item = Edge>,
    {
        if vertex_count == 0 {
            return Err(MstError::EmptyGraph);
        }

        let edges: Vec<Edge> = edges.into_iter().collect();
        let mut incidence = vec![Vec::new(); vertex_count];

        for (index, edge) in edges.iter().enumerate() {
            if edge.source >= vertex_count
                || edge.target >= vertex_count
                || edge.source == edge.target
            {
                return Err(MstError::InvalidEdge {
                    index,
                    from: edge.source,
                    to: edge.target,
                    vertex_count,
                });
            }
            incidence[edge.source].push(index);
            incidence[edge.target].push(index);
        }

        Ok(Self {
            vertex_count,
            edges,
            incidence,
        })
    }

    /// Convenience constructor from `(source, target, weight)` triples.
    pub fn from_triples(
        vertex_count: usize,
        triples: &[(usize, usize, u32)],
    ) -> Result<Self, MstError> {
        Self::new(
            vertex_count,
            triples.iter().map(|&(s, t, w)| Edge::new(s, t, w)),
        )
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges, in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges touching `vertex`, in insertion order.
    pub fn incident(&self, vertex: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.incidence[vertex].iter().map(move |&i| &self.edges[i])
    }

    /// Indices into [`Graph::edges`] of the edges touching `vertex`.
    #[inline]
    pub fn incident_ids(&self, vertex: usize) -> &[usize] {
        &self.incidence[vertex]
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), MstError> {
        if vertex >= self.vertex_count {
            return Err(MstError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }
}
