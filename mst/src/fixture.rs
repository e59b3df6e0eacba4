//! The 8-vertex reference graph used as the regression fixture.
//!
//! Vertices are `0..8`; callers that want names conventionally label them
//! `A`..`H`.

use crate::graph::Graph;

pub const REFERENCE_VERTEX_COUNT: usize = 8;

/// `(source, target, weight)` in insertion order.
pub const REFERENCE_EDGES: &[(usize, usize, u32)] = &[
    (0, 1, 14), // A-B
    (0, 5, 21), // A-F
    (0, 7, 8),  // A-H
    (1, 2, 15), // B-C
    (1, 5, 13), // B-F
    (1, 7, 26), // B-H
    (2, 3, 12), // C-D
    (3, 4, 10), // D-E
    (3, 5, 14), // D-F
    (4, 5, 12), // E-F
    (4, 6, 14), // E-G
    (5, 6, 10), // F-G
    (6, 7, 7),  // G-H
    (2, 4, 33), // C-E
];

/// Weight of any minimum spanning tree of the reference graph.
pub const REFERENCE_MST_WEIGHT: u64 = 72;

pub fn reference_graph() -> Graph {
    Graph::from_triples(REFERENCE_VERTEX_COUNT, REFERENCE_EDGES)
        .expect("reference graph should be valid")
}
