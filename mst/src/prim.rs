//! Prim's algorithm with a lazy frontier.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::MstError;
use crate::graph::{by_weight, Graph};
use crate::tree::MstResult;

/// Min-heap of candidate edges keyed by `(weight, push sequence)`.
///
/// The sequence number makes equal weights pop in push order, so the
/// selection order is reproducible. Entries whose endpoints both joined the
/// tree after they were pushed stay in the heap and are skipped on pop.
struct Frontier<'g> {
    graph: &'g Graph,
    heap: BinaryHeap<Reverse<(u32, u64, usize)>>,
    seq: u64,
}

impl<'g> Frontier<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            heap: BinaryHeap::with_capacity(graph.edge_count()),
            seq: 0,
        }
    }

    /// Push every edge at `vertex` whose far endpoint is not yet in the tree.
    fn extend_from(&mut self, vertex: usize, in_tree: &[bool]) {
        for &id in self.graph.incident_ids(vertex) {
            let edge = &self.graph.edges()[id];
            if !in_tree[edge.other(vertex)] {
                self.heap.push(Reverse((by_weight(edge), self.seq, id)));
                self.seq += 1;
            }
        }
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, _, id))| id)
    }
}

/// Minimum spanning tree by Prim's algorithm, grown from `start`.
///
/// Returns [`MstError::InvalidVertex`] if `start` is out of range. If the
/// frontier runs dry before `vertex_count - 1` edges are picked, the graph is
/// disconnected and the result covers only the component containing
/// `start`.
///
/// The total weight always matches [`kruskal`](crate::kruskal::kruskal) on the
/// same component; the chosen edges may differ when weights tie.
///
/// Time: O(E log E).
pub fn prim(graph: &Graph, start: usize) -> Result<MstResult, MstError> {
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let target = n - 1;

    let mut in_tree = vec![false; n];
    in_tree[start] = true;

    let mut frontier = Frontier::new(graph);
    frontier.extend_from(start, &in_tree);

    let mut result = MstResult::with_capacity(target);

    while result.len() < target {
        let Some(id) = frontier.pop() else {
            break;
        };
        let edge = graph.edges()[id];

        if in_tree[edge.source] && in_tree[edge.target] {
            trace!(
                "prim: skip stale {}-{} ({})",
                edge.source,
                edge.target,
                edge.weight
            );
            continue;
        }

        let reached = if in_tree[edge.source] {
            edge.target
        } else {
            edge.source
        };
        debug!(
            "prim: accept {}-{} ({}), reached {}",
            edge.source, edge.target, edge.weight, reached
        );
        result.push(edge);
        in_tree[reached] = true;
        frontier.extend_from(reached, &in_tree);
    }

    debug!(
        "prim: {} edges, total weight {} from start {} on {} vertices",
        result.len(),
        result.total_weight,
        start,
        n
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn triangle() {
        let g = Graph::from_triples(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]).unwrap();
        let r = prim(&g, 0).unwrap();
        assert_eq!(r.total_weight, 3);
        assert_eq!(r.edges, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
    }

    #[test]
    fn selection_order_follows_growth_not_weight() {
        // Path 0 -5- 1 -1- 2: from 0 the heavier edge must come first.
        let g = Graph::from_triples(3, &[(0, 1, 5), (1, 2, 1)]).unwrap();
        let r = prim(&g, 0).unwrap();
        assert_eq!(r.edges, vec![Edge::new(0, 1, 5), Edge::new(1, 2, 1)]);
        let r = prim(&g, 2).unwrap();
        assert_eq!(r.edges, vec![Edge::new(1, 2, 1), Edge::new(0, 1, 5)]);
    }

    #[test]
    fn ties_pop_in_push_order() {
        // Star around 0 with equal weights: leaves are reached in edge order.
        let g = Graph::from_triples(4, &[(0, 3, 2), (1, 0, 2), (0, 2, 2)]).unwrap();
        let r = prim(&g, 0).unwrap();
        assert_eq!(
            r.edges,
            vec![Edge::new(0, 3, 2), Edge::new(1, 0, 2), Edge::new(0, 2, 2)]
        );
    }

    #[test]
    fn stale_entries_are_skipped() {
        // Square 0-1-2-3 with diagonal; after 0,1,2 join, 0-2 is stale.
        let g = Graph::from_triples(
            4,
            &[(0, 1, 1), (1, 2, 1), (0, 2, 2), (2, 3, 3)],
        )
        .unwrap();
        let r = prim(&g, 0).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.total_weight, 5);
        assert!(r.is_acyclic(4));
    }

    #[test]
    fn start_out_of_range() {
        let g = Graph::from_triples(3, &[(0, 1, 1)]).unwrap();
        assert_eq!(
            prim(&g, 3).unwrap_err(),
            MstError::InvalidVertex {
                vertex: 3,
                vertex_count: 3,
            }
        );
    }

    #[test]
    fn disconnected_covers_start_component_only() {
        let g = Graph::from_triples(5, &[(0, 1, 4), (1, 2, 1), (3, 4, 7)]).unwrap();
        let r = prim(&g, 0).unwrap();
        assert_eq!(r.len(), 2);
        assert_eq!(r.total_weight, 5);

        let r = prim(&g, 4).unwrap();
        assert_eq!(r.edges, vec![Edge::new(3, 4, 7)]);
    }

    #[test]
    fn isolated_start() {
        let g = Graph::from_triples(3, &[(1, 2, 1)]).unwrap();
        let r = prim(&g, 0).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.total_weight, 0);
    }

    #[test]
    fn single_vertex() {
        let g = Graph::new(1, Vec::new()).unwrap();
        let r = prim(&g, 0).unwrap();
        assert!(r.is_spanning_tree(1));
    }
}
