//! Kruskal's algorithm.

use log::{debug, trace};

use crate::graph::{by_weight, Edge, Graph};
use crate::tree::MstResult;
use crate::unionfind::UnionFind;

/// Minimum spanning tree (or forest) by Kruskal's algorithm.
///
/// Edges are visited in ascending weight; equal weights keep their insertion
/// order (stable sort). An edge is accepted when its endpoints lie in
/// different components. The scan stops once `vertex_count - 1` edges are
/// accepted, so on a disconnected graph every edge is examined and a minimum
/// spanning forest with fewer edges is returned.
///
/// Time: O(E log E) for the sort + O(E α(V)) for union-find.
pub fn kruskal(graph: &Graph) -> MstResult {
    let n = graph.vertex_count();
    let target = n - 1;

    let mut sorted: Vec<Edge> = graph.edges().to_vec();
    sorted.sort_by_key(by_weight);

    let mut uf = UnionFind::new(n);
    let mut result = MstResult::with_capacity(target);

    for edge in sorted {
        if result.len() == target {
            break;
        }
        if uf.union(edge.source, edge.target) {
            debug!(
                "kruskal: accept {}-{} ({})",
                edge.source, edge.target, edge.weight
            );
            result.push(edge);
        } else {
            trace!(
                "kruskal: reject {}-{} ({}), closes a cycle",
                edge.source,
                edge.target,
                edge.weight
            );
        }
    }

    debug!(
        "kruskal: {} edges, total weight {} on {} vertices",
        result.len(),
        result.total_weight,
        n
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle() {
        // 0-1 (1), 1-2 (2), 0-2 (3)
        let g = Graph::from_triples(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(r.total_weight, 3);
        assert_eq!(r.edges, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
    }

    #[test]
    fn equal_weights_keep_insertion_order() {
        let g = Graph::from_triples(4, &[(2, 3, 5), (0, 1, 5), (1, 2, 5), (0, 3, 5)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(
            r.edges,
            vec![Edge::new(2, 3, 5), Edge::new(0, 1, 5), Edge::new(1, 2, 5)]
        );
    }

    #[test]
    fn single_vertex() {
        let g = Graph::new(1, Vec::new()).unwrap();
        let r = kruskal(&g);
        assert!(r.is_empty());
        assert_eq!(r.total_weight, 0);
        assert!(r.is_spanning_tree(1));
    }

    #[test]
    fn disconnected_gives_forest() {
        // {0,1,2} and {3,4}, vertex 5 isolated
        let g = Graph::from_triples(
            6,
            &[(0, 1, 4), (1, 2, 1), (0, 2, 2), (3, 4, 7)],
        )
        .unwrap();
        let r = kruskal(&g);
        assert_eq!(r.len(), 3);
        assert_eq!(r.total_weight, 1 + 2 + 7);
        assert!(!r.is_spanning_tree(6));
        assert!(r.is_acyclic(6));
    }

    #[test]
    fn parallel_edges_pick_lighter() {
        let g = Graph::from_triples(2, &[(0, 1, 9), (1, 0, 3)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(r.edges, vec![Edge::new(1, 0, 3)]);
    }

    #[test]
    fn zero_weight_edges() {
        let g = Graph::from_triples(3, &[(0, 1, 0), (1, 2, 0), (0, 2, 0)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(r.len(), 2);
        assert_eq!(r.total_weight, 0);
    }
}
