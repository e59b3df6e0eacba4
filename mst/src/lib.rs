//! Minimum spanning trees over small undirected graphs with integer weights.
//!
//! ```
//! use mst::{kruskal, prim, Graph};
//!
//! let g = Graph::from_triples(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]).unwrap();
//! assert_eq!(kruskal(&g).total_weight, 3);
//! assert_eq!(prim(&g, 2).unwrap().total_weight, 3);
//! ```

pub mod algorithm;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod fixture;
pub mod graph;
pub mod kruskal;
pub mod prim;
pub mod tree;
pub mod unionfind;

pub use algorithm::Algorithm;
pub use error::MstError;
pub use graph::{Edge, Graph};
pub use kruskal::kruskal;
pub use prim::prim;
pub use tree::MstResult;
pub use unionfind::UnionFind;
