//! # tarjan
//!
//! Strongly-connected components of directed graphs, via Tarjan's
//! single-pass depth-first algorithm.
//!
//! A strongly-connected component (SCC) is a maximal set of nodes in which
//! every node can reach every other node along directed edges. This crate
//! partitions a graph into its SCCs in O(V + E) time, with a fixed,
//! reproducible output order for a fixed input order.
//!
//! Two ways in:
//! - **Label API**: hand [`strongly_connected`] an edge list over any
//!   hashable node type (`&str` module names, ids, ...). An explicit node
//!   list — validated against the edges — goes through
//!   [`strongly_connected_from_nodes`].
//! - **Index API**: implement [`Graph`] or [`GraphRef`] for a
//!   `usize`-indexed graph and call [`strongly_connected_graph`] /
//!   [`strongly_connected_graph_ref`]. With the `petgraph` feature, a
//!   `petgraph::Graph` works directly.
//!
//! ```
//! use tarjan::strongly_connected;
//!
//! // A 2-cycle feeding a sink: two components.
//! let scc = strongly_connected(&[("a", "b"), ("b", "a"), ("b", "c")]);
//! assert_eq!(scc.len(), 2);
//! ```
//!
//! The traversal is iterative (explicit frame stack), so recursion depth is
//! never a concern, even for chain-shaped graphs with millions of nodes.

pub mod graph;
pub mod scc;

pub use graph::{Graph, GraphRef};
pub use scc::{
    strongly_connected, strongly_connected_from_nodes, strongly_connected_graph,
    strongly_connected_graph_ref, InvalidNodeSet,
};
