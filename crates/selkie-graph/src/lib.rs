#![forbid(unsafe_code)]

//! Graph containers and graph algorithms used by `selkie-layout`.
//!
//! - [`Graph`] is the read-only query contract every algorithm works against.
//! - [`SparseGraph`] is the immutable implementation; [`OptimizedGraph`] layers degree and
//!   neighbor caches on top of it.
//! - [`alg`] holds the stateless algorithm library (components, geodesics, adjacency powers,
//!   contraction, shortest-path search with path counting).
//! - [`generators`] builds common graph families over `usize` nodes.

pub mod alg;
pub mod error;
pub mod generators;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{
    Edge, Graph, GraphComponents, NodeId, NodeKind, NodeMap, NodeSet, OptimizedGraph, SparseGraph,
};
