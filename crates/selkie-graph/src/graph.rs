//! The read-only graph contract plus its two concrete implementations.
//!
//! [`SparseGraph`] builds an edge index, CSR incidence lists, a node×node edge table, and a
//! [`GraphComponents`] snapshot once at construction. [`OptimizedGraph`] wraps it and additionally
//! caches degrees, degree classes, and neighbor sets so the hot queries are O(1).
//!
//! Lookups for nodes that are not part of the graph never panic: an absent node has degree 0, no
//! neighbors, no incident edges, and is adjacent to nothing.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use std::fmt;
use std::hash::Hash;

mod adj_cache;
mod components;
mod edge;
mod optimized;
mod sparse;

pub use components::GraphComponents;
pub(crate) use components::DisjointSet;
pub use edge::Edge;
pub(crate) use edge::EdgeSlot;
pub use optimized::{NodeKind, OptimizedGraph};
pub use sparse::SparseGraph;

/// Anything usable as a node identity. The graph never inspects node content.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug {}

/// Insertion-ordered node set. The position of a node is its dense index.
pub type NodeSet<V> = IndexSet<V, FxBuildHasher>;

/// Insertion-ordered map keyed by node.
pub type NodeMap<V, T> = IndexMap<V, T, FxBuildHasher>;

pub trait Graph<V: NodeId> {
    fn is_directed(&self) -> bool;

    fn nodes(&self) -> &NodeSet<V>;

    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    fn contains(&self, v: &V) -> bool {
        self.nodes().contains(v)
    }

    fn edges(&self) -> &[Edge<V>];

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// True when an edge joins `x` and `y` in either direction; agrees with `neighbors(x)`.
    fn adjacent(&self, x: &V, y: &V) -> bool;

    /// Direction-sensitive variant of [`Graph::adjacent`]: is there an edge `x -> y`?
    /// Identical to `adjacent` for undirected graphs.
    fn has_edge(&self, x: &V, y: &V) -> bool;

    /// Edges incident to `x`. A self-loop is listed once.
    fn edges_adjacent_to(&self, x: &V) -> Vec<&Edge<V>>;

    fn out_neighbors(&self, x: &V) -> Vec<&V>;

    fn in_neighbors(&self, x: &V) -> Vec<&V>;

    /// Union of out- and in-neighbors, without duplicates.
    fn neighbors(&self, x: &V) -> Vec<&V>;

    fn out_degree(&self, x: &V) -> usize;

    fn in_degree(&self, x: &V) -> usize;

    /// Number of incident edge endpoints; a self-loop counts twice.
    ///
    /// For directed graphs this equals `in_degree + out_degree`. For undirected graphs the
    /// in/out views coincide with this value.
    fn degree(&self, x: &V) -> usize;

    fn is_weighted(&self) -> bool {
        false
    }

    /// Weight of `edge`, or `None` for unweighted graphs and unknown edges.
    fn edge_weight(&self, _edge: &Edge<V>) -> Option<f64> {
        None
    }

    /// Connected components cached at construction, if this graph keeps them.
    fn components(&self) -> Option<&GraphComponents<V>> {
        None
    }

    /// Nodes of degree at least 2, in node order.
    fn core_nodes(&self) -> Vec<&V> {
        self.nodes().iter().filter(|v| self.degree(v) >= 2).collect()
    }
}
