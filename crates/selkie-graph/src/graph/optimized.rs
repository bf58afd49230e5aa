use super::{Edge, Graph, GraphComponents, NodeId, NodeSet, SparseGraph};
use crate::error::Result;
use rustc_hash::FxBuildHasher;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Degree class of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Degree 0.
    Isolate,
    /// Degree 1.
    Leaf,
    /// Degree 2.
    Connector,
    /// Degree 3 or more.
    Core,
}

impl NodeKind {
    pub fn from_degree(degree: usize) -> Self {
        match degree {
            0 => Self::Isolate,
            1 => Self::Leaf,
            2 => Self::Connector,
            _ => Self::Core,
        }
    }
}

/// A [`SparseGraph`] that additionally caches degrees, degree classes, and full neighbor sets.
///
/// The caches trade memory for O(1) `adjacent` / `degree` answers and allocation-light neighbor
/// queries. Query semantics are exactly those of the wrapped `SparseGraph`.
#[derive(Debug, Clone)]
pub struct OptimizedGraph<V: NodeId> {
    base: SparseGraph<V>,

    degrees: Vec<usize>,
    out_degrees: Vec<usize>,
    in_degrees: Vec<usize>,
    kinds: Vec<NodeKind>,

    neighbors: Vec<Vec<usize>>,
    out_neighbors: Vec<Vec<usize>>,
    in_neighbors: Vec<Vec<usize>>,
    adjacent_pairs: HashSet<(usize, usize)>,
    adjacent_leaves: Vec<Vec<usize>>,

    isolates: Vec<usize>,
    leaves: Vec<usize>,
    connectors: Vec<usize>,
    cores: Vec<usize>,
}

impl<V: NodeId> OptimizedGraph<V> {
    pub fn new<I, E>(directed: bool, nodes: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        Ok(Self::from_sparse(SparseGraph::new(directed, nodes, edges)?))
    }

    pub fn weighted<I, E>(directed: bool, nodes: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (Edge<V>, f64)>,
    {
        Ok(Self::from_sparse(SparseGraph::weighted(directed, nodes, edges)?))
    }

    /// Builds the caches in a single pass over the nodes of `base`.
    pub fn from_sparse(base: SparseGraph<V>) -> Self {
        let n = base.node_count();
        let mut degrees = Vec::with_capacity(n);
        let mut out_degrees = Vec::with_capacity(n);
        let mut in_degrees = Vec::with_capacity(n);
        let mut kinds = Vec::with_capacity(n);
        let mut neighbors = Vec::with_capacity(n);
        let mut out_neighbors = Vec::with_capacity(n);
        let mut in_neighbors = Vec::with_capacity(n);
        let mut adjacent_pairs: HashSet<(usize, usize)> = HashSet::default();
        adjacent_pairs.reserve(base.edge_count().saturating_mul(2));

        for v in 0..n {
            let degree = base.degree_ix(v);
            degrees.push(degree);
            out_degrees.push(base.out_degree_ix(v));
            in_degrees.push(base.in_degree_ix(v));
            kinds.push(NodeKind::from_degree(degree));

            let nbrs = base.neighbor_ixs(v);
            adjacent_pairs.extend(nbrs.iter().map(|&w| (v, w)));
            neighbors.push(nbrs);
            if base.is_directed() {
                out_neighbors.push(base.out_neighbor_ixs(v));
                in_neighbors.push(base.in_neighbor_ixs(v));
            }
        }

        let adjacent_leaves: Vec<Vec<usize>> = neighbors
            .iter()
            .map(|nbrs| {
                nbrs.iter()
                    .copied()
                    .filter(|&w| degrees[w] == 1)
                    .collect()
            })
            .collect();

        let of_kind = |kind: NodeKind| -> Vec<usize> {
            kinds
                .iter()
                .enumerate()
                .filter(|(_, k)| **k == kind)
                .map(|(ix, _)| ix)
                .collect()
        };
        let isolates = of_kind(NodeKind::Isolate);
        let leaves = of_kind(NodeKind::Leaf);
        let connectors = of_kind(NodeKind::Connector);
        let cores = of_kind(NodeKind::Core);

        tracing::trace!(
            isolates = isolates.len(),
            leaves = leaves.len(),
            connectors = connectors.len(),
            cores = cores.len(),
            "classified nodes by degree"
        );

        Self {
            base,
            degrees,
            out_degrees,
            in_degrees,
            kinds,
            neighbors,
            out_neighbors,
            in_neighbors,
            adjacent_pairs,
            adjacent_leaves,
            isolates,
            leaves,
            connectors,
            cores,
        }
    }

    pub fn as_sparse(&self) -> &SparseGraph<V> {
        &self.base
    }

    pub fn into_sparse(self) -> SparseGraph<V> {
        self.base
    }

    pub fn node_kind(&self, v: &V) -> Option<NodeKind> {
        self.base.node_ix(v).map(|ix| self.kinds[ix])
    }

    pub fn isolates(&self) -> Vec<&V> {
        self.to_nodes(&self.isolates)
    }

    pub fn leaves(&self) -> Vec<&V> {
        self.to_nodes(&self.leaves)
    }

    pub fn connectors(&self) -> Vec<&V> {
        self.to_nodes(&self.connectors)
    }

    pub fn cores(&self) -> Vec<&V> {
        self.to_nodes(&self.cores)
    }

    /// Neighbors of `v` whose degree is exactly 1.
    pub fn adjacent_leaves(&self, v: &V) -> Vec<&V> {
        match self.base.node_ix(v) {
            Some(ix) => self.to_nodes(&self.adjacent_leaves[ix]),
            None => Vec::new(),
        }
    }

    fn to_nodes(&self, ixs: &[usize]) -> Vec<&V> {
        ixs.iter().map(|&ix| self.base.node_at(ix)).collect()
    }
}

impl<V: NodeId> Graph<V> for OptimizedGraph<V> {
    fn is_directed(&self) -> bool {
        self.base.is_directed()
    }

    fn nodes(&self) -> &NodeSet<V> {
        self.base.nodes()
    }

    fn edges(&self) -> &[Edge<V>] {
        self.base.edges()
    }

    fn adjacent(&self, x: &V, y: &V) -> bool {
        let (Some(v), Some(w)) = (self.base.node_ix(x), self.base.node_ix(y)) else {
            return false;
        };
        self.adjacent_pairs.contains(&(v, w))
    }

    fn has_edge(&self, x: &V, y: &V) -> bool {
        self.base.has_edge(x, y)
    }

    fn edges_adjacent_to(&self, x: &V) -> Vec<&Edge<V>> {
        self.base.edges_adjacent_to(x)
    }

    fn out_neighbors(&self, x: &V) -> Vec<&V> {
        let Some(v) = self.base.node_ix(x) else {
            return Vec::new();
        };
        if self.base.is_directed() {
            self.to_nodes(&self.out_neighbors[v])
        } else {
            self.to_nodes(&self.neighbors[v])
        }
    }

    fn in_neighbors(&self, x: &V) -> Vec<&V> {
        let Some(v) = self.base.node_ix(x) else {
            return Vec::new();
        };
        if self.base.is_directed() {
            self.to_nodes(&self.in_neighbors[v])
        } else {
            self.to_nodes(&self.neighbors[v])
        }
    }

    fn neighbors(&self, x: &V) -> Vec<&V> {
        match self.base.node_ix(x) {
            Some(v) => self.to_nodes(&self.neighbors[v]),
            None => Vec::new(),
        }
    }

    fn out_degree(&self, x: &V) -> usize {
        self.base.node_ix(x).map_or(0, |v| self.out_degrees[v])
    }

    fn in_degree(&self, x: &V) -> usize {
        self.base.node_ix(x).map_or(0, |v| self.in_degrees[v])
    }

    fn degree(&self, x: &V) -> usize {
        self.base.node_ix(x).map_or(0, |v| self.degrees[v])
    }

    fn is_weighted(&self) -> bool {
        self.base.is_weighted()
    }

    fn edge_weight(&self, edge: &Edge<V>) -> Option<f64> {
        self.base.edge_weight(edge)
    }

    fn components(&self) -> Option<&GraphComponents<V>> {
        self.base.components()
    }

    fn core_nodes(&self) -> Vec<&V> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| matches!(k, NodeKind::Connector | NodeKind::Core))
            .map(|(ix, _)| self.base.node_at(ix))
            .collect()
    }
}
