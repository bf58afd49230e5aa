use super::adj_cache::AdjCache;
use super::{Edge, EdgeSlot, Graph, GraphComponents, NodeId, NodeSet};
use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Immutable graph backed by an edge index, CSR incidence lists, and a node×node edge table.
///
/// Everything is computed once in the constructor; all queries take `&self`, so a built graph can
/// be shared across threads and read without synchronization.
#[derive(Debug, Clone)]
pub struct SparseGraph<V: NodeId> {
    directed: bool,
    nodes: NodeSet<V>,

    edges: Vec<Edge<V>>,
    endpoints: Vec<(usize, usize)>,
    weights: Option<Vec<f64>>,
    edge_index: HashMap<EdgeSlot, usize>,

    adjacency: AdjCache,
    // (v, w) -> indices of the edges leading from v to w. Undirected edges fill both cells.
    edge_table: HashMap<(usize, usize), Vec<usize>>,

    components: GraphComponents<V>,
}

impl<V: NodeId> SparseGraph<V> {
    /// Builds a graph over `nodes`. Every edge endpoint must be one of `nodes`.
    ///
    /// Duplicate edges (same endpoints and key; either orientation when undirected) are dropped,
    /// keeping the first occurrence.
    pub fn new<I, E>(directed: bool, nodes: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        let nodes: NodeSet<V> = nodes.into_iter().collect();
        let edges: Vec<(Edge<V>, Option<f64>)> = edges.into_iter().map(|e| (e, None)).collect();
        validate(&nodes, &edges)?;
        Ok(Self::assemble(directed, nodes, edges))
    }

    /// Builds a weighted graph. Weights must be finite and non-negative.
    pub fn weighted<I, E>(directed: bool, nodes: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (Edge<V>, f64)>,
    {
        let nodes: NodeSet<V> = nodes.into_iter().collect();
        let edges: Vec<(Edge<V>, Option<f64>)> =
            edges.into_iter().map(|(e, w)| (e, Some(w))).collect();
        validate(&nodes, &edges)?;
        Ok(Self::assemble(directed, nodes, edges))
    }

    /// Builds a graph whose node set is exactly the set of edge endpoints.
    pub fn from_edges<E>(directed: bool, edges: E) -> Self
    where
        E: IntoIterator<Item = Edge<V>>,
    {
        let edges: Vec<(Edge<V>, Option<f64>)> = edges.into_iter().map(|e| (e, None)).collect();
        let mut nodes: NodeSet<V> = NodeSet::default();
        for (e, _) in &edges {
            nodes.insert(e.source.clone());
            nodes.insert(e.target.clone());
        }
        Self::assemble(directed, nodes, edges)
    }

    /// Builds from parts that are already known to be consistent.
    pub(crate) fn from_parts(
        directed: bool,
        nodes: NodeSet<V>,
        edges: Vec<(Edge<V>, Option<f64>)>,
    ) -> Self {
        Self::assemble(directed, nodes, edges)
    }

    fn assemble(directed: bool, nodes: NodeSet<V>, input: Vec<(Edge<V>, Option<f64>)>) -> Self {
        let weighted = input.iter().any(|(_, w)| w.is_some());

        let mut edges: Vec<Edge<V>> = Vec::with_capacity(input.len());
        let mut endpoints: Vec<(usize, usize)> = Vec::with_capacity(input.len());
        let mut weights: Option<Vec<f64>> = weighted.then(|| Vec::with_capacity(input.len()));
        let mut edge_index: HashMap<EdgeSlot, usize> = HashMap::default();
        edge_index.reserve(input.len());

        for (edge, weight) in input {
            let Some(v) = nodes.get_index_of(&edge.source) else {
                debug_assert!(false, "edge source missing from node set");
                continue;
            };
            let Some(w) = nodes.get_index_of(&edge.target) else {
                debug_assert!(false, "edge target missing from node set");
                continue;
            };
            let slot = EdgeSlot::canonical(directed, v, w, edge.key);
            if edge_index.contains_key(&slot) {
                continue;
            }
            edge_index.insert(slot, edges.len());
            endpoints.push((v, w));
            if let Some(ws) = weights.as_mut() {
                ws.push(weight.unwrap_or(1.0));
            }
            edges.push(edge);
        }

        let adjacency = AdjCache::build(directed, nodes.len(), &endpoints);

        let mut edge_table: HashMap<(usize, usize), Vec<usize>> = HashMap::default();
        for (e_ix, &(v, w)) in endpoints.iter().enumerate() {
            edge_table.entry((v, w)).or_default().push(e_ix);
            if !directed && v != w {
                edge_table.entry((w, v)).or_default().push(e_ix);
            }
        }

        let components = GraphComponents::from_indexed(
            directed,
            &nodes,
            &edges,
            &endpoints,
            weights.as_deref(),
        );

        tracing::trace!(
            directed,
            nodes = nodes.len(),
            edges = edges.len(),
            components = components.len(),
            "built sparse graph"
        );

        Self {
            directed,
            nodes,
            edges,
            endpoints,
            weights,
            edge_index,
            adjacency,
            edge_table,
            components,
        }
    }

    pub(crate) fn node_ix(&self, v: &V) -> Option<usize> {
        self.nodes.get_index_of(v)
    }

    pub(crate) fn node_at(&self, ix: usize) -> &V {
        &self.nodes[ix]
    }

    /// Position of `edge` in [`Graph::edges`], honoring undirected orientation.
    pub fn edge_index_of(&self, edge: &Edge<V>) -> Option<usize> {
        let v = self.node_ix(&edge.source)?;
        let w = self.node_ix(&edge.target)?;
        let slot = EdgeSlot::canonical(self.directed, v, w, edge.key);
        self.edge_index.get(&slot).copied()
    }

    /// All edges leading from `x` to `y` (either direction when undirected). Parallel edges are
    /// listed individually.
    pub fn edges_between(&self, x: &V, y: &V) -> Vec<&Edge<V>> {
        let (Some(v), Some(w)) = (self.node_ix(x), self.node_ix(y)) else {
            return Vec::new();
        };
        self.edge_table
            .get(&(v, w))
            .map(|ixs| ixs.iter().map(|&e| &self.edges[e]).collect())
            .unwrap_or_default()
    }

    pub(crate) fn out_neighbor_ixs(&self, v_ix: usize) -> Vec<usize> {
        if !self.directed {
            return self.neighbor_ixs(v_ix);
        }
        dedup_ixs(
            self.adjacency
                .out_edges(v_ix)
                .iter()
                .map(|&e| self.endpoints[e].1),
        )
    }

    pub(crate) fn in_neighbor_ixs(&self, v_ix: usize) -> Vec<usize> {
        if !self.directed {
            return self.neighbor_ixs(v_ix);
        }
        dedup_ixs(
            self.adjacency
                .in_edges(v_ix)
                .iter()
                .map(|&e| self.endpoints[e].0),
        )
    }

    pub(crate) fn neighbor_ixs(&self, v_ix: usize) -> Vec<usize> {
        if self.directed {
            let outs = self
                .adjacency
                .out_edges(v_ix)
                .iter()
                .map(|&e| self.endpoints[e].1);
            let ins = self
                .adjacency
                .in_edges(v_ix)
                .iter()
                .map(|&e| self.endpoints[e].0);
            dedup_ixs(outs.chain(ins))
        } else {
            dedup_ixs(self.adjacency.out_edges(v_ix).iter().map(|&e| {
                let (a, b) = self.endpoints[e];
                if a == v_ix { b } else { a }
            }))
        }
    }

    pub(crate) fn out_degree_ix(&self, v_ix: usize) -> usize {
        if self.directed {
            self.adjacency.out_edges(v_ix).len()
        } else {
            self.degree_ix(v_ix)
        }
    }

    pub(crate) fn in_degree_ix(&self, v_ix: usize) -> usize {
        if self.directed {
            self.adjacency.in_edges(v_ix).len()
        } else {
            self.degree_ix(v_ix)
        }
    }

    pub(crate) fn degree_ix(&self, v_ix: usize) -> usize {
        if self.directed {
            self.adjacency.out_edges(v_ix).len() + self.adjacency.in_edges(v_ix).len()
        } else {
            self.adjacency
                .out_edges(v_ix)
                .iter()
                .map(|&e| {
                    let (a, b) = self.endpoints[e];
                    if a == b { 2 } else { 1 }
                })
                .sum()
        }
    }

    fn to_nodes(&self, ixs: Vec<usize>) -> Vec<&V> {
        ixs.into_iter().map(|ix| &self.nodes[ix]).collect()
    }
}

impl<V: NodeId> Graph<V> for SparseGraph<V> {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn nodes(&self) -> &NodeSet<V> {
        &self.nodes
    }

    fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    fn adjacent(&self, x: &V, y: &V) -> bool {
        let (Some(v), Some(w)) = (self.node_ix(x), self.node_ix(y)) else {
            return false;
        };
        self.edge_table.contains_key(&(v, w))
            || (self.directed && self.edge_table.contains_key(&(w, v)))
    }

    fn has_edge(&self, x: &V, y: &V) -> bool {
        let (Some(v), Some(w)) = (self.node_ix(x), self.node_ix(y)) else {
            return false;
        };
        self.edge_table.contains_key(&(v, w))
    }

    fn edges_adjacent_to(&self, x: &V) -> Vec<&Edge<V>> {
        let Some(v) = self.node_ix(x) else {
            return Vec::new();
        };
        let mut out: Vec<&Edge<V>> = self
            .adjacency
            .out_edges(v)
            .iter()
            .map(|&e| &self.edges[e])
            .collect();
        if self.directed {
            for &e in self.adjacency.in_edges(v) {
                let (a, b) = self.endpoints[e];
                // Self-loops already came through the out-list.
                if a != b {
                    out.push(&self.edges[e]);
                }
            }
        }
        out
    }

    fn out_neighbors(&self, x: &V) -> Vec<&V> {
        match self.node_ix(x) {
            Some(v) => self.to_nodes(self.out_neighbor_ixs(v)),
            None => Vec::new(),
        }
    }

    fn in_neighbors(&self, x: &V) -> Vec<&V> {
        match self.node_ix(x) {
            Some(v) => self.to_nodes(self.in_neighbor_ixs(v)),
            None => Vec::new(),
        }
    }

    fn neighbors(&self, x: &V) -> Vec<&V> {
        match self.node_ix(x) {
            Some(v) => self.to_nodes(self.neighbor_ixs(v)),
            None => Vec::new(),
        }
    }

    fn out_degree(&self, x: &V) -> usize {
        self.node_ix(x).map_or(0, |v| self.out_degree_ix(v))
    }

    fn in_degree(&self, x: &V) -> usize {
        self.node_ix(x).map_or(0, |v| self.in_degree_ix(v))
    }

    fn degree(&self, x: &V) -> usize {
        self.node_ix(x).map_or(0, |v| self.degree_ix(v))
    }

    fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    fn edge_weight(&self, edge: &Edge<V>) -> Option<f64> {
        let weights = self.weights.as_ref()?;
        let ix = self.edge_index_of(edge)?;
        weights.get(ix).copied()
    }

    fn components(&self) -> Option<&GraphComponents<V>> {
        Some(&self.components)
    }
}

fn validate<V: NodeId>(nodes: &NodeSet<V>, edges: &[(Edge<V>, Option<f64>)]) -> Result<()> {
    for (edge, weight) in edges {
        for end in [&edge.source, &edge.target] {
            if !nodes.contains(end) {
                return Err(Error::UnknownNode {
                    node: format!("{end:?}"),
                });
            }
        }
        if let Some(w) = weight {
            if !w.is_finite() || *w < 0.0 {
                return Err(Error::InvalidParameter {
                    name: "weight",
                    reason: format!("edge {edge} has weight {w}"),
                });
            }
        }
    }
    Ok(())
}

/// Keeps the first occurrence of each index, preserving order.
fn dedup_ixs(ixs: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut seen: HashSet<usize> = HashSet::default();
    ixs.filter(|ix| seen.insert(*ix)).collect()
}
