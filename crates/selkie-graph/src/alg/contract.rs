//! Node-set contraction: replace a subset `S` by a single node `r`.
//!
//! - Edges with no endpoint in `S` are kept as they are.
//! - Edges with exactly one endpoint in `S` are rerouted to `r`. Parallel results stay distinct by
//!   receiving the next free edge key for their endpoint pair.
//! - Edges with both endpoints in `S` collapse into one self-loop at `r`.

use crate::graph::{Edge, Graph, NodeId, NodeSet, SparseGraph};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Contracts `subset` to `replacement` in a plain edge list.
pub fn contract_edges<V: NodeId>(
    directed: bool,
    edges: &[Edge<V>],
    subset: &NodeSet<V>,
    replacement: &V,
) -> Vec<Edge<V>> {
    contract_weighted(
        directed,
        edges.iter().map(|e| (e.clone(), None)),
        subset,
        replacement,
    )
    .into_iter()
    .map(|(e, _)| e)
    .collect()
}

/// Merges every component that meets `subset` (or already holds `replacement`) into one component
/// containing `replacement` in place of the subset's nodes. The merged component takes the slot of
/// the first such component.
pub fn contract_components<V: NodeId>(
    components: &[NodeSet<V>],
    subset: &NodeSet<V>,
    replacement: &V,
) -> Vec<NodeSet<V>> {
    let mut out: Vec<NodeSet<V>> = Vec::with_capacity(components.len());
    let mut merged: NodeSet<V> = NodeSet::default();
    merged.insert(replacement.clone());
    let mut merged_at: Option<usize> = None;

    for c in components {
        let touched = c.contains(replacement) || c.iter().any(|v| subset.contains(v));
        if !touched {
            out.push(c.clone());
            continue;
        }
        if merged_at.is_none() {
            merged_at = Some(out.len());
            out.push(NodeSet::default());
        }
        merged.extend(c.iter().filter(|v| !subset.contains(*v)).cloned());
    }

    match merged_at {
        Some(at) => out[at] = merged,
        None => out.push(merged),
    }
    out
}

/// Contracted copy of `graph`. `replacement` takes the node position of the first subset member;
/// rerouted edges keep their weights and the collapsed loop keeps the weight of the first
/// internal edge.
pub fn contract<V, G>(graph: &G, subset: &NodeSet<V>, replacement: &V) -> SparseGraph<V>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let mut nodes: NodeSet<V> = NodeSet::default();
    for v in graph.nodes() {
        if subset.contains(v) {
            nodes.insert(replacement.clone());
        } else {
            nodes.insert(v.clone());
        }
    }
    nodes.insert(replacement.clone());

    let edges = contract_weighted(
        graph.is_directed(),
        graph.edges().iter().map(|e| (e.clone(), graph.edge_weight(e))),
        subset,
        replacement,
    );
    tracing::trace!(
        contracted = subset.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "contracted node set"
    );
    SparseGraph::from_parts(graph.is_directed(), nodes, edges)
}

fn contract_weighted<V, I>(
    directed: bool,
    edges: I,
    subset: &NodeSet<V>,
    replacement: &V,
) -> Vec<(Edge<V>, Option<f64>)>
where
    V: NodeId,
    I: IntoIterator<Item = (Edge<V>, Option<f64>)>,
{
    let edges: Vec<(Edge<V>, Option<f64>)> = edges.into_iter().collect();
    let mut keys = KeyAllocator::new(directed);
    for (e, _) in &edges {
        if !subset.contains(&e.source) && !subset.contains(&e.target) {
            keys.reserve(&e.source, &e.target, e.key);
        }
    }

    let mut out: Vec<(Edge<V>, Option<f64>)> = Vec::with_capacity(edges.len());
    let mut looped = false;
    for (e, weight) in edges {
        match (subset.contains(&e.source), subset.contains(&e.target)) {
            (false, false) => out.push((e, weight)),
            (true, true) => {
                if !looped {
                    looped = true;
                    let key = keys.next(replacement, replacement);
                    out.push((Edge::keyed(replacement.clone(), replacement.clone(), key), weight));
                }
            }
            (true, false) => {
                let key = keys.next(replacement, &e.target);
                out.push((Edge::keyed(replacement.clone(), e.target, key), weight));
            }
            (false, true) => {
                let key = keys.next(&e.source, replacement);
                out.push((Edge::keyed(e.source, replacement.clone(), key), weight));
            }
        }
    }
    out
}

/// Hands out edge keys that are unique per endpoint pair.
struct KeyAllocator<V: NodeId> {
    directed: bool,
    used: HashMap<(V, V), Vec<u32>>,
}

impl<V: NodeId> KeyAllocator<V> {
    fn new(directed: bool) -> Self {
        Self {
            directed,
            used: HashMap::default(),
        }
    }

    fn slot(&mut self, a: &V, b: &V) -> &mut Vec<u32> {
        let forward = (a.clone(), b.clone());
        let pair = if !self.directed
            && !self.used.contains_key(&forward)
            && self.used.contains_key(&(b.clone(), a.clone()))
        {
            (b.clone(), a.clone())
        } else {
            forward
        };
        self.used.entry(pair).or_default()
    }

    fn reserve(&mut self, a: &V, b: &V, key: u32) {
        self.slot(a, b).push(key);
    }

    fn next(&mut self, a: &V, b: &V) -> u32 {
        let used = self.slot(a, b);
        let mut key = 0u32;
        while used.contains(&key) {
            key += 1;
        }
        used.push(key);
        key
    }
}
