//! Connected components. Direction never matters here.

use super::subgraph::copy_subgraph;
use crate::graph::{DisjointSet, Edge, Graph, NodeId, NodeMap, NodeSet, SparseGraph};

/// Components of `graph`, reusing its cached partition when it has one.
pub fn components<V, G>(graph: &G) -> Vec<NodeSet<V>>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    if let Some(cached) = graph.components() {
        return cached.components().to_vec();
    }
    components_of_edges(graph.nodes(), graph.edges())
}

/// Components of the graph spanned by `nodes` and `edges`. Edge endpoints missing from `nodes`
/// are added after the declared nodes.
pub fn components_of_edges<V: NodeId>(nodes: &NodeSet<V>, edges: &[Edge<V>]) -> Vec<NodeSet<V>> {
    let mut all = nodes.clone();
    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(edges.len());
    for e in edges {
        let (v, _) = all.insert_full(e.source.clone());
        let (w, _) = all.insert_full(e.target.clone());
        pairs.push((v, w));
    }
    partition(&all, pairs)
}

/// Components of an adjacency multimap. Keys and every listed neighbor are nodes.
pub fn components_of_adjacency<V: NodeId>(adjacency: &NodeMap<V, Vec<V>>) -> Vec<NodeSet<V>> {
    let mut all: NodeSet<V> = adjacency.keys().cloned().collect();
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for (v, nbrs) in adjacency {
        let Some(vi) = all.get_index_of(v) else {
            continue;
        };
        for w in nbrs {
            let (wi, _) = all.insert_full(w.clone());
            pairs.push((vi, wi));
        }
    }
    partition(&all, pairs)
}

/// One induced subgraph per component.
pub fn component_graphs<V, G>(graph: &G) -> Vec<SparseGraph<V>>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    if let Some(cached) = graph.components() {
        return cached.graphs();
    }
    components(graph)
        .iter()
        .map(|c| copy_subgraph(graph, c))
        .collect()
}

fn partition<V: NodeId>(all: &NodeSet<V>, pairs: Vec<(usize, usize)>) -> Vec<NodeSet<V>> {
    let mut dsu = DisjointSet::new(all.len());
    for (v, w) in pairs {
        dsu.union(v, w);
    }
    dsu.groups()
        .into_iter()
        .map(|g| g.into_iter().map(|ix| all[ix].clone()).collect())
        .collect()
}
