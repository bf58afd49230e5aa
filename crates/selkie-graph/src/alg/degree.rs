use crate::graph::{Graph, NodeId};
use std::collections::BTreeMap;

/// Degree multiset: `degree -> number of nodes with that degree`.
pub fn degree_distribution<V, G>(graph: &G) -> BTreeMap<usize, usize>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let mut out: BTreeMap<usize, usize> = BTreeMap::new();
    for v in graph.nodes() {
        *out.entry(graph.degree(v)).or_default() += 1;
    }
    out
}
