use crate::graph::{Edge, Graph, NodeId, NodeSet, SparseGraph};

/// Induced subgraph on `nodes ∩ graph.nodes()`, keeping `nodes`' order, edge keys, and weights.
pub fn copy_subgraph<V, G>(graph: &G, nodes: &NodeSet<V>) -> SparseGraph<V>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let kept: NodeSet<V> = nodes.iter().filter(|v| graph.contains(v)).cloned().collect();
    let edges: Vec<(Edge<V>, Option<f64>)> = graph
        .edges()
        .iter()
        .filter(|e| kept.contains(&e.source) && kept.contains(&e.target))
        .map(|e| (e.clone(), graph.edge_weight(e)))
        .collect();
    SparseGraph::from_parts(graph.is_directed(), kept, edges)
}

/// Subgraph induced by [`Graph::core_nodes`].
///
/// This is a single pass: nodes whose degree drops below 2 inside the result are kept.
pub fn core<V, G>(graph: &G) -> SparseGraph<V>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let core: NodeSet<V> = graph.core_nodes().into_iter().cloned().collect();
    copy_subgraph(graph, &core)
}
