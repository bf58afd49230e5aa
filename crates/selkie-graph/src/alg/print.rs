use crate::graph::{Graph, NodeId};

/// Renders the node list followed by each node's out-neighbors, e.g.
/// `NODES: [1, 2]  EDGES: {1: [2], 2: []}`.
pub fn graph_to_string<V, G>(graph: &G) -> String
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let nodes: Vec<&V> = graph.nodes().iter().collect();
    let edges: Vec<String> = nodes
        .iter()
        .map(|v| format!("{v:?}: {:?}", graph.out_neighbors(v)))
        .collect();
    format!("NODES: {nodes:?}  EDGES: {{{}}}", edges.join(", "))
}
