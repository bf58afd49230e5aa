use super::search::shortest_paths;
use crate::graph::{Graph, NodeId, NodeMap};

/// Brandes betweenness centrality for every node, unnormalized.
///
/// Undirected graphs count each unordered pair once. Weighted graphs use weighted shortest paths.
pub fn betweenness_centrality<V, G>(graph: &G) -> NodeMap<V, f64>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let mut centrality: NodeMap<V, f64> = graph.nodes().iter().map(|v| (v.clone(), 0.0)).collect();

    for s in graph.nodes() {
        let sp = shortest_paths(graph, s);
        let mut delta: NodeMap<&V, f64> = sp.stack.iter().map(|v| (v, 0.0)).collect();
        for w in sp.stack.iter().rev() {
            let sigma_w = sp.paths_to(w);
            let delta_w = delta.get(w).copied().unwrap_or(0.0);
            for v in sp.predecessors_of(w) {
                let contribution = sp.paths_to(v) / sigma_w * (1.0 + delta_w);
                if let Some(d) = delta.get_mut(v) {
                    *d += contribution;
                }
            }
            if w != s {
                if let Some(c) = centrality.get_mut(w) {
                    *c += delta_w;
                }
            }
        }
    }

    if !graph.is_directed() {
        for c in centrality.values_mut() {
            *c /= 2.0;
        }
    }
    centrality
}
