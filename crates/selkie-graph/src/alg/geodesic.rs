//! Breadth-first geodesic trees and hop distances.
//!
//! Traversal follows [`Graph::out_neighbors`], so distances in directed graphs respect edge
//! direction.

use crate::graph::{Edge, Graph, NodeId, NodeMap, NodeSet, SparseGraph};

/// BFS tree rooted at one node, stored layer by layer.
#[derive(Debug, Clone)]
pub struct GeodesicTree<V: NodeId> {
    root: V,
    layers: Vec<Vec<V>>,
    distances: NodeMap<V, usize>,
    parents: NodeMap<V, V>,
}

impl<V: NodeId> GeodesicTree<V> {
    pub fn root(&self) -> &V {
        &self.root
    }

    /// `layers()[d]` holds the nodes at distance `d`, in discovery order. Empty when the root is
    /// not part of the graph.
    pub fn layers(&self) -> &[Vec<V>] {
        &self.layers
    }

    /// Distance of the farthest reached layer.
    pub fn depth(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distance_to(&self, v: &V) -> Option<usize> {
        self.distances.get(v).copied()
    }

    pub fn distances(&self) -> &NodeMap<V, usize> {
        &self.distances
    }

    /// The node `v` was discovered from; `None` for the root and unreached nodes.
    pub fn parent(&self, v: &V) -> Option<&V> {
        self.parents.get(v)
    }

    /// Path `root -> .. -> v`, or `None` when `v` was not reached.
    pub fn path_to(&self, v: &V) -> Option<Vec<V>> {
        if !self.distances.contains_key(v) {
            return None;
        }
        let mut path = vec![v.clone()];
        let mut cur = v;
        while let Some(p) = self.parents.get(cur) {
            path.push(p.clone());
            cur = p;
        }
        path.reverse();
        Some(path)
    }

    /// The tree as a directed graph with one `parent -> child` edge per discovered node.
    pub fn to_graph(&self) -> SparseGraph<V> {
        let nodes: NodeSet<V> = self.layers.iter().flatten().cloned().collect();
        let edges: Vec<(Edge<V>, Option<f64>)> = self
            .parents
            .iter()
            .map(|(child, parent)| (Edge::new(parent.clone(), child.clone()), None))
            .collect();
        SparseGraph::from_parts(true, nodes, edges)
    }
}

/// BFS from `source`, stopping after `max_radius` layers when given.
pub fn geodesic_tree<V, G>(graph: &G, source: &V, max_radius: Option<usize>) -> GeodesicTree<V>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let mut tree = GeodesicTree {
        root: source.clone(),
        layers: Vec::new(),
        distances: NodeMap::default(),
        parents: NodeMap::default(),
    };
    if !graph.contains(source) {
        return tree;
    }

    tree.distances.insert(source.clone(), 0);
    let mut frontier = vec![source.clone()];
    let mut depth = 0usize;
    loop {
        let mut next: Vec<V> = Vec::new();
        if max_radius.is_none_or(|r| depth < r) {
            for v in &frontier {
                for w in graph.out_neighbors(v) {
                    if tree.distances.contains_key(w) {
                        continue;
                    }
                    tree.distances.insert(w.clone(), depth + 1);
                    tree.parents.insert(w.clone(), v.clone());
                    next.push(w.clone());
                }
            }
        }
        tree.layers.push(frontier);
        if next.is_empty() {
            break;
        }
        frontier = next;
        depth += 1;
    }
    tree
}

/// Hop distance from `source` to every node reachable within `max_radius`.
pub fn geodesic_distances<V, G>(
    graph: &G,
    source: &V,
    max_radius: Option<usize>,
) -> NodeMap<V, usize>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    geodesic_tree(graph, source, max_radius).distances
}

/// Hop distance `x -> y`; `None` when either node is missing or `y` is unreachable.
pub fn geodesic_distance<V, G>(graph: &G, x: &V, y: &V) -> Option<usize>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    if !graph.contains(x) || !graph.contains(y) {
        return None;
    }
    if x == y {
        return Some(0);
    }
    let mut seen: NodeSet<&V> = NodeSet::default();
    seen.insert(x);
    let mut frontier: Vec<&V> = vec![x];
    let mut depth = 0usize;
    while !frontier.is_empty() {
        depth += 1;
        let mut next: Vec<&V> = Vec::new();
        for v in frontier {
            for w in graph.out_neighbors(v) {
                if w == y {
                    return Some(depth);
                }
                if seen.insert(w) {
                    next.push(w);
                }
            }
        }
        frontier = next;
    }
    None
}
