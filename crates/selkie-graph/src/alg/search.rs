//! Single-source shortest paths with path counting.
//!
//! Both searches record the data Brandes-style accumulation needs: visit order, distances, the
//! number of shortest paths reaching each node, and each node's shortest-path predecessors.

use crate::graph::{Graph, NodeId, NodeMap};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

#[derive(Debug, Clone)]
pub struct ShortestPaths<V: NodeId> {
    pub source: V,
    /// Reached nodes in non-decreasing distance order. Walking it backwards visits the farthest
    /// nodes first.
    pub stack: Vec<V>,
    pub distance: NodeMap<V, f64>,
    /// Number of distinct shortest paths from `source`. Kept as `f64` since counts grow
    /// exponentially on dense graphs.
    pub num_shortest: NodeMap<V, f64>,
    pub predecessors: NodeMap<V, Vec<V>>,
}

impl<V: NodeId> ShortestPaths<V> {
    fn empty(source: &V) -> Self {
        Self {
            source: source.clone(),
            stack: Vec::new(),
            distance: NodeMap::default(),
            num_shortest: NodeMap::default(),
            predecessors: NodeMap::default(),
        }
    }

    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance.contains_key(v)
    }

    pub fn distance_to(&self, v: &V) -> Option<f64> {
        self.distance.get(v).copied()
    }

    pub fn paths_to(&self, v: &V) -> f64 {
        self.num_shortest.get(v).copied().unwrap_or(0.0)
    }

    pub fn predecessors_of(&self, v: &V) -> &[V] {
        self.predecessors.get(v).map_or(&[], Vec::as_slice)
    }
}

/// Dense working state shared by both searches.
struct Scratch {
    distance: Vec<Option<f64>>,
    sigma: Vec<f64>,
    preds: Vec<Vec<usize>>,
    stack: Vec<usize>,
}

impl Scratch {
    fn new(n: usize, source: usize) -> Self {
        let mut s = Self {
            distance: vec![None; n],
            sigma: vec![0.0; n],
            preds: vec![Vec::new(); n],
            stack: Vec::with_capacity(n),
        };
        s.distance[source] = Some(0.0);
        s.sigma[source] = 1.0;
        s
    }

    fn finish<V: NodeId, G: Graph<V> + ?Sized>(self, graph: &G, source: &V) -> ShortestPaths<V> {
        let nodes = graph.nodes();
        let mut out = ShortestPaths::empty(source);
        for &ix in &self.stack {
            let v = nodes[ix].clone();
            out.distance.insert(v.clone(), self.distance[ix].unwrap_or(f64::INFINITY));
            out.num_shortest.insert(v.clone(), self.sigma[ix]);
            out.predecessors.insert(
                v.clone(),
                self.preds[ix].iter().map(|&p| nodes[p].clone()).collect(),
            );
            out.stack.push(v);
        }
        out
    }
}

/// Unweighted search along out-neighbors. Parallel edges count as a single step.
pub fn breadth_first_search<V, G>(graph: &G, source: &V) -> ShortestPaths<V>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let nodes = graph.nodes();
    let Some(s) = nodes.get_index_of(source) else {
        return ShortestPaths::empty(source);
    };
    let mut st = Scratch::new(nodes.len(), s);
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        st.stack.push(v);
        let dv = st.distance[v].unwrap_or(0.0);
        for w in graph.out_neighbors(&nodes[v]) {
            let Some(w) = nodes.get_index_of(w) else {
                continue;
            };
            if w == v {
                continue;
            }
            if st.distance[w].is_none() {
                st.distance[w] = Some(dv + 1.0);
                queue.push_back(w);
            }
            if st.distance[w] == Some(dv + 1.0) {
                st.sigma[w] += st.sigma[v];
                st.preds[w].push(v);
            }
        }
    }
    st.finish(graph, source)
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: f64,
    seq: usize,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // Reversed: `BinaryHeap` is a max-heap and we pop the closest, oldest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Weighted search. Each edge costs [`Graph::edge_weight`], or 1 when the graph has no weight for
/// it. Every parallel edge is relaxed on its own; self-loops are ignored.
pub fn dijkstra_search<V, G>(graph: &G, source: &V) -> ShortestPaths<V>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let nodes = graph.nodes();
    let Some(s) = nodes.get_index_of(source) else {
        return ShortestPaths::empty(source);
    };
    let directed = graph.is_directed();
    let mut st = Scratch::new(nodes.len(), s);
    let mut settled = vec![false; nodes.len()];
    let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();
    let mut seq = 0usize;
    heap.push(HeapEntry {
        distance: 0.0,
        seq,
        node: s,
    });

    while let Some(HeapEntry { distance: d, node: v, .. }) = heap.pop() {
        if settled[v] || st.distance[v].is_some_and(|best| d > best) {
            continue;
        }
        settled[v] = true;
        st.stack.push(v);

        let vid = &nodes[v];
        for e in graph.edges_adjacent_to(vid) {
            if directed && e.source != *vid {
                continue;
            }
            let Some(w) = e.opposite(vid).and_then(|w| nodes.get_index_of(w)) else {
                continue;
            };
            if w == v || settled[w] {
                continue;
            }
            let candidate = d + graph.edge_weight(e).unwrap_or(1.0);
            match st.distance[w] {
                Some(best) if candidate > best => {}
                Some(best) if candidate == best => {
                    st.sigma[w] += st.sigma[v];
                    st.preds[w].push(v);
                }
                _ => {
                    st.distance[w] = Some(candidate);
                    st.sigma[w] = st.sigma[v];
                    st.preds[w].clear();
                    st.preds[w].push(v);
                    seq += 1;
                    heap.push(HeapEntry {
                        distance: candidate,
                        seq,
                        node: w,
                    });
                }
            }
        }
    }
    st.finish(graph, source)
}

/// Dijkstra for weighted graphs, BFS otherwise.
pub fn shortest_paths<V, G>(graph: &G, source: &V) -> ShortestPaths<V>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    if graph.is_weighted() {
        dijkstra_search(graph, source)
    } else {
        breadth_first_search(graph, source)
    }
}
