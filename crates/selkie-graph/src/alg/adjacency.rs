//! Adjacency matrices and their powers.

use crate::graph::{Graph, NodeId};
use nalgebra::DMatrix;
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Boolean adjacency matrix. Row/column `i` is `order[i]`, or the `i`-th graph node when no
/// order is given.
///
/// Directed graphs set `(i, j)` for every edge `i -> j`; undirected graphs are symmetric. Nodes in
/// `order` that are not part of the graph get an all-false row and column.
pub fn adjacency_matrix<V, G>(graph: &G, order: Option<&[V]>) -> DMatrix<bool>
where
    V: NodeId,
    G: Graph<V> + ?Sized,
{
    let order: Vec<&V> = match order {
        Some(o) => o.iter().collect(),
        None => graph.nodes().iter().collect(),
    };
    let n = order.len();
    let mut position: HashMap<&V, usize> = HashMap::default();
    position.reserve(n);
    for (i, v) in order.iter().enumerate() {
        position.entry(*v).or_insert(i);
    }

    let mut m = DMatrix::from_element(n, n, false);
    for (i, v) in order.iter().enumerate() {
        for w in graph.out_neighbors(v) {
            if let Some(&j) = position.get(w) {
                m[(i, j)] = true;
            }
        }
    }
    m
}

/// Powers `A^1..=A^max_power` of the 0/1 version of `adj`. Entry `(i, j)` of `A^k` is the number
/// of walks of length `k` from `i` to `j`. Index 0 of the result holds the first power.
///
/// Counts are `f64`: they stay exact up to 2^53 and grow towards infinity past `f64::MAX`, so
/// dense graphs never overflow.
pub fn adjacency_powers(adj: &DMatrix<bool>, max_power: usize) -> Vec<DMatrix<f64>> {
    let base: DMatrix<f64> = adj.map(|b| if b { 1.0 } else { 0.0 });
    let mut out: Vec<DMatrix<f64>> = Vec::with_capacity(max_power);
    let mut current = base.clone();
    for p in 1..=max_power {
        if p > 1 {
            current = &current * &base;
        }
        out.push(current.clone());
    }
    out
}
