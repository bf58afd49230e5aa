//! Common graph families over `usize` nodes `0..n`.
//!
//! Deterministic families never fail. The random families validate their sample parameters and
//! draw from the caller's RNG, so a seeded RNG reproduces the same graph.

use crate::error::{Error, Result};
use crate::graph::{Edge, NodeSet, SparseGraph};
use rand::Rng;

fn nodes(n: usize) -> NodeSet<usize> {
    (0..n).collect()
}

fn build(directed: bool, n: usize, edges: Vec<Edge<usize>>) -> SparseGraph<usize> {
    SparseGraph::from_parts(directed, nodes(n), edges.into_iter().map(|e| (e, None)).collect())
}

/// `n` isolated nodes.
pub fn empty(directed: bool, n: usize) -> SparseGraph<usize> {
    build(directed, n, Vec::new())
}

/// `0 - 1 - .. - (n-1)`.
pub fn path(directed: bool, n: usize) -> SparseGraph<usize> {
    let edges = (1..n).map(|i| Edge::new(i - 1, i)).collect();
    build(directed, n, edges)
}

/// Path closed back to node 0. Below three nodes this is the same as [`path`].
pub fn cycle(directed: bool, n: usize) -> SparseGraph<usize> {
    let mut edges: Vec<Edge<usize>> = (1..n).map(|i| Edge::new(i - 1, i)).collect();
    if n >= 3 {
        edges.push(Edge::new(n - 1, 0));
    }
    build(directed, n, edges)
}

/// Hub `0` joined to `leaves` leaf nodes `1..=leaves`.
pub fn star(directed: bool, leaves: usize) -> SparseGraph<usize> {
    let edges = (1..=leaves).map(|i| Edge::new(0, i)).collect();
    build(directed, leaves + 1, edges)
}

/// Hub `0` joined to every node of a rim cycle `1..=rim`.
pub fn wheel(directed: bool, rim: usize) -> SparseGraph<usize> {
    let mut edges: Vec<Edge<usize>> = (1..=rim).map(|i| Edge::new(0, i)).collect();
    edges.extend((2..=rim).map(|i| Edge::new(i - 1, i)));
    if rim >= 3 {
        edges.push(Edge::new(rim, 1));
    }
    build(directed, rim + 1, edges)
}

/// Every ordered (directed) or unordered (undirected) pair of distinct nodes.
pub fn complete(directed: bool, n: usize) -> SparseGraph<usize> {
    let mut edges: Vec<Edge<usize>> = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j && (directed || i < j) {
                edges.push(Edge::new(i, j));
            }
        }
    }
    build(directed, n, edges)
}

/// Number of distinct loop-free edges on `n` nodes.
fn capacity(directed: bool, n: usize) -> usize {
    let pairs = n.saturating_mul(n.saturating_sub(1));
    if directed { pairs } else { pairs / 2 }
}

/// Maps a pair index in `0..capacity(directed, n)` to its endpoints.
fn pair_at(directed: bool, n: usize, mut k: usize) -> (usize, usize) {
    if directed {
        let i = k / (n - 1);
        let r = k % (n - 1);
        return (i, if r >= i { r + 1 } else { r });
    }
    let mut i = 0;
    loop {
        let row = n - 1 - i;
        if k < row {
            return (i, i + 1 + k);
        }
        k -= row;
        i += 1;
    }
}

/// `m` distinct loop-free edges chosen uniformly among all pairs of `n` nodes.
pub fn random_by_edge_count<R: Rng + ?Sized>(
    directed: bool,
    n: usize,
    m: usize,
    rng: &mut R,
) -> Result<SparseGraph<usize>> {
    let cap = capacity(directed, n);
    if m > cap {
        return Err(Error::InvalidParameter {
            name: "m",
            reason: format!("{m} edges requested but {n} nodes allow at most {cap}"),
        });
    }
    let mut picked = rand::seq::index::sample(rng, cap, m).into_vec();
    picked.sort_unstable();
    let edges = picked
        .into_iter()
        .map(|k| {
            let (v, w) = pair_at(directed, n, k);
            Edge::new(v, w)
        })
        .collect();
    Ok(build(directed, n, edges))
}

/// Each loop-free pair of `n` nodes becomes an edge independently with probability `p`.
pub fn random_by_probability<R: Rng + ?Sized>(
    directed: bool,
    n: usize,
    p: f64,
    rng: &mut R,
) -> Result<SparseGraph<usize>> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter {
            name: "p",
            reason: format!("probability must lie in [0, 1], got {p}"),
        });
    }
    let mut edges: Vec<Edge<usize>> = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j && (directed || i < j) && rng.gen_bool(p) {
                edges.push(Edge::new(i, j));
            }
        }
    }
    Ok(build(directed, n, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_index_covers_every_pair_once() {
        for directed in [false, true] {
            let n = 5;
            let pairs: Vec<(usize, usize)> =
                (0..capacity(directed, n)).map(|k| pair_at(directed, n, k)).collect();
            let unique: hashbrown::HashSet<(usize, usize)> = pairs.iter().copied().collect();
            assert_eq!(unique.len(), pairs.len());
            assert!(pairs.iter().all(|&(v, w)| v != w && v < n && w < n));
            if !directed {
                assert!(pairs.iter().all(|&(v, w)| v < w));
            }
        }
    }
}
