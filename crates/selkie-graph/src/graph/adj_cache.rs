//! Incidence caches used by [`SparseGraph`](crate::SparseGraph).
//!
//! Graphs are immutable after construction, so the per-node incident edge lists are laid out once
//! in CSR form (an offsets array plus one flat array of edge indices) instead of being rescanned
//! from the edge list on every query.

#[derive(Debug, Clone)]
pub(crate) struct DirectedAdjCache {
    out_offsets: Vec<usize>,
    out_edges: Vec<usize>,
    in_offsets: Vec<usize>,
    in_edges: Vec<usize>,
}

impl DirectedAdjCache {
    pub(crate) fn build(node_count: usize, endpoints: &[(usize, usize)]) -> Self {
        let (out_offsets, out_edges) = csr(node_count, endpoints.iter().map(|&(v, _)| v));
        let (in_offsets, in_edges) = csr(node_count, endpoints.iter().map(|&(_, w)| w));
        Self {
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
        }
    }

    pub(crate) fn out_edges(&self, v_ix: usize) -> &[usize] {
        let start = self.out_offsets[v_ix];
        let end = self.out_offsets[v_ix + 1];
        &self.out_edges[start..end]
    }

    pub(crate) fn in_edges(&self, v_ix: usize) -> &[usize] {
        let start = self.in_offsets[v_ix];
        let end = self.in_offsets[v_ix + 1];
        &self.in_edges[start..end]
    }
}

#[derive(Debug, Clone)]
pub(crate) struct UndirectedAdjCache {
    offsets: Vec<usize>,
    edges: Vec<usize>,
}

impl UndirectedAdjCache {
    pub(crate) fn build(node_count: usize, endpoints: &[(usize, usize)]) -> Self {
        // A self-loop is listed once in its node's incidence list.
        let owners = endpoints.iter().enumerate().flat_map(|(e_ix, &(v, w))| {
            let second = (v != w).then_some((w, e_ix));
            std::iter::once((v, e_ix)).chain(second)
        });
        let mut counts = vec![0usize; node_count + 1];
        let pairs: Vec<(usize, usize)> = owners.collect();
        for &(v, _) in &pairs {
            counts[v + 1] += 1;
        }
        for i in 0..node_count {
            counts[i + 1] += counts[i];
        }
        let mut cursor = counts.clone();
        let mut edges = vec![0usize; pairs.len()];
        for (v, e_ix) in pairs {
            edges[cursor[v]] = e_ix;
            cursor[v] += 1;
        }
        Self {
            offsets: counts,
            edges,
        }
    }

    pub(crate) fn edges(&self, v_ix: usize) -> &[usize] {
        let start = self.offsets[v_ix];
        let end = self.offsets[v_ix + 1];
        &self.edges[start..end]
    }
}

#[derive(Debug, Clone)]
pub(crate) enum AdjCache {
    Directed(DirectedAdjCache),
    Undirected(UndirectedAdjCache),
}

impl AdjCache {
    pub(crate) fn build(directed: bool, node_count: usize, endpoints: &[(usize, usize)]) -> Self {
        if directed {
            Self::Directed(DirectedAdjCache::build(node_count, endpoints))
        } else {
            Self::Undirected(UndirectedAdjCache::build(node_count, endpoints))
        }
    }

    pub(crate) fn out_edges(&self, v_ix: usize) -> &[usize] {
        match self {
            Self::Directed(c) => c.out_edges(v_ix),
            Self::Undirected(c) => c.edges(v_ix),
        }
    }

    pub(crate) fn in_edges(&self, v_ix: usize) -> &[usize] {
        match self {
            Self::Directed(c) => c.in_edges(v_ix),
            Self::Undirected(c) => c.edges(v_ix),
        }
    }
}

/// Groups edge indices by owner node. Edge indices stay in ascending order within a node.
fn csr(node_count: usize, owners: impl Iterator<Item = usize> + Clone) -> (Vec<usize>, Vec<usize>) {
    let mut offsets = vec![0usize; node_count + 1];
    for v in owners.clone() {
        offsets[v + 1] += 1;
    }
    for i in 0..node_count {
        offsets[i + 1] += offsets[i];
    }
    let mut cursor = offsets.clone();
    let mut flat = vec![0usize; offsets[node_count]];
    for (e_ix, v) in owners.enumerate() {
        flat[cursor[v]] = e_ix;
        cursor[v] += 1;
    }
    (offsets, flat)
}
