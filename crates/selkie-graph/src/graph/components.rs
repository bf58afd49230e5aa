//! Connected-component snapshots.

use super::{Edge, NodeId, NodeSet, SparseGraph};

/// Union-find over dense node indices (path halving + union by rank).
#[derive(Debug, Clone)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub(crate) fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    pub(crate) fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
    }

    /// Groups of indices, ordered by their smallest member; members ascend within a group.
    pub(crate) fn groups(&mut self) -> Vec<Vec<usize>> {
        let len = self.parent.len();
        let mut slot: Vec<Option<usize>> = vec![None; len];
        let mut out: Vec<Vec<usize>> = Vec::new();
        for x in 0..len {
            let root = self.find(x);
            let g = match slot[root] {
                Some(g) => g,
                None => {
                    slot[root] = Some(out.len());
                    out.push(Vec::new());
                    out.len() - 1
                }
            };
            out[g].push(x);
        }
        out
    }
}

/// Partition of a graph's nodes into maximal connected subsets, together with the edges that
/// fall inside each part. Direction is ignored when deciding connectivity.
#[derive(Debug, Clone)]
pub struct GraphComponents<V: NodeId> {
    directed: bool,
    components: Vec<NodeSet<V>>,
    edges: Vec<Vec<(Edge<V>, Option<f64>)>>,
}

impl<V: NodeId> GraphComponents<V> {
    pub(crate) fn from_indexed(
        directed: bool,
        nodes: &NodeSet<V>,
        edges: &[Edge<V>],
        endpoints: &[(usize, usize)],
        weights: Option<&[f64]>,
    ) -> Self {
        let mut dsu = DisjointSet::new(nodes.len());
        for &(v, w) in endpoints {
            dsu.union(v, w);
        }
        let groups = dsu.groups();

        let mut group_of: Vec<usize> = vec![0; nodes.len()];
        for (g, members) in groups.iter().enumerate() {
            for &m in members {
                group_of[m] = g;
            }
        }

        let components: Vec<NodeSet<V>> = groups
            .iter()
            .map(|members| members.iter().map(|&m| nodes[m].clone()).collect())
            .collect();
        let mut comp_edges: Vec<Vec<(Edge<V>, Option<f64>)>> = vec![Vec::new(); groups.len()];
        for (e_ix, (edge, &(v, _))) in edges.iter().zip(endpoints).enumerate() {
            let weight = weights.and_then(|ws| ws.get(e_ix).copied());
            comp_edges[group_of[v]].push((edge.clone(), weight));
        }

        Self {
            directed,
            components,
            edges: comp_edges,
        }
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[NodeSet<V>] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeSet<V>> {
        self.components.iter()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.components.iter().map(|c| c.len()).collect()
    }

    /// Index of the component holding `v`.
    pub fn component_of(&self, v: &V) -> Option<usize> {
        self.components.iter().position(|c| c.contains(v))
    }

    /// The largest component; ties go to the earliest.
    pub fn largest(&self) -> Option<&NodeSet<V>> {
        self.components
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.len().cmp(&b.len()).then(ib.cmp(ia)))
            .map(|(_, c)| c)
    }

    /// Induced subgraph of each component.
    pub fn graphs(&self) -> Vec<SparseGraph<V>> {
        self.components
            .iter()
            .zip(&self.edges)
            .map(|(nodes, edges)| {
                SparseGraph::from_parts(self.directed, nodes.clone(), edges.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;

    #[test]
    fn disjoint_set_groups_follow_smallest_member() {
        let mut dsu = DisjointSet::new(6);
        dsu.union(4, 1);
        dsu.union(5, 3);
        dsu.union(3, 0);
        assert_eq!(dsu.groups(), vec![vec![0, 3, 5], vec![1, 4], vec![2]]);
    }
}
