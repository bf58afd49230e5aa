//! Edge types.
//!
//! Edges are ordered `(source, target)` pairs plus a `key` that tells parallel edges apart. The
//! directed/undirected tag lives on the graph, not on the edge.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    pub source: V,
    pub target: V,
    /// Distinguishes parallel edges between the same endpoints (multigraph support).
    pub key: u32,
}

impl<V> Edge<V> {
    pub fn new(source: V, target: V) -> Self {
        Self {
            source,
            target,
            key: 0,
        }
    }

    pub fn keyed(source: V, target: V, key: u32) -> Self {
        Self {
            source,
            target,
            key,
        }
    }
}

impl<V: PartialEq> Edge<V> {
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// The endpoint on the other side of `v`, or `None` when `v` is not an endpoint.
    pub fn opposite(&self, v: &V) -> Option<&V> {
        if &self.source == v {
            Some(&self.target)
        } else if &self.target == v {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Equality under undirected semantics: `(a, b, k)` matches `(b, a, k)`.
    pub fn same_undirected(&self, other: &Self) -> bool {
        self.key == other.key
            && ((self.source == other.source && self.target == other.target)
                || (self.source == other.target && self.target == other.source))
    }
}

impl<V: Clone> Edge<V> {
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            key: self.key,
        }
    }
}

impl<V: fmt::Debug> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key == 0 {
            write!(f, "{:?}:{:?}", self.source, self.target)
        } else {
            write!(f, "{:?}:{:?}#{}", self.source, self.target, self.key)
        }
    }
}

/// Canonical dense-index key used by the edge index of [`SparseGraph`](crate::SparseGraph).
///
/// Undirected edges store the smaller node index first so both orientations hash the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeSlot {
    pub(crate) v: usize,
    pub(crate) w: usize,
    pub(crate) key: u32,
}

impl EdgeSlot {
    pub(crate) fn canonical(directed: bool, v: usize, w: usize, key: u32) -> Self {
        let (v, w) = if directed || v <= w { (v, w) } else { (w, v) };
        Self { v, w, key }
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeSlot};

    #[test]
    fn opposite_handles_loops_and_strangers() {
        let e = Edge::new("a", "b");
        assert_eq!(e.opposite(&"a"), Some(&"b"));
        assert_eq!(e.opposite(&"b"), Some(&"a"));
        assert_eq!(e.opposite(&"c"), None);

        let l = Edge::new("a", "a");
        assert!(l.is_loop());
        assert_eq!(l.opposite(&"a"), Some(&"a"));
    }

    #[test]
    fn undirected_slots_ignore_orientation() {
        assert_eq!(
            EdgeSlot::canonical(false, 3, 1, 0),
            EdgeSlot::canonical(false, 1, 3, 0)
        );
        assert_ne!(
            EdgeSlot::canonical(true, 3, 1, 0),
            EdgeSlot::canonical(true, 1, 3, 0)
        );
        assert!(Edge::new(1, 2).same_undirected(&Edge::new(2, 1)));
        assert!(!Edge::keyed(1, 2, 1).same_undirected(&Edge::new(2, 1)));
    }
}
