//! One-shot layouts that map every node to a position in a single pass.

use crate::cancel::CancellationToken;
use crate::error::{Error, Result};
use crate::geom::{self, Bounds, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use selkie_graph::alg::component_graphs;
use selkie_graph::{Graph, NodeId, NodeMap};
use std::f64::consts::TAU;

/// Nodes placed between two cancellation checks.
const CANCEL_CHECK_STRIDE: usize = 1024;

pub trait StaticGraphLayout<V: NodeId> {
    /// Positions for every node of `graph`, in graph node order.
    ///
    /// Returns [`Error::Interrupted`] when `cancel` fires before the layout completes; no partial
    /// result is produced.
    fn layout(&self, graph: &dyn Graph<V>, cancel: &CancellationToken) -> Result<NodeMap<V, Point>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum StaticLayout {
    /// Every node at `(0, 0)`.
    Origin,
    /// Nodes at angle `2π·i/n` on a circle, in graph node order.
    Circle { radius: f64 },
    /// Each node uniform in `[-extent, extent]²`. A seed makes the result reproducible.
    Random { extent: f64, seed: Option<u64> },
}

impl StaticLayout {
    pub fn circle(radius: f64) -> Self {
        Self::Circle { radius }
    }

    pub fn random(extent: f64) -> Self {
        Self::Random { extent, seed: None }
    }

    pub fn seeded_random(extent: f64, seed: u64) -> Self {
        Self::Random {
            extent,
            seed: Some(seed),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Origin => Ok(()),
            Self::Circle { radius } => non_negative("radius", *radius),
            Self::Random { extent, .. } => non_negative("extent", *extent),
        }
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            reason: format!("must be finite and non-negative, got {value}"),
        })
    }
}

impl<V: NodeId> StaticGraphLayout<V> for StaticLayout {
    fn layout(
        &self,
        graph: &dyn Graph<V>,
        cancel: &CancellationToken,
    ) -> Result<NodeMap<V, Point>> {
        self.validate()?;
        let n = graph.node_count();
        let mut rng = match self {
            Self::Random {
                seed: Some(seed), ..
            } => Some(StdRng::seed_from_u64(*seed)),
            Self::Random { seed: None, .. } => Some(StdRng::from_entropy()),
            _ => None,
        };

        let mut out: NodeMap<V, Point> = NodeMap::default();
        out.reserve(n);
        for (i, v) in graph.nodes().iter().enumerate() {
            if i % CANCEL_CHECK_STRIDE == 0 {
                cancel.check()?;
            }
            let p = match (self, rng.as_mut()) {
                (Self::Circle { radius }, _) => {
                    Point::from(geom::unit(TAU * i as f64 / n as f64) * *radius)
                }
                (Self::Random { extent, .. }, Some(rng)) => geom::point(
                    rng.gen_range(-*extent..=*extent),
                    rng.gen_range(-*extent..=*extent),
                ),
                _ => Point::origin(),
            };
            out.insert(v.clone(), p);
        }
        cancel.check()?;
        Ok(out)
    }
}

/// Lays out each connected component on its own with `layout` and places the components left
/// to right, `gap` apart, each vertically centred on `y = 0`.
pub fn pack_components<V: NodeId>(
    graph: &dyn Graph<V>,
    layout: &dyn StaticGraphLayout<V>,
    gap: f64,
    cancel: &CancellationToken,
) -> Result<NodeMap<V, Point>> {
    non_negative("gap", gap)?;
    let parts = component_graphs(graph);

    let mut placed: Vec<NodeMap<V, Point>> = Vec::with_capacity(parts.len());
    for part in &parts {
        cancel.check()?;
        placed.push(layout.layout(part, cancel)?);
    }

    let mut out: NodeMap<V, Point> = NodeMap::default();
    out.reserve(graph.node_count());
    let mut cursor = 0.0;
    for positions in placed {
        let Some(b) = Bounds::of(positions.values().copied()) else {
            continue;
        };
        let shift = geom::vector(cursor - b.min.x, -b.center().y);
        for (v, p) in positions {
            out.insert(v, p + shift);
        }
        cursor += b.extent().x + gap;
    }

    tracing::debug!(components = parts.len(), nodes = out.len(), "packed components");

    // Re-key in graph node order.
    let mut ordered: NodeMap<V, Point> = NodeMap::default();
    ordered.reserve(out.len());
    for v in graph.nodes() {
        if let Some(p) = out.get(v) {
            ordered.insert(v.clone(), *p);
        }
    }
    Ok(ordered)
}
