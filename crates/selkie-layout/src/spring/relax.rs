use super::{SpringLayout, SpringParams};
use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::geom::Point;
use crate::iterative::IterativeGraphLayout;
use crate::static_layout::{StaticGraphLayout, StaticLayout};
use selkie_graph::{Graph, NodeId, NodeMap};

/// Runs a [`SpringLayout`] to rest and returns the final positions as a one-shot layout.
///
/// Starts from `seed_layout`, then iterates until the kinetic energy drops below
/// `energy_threshold` or `max_iterations` steps have run. Cancellation is checked before every
/// step.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringStaticLayout {
    pub params: SpringParams,
    pub seed_layout: StaticLayout,
    pub max_iterations: usize,
    pub energy_threshold: Option<f64>,
    pub seed: u64,
}

impl Default for SpringStaticLayout {
    fn default() -> Self {
        Self {
            params: SpringParams::default(),
            seed_layout: StaticLayout::circle(10.0),
            max_iterations: 500,
            energy_threshold: Some(1e-4),
            seed: 0,
        }
    }
}

impl SpringStaticLayout {
    pub fn with_params(params: SpringParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }
}

impl<V: NodeId> StaticGraphLayout<V> for SpringStaticLayout {
    fn layout(
        &self,
        graph: &dyn Graph<V>,
        cancel: &CancellationToken,
    ) -> Result<NodeMap<V, Point>> {
        let spring = SpringLayout::with_params(self.params.clone())?.with_seed(self.seed);
        let start = self.seed_layout.layout(graph, cancel)?;
        spring.reset(start);

        let mut steps = 0usize;
        while steps < self.max_iterations {
            cancel.check()?;
            spring.iterate(graph);
            steps += 1;
            if self
                .energy_threshold
                .is_some_and(|threshold| spring.energy_status() < threshold)
            {
                break;
            }
        }
        tracing::debug!(
            steps,
            energy = spring.energy_status(),
            nodes = graph.node_count(),
            "spring layout settled"
        );
        Ok(spring.positions())
    }
}
