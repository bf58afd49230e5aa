#![forbid(unsafe_code)]

//! 2-D layouts for [`selkie_graph`] graphs.
//!
//! Two families share the [`Point`] type and the graph's node order:
//!
//! - [`StaticGraphLayout`] maps a graph to positions in one call. [`StaticLayout`] covers the
//!   trivial placements (origin, circle, random) and [`SpringStaticLayout`] runs a spring
//!   simulation to rest.
//! - [`IterativeGraphLayout`] is advanced one step at a time by a driver.
//!   [`SpringLayout`] is the force-directed implementation: springs along edges, grid-bounded
//!   repulsion, an origin pull, pinned nodes, and position requests that can arrive from other
//!   threads between steps.

pub mod cancel;
pub mod error;
pub mod geom;
pub mod iterative;
pub mod spring;
pub mod static_layout;

pub use cancel::CancellationToken;
pub use error::{Error, Result};
pub use geom::{Bounds, Point, Vector};
pub use iterative::IterativeGraphLayout;
pub use spring::{SpringLayout, SpringParams, SpringStaticLayout};
pub use static_layout::{StaticGraphLayout, StaticLayout, pack_components};

use selkie_graph::{Graph, NodeId, NodeMap};

/// Runs a static layout without a cancellation handle.
pub fn layout<V: NodeId>(
    graph: &dyn Graph<V>,
    strategy: &dyn StaticGraphLayout<V>,
) -> Result<NodeMap<V, Point>> {
    strategy.layout(graph, &CancellationToken::new())
}
