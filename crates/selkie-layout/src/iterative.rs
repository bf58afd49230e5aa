use crate::geom::Point;
use selkie_graph::{Graph, NodeId, NodeMap};

/// A stateful layout advanced one step at a time by an external driver.
///
/// All methods take `&self` so a driver thread can call [`iterate`](Self::iterate) while other
/// threads push position requests and read positions. Implementations serialize `iterate` calls.
pub trait IterativeGraphLayout<V: NodeId> {
    /// Replaces the tracked positions with `positions`, zeroes velocities, and restarts the
    /// iteration count. Pending requests are discarded.
    fn reset(&self, positions: NodeMap<V, Point>);

    /// Queues positions to apply at the start of the next iteration. Requests accumulate until
    /// then. With `reset_nodes`, only entries for graph nodes and requested nodes are kept and
    /// every kept node restarts from rest.
    fn request_positions(&self, positions: NodeMap<V, Point>, reset_nodes: bool);

    /// Advances the simulation by one step on `graph` and returns the new positions.
    fn iterate(&self, graph: &dyn Graph<V>) -> NodeMap<V, Point>;

    /// Number of completed iterations since construction or the last reset.
    fn iteration(&self) -> u64;

    fn cooling_parameter(&self) -> f64;

    /// Kinetic energy of the most recent iteration; 0 before the first one.
    fn energy_status(&self) -> f64;

    /// Copy of the current positions.
    fn positions(&self) -> NodeMap<V, Point>;
}
