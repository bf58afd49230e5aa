//! Spring-embedder force simulation.
//!
//! Each [`SpringLayout::iterate`] call runs one explicit step over the whole graph:
//!
//! 1. The graph is symmetrized: every non-loop edge becomes one spring between distinct nodes.
//! 2. Pending position requests are applied (position overwritten, velocity zeroed). A reset
//!    request also zeroes every other velocity and drops bodies outside the graph and request.
//! 3. Graph nodes without a body are seeded; bodies of nodes that left the graph are dropped
//!    unless the applied request named them.
//! 4. The region grid is refreshed from the current positions.
//! 5. Every unpinned node sums an origin pull, grid-bounded repulsion, and spring forces, all
//!    computed from the positions at the start of the step.
//! 6. The net force is capped by degree, velocity is damped and capped, and positions advance.
//!
//! A non-finite force or velocity is logged and leaves that node unchanged for the step.

mod grid;
mod params;
mod relax;

pub use params::SpringParams;
pub use relax::SpringStaticLayout;

use crate::error::Result;
use crate::geom::{self, Point, Vector};
use crate::iterative::IterativeGraphLayout;
use grid::RegionGrid;
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxBuildHasher;
use selkie_graph::{Graph, NodeId, NodeMap, NodeSet};
use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

const DEFAULT_SEED: u64 = 0x5EED;

/// Seeded nodes land within this fraction of the spring length of their neighbors' mean.
const SEED_JITTER: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
struct Body {
    position: Point,
    velocity: Vector,
}

impl Body {
    fn at_rest(position: Point) -> Self {
        Self {
            position,
            velocity: Vector::zeros(),
        }
    }
}

#[derive(Debug)]
struct PendingRequests<V: NodeId> {
    positions: NodeMap<V, Point>,
    reset: bool,
}

impl<V: NodeId> Default for PendingRequests<V> {
    fn default() -> Self {
        Self {
            positions: NodeMap::default(),
            reset: false,
        }
    }
}

#[derive(Debug)]
struct SimState<V: NodeId> {
    bodies: NodeMap<V, Body>,
    rng: StdRng,
    grid: RegionGrid,
}

/// The graph's edges as undirected springs over dense node indices.
struct Springs {
    neighbors: Vec<Vec<(usize, f64)>>,
    pairs: HashSet<(usize, usize)>,
}

impl Springs {
    /// Parallel and reciprocal edges collapse into one spring carrying the largest weight. Weights
    /// are normalized by the largest weight of the graph; unweighted graphs use 1.
    fn build<V: NodeId>(graph: &dyn Graph<V>) -> Self {
        let nodes = graph.nodes();
        let mut weight_of: HashMap<(usize, usize), f64> = HashMap::default();
        let mut order: Vec<(usize, usize)> = Vec::new();
        for e in graph.edges() {
            let (Some(a), Some(b)) = (
                nodes.get_index_of(&e.source),
                nodes.get_index_of(&e.target),
            ) else {
                continue;
            };
            if a == b {
                continue;
            }
            let key = (a.min(b), a.max(b));
            let w = graph.edge_weight(e).unwrap_or(1.0);
            let slot = weight_of.entry(key).or_insert_with(|| {
                order.push(key);
                w
            });
            *slot = slot.max(w);
        }

        let max_weight = weight_of.values().copied().fold(0.0, f64::max);
        let scale = if graph.is_weighted() && max_weight > 0.0 {
            1.0 / max_weight
        } else {
            1.0
        };

        let mut neighbors: Vec<Vec<(usize, f64)>> = vec![Vec::new(); nodes.len()];
        let mut pairs: HashSet<(usize, usize)> = HashSet::default();
        pairs.reserve(order.len());
        for key in order {
            let w = weight_of.get(&key).copied().unwrap_or(1.0) * scale;
            neighbors[key.0].push((key.1, w));
            neighbors[key.1].push((key.0, w));
            pairs.insert(key);
        }
        Self { neighbors, pairs }
    }

    fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.pairs.contains(&(a.min(b), a.max(b)))
    }

    fn degree(&self, i: usize) -> usize {
        self.neighbors[i].len()
    }
}

/// Force-directed [`IterativeGraphLayout`].
///
/// The pinned set, the pending request buffer, and the published positions each sit behind
/// their own lock, so they can be used from other threads while an iteration runs. Iterations
/// themselves are serialized by the simulation lock.
#[derive(Debug)]
pub struct SpringLayout<V: NodeId> {
    params: RwLock<SpringParams>,
    pinned: RwLock<HashSet<V>>,
    pending: Mutex<PendingRequests<V>>,
    snapshot: RwLock<NodeMap<V, Point>>,
    state: Mutex<SimState<V>>,
    iteration: AtomicU64,
    energy_bits: AtomicU64,
}

impl<V: NodeId> Default for SpringLayout<V> {
    fn default() -> Self {
        Self::build(SpringParams::default())
    }
}

impl<V: NodeId> SpringLayout<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: SpringParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::build(params))
    }

    /// Reseeds the random source used for seeding new nodes and separating coincident ones.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.state.get_mut().rng = StdRng::seed_from_u64(seed);
        self
    }

    fn build(params: SpringParams) -> Self {
        let grid = RegionGrid::new(params.region_count, params.max_repulsion_distance);
        Self {
            params: RwLock::new(params),
            pinned: RwLock::new(HashSet::default()),
            pending: Mutex::new(PendingRequests::default()),
            snapshot: RwLock::new(NodeMap::default()),
            state: Mutex::new(SimState {
                bodies: NodeMap::default(),
                rng: StdRng::seed_from_u64(DEFAULT_SEED),
                grid,
            }),
            iteration: AtomicU64::new(0),
            energy_bits: AtomicU64::new(0.0f64.to_bits()),
        }
    }

    pub fn params(&self) -> SpringParams {
        self.params.read().clone()
    }

    /// Takes effect from the next iteration.
    pub fn set_params(&self, params: SpringParams) -> Result<()> {
        params.validate()?;
        *self.params.write() = params;
        Ok(())
    }

    /// Returns `false` when `v` was already pinned.
    pub fn pin(&self, v: V) -> bool {
        self.pinned.write().insert(v)
    }

    pub fn unpin(&self, v: &V) -> bool {
        self.pinned.write().remove(v)
    }

    pub fn set_pinned<I: IntoIterator<Item = V>>(&self, nodes: I) {
        let set: HashSet<V> = nodes.into_iter().collect();
        *self.pinned.write() = set;
    }

    pub fn pinned(&self) -> Vec<V> {
        self.pinned.read().iter().cloned().collect()
    }

    pub fn is_pinned(&self, v: &V) -> bool {
        self.pinned.read().contains(v)
    }

    pub fn position(&self, v: &V) -> Option<Point> {
        self.snapshot.read().get(v).copied()
    }

    fn publish(&self, bodies: &NodeMap<V, Body>) -> NodeMap<V, Point> {
        let positions: NodeMap<V, Point> =
            bodies.iter().map(|(v, b)| (v.clone(), b.position)).collect();
        *self.snapshot.write() = positions.clone();
        positions
    }
}

impl<V: NodeId> IterativeGraphLayout<V> for SpringLayout<V> {
    fn reset(&self, positions: NodeMap<V, Point>) {
        let mut state = self.state.lock();
        state.bodies = finite_only(positions)
            .into_iter()
            .map(|(v, position)| (v, Body::at_rest(position)))
            .collect();
        *self.pending.lock() = PendingRequests::default();
        self.iteration.store(0, Ordering::Release);
        self.energy_bits.store(0.0f64.to_bits(), Ordering::Release);
        self.publish(&state.bodies);
    }

    fn request_positions(&self, positions: NodeMap<V, Point>, reset_nodes: bool) {
        let positions = finite_only(positions);
        let mut pending = self.pending.lock();
        pending.positions.extend(positions);
        pending.reset |= reset_nodes;
    }

    fn iterate(&self, graph: &dyn Graph<V>) -> NodeMap<V, Point> {
        let mut state = self.state.lock();
        let params = self.params.read().clone();
        let nodes = graph.nodes();
        let n = nodes.len();
        let _span = tracing::trace_span!("spring_iterate", nodes = n).entered();

        let springs = Springs::build(graph);
        if !state.grid.matches(params.region_count, params.max_repulsion_distance) {
            state.grid = RegionGrid::new(params.region_count, params.max_repulsion_distance);
        }
        let SimState { bodies, rng, grid } = &mut *state;

        let PendingRequests {
            positions: requested,
            reset,
        } = std::mem::take(&mut *self.pending.lock());
        if reset {
            bodies.retain(|v, _| graph.contains(v) || requested.contains_key(v));
            for body in bodies.values_mut() {
                body.velocity = Vector::zeros();
            }
        }
        for (v, position) in &requested {
            bodies.insert(v.clone(), Body::at_rest(*position));
        }

        seed_missing(bodies, rng, nodes, &springs, &params);

        let pinned: Vec<bool> = {
            let set = self.pinned.read();
            nodes.iter().map(|v| set.contains(v)).collect()
        };
        let mut pos: Vec<Point> = Vec::with_capacity(n);
        let mut vel: Vec<Vector> = Vec::with_capacity(n);
        for v in nodes {
            let b = bodies
                .get(v)
                .copied()
                .unwrap_or_else(|| Body::at_rest(Point::origin()));
            pos.push(b.position);
            vel.push(b.velocity);
        }

        grid.assign(&pos);
        let mut next_pos = pos.clone();
        let mut next_vel = vel.clone();
        let mut energy = 0.0f64;
        for i in 0..n {
            if pinned[i] {
                next_vel[i] = Vector::zeros();
                continue;
            }
            let force = net_force(i, &params, &springs, grid, rng, &pos);
            if !geom::is_finite(&force) {
                tracing::warn!(
                    node = ?nodes[i],
                    ?force,
                    "non-finite force; node keeps its state"
                );
                continue;
            }
            let cap = params.max_force / (springs.degree(i).max(1) as f64).sqrt();
            let force = force.cap_magnitude(cap);
            let v = ((vel[i] + force * params.step_time) * params.damping)
                .cap_magnitude(params.max_speed);
            let p = pos[i] + v * params.step_time;
            if !geom::is_finite(&v) || !geom::is_finite(&p.coords) {
                tracing::warn!(
                    node = ?nodes[i],
                    velocity = ?v,
                    "non-finite velocity; node keeps its state"
                );
                continue;
            }
            next_vel[i] = v;
            next_pos[i] = p;
            energy += v.norm_squared();
        }

        // Graph nodes first, in graph order, then bodies kept alive by this step's requests.
        let mut next: NodeMap<V, Body> = NodeMap::default();
        next.reserve(bodies.len());
        for (i, v) in nodes.iter().enumerate() {
            next.insert(
                v.clone(),
                Body {
                    position: next_pos[i],
                    velocity: next_vel[i],
                },
            );
        }
        for (v, b) in bodies.iter() {
            if !next.contains_key(v) && requested.contains_key(v) {
                next.insert(v.clone(), *b);
            }
        }
        *bodies = next;

        let iteration = self.iteration.fetch_add(1, Ordering::AcqRel) + 1;
        self.energy_bits.store(energy.to_bits(), Ordering::Release);
        tracing::debug!(
            iteration,
            energy,
            nodes = n,
            springs = springs.pairs.len(),
            regions = grid.occupied_regions(),
            "spring iteration"
        );
        self.publish(bodies)
    }

    fn iteration(&self) -> u64 {
        self.iteration.load(Ordering::Acquire)
    }

    /// The damping constant in effect; damping is the only cooling mechanism.
    fn cooling_parameter(&self) -> f64 {
        self.params.read().damping
    }

    fn energy_status(&self) -> f64 {
        f64::from_bits(self.energy_bits.load(Ordering::Acquire))
    }

    fn positions(&self) -> NodeMap<V, Point> {
        self.snapshot.read().clone()
    }
}

fn finite_only<V: NodeId>(positions: NodeMap<V, Point>) -> NodeMap<V, Point> {
    positions
        .into_iter()
        .filter(|(v, p)| {
            let ok = geom::is_finite(&p.coords);
            if !ok {
                tracing::warn!(node = ?v, position = ?p, "ignoring non-finite position");
            }
            ok
        })
        .collect()
}

/// Gives every graph node without a body a starting position: the mean of its already placed
/// neighbors plus jitter, or a uniform spot within one spring length of the origin.
fn seed_missing<V: NodeId>(
    bodies: &mut NodeMap<V, Body>,
    rng: &mut StdRng,
    nodes: &NodeSet<V>,
    springs: &Springs,
    params: &SpringParams,
) {
    let reach = params.spring_length;
    let jitter = reach * SEED_JITTER;
    let mut seeded = 0usize;
    for (i, v) in nodes.iter().enumerate() {
        if bodies.contains_key(v) {
            continue;
        }
        let mut sum = Vector::zeros();
        let mut placed = 0usize;
        for &(j, _) in &springs.neighbors[i] {
            if let Some(b) = bodies.get(&nodes[j]) {
                sum += b.position.coords;
                placed += 1;
            }
        }
        let position = if placed > 0 {
            Point::from(sum / placed as f64)
                + geom::vector(rng.gen_range(-jitter..=jitter), rng.gen_range(-jitter..=jitter))
        } else {
            geom::point(rng.gen_range(-reach..=reach), rng.gen_range(-reach..=reach))
        };
        bodies.insert(v.clone(), Body::at_rest(position));
        seeded += 1;
    }
    if seeded > 0 {
        tracing::trace!(seeded, "seeded new nodes");
    }
}

fn net_force(
    i: usize,
    params: &SpringParams,
    springs: &Springs,
    grid: &RegionGrid,
    rng: &mut StdRng,
    pos: &[Point],
) -> Vector {
    let p = pos[i];
    let mut f = Vector::zeros();

    let from_origin = p.coords.norm();
    if from_origin > params.global_min_distance && from_origin > 0.0 {
        let excess = from_origin - params.global_min_distance;
        f -= p.coords * (params.global_constant * excess / from_origin);
    }

    for j in grid.candidates(i) {
        if j == i || (!params.repel_adjacent && springs.are_adjacent(i, j)) {
            continue;
        }
        let delta = p - pos[j];
        let dist = delta.norm();
        if dist > params.max_repulsion_distance {
            continue;
        }
        if dist == 0.0 {
            f += geom::unit(rng.gen_range(0.0..TAU)) * params.max_repulsive_force;
            continue;
        }
        let magnitude = (params.repulsive_constant / (dist * dist)).min(params.max_repulsive_force);
        f += delta * (magnitude / dist);
    }

    for &(j, w) in &springs.neighbors[i] {
        let delta = pos[j] - p;
        let dist = delta.norm();
        if dist == 0.0 {
            continue;
        }
        f += delta * (params.spring_constant * w * (dist - params.spring_length) / dist);
    }

    f
}

#[cfg(test)]
mod tests {
    use super::Springs;
    use selkie_graph::{Edge, SparseGraph};

    #[test]
    fn springs_symmetrize_and_normalize() {
        let g = SparseGraph::weighted(
            true,
            ["a", "b", "c"],
            [
                (Edge::new("a", "b"), 2.0),
                (Edge::new("b", "a"), 4.0),
                (Edge::new("b", "c"), 1.0),
                (Edge::new("c", "c"), 9.0),
            ],
        )
        .unwrap();
        let s = Springs::build::<&str>(&g);
        assert_eq!(s.neighbors[0], vec![(1, 1.0)]);
        assert_eq!(s.neighbors[1], vec![(0, 1.0), (2, 0.25)]);
        assert_eq!(s.degree(2), 1);
        assert!(s.are_adjacent(2, 1));
        assert!(!s.are_adjacent(0, 2));
    }
}
