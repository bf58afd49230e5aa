use crate::error::{Error, Result};

/// Tunables of [`SpringLayout`](super::SpringLayout).
///
/// Distances are in layout units; forces and speeds are per unit of `step_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringParams {
    /// Strength of the pull toward the origin.
    pub global_constant: f64,
    /// The origin pull only acts beyond this distance from the origin.
    pub global_min_distance: f64,
    pub spring_constant: f64,
    /// Natural length of every spring.
    pub spring_length: f64,
    pub repulsive_constant: f64,
    /// Velocity retained per step, in `(0, 1]`.
    pub damping: f64,
    pub step_time: f64,
    pub max_speed: f64,
    /// Net force cap for a degree-1 node; higher degrees get `max_force / sqrt(degree)`.
    pub max_force: f64,
    pub max_repulsive_force: f64,
    /// Pairs farther apart than this do not repel. Also the side of a grid region.
    pub max_repulsion_distance: f64,
    /// Regions per side of the square repulsion grid.
    pub region_count: usize,
    /// Whether nodes joined by an edge also repel each other.
    pub repel_adjacent: bool,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            global_constant: 0.01,
            global_min_distance: 50.0,
            spring_constant: 0.1,
            spring_length: 5.0,
            repulsive_constant: 5.0,
            damping: 0.7,
            step_time: 1.0,
            max_speed: 10.0,
            max_force: 20.0,
            max_repulsive_force: 5.0,
            max_repulsion_distance: 15.0,
            region_count: 16,
            repel_adjacent: true,
        }
    }
}

impl SpringParams {
    pub fn validate(&self) -> Result<()> {
        non_negative("global_constant", self.global_constant)?;
        non_negative("global_min_distance", self.global_min_distance)?;
        non_negative("spring_constant", self.spring_constant)?;
        positive("spring_length", self.spring_length)?;
        non_negative("repulsive_constant", self.repulsive_constant)?;
        positive("step_time", self.step_time)?;
        positive("max_speed", self.max_speed)?;
        positive("max_force", self.max_force)?;
        non_negative("max_repulsive_force", self.max_repulsive_force)?;
        positive("max_repulsion_distance", self.max_repulsion_distance)?;
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(invalid("damping", format!("must lie in (0, 1], got {}", self.damping)));
        }
        if self.region_count == 0 {
            return Err(invalid("region_count", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, reason: String) -> Error {
    Error::InvalidParameter { name, reason }
}

fn non_negative(name: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must be finite and non-negative, got {v}")))
    }
}

fn positive(name: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must be finite and positive, got {v}")))
    }
}
