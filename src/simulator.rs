use glam::DVec2;
use tracing::trace;

use crate::{
    properties::{distance, unit, Body},
    world::World,
};

/// Result of a call to [`Simulator::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// The elapsed time was too large to integrate; nothing changed.
    Skipped,
}

/// Newtonian gravity between every pair of bodies, integrated with an
/// explicit Euler step.
///
/// The simulator only holds constants. All state lives in the [`World`]
/// passed to [`Simulator::step`].
#[derive(Clone, Debug)]
pub struct Simulator {
    gravitational_constant: f64,
    mass_per_radius: f64,
    path_min_distance: f64,
    path_max_points: usize,
    max_elapsed: Option<f64>,
}

impl Simulator {
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::default()
    }

    /// Advances `world` by `elapsed` seconds.
    ///
    /// Forces for every body are computed from the current positions before
    /// any body moves, so no body sees a position already advanced this step.
    pub fn step(&self, world: &mut World, elapsed: f64) -> StepOutcome {
        if let Some(max_elapsed) = self.max_elapsed {
            if elapsed >= max_elapsed {
                trace!(elapsed, max_elapsed, "skipping step");
                return StepOutcome::Skipped;
            }
        }

        let bodies = world.bodies_mut();
        self.calculate_forces(bodies);
        self.apply_forces(bodies, elapsed);
        StepOutcome::Advanced
    }

    /// Mass of `body`, derived from its radius.
    pub fn mass(&self, body: &Body) -> f64 {
        body.radius * self.mass_per_radius
    }

    /// Total momentum of the bodies that are free to move.
    pub fn momentum(&self, world: &World) -> DVec2 {
        world
            .bodies()
            .iter()
            .filter(|body| !body.fixed)
            .map(|body| body.velocity * self.mass(body))
            .sum()
    }

    pub fn kinetic_energy(&self, world: &World) -> f64 {
        world
            .bodies()
            .iter()
            .filter(|body| !body.fixed)
            .map(|body| 0.5 * self.mass(body) * body.velocity.length_squared())
            .sum()
    }

    /// Force `b2` exerts on `b1`. Points from `b1` towards `b2`.
    pub fn gravitational_force(&self, b1: &Body, b2: &Body) -> DVec2 {
        let dist = distance(b1.position, b2.position).max(b1.radius + b2.radius);

        let f = -self.gravitational_constant * (self.mass(b1) * self.mass(b2)) / (dist * dist);

        unit(b1.position - b2.position) * f
    }

    fn calculate_forces(&self, bodies: &mut [Body]) {
        let mut force_vec = vec![DVec2::ZERO; bodies.len()];

        for (i, force) in force_vec.iter_mut().enumerate() {
            let b1 = &bodies[i];
            for (j, b2) in bodies.iter().enumerate() {
                if i != j {
                    *force += self.gravitational_force(b1, b2);
                }
            }
        }

        for (rb, force) in bodies.iter_mut().zip(force_vec) {
            rb.last_force = force;
        }
    }

    fn apply_forces(&self, bodies: &mut [Body], elapsed: f64) {
        for rb in bodies.iter_mut() {
            if rb.fixed {
                continue;
            }

            let acceleration = rb.last_force / self.mass(rb);
            rb.velocity += acceleration * elapsed;
            rb.position += rb.velocity * elapsed;

            rb.record_path(self.path_min_distance, self.path_max_points);
        }
    }
}

/// Builder for `Simulator`
pub struct SimulatorBuilder {
    gravitational_constant: f64,
    mass_per_radius: f64,
    path_min_distance: f64,
    path_max_points: usize,
    max_elapsed: Option<f64>,
}

impl SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Scales every pairwise force.
    pub fn gravitational_constant(mut self, gravitational_constant: f64) -> Self {
        self.gravitational_constant = gravitational_constant;
        self
    }

    /// Mass of a body per unit of radius.
    /// Tuned for how the simulation looks, not for physical accuracy.
    pub fn mass_per_radius(mut self, mass_per_radius: f64) -> Self {
        self.mass_per_radius = mass_per_radius;
        self
    }

    /// How far a body has to travel before a new point is added to its path.
    pub fn path_min_distance(mut self, path_min_distance: f64) -> Self {
        self.path_min_distance = path_min_distance;
        self
    }

    /// How many points a path keeps before dropping the oldest.
    pub fn path_max_points(mut self, path_max_points: usize) -> Self {
        self.path_max_points = path_max_points;
        self
    }

    /// Steps with an elapsed time at or above this many seconds are skipped,
    /// e.g. the first frame after the window was hidden for a while.
    /// `None` integrates every step.
    pub fn max_elapsed(mut self, max_elapsed: Option<f64>) -> Self {
        self.max_elapsed = max_elapsed;
        self
    }

    /// Constructs a instance of `Simulator`
    pub fn build(self) -> Simulator {
        Simulator {
            gravitational_constant: self.gravitational_constant,
            mass_per_radius: self.mass_per_radius,
            path_min_distance: self.path_min_distance,
            path_max_points: self.path_max_points,
            max_elapsed: self.max_elapsed,
        }
    }
}

impl Default for SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    fn default() -> Self {
        Self {
            gravitational_constant: 6.673e-11,
            mass_per_radius: 1e16,
            path_min_distance: 5.0,
            path_max_points: 100,
            max_elapsed: Some(0.1),
        }
    }
}
