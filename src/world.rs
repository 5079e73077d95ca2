use glam::DVec2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::properties::{Body, Color};

/// How randomly spawned bodies are sized and launched.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSettings {
    pub radius_min: f64,
    pub radius_max: f64,
    pub max_speed: f64,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            radius_min: 30.0,
            radius_max: 50.0,
            max_speed: 50.0,
        }
    }
}

/// State of one simulation: the bodies and everything needed to spawn more.
///
/// Owned by the caller and handed to [`crate::simulator::Simulator::step`].
/// Bodies are only ever appended.
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    bounds: DVec2,
    spawn: SpawnSettings,
    rng: StdRng,
}

impl World {
    /// Empty world covering `(0, 0)..bounds`, seeded from entropy.
    pub fn new(bounds: DVec2) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Empty world with a reproducible random sequence.
    pub fn with_seed(bounds: DVec2, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: DVec2, rng: StdRng) -> Self {
        Self {
            bodies: vec![],
            bounds,
            spawn: SpawnSettings::default(),
            rng,
        }
    }

    pub fn with_spawn(mut self, spawn: SpawnSettings) -> Self {
        self.spawn = spawn;
        self
    }

    /// Adds `count` free bodies at random positions.
    pub fn populate(&mut self, count: usize) {
        for _ in 0..count {
            self.add_body(None, false);
        }
    }

    /// Adds a body with random radius, velocity and colors.
    /// Without a `position` it lands somewhere inside the bounds.
    /// Returns the index of the new body.
    pub fn add_body(&mut self, position: Option<DVec2>, fixed: bool) -> usize {
        let position = position.unwrap_or_else(|| {
            DVec2::new(
                self.rng.gen::<f64>() * self.bounds.x,
                self.rng.gen::<f64>() * self.bounds.y,
            )
        });

        let radius = random_between(&mut self.rng, self.spawn.radius_min, self.spawn.radius_max);
        let max_speed = self.spawn.max_speed;
        let velocity = DVec2::new(
            random_between(&mut self.rng, -max_speed, max_speed),
            random_between(&mut self.rng, -max_speed, max_speed),
        );
        let color = Color::random(&mut self.rng);
        let path_color = Color::random(&mut self.rng);

        let body = Body::new(position, radius)
            .with_velocity(velocity)
            .with_colors(color, path_color)
            .fixed(fixed);

        debug!(
            x = position.x,
            y = position.y,
            radius,
            fixed,
            "spawned body"
        );
        self.insert(body)
    }

    /// Appends a fully specified body and returns its index.
    pub fn insert(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    /// Changes the area used for random placement. Existing bodies stay put.
    pub fn resize(&mut self, bounds: DVec2) {
        self.bounds = bounds;
    }

    pub fn average_position(&self) -> Option<DVec2> {
        if self.bodies.is_empty() {
            return None;
        }

        let mut avg = DVec2::ZERO;
        for body in self.bodies.iter() {
            avg += body.position;
        }

        Some(avg / self.bodies.len() as f64)
    }
}

// gen_range panics on an empty range, which max_speed = 0 produces.
fn random_between<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low < high {
        rng.gen_range(low..high)
    } else {
        low
    }
}
