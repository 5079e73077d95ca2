use std::{collections::VecDeque, fmt};

use glam::DVec2;
use rand::Rng;

/// Smallest length used for distances and vector normalization.
/// Coincident bodies would otherwise divide by zero.
pub const DISTANCE_EPSILON: f64 = 1e-9;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GREY: Color = Color::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// Color as normalized `[r, g, b, a]` for the GPU.
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// A point mass rendered as a disc.
///
/// The radius doubles as the mass (scaled by the simulator's mass constant)
/// and as the minimum separation to any other body.
#[derive(Debug, Clone)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub fixed: bool,
    pub last_force: DVec2,
    pub color: Color,
    pub path_color: Color,
    path: VecDeque<DVec2>,
}

impl Body {
    pub fn new(position: DVec2, radius: f64) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            radius,
            fixed: false,
            last_force: DVec2::ZERO,
            color: Color::WHITE,
            path_color: Color::GREY,
            path: VecDeque::from([position]),
        }
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_colors(mut self, color: Color, path_color: Color) -> Self {
        self.color = color;
        self.path_color = path_color;
        self
    }

    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Recorded trail, oldest point first.
    pub fn path(&self) -> impl ExactSizeIterator<Item = &DVec2> + DoubleEndedIterator {
        self.path.iter()
    }

    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Appends the current position to the trail if it moved more than
    /// `min_distance` away from the last recorded point, then evicts the
    /// oldest points beyond `max_points`.
    pub fn record_path(&mut self, min_distance: f64, max_points: usize) {
        let moved = match self.path.back() {
            Some(last) => last.distance(self.position) > min_distance,
            None => true,
        };

        if moved {
            self.path.push_back(self.position);
        }

        while self.path.len() > max_points {
            self.path.pop_front();
        }
    }
}

/// Distance between two points, never exactly zero.
pub fn distance(p1: DVec2, p2: DVec2) -> f64 {
    let dist = p1.distance(p2);
    if dist != 0.0 {
        dist
    } else {
        DISTANCE_EPSILON
    }
}

/// Unit vector of `v`. A zero vector stays zero instead of becoming NaN.
pub fn unit(v: DVec2) -> DVec2 {
    let length = v.length();
    let length = if length != 0.0 {
        length
    } else {
        DISTANCE_EPSILON
    };
    v / length
}
