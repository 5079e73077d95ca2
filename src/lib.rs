//! # Example
//! ```rust
//! use glam::DVec2;
//! use planets::{simulator::Simulator, world::World};
//!
//! let simulator = Simulator::builder().build();
//! let mut world = World::with_seed(DVec2::new(800.0, 600.0), 42);
//! world.populate(3);
//! world.add_body(Some(DVec2::new(400.0, 300.0)), true);
//!
//! for _ in 0..100 {
//!     simulator.step(&mut world, 1.0 / 60.0);
//! }
//! ```

pub mod config;
pub mod error;
pub mod properties;
pub mod renderer;
pub mod simulator;
pub mod world;
