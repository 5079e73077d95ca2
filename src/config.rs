//! Scene configuration loaded from TOML.
//!
//! Every key is optional; missing keys fall back to the same defaults as
//! [`SimulatorBuilder`] and [`SpawnSettings`].
//!
//! ```toml
//! [simulation]
//! gravitational_constant = 6.673e-11
//! mass_per_radius = 1e16
//! path_min_distance = 5.0
//! path_max_points = 100
//! max_elapsed = 0.1      # 0 disables skipping of long frames
//!
//! [spawn]
//! initial_bodies = 3
//! radius_min = 30.0
//! radius_max = 50.0
//! max_speed = 50.0
//! seed = 42
//!
//! [window]
//! width = 1024
//! height = 768
//! ```

use std::{fs, path::Path};

use glam::DVec2;
use serde::Deserialize;

use crate::{
    error::{ConfigError, ConfigResult},
    simulator::{Simulator, SimulatorBuilder},
    world::{SpawnSettings, World},
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub gravitational_constant: f64,
    pub mass_per_radius: f64,
    pub path_min_distance: f64,
    pub path_max_points: usize,
    pub max_elapsed: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 6.673e-11,
            mass_per_radius: 1e16,
            path_min_distance: 5.0,
            path_max_points: 100,
            max_elapsed: 0.1,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SpawnConfig {
    pub initial_bodies: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    pub max_speed: f64,
    pub seed: Option<u64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_bodies: 3,
            radius_min: 30.0,
            radius_max: 50.0,
            max_speed: 50.0,
            seed: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

/// Top-level scene file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub simulation: SimulationConfig,
    pub spawn: SpawnConfig,
    pub window: WindowConfig,
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let sim = &self.simulation;
        if !(sim.gravitational_constant.is_finite() && sim.gravitational_constant > 0.0) {
            return Err(invalid("gravitational_constant must be positive"));
        }
        if !(sim.mass_per_radius.is_finite() && sim.mass_per_radius > 0.0) {
            return Err(invalid("mass_per_radius must be positive"));
        }
        if !(sim.path_min_distance >= 0.0) {
            return Err(invalid("path_min_distance must not be negative"));
        }
        if sim.path_max_points == 0 {
            return Err(invalid("path_max_points must be at least 1"));
        }
        if sim.max_elapsed.is_nan() {
            return Err(invalid("max_elapsed must be a number"));
        }

        let spawn = &self.spawn;
        if !(spawn.radius_min > 0.0 && spawn.radius_min < spawn.radius_max) {
            return Err(invalid("radius_min must be positive and below radius_max"));
        }
        if !spawn.radius_max.is_finite() {
            return Err(invalid("radius_max must be finite"));
        }
        if !(spawn.max_speed.is_finite() && spawn.max_speed >= 0.0) {
            return Err(invalid("max_speed must not be negative"));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window dimensions must be non-zero"));
        }
        Ok(())
    }

    pub fn simulator(&self) -> Simulator {
        let sim = &self.simulation;
        let max_elapsed = (sim.max_elapsed > 0.0).then_some(sim.max_elapsed);
        SimulatorBuilder::new()
            .gravitational_constant(sim.gravitational_constant)
            .mass_per_radius(sim.mass_per_radius)
            .path_min_distance(sim.path_min_distance)
            .path_max_points(sim.path_max_points)
            .max_elapsed(max_elapsed)
            .build()
    }

    pub fn spawn_settings(&self) -> SpawnSettings {
        SpawnSettings {
            radius_min: self.spawn.radius_min,
            radius_max: self.spawn.radius_max,
            max_speed: self.spawn.max_speed,
        }
    }

    /// World sized to the window, with the initial bodies already placed.
    pub fn world(&self) -> World {
        let bounds = DVec2::new(self.window.width as f64, self.window.height as f64);
        let world = match self.spawn.seed {
            Some(seed) => World::with_seed(bounds, seed),
            None => World::new(bounds),
        };
        let mut world = world.with_spawn(self.spawn_settings());
        world.populate(self.spawn.initial_bodies);
        world
    }
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::Invalid(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = SceneConfig::from_toml_str("").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.spawn.initial_bodies, 3);
        assert_eq!(config.simulation.path_max_points, 100);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = SceneConfig::from_toml_str(
            r#"
            [simulation]
            gravitational_constant = 1.0

            [spawn]
            seed = 7
            initial_bodies = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.gravitational_constant, 1.0);
        assert_eq!(config.simulation.mass_per_radius, 1e16);
        assert_eq!(config.spawn.seed, Some(7));

        let world = config.world();
        assert_eq!(world.len(), 5);
        assert_eq!(world.bounds(), DVec2::new(1024.0, 768.0));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cases = [
            "[simulation]\ngravitational_constant = -1.0",
            "[simulation]\npath_max_points = 0",
            "[spawn]\nradius_min = 60.0",
            "[spawn]\nmax_speed = -3.0",
            "[window]\nwidth = 0",
        ];
        for case in cases {
            let err = SceneConfig::from_toml_str(case).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{case}: {err}");
        }
    }

    #[test]
    fn syntax_errors_are_parse_errors() {
        let err = SceneConfig::from_toml_str("[simulation\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = SceneConfig::from_toml_str("[spawn]\ncolour = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bundled_scene_parses() {
        let config = SceneConfig::from_toml_str(include_str!("../scenes/drifting.toml")).unwrap();
        assert_eq!(config.spawn.initial_bodies, 5);
        assert_eq!(config.simulation.path_max_points, 200);
        assert_eq!(config.world().bounds(), DVec2::new(1280.0, 800.0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SceneConfig::load("/nonexistent/scene.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn non_positive_max_elapsed_disables_skipping() {
        let config = SceneConfig::from_toml_str("[simulation]\nmax_elapsed = 0.0").unwrap();
        let sim = config.simulator();

        let mut world = World::with_seed(DVec2::new(10.0, 10.0), 0);
        world.insert(
            crate::properties::Body::new(DVec2::ZERO, 1.0).with_velocity(DVec2::new(1.0, 0.0)),
        );
        assert_eq!(
            sim.step(&mut world, 3.0),
            crate::simulator::StepOutcome::Advanced
        );
    }
}
