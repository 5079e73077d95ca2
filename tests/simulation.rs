use glam::DVec2;
use planets::{
    config::SceneConfig,
    properties::Body,
    simulator::{Simulator, StepOutcome},
    world::World,
};

const G: f64 = 6.673e-11;

/// Empty world for bodies placed by hand.
fn empty_world() -> World {
    World::with_seed(DVec2::new(1000.0, 1000.0), 42)
}

fn two_body_world(dist: f64, radius: f64, velocity: DVec2) -> World {
    let mut world = empty_world();
    world.insert(Body::new(DVec2::new(0.0, 0.0), radius).with_velocity(velocity));
    world.insert(Body::new(DVec2::new(dist, 0.0), radius).with_velocity(-velocity));
    world
}

#[test]
fn momentum_is_conserved_between_equal_bodies() {
    let simulator = Simulator::builder().build();
    let mut world = two_body_world(300.0, 40.0, DVec2::new(0.0, 20.0));

    let before = simulator.momentum(&world);
    let scale = simulator.mass(&world.bodies()[0]) * 20.0;

    for _ in 0..2000 {
        simulator.step(&mut world, 1.0 / 60.0);
    }

    let after = simulator.momentum(&world);
    assert!(
        (after - before).length() <= 1e-9 * scale,
        "momentum drifted from {before} to {after}"
    );
    // the bodies actually interacted
    assert_ne!(world.bodies()[0].velocity, DVec2::new(0.0, 20.0));
}

#[test]
fn fixed_body_never_moves() {
    let simulator = Simulator::builder().build();
    let mut world = empty_world();
    let anchor = DVec2::new(500.0, 500.0);
    world.insert(Body::new(anchor, 50.0).fixed(true));
    world.insert(Body::new(DVec2::new(700.0, 500.0), 30.0).with_velocity(DVec2::new(0.0, 40.0)));

    for _ in 0..1000 {
        simulator.step(&mut world, 0.02);
        let fixed = &world.bodies()[0];
        assert_eq!(fixed.position, anchor);
        assert_eq!(fixed.velocity, DVec2::ZERO);
        assert_eq!(fixed.path_len(), 1);
    }
    assert_ne!(world.bodies()[1].position, DVec2::new(700.0, 500.0));
}

#[test]
fn zero_step_changes_nothing() {
    let simulator = Simulator::builder().build();
    let mut world = empty_world();
    world.populate(5);
    for _ in 0..30 {
        simulator.step(&mut world, 0.05);
    }
    let before = world.clone();

    assert_eq!(simulator.step(&mut world, 0.0), StepOutcome::Advanced);

    for (a, b) in before.bodies().iter().zip(world.bodies()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert!(a.path().eq(b.path()));
    }
}

#[test]
fn coincident_bodies_get_finite_force() {
    let simulator = Simulator::builder().build();
    let mut world = empty_world();
    world.insert(Body::new(DVec2::new(10.0, 10.0), 30.0));
    world.insert(Body::new(DVec2::new(10.0, 10.0), 45.0));

    simulator.step(&mut world, 0.05);

    for body in world.bodies() {
        assert!(body.last_force.is_finite());
        assert!(!body.last_force.is_nan());
        assert!(body.position.is_finite());
        assert!(body.velocity.is_finite());
    }
}

#[test]
fn path_waits_for_min_distance() {
    let simulator = Simulator::builder().build();
    let mut world = empty_world();
    // alone, so it drifts at a constant 10 units/s: 0.5 units per step
    world.insert(Body::new(DVec2::ZERO, 10.0).with_velocity(DVec2::new(10.0, 0.0)));

    for _ in 0..9 {
        simulator.step(&mut world, 0.05);
    }
    assert_eq!(world.bodies()[0].path_len(), 1);

    for _ in 0..2 {
        simulator.step(&mut world, 0.05);
    }
    assert_eq!(world.bodies()[0].path_len(), 2);
    let last = *world.bodies()[0].path().last().unwrap();
    assert!((last.x - 5.5).abs() < 1e-9);
}

#[test]
fn path_is_capped() {
    let simulator = Simulator::builder().build();
    let mut world = empty_world();
    world.insert(Body::new(DVec2::ZERO, 10.0).with_velocity(DVec2::new(200.0, 0.0)));

    for _ in 0..5000 {
        simulator.step(&mut world, 0.05);
        assert!(world.bodies()[0].path_len() <= 100);
    }

    let body = &world.bodies()[0];
    assert_eq!(body.path_len(), 100);
    let newest = *body.path().last().unwrap();
    assert_eq!(newest, body.position);
}

#[test]
fn two_bodies_pull_on_each_other() {
    let simulator = Simulator::builder().max_elapsed(None).build();
    let mut world = two_body_world(100.0, 40.0, DVec2::ZERO);

    assert_eq!(simulator.step(&mut world, 1.0), StepOutcome::Advanced);

    let m = 40.0 * 1e16;
    assert_eq!(simulator.mass(&world.bodies()[0]), m);
    let expected = G * m / (100.0 * 100.0);
    assert!((expected - 2.6692e3).abs() < 1.0);

    let left = &world.bodies()[0];
    let right = &world.bodies()[1];
    assert!(left.velocity.x > 0.0);
    assert!(right.velocity.x < 0.0);
    assert_eq!(left.velocity.y, 0.0);
    assert!((left.velocity.x - expected).abs() < 1e-6 * expected);
    assert!((right.velocity.x + expected).abs() < 1e-6 * expected);
}

#[test]
fn long_frames_are_dropped() {
    let simulator = Simulator::builder().build();
    let mut world = two_body_world(100.0, 40.0, DVec2::new(5.0, 5.0));
    let before = world.clone();

    assert_eq!(simulator.step(&mut world, 0.25), StepOutcome::Skipped);

    for (a, b) in before.bodies().iter().zip(world.bodies()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.last_force, b.last_force);
    }
}

#[test]
fn clicked_bodies_are_anchors() {
    let simulator = Simulator::builder().build();
    let mut world = empty_world();
    world.populate(3);
    let pinned = world.add_body(Some(DVec2::new(250.0, 250.0)), true);

    for _ in 0..100 {
        simulator.step(&mut world, 1.0 / 60.0);
    }

    assert_eq!(world.len(), 4);
    assert_eq!(world.bodies()[pinned].position, DVec2::new(250.0, 250.0));
}

#[test]
fn zero_step_keeps_path_with_zero_min_distance() {
    let config = SceneConfig::from_toml_str("[simulation]\npath_min_distance = 0.0").unwrap();
    let simulator = config.simulator();
    let mut world = empty_world();
    world.insert(Body::new(DVec2::new(100.0, 100.0), 30.0));

    simulator.step(&mut world, 0.0);
    simulator.step(&mut world, 0.0);
    assert_eq!(world.bodies()[0].path_len(), 1);
}
