use glam::DVec2;
use planets::{simulator::SimulatorBuilder, world::World};

fn main() {
    // Three random planets around a pinned sun
    let mut world = World::with_seed(DVec2::new(1024.0, 768.0), 7);
    world.populate(3);
    world.add_body(Some(DVec2::new(512.0, 384.0)), true);

    // Configure the simulator
    let simulator = SimulatorBuilder::new().max_elapsed(None).build();

    // Run 10k simulation steps at 60 fps
    for _ in 0..10000 {
        simulator.step(&mut world, 1.0 / 60.0);
    }

    for body in world.bodies() {
        println!(
            "{:>10.1} {:>10.1}  r={:.1}  trail={}",
            body.position.x,
            body.position.y,
            body.radius,
            body.path_len()
        );
    }
}
