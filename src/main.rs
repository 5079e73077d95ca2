use std::path::PathBuf;

use clap::Parser;
use planets::{config::SceneConfig, renderer::Renderer, simulator::StepOutcome};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Planets pulling on each other. Click to pin a new one in place.
#[derive(Parser, Debug)]
#[command(name = "planets", version, about)]
struct Cli {
    /// Scene file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for body placement, overrides the scene file.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of bodies placed at startup, overrides the scene file.
    #[arg(long)]
    bodies: Option<usize>,

    /// Run without a window and log the final state.
    #[arg(long)]
    headless: bool,

    /// Steps to run in headless mode.
    #[arg(long, default_value_t = 600)]
    steps: usize,

    /// Seconds per headless step.
    #[arg(long, default_value_t = 0.016, value_parser = parse_elapsed)]
    dt: f64,
}

fn parse_elapsed(s: &str) -> Result<f64, String> {
    let dt: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !(dt.is_finite() && dt >= 0.0) {
        return Err(format!("`{s}` is not a finite, non-negative number of seconds"));
    }
    Ok(dt)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("planets=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.spawn.seed = Some(seed);
    }
    if let Some(bodies) = cli.bodies {
        config.spawn.initial_bodies = bodies;
    }
    config.validate()?;

    let simulator = config.simulator();
    let mut world = config.world();
    info!(bodies = world.len(), seed = ?config.spawn.seed, "scene ready");

    if !cli.headless {
        Renderer::new(simulator, world).create_window()?;
        return Ok(());
    }

    let mut skipped = 0;
    for _ in 0..cli.steps {
        if simulator.step(&mut world, cli.dt) == StepOutcome::Skipped {
            skipped += 1;
        }
    }
    if skipped > 0 {
        warn!(skipped, "steps exceeded max_elapsed and were skipped");
    }

    for (i, body) in world.bodies().iter().enumerate() {
        info!(
            index = i,
            x = body.position.x,
            y = body.position.y,
            vx = body.velocity.x,
            vy = body.velocity.y,
            radius = body.radius,
            fixed = body.fixed,
            trail = body.path_len(),
            "body"
        );
    }
    let momentum = simulator.momentum(&world);
    info!(
        px = momentum.x,
        py = momentum.y,
        kinetic_energy = simulator.kinetic_energy(&world),
        "totals"
    );

    Ok(())
}
