//! Simulation driver: CLI parsing, the generation/tick loop, rendering, and
//! periodic DNA snapshots.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use tracing::{error, info};

use swarm_evo::simulation::config::SimulationConfig;
use swarm_evo::simulation::dna::Dna;
use swarm_evo::simulation::evolution;
use swarm_evo::simulation::organism::Kind;
use swarm_evo::simulation::snapshot::DnaSnapshot;
use swarm_evo::simulation::stats::GenerationStats;
use swarm_evo::simulation::world::World;

mod graphics;

#[derive(Parser, Debug)]
#[command(name = "swarm-evo")]
#[command(about = "Predator/prey swarm evolution")]
struct Args {
    /// Simulation config file (JSON); defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Run without drawing the world.
    #[arg(long)]
    headless: bool,
    /// Load the founding prey generation from a DNA snapshot.
    #[arg(long)]
    prey_dna: Option<PathBuf>,
    /// Load the founding predator generation from a DNA snapshot.
    #[arg(long)]
    pred_dna: Option<PathBuf>,
    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Override the number of generations.
    #[arg(long)]
    generations: Option<u32>,
    /// Directory for DNA snapshots.
    #[arg(long, default_value = ".")]
    snapshot_dir: PathBuf,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Swarm Evolution".to_owned(),
        window_width: 640,
        window_height: 480,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(err) = run(args).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn load_seed_dna(path: Option<&PathBuf>, role: Kind) -> Result<Option<Vec<Dna>>> {
    let Some(path) = path else { return Ok(None) };
    let snapshot = DnaSnapshot::load(path)
        .with_context(|| format!("loading {} DNA from {}", role.as_str(), path.display()))?;
    let dna = snapshot.into_dna(role, path)?;
    if dna.is_empty() {
        anyhow::bail!("snapshot {} holds no organisms", path.display());
    }
    info!(
        role = role.as_str(),
        organisms = dna.len(),
        path = %path.display(),
        "loaded founding DNA"
    );
    Ok(Some(dna))
}

async fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(generations) = args.generations {
        config.evolution.generations = generations;
    }
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let prey_seed = load_seed_dna(args.prey_dna.as_ref(), Kind::Prey)?;
    let pred_seed = load_seed_dna(args.pred_dna.as_ref(), Kind::Predator)?;

    let mut prey = evolution::founding_generation(Kind::Prey, &config, prey_seed, &mut rng);
    let mut predators = evolution::founding_generation(Kind::Predator, &config, pred_seed, &mut rng);

    info!(
        prey = prey.len(),
        predators = predators.len(),
        generations = config.evolution.generations,
        ticks = config.evolution.ticks_per_generation,
        "starting simulation"
    );

    for generation in 0..config.evolution.generations {
        let mut world = World::new(prey, predators);

        for _ in 0..config.evolution.ticks_per_generation {
            world.step(&config)?;

            if !args.headless {
                let stats = GenerationStats::collect(generation, &world);
                graphics::draw_world(&world);
                graphics::draw_stats(&stats.to_string());
                next_frame().await;
            }
        }

        let stats = GenerationStats::collect(generation, &world);
        info!("{stats}");

        let interval = config.evolution.snapshot_interval;
        if interval > 0 && (generation + 1) % interval == 0 {
            for (role, cohort) in [(Kind::Prey, &world.prey), (Kind::Predator, &world.predators)] {
                let path = DnaSnapshot::capture(role, generation, cohort)
                    .save(&args.snapshot_dir)
                    .with_context(|| format!("saving {} DNA snapshot", role.as_str()))?;
                info!(path = %path.display(), "saved DNA snapshot");
            }
        }

        prey = evolution::next_generation(&world.prey, &config, &mut rng)?;
        predators = evolution::next_generation(&world.predators, &config, &mut rng)?;

        if args.headless {
            // Keep the event loop serviced between generations.
            next_frame().await;
        }
    }

    Ok(())
}
