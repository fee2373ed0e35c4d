//! tactics_sim - Headless seeded duel between two AI combatants

mod legality;
mod resolver;
mod simulation;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulation::DuelSimulation;
use std::path::PathBuf;
use tactics_core::config::{load_move_set, load_tuning, ConfigError};
use tactics_core::store::{save_state, StateError};
use tactics_core::{default_moves, default_personalities, Combatant, TacticsEngine};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Simulation error
#[derive(Error, Debug)]
enum SimError {
    #[error("Unknown personality preset '{0}' (available: {1})")]
    UnknownPreset(String, String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    State(#[from] StateError),
}

#[derive(Parser, Debug)]
#[command(name = "tactics_sim", about = "Run a seeded duel between two AI combatants")]
struct Args {
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum number of turns
    #[arg(long, default_value_t = 60)]
    turns: u32,

    /// Personality preset of the first combatant
    #[arg(long, default_value = "berserker")]
    attacker: String,

    /// Personality preset of the second combatant
    #[arg(long, default_value = "sentinel")]
    defender: String,

    /// Tuning TOML (defaults built in)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Move set TOML (defaults built in)
    #[arg(long)]
    moves: Option<PathBuf>,

    /// Directory to write both combatants' learned state as JSON
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run(Args::parse()) {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let engine = match &args.tuning {
        Some(path) => TacticsEngine::with_tuning(load_tuning(path)?)?,
        None => TacticsEngine::new(),
    };
    let moves = match &args.moves {
        Some(path) => load_move_set(path)?,
        None => default_moves(),
    };

    let presets = default_personalities();
    let preset = |name: &str| {
        presets.get(name).cloned().ok_or_else(|| {
            let mut names: Vec<&str> = presets.keys().map(String::as_str).collect();
            names.sort_unstable();
            SimError::UnknownPreset(name.to_string(), names.join(", "))
        })
    };

    let mut first = Combatant::new(args.attacker.clone()).with_personality(preset(&args.attacker)?);
    let mut second = Combatant::new(args.defender.clone()).with_personality(preset(&args.defender)?);
    if first.name == second.name {
        first.name.push_str("_a");
        second.name.push_str("_b");
    }

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let result = DuelSimulation::run(&engine, &moves, &mut first, &mut second, args.turns, &mut rng);

    match &result.winner {
        Some(winner) => tracing::info!("{} wins after {} turns", winner, result.turns),
        None => tracing::info!("No winner after {} turns", result.turns),
    }
    for c in [&first, &second] {
        tracing::info!(
            "{}: {:.0} damage dealt, aggression {:.2}, creativity {:.2}, risk {:.2}",
            c.name,
            result.damage_by(&c.name),
            c.personality.aggression,
            c.personality.creativity,
            c.personality.risk_tolerance
        );
    }
    tracing::info!("{} personality drifts", result.drift_count());

    if let Some(dir) = &args.save {
        std::fs::create_dir_all(dir).map_err(StateError::from)?;
        for c in [&first, &second] {
            let path = dir.join(format!("{}.json", c.name));
            save_state(&path, &c.state())?;
            tracing::info!("Saved {} to {}", c.name, path.display());
        }
    }

    Ok(())
}
