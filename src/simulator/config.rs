//! Simulation configuration.

use crate::character::PlayerClass;

/// How the simulated player picks combat actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Special attack whenever available, otherwise regular attacks.
    Aggressive,
    /// Like aggressive, but drinks potions when low and buys more in town.
    Cautious,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Aggressive => "aggressive",
            Strategy::Cautious => "cautious",
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated characters
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub class: PlayerClass,

    pub strategy: Strategy,

    /// A run succeeds when the character reaches this level
    pub target_level: u32,

    /// Battles before a run is counted as timed out
    pub max_battles_per_run: u32,

    /// Action attempts per battle before it is abandoned
    pub max_actions_per_battle: u32,

    /// Health fraction below which a cautious player drinks a potion
    pub potion_threshold: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            class: PlayerClass::Warrior,
            strategy: Strategy::Cautious,
            target_level: 10,
            max_battles_per_run: 500,
            max_actions_per_battle: 200,
            potion_threshold: 0.35,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, seeded config for quick balance checks.
    pub fn quick(class: PlayerClass) -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            class,
            target_level: 5,
            ..Default::default()
        }
    }
}
