//! Game balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of characters through the real combat engine, shop and
//! progression code to measure:
//! - Win, flee and death rates
//! - Battles needed per level
//! - Potion and gold consumption

mod config;
mod report;
mod runner;

pub use config::{SimConfig, Strategy};
pub use report::{RunStats, SimReport};
pub use runner::{choose_action, run_simulation, simulate_single_run};
