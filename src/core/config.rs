//! Command-line options and the runtime configuration built from them.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::character::save::SaveManager;
use crate::core::errors::SaveError;

#[derive(Debug, Parser)]
#[command(name = "ember-quest")]
#[command(about = "A turn-based text adventure: fight monsters, shop, level up")]
#[command(version)]
pub struct Cli {
    /// Directory for save files (defaults to the platform data directory)
    #[arg(long, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write log output to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub save_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub verbosity: u8,
    pub log_file: Option<PathBuf>,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            save_dir: cli.save_dir,
            seed: cli.seed,
            verbosity: cli.verbose,
            log_file: cli.log_file,
        }
    }
}

impl GameConfig {
    /// The explicit save directory, or the platform default.
    pub fn resolve_save_dir(&self) -> Result<PathBuf, SaveError> {
        match &self.save_dir {
            Some(dir) => Ok(dir.clone()),
            None => SaveManager::default_dir(),
        }
    }

    /// Log level for the configured verbosity. Warnings only by default so
    /// log lines stay out of the game text.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
