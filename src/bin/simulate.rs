//! Game balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 warriors to level 10
//!   cargo run --bin simulate -- -n 200 --class mage   # 200 mages
//!   cargo run --bin simulate -- --seed 42 --json      # Reproducible, with JSON output

use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};

use ember_quest::character::PlayerClass;
use ember_quest::simulator::{run_simulation, SimConfig, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassArg {
    Warrior,
    Mage,
    Rogue,
}

impl From<ClassArg> for PlayerClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Warrior => PlayerClass::Warrior,
            ClassArg::Mage => PlayerClass::Mage,
            ClassArg::Rogue => PlayerClass::Rogue,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Aggressive,
    Cautious,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Aggressive => Strategy::Aggressive,
            StrategyArg::Cautious => Strategy::Cautious,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Ember Quest balance simulator")]
struct Args {
    /// Number of simulated characters
    #[arg(short = 'n', long = "runs", default_value_t = 1000)]
    runs: u32,

    /// Base seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "warrior")]
    class: ClassArg,

    #[arg(long, value_enum, default_value = "cautious")]
    strategy: StrategyArg,

    /// Level a character must reach for the run to count as complete
    #[arg(long, default_value_t = 10)]
    target_level: u32,

    #[arg(long, default_value_t = 500)]
    max_battles: u32,

    /// Print the average battle count at which each level was reached
    #[arg(short, long)]
    levels: bool,

    /// Also write the report as sim_report_<timestamp>.json
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v per-run summaries)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<&Args> for SimConfig {
    fn from(args: &Args) -> Self {
        SimConfig {
            num_runs: args.runs,
            seed: args.seed,
            class: args.class.into(),
            strategy: args.strategy.into(),
            target_level: args.target_level,
            max_battles_per_run: args.max_battles,
            verbosity: 1 + args.verbose,
            ..SimConfig::default()
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = SimConfig::from(&args);

    let level = if args.verbose > 0 {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              EMBER QUEST BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Class:          {}", config.class.name());
    println!("  Strategy:       {}", config.strategy.name());
    println!("  Target Level:   {}", config.target_level);
    println!("  Max Battles:    {}", config.max_battles_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if args.levels {
        println!("{}", report.level_curve_text());
    }

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report {}: {}", filename, e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}
