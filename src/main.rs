//! Binary entrypoint: parses the command line, sets up logging, and runs a
//! console session.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ember_quest::character::SaveManager;
use ember_quest::core::{Cli, Game, GameConfig, SessionEnd};
use ember_quest::ui::ConsoleFrontend;

fn main() -> ExitCode {
    let config = GameConfig::from(Cli::parse());
    init_logging(&config);
    info!("Starting Ember Quest v{}", env!("CARGO_PKG_VERSION"));

    match run(&config) {
        Ok(end) => {
            info!("session ended: {:?}", end);
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &GameConfig) -> io::Result<SessionEnd> {
    let save_dir = config
        .resolve_save_dir()
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e.to_string()))?;
    let saves = SaveManager::new(&save_dir).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    info!("save directory: {}", save_dir.display());

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(ConsoleFrontend::new(), rng, saves);
    game.run()
}

fn init_logging(config: &GameConfig) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.log_level());
    builder.parse_default_env();

    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "{} [{}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.args()
        )
    });

    if let Some(path) = &config.log_file {
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("could not open log file {}: {}", path.display(), e),
        }
    }

    builder.init();
}
