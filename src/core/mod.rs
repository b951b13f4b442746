//! Game-wide constants, errors, configuration, and the session loop.

pub mod config;
pub mod constants;
pub mod errors;
pub mod game_loop;

pub use config::*;
pub use errors::*;
pub use game_loop::*;
