//! Monster catalog, encounter generation, and status effects.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
