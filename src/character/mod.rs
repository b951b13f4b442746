//! Player character: shared stat block, classes, skills, and persistence.

pub mod class;
pub mod player;
pub mod save;
pub mod skills;
pub mod stats;

pub use class::*;
pub use player::*;
pub use save::*;
pub use skills::*;
pub use stats::*;
