//! Combat system types and logic.

pub mod logic;
pub mod math;
pub mod rewards;
pub mod types;

pub use logic::*;
pub use rewards::*;
pub use types::*;
