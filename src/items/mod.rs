//! Item system: potion kinds, equipment slots, and the shop catalog.

pub mod catalog;
pub mod equipment;
pub mod types;

pub use catalog::*;
pub use equipment::*;
pub use types::*;
