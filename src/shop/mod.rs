//! The merchant: potion and equipment purchases.

pub mod logic;

pub use logic::*;
