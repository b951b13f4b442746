//! Ember Quest - a turn-based text RPG.
//!
//! The library holds every rule of the game so the binary, the balance
//! simulator and the tests share one implementation. Nothing in here reads
//! stdin or writes stdout except through [`ui::Frontend`].

pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod monsters;
pub mod shop;
pub mod simulator;
pub mod ui;
