//! Pure combat math shared by the engine and the balance simulator.

use rand::Rng;

use crate::core::constants::{POISON_DAMAGE_DIVISOR, REGENERATION_HEAL_DIVISOR};

/// Draws a variance in `-spread..=spread`.
pub fn roll_variance(spread: i64, rng: &mut impl Rng) -> i64 {
    if spread <= 0 {
        return 0;
    }
    rng.gen_range(-spread..=spread)
}

/// Base damage plus variance, never below zero.
pub fn apply_variance(base: u32, variance: i64) -> u32 {
    (base as i64 + variance).max(0) as u32
}

/// `value * percent / 100`, rounded down.
pub fn scale_percent(value: u32, percent: u32) -> u32 {
    (value as u64 * percent as u64 / 100) as u32
}

/// Rolls 1..=100 against `chance_percent`.
pub fn roll_escape(chance_percent: u32, rng: &mut impl Rng) -> bool {
    rng.gen_range(1..=100) <= chance_percent
}

pub fn poison_damage(max_hp: u32) -> u32 {
    (max_hp / POISON_DAMAGE_DIVISOR).max(1)
}

pub fn regeneration_heal(max_hp: u32) -> u32 {
    (max_hp / REGENERATION_HEAL_DIVISOR).max(1)
}
