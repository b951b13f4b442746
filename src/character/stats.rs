//! Stat block shared by players and monsters.

use crate::core::errors::GameError;
use serde::{Deserialize, Serialize};

/// Name, level, hit points and attack.
///
/// Invariants: `level >= 1`, `max_hp >= 1`, `hp <= max_hp`. Fields are public
/// for serialization; mutate through [`Combatant`] to keep the invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
}

impl CharacterStats {
    /// Creates a stat block at full health.
    pub fn new(name: impl Into<String>, level: u32, max_hp: u32, attack: u32) -> Result<Self, GameError> {
        let stats = Self {
            name: name.into(),
            level,
            hp: max_hp,
            max_hp,
            attack,
        };
        stats.validate()?;
        Ok(stats)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.level == 0 {
            return Err(GameError::InvalidStats("level must be at least 1".to_string()));
        }
        if self.max_hp == 0 {
            return Err(GameError::InvalidStats("max_hp must be positive".to_string()));
        }
        if self.hp > self.max_hp {
            return Err(GameError::InvalidStats(format!(
                "hp {} exceeds max_hp {}",
                self.hp, self.max_hp
            )));
        }
        Ok(())
    }

    /// Sets a new maximum, clamping current hp down if needed.
    pub fn set_max_hp(&mut self, max_hp: u32) {
        self.max_hp = max_hp.max(1);
        self.hp = self.hp.min(self.max_hp);
    }
}

/// Anything that can take part in a fight.
pub trait Combatant {
    fn stats(&self) -> &CharacterStats;
    fn stats_mut(&mut self) -> &mut CharacterStats;

    fn name(&self) -> &str {
        &self.stats().name
    }

    fn is_alive(&self) -> bool {
        self.stats().hp > 0
    }

    /// Applies damage and returns the hp actually lost.
    fn take_damage(&mut self, amount: u32) -> u32 {
        let stats = self.stats_mut();
        let before = stats.hp;
        stats.hp = stats.hp.saturating_sub(amount);
        before - stats.hp
    }

    /// Heals up to max hp and returns the hp actually restored.
    fn heal(&mut self, amount: u32) -> u32 {
        let stats = self.stats_mut();
        let before = stats.hp;
        stats.hp = stats.hp.saturating_add(amount).min(stats.max_hp);
        stats.hp - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy(CharacterStats);

    impl Combatant for Dummy {
        fn stats(&self) -> &CharacterStats {
            &self.0
        }
        fn stats_mut(&mut self) -> &mut CharacterStats {
            &mut self.0
        }
    }

    #[test]
    fn test_new_starts_at_full_health() {
        let stats = CharacterStats::new("Hero", 1, 50, 10).unwrap();
        assert_eq!(stats.hp, 50);
        assert_eq!(stats.max_hp, 50);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(CharacterStats::new("Hero", 0, 50, 10).is_err());
        assert!(CharacterStats::new("Hero", 1, 0, 10).is_err());

        let mut stats = CharacterStats::new("Hero", 1, 50, 10).unwrap();
        stats.hp = 51;
        assert!(stats.validate().is_err());
    }

    #[test]
    fn test_zero_attack_is_valid() {
        assert!(CharacterStats::new("Pacifist", 1, 10, 0).is_ok());
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut dummy = Dummy(CharacterStats::new("Dummy", 1, 30, 5).unwrap());
        assert_eq!(dummy.take_damage(12), 12);
        assert_eq!(dummy.take_damage(100), 18);
        assert_eq!(dummy.stats().hp, 0);
        assert!(!dummy.is_alive());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut dummy = Dummy(CharacterStats::new("Dummy", 1, 30, 5).unwrap());
        dummy.take_damage(10);
        assert_eq!(dummy.heal(25), 10);
        assert_eq!(dummy.stats().hp, 30);
    }

    #[test]
    fn test_set_max_hp_clamps_current() {
        let mut stats = CharacterStats::new("Hero", 1, 100, 10).unwrap();
        stats.set_max_hp(60);
        assert_eq!(stats.hp, 60);
        stats.set_max_hp(80);
        assert_eq!(stats.hp, 60);
    }
}
