use serde::{Deserialize, Serialize};

use crate::monsters::StatusEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    Warrior,
    Mage,
    Rogue,
}

/// Starting numbers and special attack for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassProfile {
    pub base_hp: u32,
    pub base_mana: u32,
    pub base_attack: u32,
    pub special_damage: u32,
    pub special_max_cooldown: u32,
    pub special_mana_cost: u32,
    pub special_name: &'static str,
    /// Status applied to the target when the special attack lands.
    pub special_effect: Option<(StatusEffect, u32)>,
    pub tagline: &'static str,
}

const WARRIOR: ClassProfile = ClassProfile {
    base_hp: 100,
    base_mana: 30,
    base_attack: 20,
    special_damage: 35,
    special_max_cooldown: 5,
    special_mana_cost: 15,
    special_name: "Mighty Slash",
    special_effect: Some((StatusEffect::Stun, crate::core::constants::WARRIOR_STUN_TURNS)),
    tagline: "High health and attack",
};

const MAGE: ClassProfile = ClassProfile {
    base_hp: 80,
    base_mana: 60,
    base_attack: 15,
    special_damage: 50,
    special_max_cooldown: 5,
    special_mana_cost: 20,
    special_name: "Fireball",
    special_effect: None,
    tagline: "Moderate stats, powerful special attack",
};

const ROGUE: ClassProfile = ClassProfile {
    base_hp: 90,
    base_mana: 45,
    base_attack: 18,
    special_damage: 40,
    special_max_cooldown: 4,
    special_mana_cost: 15,
    special_name: "Sneak Attack",
    special_effect: Some((StatusEffect::Poison, crate::core::constants::ROGUE_POISON_TURNS)),
    tagline: "Balanced stats, quick special cooldown",
};

impl PlayerClass {
    pub fn all() -> [PlayerClass; 3] {
        [PlayerClass::Warrior, PlayerClass::Mage, PlayerClass::Rogue]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::Warrior => "Warrior",
            PlayerClass::Mage => "Mage",
            PlayerClass::Rogue => "Rogue",
        }
    }

    pub fn profile(&self) -> &'static ClassProfile {
        match self {
            PlayerClass::Warrior => &WARRIOR,
            PlayerClass::Mage => &MAGE,
            PlayerClass::Rogue => &ROGUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warrior_profile() {
        let p = PlayerClass::Warrior.profile();
        assert_eq!(
            (p.base_hp, p.base_mana, p.base_attack, p.special_damage),
            (100, 30, 20, 35)
        );
        assert_eq!((p.special_max_cooldown, p.special_mana_cost), (5, 15));
    }

    #[test]
    fn test_mage_has_strongest_special() {
        let mage = PlayerClass::Mage.profile();
        for class in [PlayerClass::Warrior, PlayerClass::Rogue] {
            assert!(mage.special_damage > class.profile().special_damage);
        }
        assert_eq!(mage.special_mana_cost, 20);
    }

    #[test]
    fn test_rogue_has_fastest_cooldown() {
        let rogue = PlayerClass::Rogue.profile();
        assert_eq!(rogue.special_max_cooldown, 4);
        assert_eq!(rogue.special_effect.map(|(e, _)| e), Some(StatusEffect::Poison));
    }
}
