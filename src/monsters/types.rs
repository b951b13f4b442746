use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::character::stats::{CharacterStats, Combatant};
use crate::core::constants::BOSS_REWARD_MULTIPLIER;
use crate::core::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn stat_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.2,
            Rarity::Rare => 1.4,
            Rarity::Legendary => 1.7,
        }
    }

    pub fn reward_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.3,
            Rarity::Rare => 1.6,
            Rarity::Legendary => 2.0,
        }
    }

    /// Name prefix for non-boss monsters of this tier.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Rarity::Common => None,
            Rarity::Uncommon => Some("Elite"),
            Rarity::Rare => Some("Dire"),
            Rarity::Legendary => Some("Legendary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusEffect {
    Poison,
    Regeneration,
    Stun,
}

impl StatusEffect {
    pub fn name(&self) -> &'static str {
        match self {
            StatusEffect::Poison => "Poison",
            StatusEffect::Regeneration => "Regeneration",
            StatusEffect::Stun => "Stun",
        }
    }
}

/// Monster special abilities, resolved by the combat engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterAbility {
    /// Replaces the basic attack with one dealing `percent`% damage.
    PowerStrike { percent: u32 },
    /// Permanently raises attack by `bonus`, then attacks normally.
    Enrage { bonus: u32 },
    /// Applies Regeneration to itself for `turns`, then attacks normally.
    Regenerate { turns: u32 },
    /// Replaces the basic attack; heals for `percent`% of damage dealt.
    LifeDrain { percent: u32 },
}

impl MonsterAbility {
    /// Whether the basic attack still happens after the ability.
    pub fn keeps_basic_attack(&self) -> bool {
        matches!(
            self,
            MonsterAbility::Enrage { .. } | MonsterAbility::Regenerate { .. }
        )
    }
}

/// A special ability and the chance it fires when off cooldown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilitySpec {
    pub name: &'static str,
    pub ability: MonsterAbility,
    pub trigger_chance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Goblin,
    Orc,
    Skeleton,
    Wolf,
    Bandit,
    Troll,
    DarkKnight,
    DragonWhelp,
    AncientDragon,
    LichKing,
    DemonLord,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterType {
    pub kind: MonsterKind,
    pub name: &'static str,
    pub description: &'static str,
    pub base_hp: u32,
    pub base_attack: u32,
    pub ability: Option<AbilitySpec>,
    pub is_boss: bool,
}

pub const REGULAR_MONSTERS: [MonsterKind; 8] = [
    MonsterKind::Goblin,
    MonsterKind::Orc,
    MonsterKind::Skeleton,
    MonsterKind::Wolf,
    MonsterKind::Bandit,
    MonsterKind::Troll,
    MonsterKind::DarkKnight,
    MonsterKind::DragonWhelp,
];

pub const BOSS_MONSTERS: [MonsterKind; 3] = [
    MonsterKind::AncientDragon,
    MonsterKind::LichKing,
    MonsterKind::DemonLord,
];

pub const BOSS_TITLES: [&str; 5] = [
    "Dread",
    "Ancient Tyrant",
    "Cursed",
    "Overlord",
    "World-Ender",
];

fn ability(name: &'static str, ability: MonsterAbility, trigger_chance: f64) -> Option<AbilitySpec> {
    Some(AbilitySpec {
        name,
        ability,
        trigger_chance,
    })
}

impl MonsterKind {
    pub fn info(&self) -> MonsterType {
        let (name, description, base_hp, base_attack, ability, is_boss) = match self {
            MonsterKind::Goblin => (
                "Goblin",
                "A small, green creature with sharp teeth and beady eyes.",
                30,
                8,
                ability("Dirty Stab", MonsterAbility::PowerStrike { percent: 150 }, 0.15),
                false,
            ),
            MonsterKind::Orc => (
                "Orc",
                "A large, brutish humanoid with massive muscles and crude weapons.",
                45,
                12,
                ability("Battle Rage", MonsterAbility::Enrage { bonus: 3 }, 0.15),
                false,
            ),
            MonsterKind::Skeleton => (
                "Skeleton",
                "An undead warrior, bones held together by dark magic.",
                35,
                10,
                ability("Reassemble", MonsterAbility::Regenerate { turns: 2 }, 0.15),
                false,
            ),
            MonsterKind::Wolf => (
                "Wolf",
                "A fierce predator with glowing eyes and sharp fangs.",
                40,
                11,
                ability("Savage Bite", MonsterAbility::PowerStrike { percent: 140 }, 0.20),
                false,
            ),
            MonsterKind::Bandit => (
                "Bandit",
                "A human outlaw armed with stolen weapons and armor.",
                50,
                14,
                ability("Cheap Shot", MonsterAbility::PowerStrike { percent: 130 }, 0.20),
                false,
            ),
            MonsterKind::Troll => (
                "Troll",
                "A massive creature with incredible regenerative abilities.",
                70,
                16,
                ability("Regrowth", MonsterAbility::Regenerate { turns: 3 }, 0.25),
                false,
            ),
            MonsterKind::DarkKnight => (
                "Dark Knight",
                "A fallen warrior clad in cursed black armor.",
                65,
                18,
                ability("Soul Drain", MonsterAbility::LifeDrain { percent: 50 }, 0.20),
                false,
            ),
            MonsterKind::DragonWhelp => (
                "Dragon Whelp",
                "A young dragon with fiery breath and sharp claws.",
                80,
                20,
                ability("Fire Breath", MonsterAbility::PowerStrike { percent: 180 }, 0.20),
                false,
            ),
            MonsterKind::AncientDragon => (
                "Ancient Dragon",
                "A colossal wyrm whose scales have turned aside a thousand blades.",
                150,
                30,
                ability("Inferno", MonsterAbility::PowerStrike { percent: 200 }, 0.30),
                true,
            ),
            MonsterKind::LichKing => (
                "Lich King",
                "A sorcerer who traded his mortality for dominion over the dead.",
                130,
                26,
                ability("Death Siphon", MonsterAbility::LifeDrain { percent: 75 }, 0.30),
                true,
            ),
            MonsterKind::DemonLord => (
                "Demon Lord",
                "A towering fiend wreathed in hellfire and fury.",
                160,
                32,
                ability("Infernal Fury", MonsterAbility::Enrage { bonus: 6 }, 0.30),
                true,
            ),
        };

        MonsterType {
            kind: *self,
            name,
            description,
            base_hp,
            base_attack,
            ability,
            is_boss,
        }
    }
}

/// A monster in a single encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub character: CharacterStats,
    pub kind: MonsterKind,
    pub rarity: Rarity,
    pub is_boss: bool,
    /// Active effects and their remaining turns.
    pub status_effects: BTreeMap<StatusEffect, u32>,
    pub ability: Option<AbilitySpec>,
    pub special_cooldown: u32,
}

impl Combatant for Monster {
    fn stats(&self) -> &CharacterStats {
        &self.character
    }

    fn stats_mut(&mut self) -> &mut CharacterStats {
        &mut self.character
    }
}

impl Monster {
    /// A common monster of `kind` with explicit stats and the kind's ability.
    pub fn new(kind: MonsterKind, level: u32, max_hp: u32, attack: u32) -> Result<Self, GameError> {
        let info = kind.info();
        Ok(Self {
            character: CharacterStats::new(info.name, level, max_hp, attack)?,
            kind,
            rarity: Rarity::Common,
            is_boss: info.is_boss,
            status_effects: BTreeMap::new(),
            ability: info.ability,
            special_cooldown: 0,
        })
    }

    pub fn without_ability(mut self) -> Self {
        self.ability = None;
        self
    }

    pub fn description(&self) -> &'static str {
        self.kind.info().description
    }

    pub fn attack(&self) -> u32 {
        self.character.attack
    }

    pub fn hp(&self) -> u32 {
        self.character.hp
    }

    /// Multiplier applied to victory XP and gold.
    pub fn reward_multiplier(&self) -> f64 {
        let base = self.rarity.reward_multiplier();
        if self.is_boss {
            base * BOSS_REWARD_MULTIPLIER
        } else {
            base
        }
    }

    /// Adds an effect, keeping the longer duration if already present.
    pub fn apply_status(&mut self, effect: StatusEffect, turns: u32) {
        if turns == 0 {
            return;
        }
        let entry = self.status_effects.entry(effect).or_insert(0);
        *entry = (*entry).max(turns);
    }

    pub fn has_status(&self, effect: StatusEffect) -> bool {
        self.status_effects.get(&effect).is_some_and(|turns| *turns > 0)
    }
}
