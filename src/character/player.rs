//! The player character: resources, progression, and equipment.

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::class::PlayerClass;
use super::skills::{AllocatedSkills, SkillGain, SkillType};
use super::stats::{CharacterStats, Combatant};
use crate::core::constants::*;
use crate::core::errors::{GameError, Resource};
use crate::items::{Equipment, Item, PotionKind, StatBonuses};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub health_potions: u32,
    pub mana_potions: u32,
}

impl Inventory {
    pub fn count(&self, kind: PotionKind) -> u32 {
        match kind {
            PotionKind::Health => self.health_potions,
            PotionKind::Mana => self.mana_potions,
        }
    }

    pub fn count_mut(&mut self, kind: PotionKind) -> &mut u32 {
        match kind {
            PotionKind::Health => &mut self.health_potions,
            PotionKind::Mana => &mut self.mana_potions,
        }
    }
}

/// Lifetime counters shown on the character sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub battles_won: u32,
    pub battles_lost: u32,
    pub battles_fled: u32,
    pub bosses_defeated: u32,
    pub gold_earned: u64,
    pub gold_spent: u64,
    pub potions_used: u32,
    pub highest_level: u32,
    pub created_at: i64,
}

/// Stat increases from a single level up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpReport {
    pub old_level: u32,
    pub new_level: u32,
    pub hp_gain: u32,
    pub mana_gain: u32,
    pub attack_gain: u32,
    pub special_gain: u32,
    pub skill_points_gained: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(flatten)]
    pub character: CharacterStats,
    pub class: PlayerClass,
    pub mana: u32,
    pub max_mana: u32,
    pub special_damage: u32,
    pub special_cooldown: u32,
    pub special_max_cooldown: u32,
    pub special_mana_cost: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub gold: u32,
    pub inventory: Inventory,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub skill_points: u32,
    #[serde(default)]
    pub allocated_skills: AllocatedSkills,
    #[serde(default)]
    pub stats: PlayerStats,
}

impl Combatant for Player {
    fn stats(&self) -> &CharacterStats {
        &self.character
    }

    fn stats_mut(&mut self) -> &mut CharacterStats {
        &mut self.character
    }
}

impl Player {
    /// Creates a level 1 character with the class's base stats.
    pub fn new(name: &str, class: PlayerClass) -> Result<Self, GameError> {
        validate_name(name).map_err(GameError::InvalidName)?;
        let profile = class.profile();
        let character = CharacterStats::new(
            name.trim(),
            STARTING_LEVEL,
            profile.base_hp,
            profile.base_attack,
        )?;

        Ok(Self {
            character,
            class,
            mana: profile.base_mana,
            max_mana: profile.base_mana,
            special_damage: profile.special_damage,
            special_cooldown: 0,
            special_max_cooldown: profile.special_max_cooldown,
            special_mana_cost: profile.special_mana_cost,
            xp: 0,
            xp_to_next: STARTING_XP_TO_NEXT,
            gold: STARTING_GOLD,
            inventory: Inventory {
                health_potions: STARTING_HEALTH_POTIONS,
                mana_potions: STARTING_MANA_POTIONS,
            },
            equipment: Equipment::new(),
            skill_points: 0,
            allocated_skills: AllocatedSkills::default(),
            stats: PlayerStats {
                highest_level: STARTING_LEVEL,
                created_at: Utc::now().timestamp(),
                ..Default::default()
            },
        })
    }

    pub fn level(&self) -> u32 {
        self.character.level
    }

    pub fn hp(&self) -> u32 {
        self.character.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.character.max_hp
    }

    pub fn attack(&self) -> u32 {
        self.character.attack
    }

    /// Checks every invariant a loaded snapshot must satisfy.
    pub fn validate(&self) -> Result<(), GameError> {
        self.character.validate()?;
        if self.level() > MAX_LEVEL {
            return Err(GameError::InvalidStats(format!(
                "level {} exceeds the maximum of {}",
                self.level(),
                MAX_LEVEL
            )));
        }
        if self.mana > self.max_mana {
            return Err(GameError::InvalidStats(format!(
                "mana {} exceeds max_mana {}",
                self.mana, self.max_mana
            )));
        }
        if self.special_cooldown > self.special_max_cooldown {
            return Err(GameError::InvalidStats(format!(
                "special cooldown {} exceeds maximum {}",
                self.special_cooldown, self.special_max_cooldown
            )));
        }
        if self.xp_to_next == 0 {
            return Err(GameError::InvalidStats("xp_to_next must be positive".to_string()));
        }
        validate_name(&self.character.name).map_err(GameError::InvalidName)
    }

    pub fn potion_restore_amount(&self, kind: PotionKind) -> u32 {
        match kind {
            PotionKind::Health => {
                HEALTH_POTION_BASE.saturating_add(self.level().saturating_mul(HEALTH_POTION_PER_LEVEL))
            }
            PotionKind::Mana => {
                MANA_POTION_BASE.saturating_add(self.level().saturating_mul(MANA_POTION_PER_LEVEL))
            }
        }
    }

    /// Drinks a potion, returning how much was actually restored.
    pub fn use_potion(&mut self, kind: PotionKind) -> Result<u32, GameError> {
        if self.inventory.count(kind) == 0 {
            return Err(GameError::NoPotions(kind));
        }

        let amount = self.potion_restore_amount(kind);
        let restored = match kind {
            PotionKind::Health => {
                if self.hp() >= self.max_hp() {
                    return Err(GameError::AlreadyFull(Resource::Health));
                }
                self.heal(amount)
            }
            PotionKind::Mana => {
                if self.mana >= self.max_mana {
                    return Err(GameError::AlreadyFull(Resource::Mana));
                }
                let before = self.mana;
                self.mana = self.mana.saturating_add(amount).min(self.max_mana);
                self.mana - before
            }
        };

        *self.inventory.count_mut(kind) -= 1;
        self.stats.potions_used += 1;
        debug!("{} drank a {} restoring {}", self.character.name, kind.name(), restored);
        Ok(restored)
    }

    pub fn use_health_potion(&mut self) -> Result<u32, GameError> {
        self.use_potion(PotionKind::Health)
    }

    pub fn use_mana_potion(&mut self) -> Result<u32, GameError> {
        self.use_potion(PotionKind::Mana)
    }

    /// Reports why the special attack is unavailable, without spending anything.
    pub fn check_special_attack(&self) -> Result<(), GameError> {
        if self.special_cooldown > 0 {
            return Err(GameError::OnCooldown {
                turns: self.special_cooldown,
            });
        }
        if self.mana < self.special_mana_cost {
            return Err(GameError::InsufficientMana {
                needed: self.special_mana_cost,
                available: self.mana,
            });
        }
        Ok(())
    }

    /// Pays the mana cost and starts the cooldown.
    pub fn use_special_attack(&mut self) -> Result<(), GameError> {
        self.check_special_attack()?;
        self.mana -= self.special_mana_cost;
        self.special_cooldown = self.special_max_cooldown;
        Ok(())
    }

    pub fn reduce_special_cooldown(&mut self) {
        self.special_cooldown = self.special_cooldown.saturating_sub(1);
    }

    pub fn special_name(&self) -> &'static str {
        self.class.profile().special_name
    }

    pub fn level_up(&mut self) -> LevelUpReport {
        let old_level = self.character.level;
        let level = old_level.saturating_add(1);
        self.character.level = level;

        let hp_gain = LEVEL_UP_HP_BASE.saturating_add(level.saturating_mul(LEVEL_UP_HP_PER_LEVEL));
        let mana_gain = LEVEL_UP_MANA_BASE.saturating_add(level);
        let attack_gain = LEVEL_UP_ATTACK_BASE.saturating_add(level);
        let special_gain = LEVEL_UP_SPECIAL_BASE.saturating_add(level);

        self.character.max_hp = self.character.max_hp.saturating_add(hp_gain);
        self.character.hp = self.character.max_hp;
        self.max_mana = self.max_mana.saturating_add(mana_gain);
        self.mana = self.max_mana;
        self.character.attack = self.character.attack.saturating_add(attack_gain);
        self.special_damage = self.special_damage.saturating_add(special_gain);

        self.xp = 0;
        self.xp_to_next =
            XP_TO_NEXT_BASE.saturating_add(level.saturating_mul(XP_TO_NEXT_PER_LEVEL));

        let mut skill_points_gained = SKILL_POINTS_PER_LEVEL;
        if level % BONUS_SKILL_POINT_EVERY == 0 {
            skill_points_gained += 1;
        }
        self.skill_points = self.skill_points.saturating_add(skill_points_gained);
        self.stats.highest_level = self.stats.highest_level.max(level);

        info!("{} reached level {}", self.character.name, level);

        LevelUpReport {
            old_level,
            new_level: level,
            hp_gain,
            mana_gain,
            attack_gain,
            special_gain,
            skill_points_gained,
        }
    }

    /// Adds experience, levelling up once if the threshold is reached.
    /// Nothing levels past `MAX_LEVEL`; xp keeps accumulating there.
    pub fn gain_xp(&mut self, amount: u32) -> Option<LevelUpReport> {
        self.xp = self.xp.saturating_add(amount);
        if self.xp >= self.xp_to_next && self.level() < MAX_LEVEL {
            Some(self.level_up())
        } else {
            None
        }
    }

    pub fn allocate_skill(&mut self, skill: SkillType) -> Result<SkillGain, GameError> {
        if self.skill_points == 0 {
            return Err(GameError::NoSkillPoints);
        }
        self.skill_points -= 1;
        self.allocated_skills.increment(skill);

        let bonuses = skill.bonus_per_point();
        self.add_bonuses(&bonuses);

        Ok(SkillGain {
            skill,
            bonuses,
            new_rank: self.allocated_skills.get(skill),
        })
    }

    /// Equips `item`, returning the item it replaced.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        let bonuses = item.bonuses;
        let replaced = self.equipment.set(item.slot, Some(item));
        // Add before removing so a sidegrade never clamps current hp/mana.
        self.add_bonuses(&bonuses);
        if let Some(old) = &replaced {
            self.remove_bonuses(&old.bonuses);
        }
        replaced
    }

    // Current hp/mana are never raised here, only clamped.
    fn add_bonuses(&mut self, b: &StatBonuses) {
        self.character.attack += b.attack;
        self.character.max_hp += b.max_hp;
        self.max_mana += b.max_mana;
        self.special_damage += b.special_damage;
    }

    fn remove_bonuses(&mut self, b: &StatBonuses) {
        self.character.attack = self.character.attack.saturating_sub(b.attack);
        let max_hp = self.character.max_hp.saturating_sub(b.max_hp);
        self.character.set_max_hp(max_hp);
        self.max_mana = self.max_mana.saturating_sub(b.max_mana);
        self.mana = self.mana.min(self.max_mana);
        self.special_damage = self.special_damage.saturating_sub(b.special_damage);
    }
}

pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(format!("Name must be {} characters or less", MAX_NAME_LENGTH));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}
