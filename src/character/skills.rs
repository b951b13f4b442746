use crate::core::constants::{
    AGILITY_SPECIAL_BONUS, INTELLIGENCE_MANA_BONUS, STRENGTH_ATTACK_BONUS, VITALITY_HP_BONUS,
};
use crate::items::StatBonuses;
use serde::{Deserialize, Serialize};

pub const NUM_SKILLS: usize = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkillType {
    Strength,
    Vitality,
    Intelligence,
    Agility,
}

impl SkillType {
    pub fn all() -> [SkillType; NUM_SKILLS] {
        [
            SkillType::Strength,
            SkillType::Vitality,
            SkillType::Intelligence,
            SkillType::Agility,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SkillType::Strength => "Strength",
            SkillType::Vitality => "Vitality",
            SkillType::Intelligence => "Intelligence",
            SkillType::Agility => "Agility",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            SkillType::Strength => "STR",
            SkillType::Vitality => "VIT",
            SkillType::Intelligence => "INT",
            SkillType::Agility => "AGI",
        }
    }

    /// Bonus granted by a single point in this skill.
    pub fn bonus_per_point(&self) -> StatBonuses {
        match self {
            SkillType::Strength => StatBonuses {
                attack: STRENGTH_ATTACK_BONUS,
                ..Default::default()
            },
            SkillType::Vitality => StatBonuses {
                max_hp: VITALITY_HP_BONUS,
                ..Default::default()
            },
            SkillType::Intelligence => StatBonuses {
                max_mana: INTELLIGENCE_MANA_BONUS,
                ..Default::default()
            },
            SkillType::Agility => StatBonuses {
                special_damage: AGILITY_SPECIAL_BONUS,
                ..Default::default()
            },
        }
    }

    pub fn describe(&self) -> String {
        let b = self.bonus_per_point();
        match self {
            SkillType::Strength => format!("+{} attack", b.attack),
            SkillType::Vitality => format!("+{} max HP", b.max_hp),
            SkillType::Intelligence => format!("+{} max mana", b.max_mana),
            SkillType::Agility => format!("+{} special damage", b.special_damage),
        }
    }
}

/// Points spent in each skill.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocatedSkills {
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub vitality: u32,
    #[serde(default)]
    pub intelligence: u32,
    #[serde(default)]
    pub agility: u32,
}

impl AllocatedSkills {
    pub fn get(&self, skill: SkillType) -> u32 {
        match skill {
            SkillType::Strength => self.strength,
            SkillType::Vitality => self.vitality,
            SkillType::Intelligence => self.intelligence,
            SkillType::Agility => self.agility,
        }
    }

    pub fn increment(&mut self, skill: SkillType) {
        let slot = match skill {
            SkillType::Strength => &mut self.strength,
            SkillType::Vitality => &mut self.vitality,
            SkillType::Intelligence => &mut self.intelligence,
            SkillType::Agility => &mut self.agility,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> u32 {
        SkillType::all().iter().map(|s| self.get(*s)).sum()
    }
}

/// What a single allocated point changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGain {
    pub skill: SkillType,
    pub bonuses: StatBonuses,
    pub new_rank: u32,
}
