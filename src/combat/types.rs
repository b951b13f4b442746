use crate::core::constants::{
    ESCAPE_CHANCE_PERCENT, MONSTER_ATTACK_VARIANCE, PLAYER_ATTACK_VARIANCE,
    SPECIAL_ATTACK_VARIANCE,
};
use crate::items::PotionKind;
use crate::monsters::{MonsterAbility, StatusEffect};

/// What the player does on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    RegularAttack,
    SpecialAttack,
    UseHealthPotion,
    UseManaPotion,
    TryEscape,
}

impl CombatAction {
    pub fn all() -> [CombatAction; 5] {
        [
            CombatAction::RegularAttack,
            CombatAction::SpecialAttack,
            CombatAction::UseHealthPotion,
            CombatAction::UseManaPotion,
            CombatAction::TryEscape,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CombatAction::RegularAttack => "Regular Attack",
            CombatAction::SpecialAttack => "Special Attack",
            CombatAction::UseHealthPotion => "Use Health Potion",
            CombatAction::UseManaPotion => "Use Mana Potion",
            CombatAction::TryEscape => "Try to Run Away",
        }
    }

    /// Potion turns skip the monster's retaliation.
    pub fn provokes_retaliation(&self) -> bool {
        !matches!(
            self,
            CombatAction::UseHealthPotion | CombatAction::UseManaPotion
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
    Escaped,
    Ongoing,
}

impl CombatOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CombatOutcome::Victory => "victory",
            CombatOutcome::Defeat => "defeat",
            CombatOutcome::Escaped => "escaped",
            CombatOutcome::Ongoing => "ongoing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPhase {
    PlayerTurn,
    MonsterTurn,
    Resolved(CombatOutcome),
}

/// Something that happened during a turn, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    PlayerAttack {
        damage: u32,
    },
    SpecialAttack {
        name: &'static str,
        damage: u32,
    },
    PotionUsed {
        kind: PotionKind,
        restored: u32,
    },
    EscapeSucceeded,
    EscapeFailed,
    StatusApplied {
        effect: StatusEffect,
        turns: u32,
    },
    PoisonDamage {
        damage: u32,
    },
    Regenerated {
        healed: u32,
    },
    StatusExpired {
        effect: StatusEffect,
    },
    MonsterStunned,
    MonsterAbility {
        name: &'static str,
        ability: MonsterAbility,
    },
    MonsterEnraged {
        bonus: u32,
        new_attack: u32,
    },
    MonsterAttack {
        damage: u32,
    },
    LifeDrain {
        damage: u32,
        healed: u32,
    },
    MonsterDefeated,
    PlayerDefeated,
}

/// Events from one resolved turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub turn: u32,
    pub events: Vec<CombatEvent>,
    pub outcome: CombatOutcome,
}

/// Tunable randomness for a battle. Spreads are inclusive `+/-` ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatRules {
    pub player_variance: i64,
    pub special_variance: i64,
    pub monster_variance: i64,
    pub escape_chance_percent: u32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            player_variance: PLAYER_ATTACK_VARIANCE,
            special_variance: SPECIAL_ATTACK_VARIANCE,
            monster_variance: MONSTER_ATTACK_VARIANCE,
            escape_chance_percent: ESCAPE_CHANCE_PERCENT,
        }
    }
}

impl CombatRules {
    /// Default rules with every damage roll pinned to its base value.
    pub fn without_variance() -> Self {
        Self {
            player_variance: 0,
            special_variance: 0,
            monster_variance: 0,
            ..Default::default()
        }
    }
}

/// XP and gold earned from a victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictoryRewards {
    pub xp: u32,
    pub gold: u32,
}
