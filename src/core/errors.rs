use std::path::PathBuf;

use thiserror::Error;

use crate::items::PotionKind;

/// Which resource bar an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Health,
    Mana,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Health => "HP",
            Resource::Mana => "mana",
        }
    }
}

/// Rejected game actions. Every variant leaves the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Constructor input that violates the character invariants.
    #[error("invalid stats: {0}")]
    InvalidStats(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("You don't have any {}s!", .0.name().to_lowercase())]
    NoPotions(PotionKind),

    #[error("Your {} is already full!", .0.name())]
    AlreadyFull(Resource),

    #[error("Special attack is on cooldown! ({turns} turns left)")]
    OnCooldown { turns: u32 },

    #[error("Not enough mana! Need {needed}, have {available}")]
    InsufficientMana { needed: u32, available: u32 },

    #[error("Not enough gold! Need {price}, have {available} ({} short)", .price - .available)]
    InsufficientGold { price: u32, available: u32 },

    #[error("Requires level {required} (you are level {current})")]
    LevelTooLow { required: u32, current: u32 },

    #[error("No skill points to spend")]
    NoSkillPoints,

    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    #[error("The battle is already over")]
    BattleOver,
}

impl GameError {
    /// Missing amount for resource shortfalls, if this error is one.
    pub fn shortfall(&self) -> Option<u32> {
        match self {
            GameError::InsufficientGold { price, available } => {
                Some(price.saturating_sub(*available))
            }
            GameError::InsufficientMana { needed, available } => {
                Some(needed.saturating_sub(*available))
            }
            GameError::LevelTooLow { required, current } => {
                Some(required.saturating_sub(*current))
            }
            _ => None,
        }
    }
}

/// Errors surfaced by the save/load layer.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse save file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file parsed but describes an impossible character.
    #[error("save file holds an invalid character: {0}")]
    Invalid(#[from] GameError),

    #[error("invalid save slot name: {0}")]
    InvalidSlot(String),

    #[error("could not determine a save directory")]
    NoSaveDirectory,

    #[error("unsupported save version {found} (expected {expected})")]
    UnsupportedVersion { expected: u32, found: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_gold_reports_shortfall() {
        let err = GameError::InsufficientGold {
            price: 40,
            available: 25,
        };
        assert_eq!(err.shortfall(), Some(15));
        assert_eq!(err.to_string(), "Not enough gold! Need 40, have 25 (15 short)");
    }

    #[test]
    fn test_potion_error_messages() {
        assert_eq!(
            GameError::NoPotions(PotionKind::Health).to_string(),
            "You don't have any health potions!"
        );
        assert_eq!(
            GameError::AlreadyFull(Resource::Mana).to_string(),
            "Your mana is already full!"
        );
    }

    #[test]
    fn test_non_resource_errors_have_no_shortfall() {
        assert_eq!(GameError::NoSkillPoints.shortfall(), None);
        assert_eq!(GameError::OnCooldown { turns: 2 }.shortfall(), None);
    }
}
