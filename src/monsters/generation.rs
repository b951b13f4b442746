//! Random encounter generation scaled to the player's level.

use std::collections::BTreeMap;

use log::debug;
use rand::Rng;

use super::types::{
    Monster, MonsterKind, Rarity, BOSS_MONSTERS, BOSS_TITLES, REGULAR_MONSTERS,
};
use crate::character::stats::CharacterStats;
use crate::core::constants::*;
use crate::core::errors::GameError;

/// Chance that an encounter at `player_level` is a boss.
pub fn boss_chance(player_level: u32) -> f64 {
    if player_level < BOSS_MIN_PLAYER_LEVEL {
        return 0.0;
    }
    ((player_level as f64 - 4.0) * BOSS_CHANCE_PER_LEVEL).max(0.0)
}

/// Maps a uniform draw in `[0, 1)` to a rarity tier.
pub fn rarity_from_roll(roll: f64) -> Rarity {
    if roll < RARITY_COMMON_THRESHOLD {
        Rarity::Common
    } else if roll < RARITY_UNCOMMON_THRESHOLD {
        Rarity::Uncommon
    } else if roll < RARITY_RARE_THRESHOLD {
        Rarity::Rare
    } else {
        Rarity::Legendary
    }
}

pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    rarity_from_roll(rng.gen::<f64>())
}

pub fn level_multiplier(player_level: u32) -> f64 {
    1.0 + (player_level.saturating_sub(1)) as f64 * MONSTER_LEVEL_SCALING
}

/// Combined level, rarity and boss multiplier.
pub fn total_multiplier(player_level: u32, rarity: Rarity, is_boss: bool) -> f64 {
    let boss = if is_boss { BOSS_STAT_MULTIPLIER } else { 1.0 };
    level_multiplier(player_level) * rarity.stat_multiplier() * boss
}

/// Scales a base stat, adds variance, and applies the floor.
pub fn scale_stat(base: u32, multiplier: f64, variance: i64, floor: u32) -> u32 {
    let scaled = ((base as f64 * multiplier) as i64).saturating_add(variance);
    scaled.clamp(floor as i64, u32::MAX as i64) as u32
}

/// Level prefix placed in front of the rarity or boss prefix.
pub fn level_prefix(player_level: u32) -> Option<&'static str> {
    if player_level > APEX_LEVEL_THRESHOLD {
        Some("Apex")
    } else if player_level > CHAMPION_LEVEL_THRESHOLD {
        Some("Champion")
    } else if player_level > VETERAN_LEVEL_THRESHOLD {
        Some("Veteran")
    } else {
        None
    }
}

fn decorate_name(
    base_name: &str,
    player_level: u32,
    rarity: Rarity,
    boss_title: Option<&str>,
) -> String {
    let tier_prefix = match boss_title {
        Some(title) => Some(title),
        None => rarity.prefix(),
    };

    [level_prefix(player_level), tier_prefix, Some(base_name)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generates a fresh monster for an encounter at `player_level`, which must
/// be a valid player level (`1..=MAX_LEVEL`).
pub fn create_monster(player_level: u32, rng: &mut impl Rng) -> Result<Monster, GameError> {
    if player_level == 0 || player_level > MAX_LEVEL {
        return Err(GameError::InvalidStats(format!(
            "monster level {} outside 1..={}",
            player_level, MAX_LEVEL
        )));
    }

    let is_boss = player_level >= BOSS_MIN_PLAYER_LEVEL && rng.gen_bool(boss_chance(player_level).min(1.0));
    let kind: MonsterKind = if is_boss {
        BOSS_MONSTERS[rng.gen_range(0..BOSS_MONSTERS.len())]
    } else {
        REGULAR_MONSTERS[rng.gen_range(0..REGULAR_MONSTERS.len())]
    };
    let info = kind.info();

    let rarity = if is_boss {
        Rarity::Legendary
    } else {
        roll_rarity(rng)
    };

    let multiplier = total_multiplier(player_level, rarity, is_boss);
    let hp_variance = rng.gen_range(MONSTER_HP_VARIANCE.0..=MONSTER_HP_VARIANCE.1);
    let attack_variance =
        rng.gen_range(MONSTER_ATTACK_ROLL_VARIANCE.0..=MONSTER_ATTACK_ROLL_VARIANCE.1);
    let max_hp = scale_stat(info.base_hp, multiplier, hp_variance, MONSTER_MIN_HP);
    let attack = scale_stat(info.base_attack, multiplier, attack_variance, MONSTER_MIN_ATTACK);

    let boss_title = if is_boss {
        Some(BOSS_TITLES[rng.gen_range(0..BOSS_TITLES.len())])
    } else {
        None
    };
    let name = decorate_name(info.name, player_level, rarity, boss_title);

    debug!(
        "spawned {} (lvl {}, {:?}, boss={}) hp={} atk={}",
        name, player_level, rarity, is_boss, max_hp, attack
    );

    Ok(Monster {
        character: CharacterStats {
            name,
            level: player_level,
            hp: max_hp,
            max_hp,
            attack,
        },
        kind,
        rarity,
        is_boss,
        status_effects: BTreeMap::new(),
        ability: info.ability,
        special_cooldown: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_boss_chance() {
        assert_eq!(boss_chance(1), 0.0);
        assert_eq!(boss_chance(4), 0.0);
        assert!((boss_chance(5) - 0.02).abs() < 1e-9);
        assert!((boss_chance(14) - 0.20).abs() < 1e-9);
    }

    #[test]
    fn test_rarity_thresholds() {
        assert_eq!(rarity_from_roll(0.0), Rarity::Common);
        assert_eq!(rarity_from_roll(0.6999), Rarity::Common);
        assert_eq!(rarity_from_roll(0.70), Rarity::Uncommon);
        assert_eq!(rarity_from_roll(0.8999), Rarity::Uncommon);
        assert_eq!(rarity_from_roll(0.90), Rarity::Rare);
        assert_eq!(rarity_from_roll(0.98), Rarity::Legendary);
        assert_eq!(rarity_from_roll(0.9999), Rarity::Legendary);
    }

    #[test]
    fn test_level_multiplier() {
        assert!((level_multiplier(1) - 1.0).abs() < 1e-9);
        assert!((level_multiplier(5) - 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_scale_stat_applies_floor() {
        assert_eq!(scale_stat(30, 1.0, -5, 20), 25);
        assert_eq!(scale_stat(10, 1.0, -5, 20), 20);
        assert_eq!(scale_stat(4, 1.0, -2, 5), 5);
        assert_eq!(scale_stat(45, 1.5, 3, 5), 70);
    }

    #[test]
    fn test_total_multiplier_boss() {
        let m = total_multiplier(1, Rarity::Legendary, true);
        assert!((m - 1.7 * 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_name_decoration() {
        assert_eq!(decorate_name("Orc", 1, Rarity::Common, None), "Orc");
        assert_eq!(decorate_name("Orc", 3, Rarity::Rare, None), "Dire Orc");
        assert_eq!(decorate_name("Orc", 7, Rarity::Common, None), "Veteran Orc");
        assert_eq!(
            decorate_name("Orc", 12, Rarity::Legendary, None),
            "Champion Legendary Orc"
        );
        assert_eq!(
            decorate_name("Lich King", 16, Rarity::Legendary, Some("Dread")),
            "Apex Dread Lich King"
        );
    }

    #[test]
    fn test_rejects_levels_outside_player_range() {
        let mut rng = create_test_rng();
        assert!(matches!(
            create_monster(0, &mut rng),
            Err(GameError::InvalidStats(_))
        ));
        assert!(create_monster(MAX_LEVEL + 1, &mut rng).is_err());
        let top = create_monster(MAX_LEVEL, &mut rng).unwrap();
        assert_eq!(top.character.level, MAX_LEVEL);
    }

    #[test]
    fn test_scale_stat_saturates() {
        assert_eq!(scale_stat(100, f64::MAX, 10, 5), u32::MAX);
        assert_eq!(scale_stat(1, 1.0, -10, 5), 5);
    }

    #[test]
    fn test_level_one_floors_hold() {
        let mut rng = create_test_rng();
        for _ in 0..2000 {
            let m = create_monster(1, &mut rng).unwrap();
            assert!(m.character.max_hp >= MONSTER_MIN_HP);
            assert!(m.character.attack >= MONSTER_MIN_ATTACK);
            assert!(!m.is_boss);
        }
    }

    #[test]
    fn test_new_monster_is_fresh() {
        let mut rng = create_test_rng();
        for level in 1..20 {
            let m = create_monster(level, &mut rng).unwrap();
            assert_eq!(m.character.hp, m.character.max_hp);
            assert!(m.status_effects.is_empty());
            assert_eq!(m.special_cooldown, 0);
            assert_eq!(m.character.level, level);
        }
    }

    #[test]
    fn test_no_bosses_below_level_five() {
        let mut rng = create_test_rng();
        for level in 1..5 {
            for _ in 0..500 {
                assert!(!create_monster(level, &mut rng).unwrap().is_boss);
            }
        }
    }

    #[test]
    fn test_bosses_are_legendary_and_from_boss_catalog() {
        let mut rng = create_test_rng();
        let mut bosses = 0;
        for _ in 0..2000 {
            let m = create_monster(30, &mut rng).unwrap();
            if m.is_boss {
                bosses += 1;
                assert_eq!(m.rarity, Rarity::Legendary);
                assert!(BOSS_MONSTERS.contains(&m.kind));
                assert!(m.character.name.starts_with("Apex "));
            } else {
                assert!(REGULAR_MONSTERS.contains(&m.kind));
            }
        }
        // 52% boss chance at level 30
        assert!(bosses > 800 && bosses < 1300, "bosses = {}", bosses);
    }

    #[test]
    fn test_rarity_distribution() {
        let mut rng = create_test_rng();
        let trials = 10_000;
        let commons = (0..trials)
            .filter(|_| roll_rarity(&mut rng) == Rarity::Common)
            .count();
        let rate = commons as f64 / trials as f64;
        assert!((rate - 0.70).abs() < 0.03, "common rate = {}", rate);
    }
}
