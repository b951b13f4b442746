//! Post-battle bookkeeping: victory rewards and lifetime battle counters.

use log::info;
use rand::Rng;

use super::types::VictoryRewards;
use crate::character::player::{LevelUpReport, Player};
use crate::core::constants::{
    VICTORY_GOLD_PER_LEVEL, VICTORY_GOLD_ROLL, VICTORY_XP_PER_LEVEL, VICTORY_XP_ROLL,
};
use crate::monsters::Monster;

/// Base rewards before the monster's multiplier.
pub fn base_rewards(player_level: u32, rng: &mut impl Rng) -> VictoryRewards {
    let xp = rng
        .gen_range(VICTORY_XP_ROLL.0..=VICTORY_XP_ROLL.1)
        .saturating_add(player_level.saturating_mul(VICTORY_XP_PER_LEVEL));
    let gold = rng
        .gen_range(VICTORY_GOLD_ROLL.0..=VICTORY_GOLD_ROLL.1)
        .saturating_add(player_level.saturating_mul(VICTORY_GOLD_PER_LEVEL));
    VictoryRewards { xp, gold }
}

pub fn scale_rewards(base: VictoryRewards, multiplier: f64) -> VictoryRewards {
    VictoryRewards {
        xp: (base.xp as f64 * multiplier) as u32,
        gold: (base.gold as f64 * multiplier) as u32,
    }
}

pub fn roll_victory_rewards(
    player_level: u32,
    monster: &Monster,
    rng: &mut impl Rng,
) -> VictoryRewards {
    scale_rewards(base_rewards(player_level, rng), monster.reward_multiplier())
}

/// Credits a victory to the player. Returns the level-up, if one happened.
pub fn apply_victory(
    player: &mut Player,
    monster: &Monster,
    rewards: VictoryRewards,
) -> Option<LevelUpReport> {
    player.gold = player.gold.saturating_add(rewards.gold);
    player.stats.gold_earned += rewards.gold as u64;
    player.stats.battles_won += 1;
    if monster.is_boss {
        player.stats.bosses_defeated += 1;
    }

    info!(
        "{} defeated {} (+{} xp, +{} gold)",
        player.character.name, monster.character.name, rewards.xp, rewards.gold
    );

    player.gain_xp(rewards.xp)
}

pub fn record_defeat(player: &mut Player) {
    player.stats.battles_lost += 1;
}

pub fn record_escape(player: &mut Player) {
    player.stats.battles_fled += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::PlayerClass;
    use crate::monsters::{MonsterKind, Rarity};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_base_rewards_in_range() {
        let mut rng = create_test_rng();
        for _ in 0..500 {
            let r = base_rewards(3, &mut rng);
            assert!((16..=26).contains(&r.xp), "xp = {}", r.xp);
            assert!((8..=18).contains(&r.gold), "gold = {}", r.gold);
        }
    }

    #[test]
    fn test_scale_rewards_rounds_down() {
        let base = VictoryRewards { xp: 15, gold: 7 };
        assert_eq!(scale_rewards(base, 1.0), base);
        assert_eq!(scale_rewards(base, 1.3), VictoryRewards { xp: 19, gold: 9 });
        assert_eq!(scale_rewards(base, 4.0), VictoryRewards { xp: 60, gold: 28 });
    }

    #[test]
    fn test_boss_rewards_are_scaled() {
        let mut rng = create_test_rng();
        let mut boss = Monster::new(MonsterKind::DemonLord, 10, 300, 40).unwrap();
        boss.rarity = Rarity::Legendary;
        for _ in 0..100 {
            let r = roll_victory_rewards(10, &boss, &mut rng);
            assert!(r.xp >= (10 + 20) * 4);
            assert!(r.gold >= (5 + 10) * 4);
        }
    }

    #[test]
    fn test_apply_victory_updates_player() {
        let mut player = Player::new("Hero", PlayerClass::Mage).unwrap();
        let monster = Monster::new(MonsterKind::Goblin, 1, 30, 8).unwrap();

        let level_up = apply_victory(&mut player, &monster, VictoryRewards { xp: 20, gold: 12 });
        assert!(level_up.is_none());
        assert_eq!(player.gold, 62);
        assert_eq!(player.xp, 20);
        assert_eq!(player.stats.battles_won, 1);
        assert_eq!(player.stats.gold_earned, 12);
        assert_eq!(player.stats.bosses_defeated, 0);

        let level_up = apply_victory(&mut player, &monster, VictoryRewards { xp: 30, gold: 0 });
        assert_eq!(level_up.map(|r| r.new_level), Some(2));
        assert_eq!(player.stats.battles_won, 2);
    }

    #[test]
    fn test_boss_victory_counted() {
        let mut player = Player::new("Hero", PlayerClass::Rogue).unwrap();
        let boss = Monster::new(MonsterKind::LichKing, 5, 200, 30).unwrap();
        apply_victory(&mut player, &boss, VictoryRewards { xp: 0, gold: 0 });
        assert_eq!(player.stats.bosses_defeated, 1);
    }

    #[test]
    fn test_record_defeat_and_escape() {
        let mut player = Player::new("Hero", PlayerClass::Warrior).unwrap();
        record_defeat(&mut player);
        record_escape(&mut player);
        record_escape(&mut player);
        assert_eq!(player.stats.battles_lost, 1);
        assert_eq!(player.stats.battles_fled, 2);
    }
}
