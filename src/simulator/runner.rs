//! Runs simulated characters through the real combat engine.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{SimConfig, Strategy};
use super::report::{RunStats, SimReport};
use crate::character::player::Player;
use crate::character::stats::Combatant;
use crate::combat::{
    apply_victory, record_defeat, record_escape, roll_victory_rewards, Combat, CombatAction,
    CombatOutcome,
};
use crate::core::errors::GameError;
use crate::items::PotionKind;
use crate::monsters::{create_monster, Monster};
use crate::shop::{buy_potion, potion_price};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, GameError> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng)?;
        if config.verbosity >= 2 {
            info!(
                "run {}/{}: level {}, won {}, fled {}, died {}",
                run_idx + 1,
                config.num_runs,
                run.final_level,
                run.battles_won,
                run.battles_fled,
                run.died
            );
        }
        all_runs.push(run);
    }

    Ok(SimReport::from_runs(all_runs, config.target_level))
}

/// Picks the next action for `strategy`. Never picks an action that would
/// be rejected.
///
/// A cautious player low on health drinks a potion, or runs when out of
/// potions unless a regular hit would finish the monster.
pub fn choose_action(
    strategy: Strategy,
    potion_threshold: f64,
    player: &Player,
    monster: &Monster,
) -> CombatAction {
    if strategy == Strategy::Cautious {
        let low_hp = (player.hp() as f64) < player.max_hp() as f64 * potion_threshold;
        if low_hp {
            if player.inventory.health_potions > 0 {
                return CombatAction::UseHealthPotion;
            }
            if monster.hp() > player.attack() {
                return CombatAction::TryEscape;
            }
        }
        if player.special_cooldown == 0
            && player.mana < player.special_mana_cost
            && player.inventory.mana_potions > 0
        {
            return CombatAction::UseManaPotion;
        }
    }

    if player.check_special_attack().is_ok() {
        CombatAction::SpecialAttack
    } else {
        CombatAction::RegularAttack
    }
}

/// Simulates one character from creation until death, the target level,
/// or the battle limit.
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> Result<RunStats, GameError> {
    let mut player = Player::new("Simulated", config.class)?;
    let mut stats = RunStats::default();

    while stats.battles < config.max_battles_per_run && player.level() < config.target_level {
        if config.strategy == Strategy::Cautious {
            restock(&mut player, &mut stats);
        }

        let mut monster = create_monster(player.level(), rng)?;
        let hp_before = player.hp();
        let turns_before = stats.total_turns;

        let outcome = {
            let mut combat = Combat::new(&mut player, &mut monster);
            let outcome = combat.fight(rng, config.max_actions_per_battle, |p, m| {
                choose_action(config.strategy, config.potion_threshold, p, m)
            });
            stats.total_turns += combat.turn() as u64;
            outcome
        };
        stats.battles += 1;
        stats.damage_taken += hp_before.saturating_sub(player.hp()) as u64;

        match outcome {
            CombatOutcome::Victory => {
                let rewards = roll_victory_rewards(player.level(), &monster, rng);
                stats.battles_won += 1;
                if monster.is_boss {
                    stats.bosses_defeated += 1;
                }
                if let Some(report) = apply_victory(&mut player, &monster, rewards) {
                    stats.level_ups.push((report.new_level, stats.battles));
                }
            }
            CombatOutcome::Escaped => {
                record_escape(&mut player);
                stats.battles_fled += 1;
            }
            CombatOutcome::Defeat => {
                record_defeat(&mut player);
                stats.died = true;
                debug!(
                    "run died at level {} to {} after {} turns",
                    player.level(),
                    monster.name(),
                    stats.total_turns - turns_before
                );
                break;
            }
            CombatOutcome::Ongoing => stats.stalemates += 1,
        }
    }

    stats.final_level = player.level();
    stats.final_gold = player.gold;
    stats.gold_spent = player.stats.gold_spent;
    stats.potions_used = player.stats.potions_used;
    stats.reached_target = player.level() >= config.target_level;
    Ok(stats)
}

/// Keeps two health potions and one mana potion in stock when affordable,
/// and drinks a health potion between battles when below half hp.
fn restock(player: &mut Player, stats: &mut RunStats) {
    for (kind, wanted) in [(PotionKind::Health, 2), (PotionKind::Mana, 1)] {
        while player.inventory.count(kind) < wanted
            && player.gold >= potion_price(kind, player.level())
        {
            if buy_potion(player, kind).is_err() {
                break;
            }
            stats.potions_bought += 1;
        }
    }

    if player.hp() < player.max_hp() / 2 && player.inventory.health_potions > 0 {
        match player.use_health_potion() {
            Ok(restored) => debug!("restored {} hp between battles", restored),
            Err(e) => debug!("could not drink between battles: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::PlayerClass;
    use crate::monsters::MonsterKind;
    use rand_chacha::ChaCha8Rng;

    fn test_config() -> SimConfig {
        SimConfig {
            num_runs: 5,
            seed: Some(7),
            target_level: 3,
            max_battles_per_run: 50,
            verbosity: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_choose_action_prefers_special() {
        let player = Player::new("Sim", PlayerClass::Warrior).unwrap();
        let monster = Monster::new(MonsterKind::Goblin, 1, 30, 8).unwrap();
        assert_eq!(
            choose_action(Strategy::Aggressive, 0.35, &player, &monster),
            CombatAction::SpecialAttack
        );
    }

    #[test]
    fn test_cautious_drinks_when_low() {
        let mut player = Player::new("Sim", PlayerClass::Warrior).unwrap();
        let monster = Monster::new(MonsterKind::Goblin, 1, 30, 8).unwrap();
        player.take_damage(80);
        assert_eq!(
            choose_action(Strategy::Cautious, 0.35, &player, &monster),
            CombatAction::UseHealthPotion
        );
        assert_eq!(
            choose_action(Strategy::Aggressive, 0.35, &player, &monster),
            CombatAction::SpecialAttack
        );
    }

    #[test]
    fn test_cautious_flees_without_potions() {
        let mut player = Player::new("Sim", PlayerClass::Warrior).unwrap();
        let monster = Monster::new(MonsterKind::Troll, 1, 70, 16).unwrap();
        player.take_damage(80);
        player.inventory.health_potions = 0;
        assert_eq!(
            choose_action(Strategy::Cautious, 0.35, &player, &monster),
            CombatAction::TryEscape
        );

        let mut nearly_dead = monster.clone();
        nearly_dead.take_damage(60);
        assert_ne!(
            choose_action(Strategy::Cautious, 0.35, &player, &nearly_dead),
            CombatAction::TryEscape
        );
    }

    #[test]
    fn test_cautious_runs_record_escapes() {
        let config = SimConfig {
            num_runs: 50,
            seed: Some(11),
            class: PlayerClass::Mage,
            target_level: 6,
            max_battles_per_run: 200,
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config).unwrap();
        let fled: u32 = report.run_stats.iter().map(|r| r.battles_fled).sum();
        assert!(fled > 0);
        assert!(report.flee_rate > 0.0);
    }

    #[test]
    fn test_restock_drinks_only_when_a_potion_is_held() {
        let mut player = Player::new("Sim", PlayerClass::Warrior).unwrap();
        let mut stats = RunStats::default();
        player.take_damage(70);
        player.gold = 0;
        player.inventory.health_potions = 0;
        restock(&mut player, &mut stats);
        assert_eq!(player.hp(), 30);

        player.inventory.health_potions = 1;
        restock(&mut player, &mut stats);
        assert_eq!(player.hp(), 65);
        assert_eq!(player.inventory.health_potions, 0);
    }

    #[test]
    fn test_falls_back_to_regular_attack() {
        let mut player = Player::new("Sim", PlayerClass::Rogue).unwrap();
        let monster = Monster::new(MonsterKind::Goblin, 1, 30, 8).unwrap();
        player.special_cooldown = 2;
        assert_eq!(
            choose_action(Strategy::Cautious, 0.35, &player, &monster),
            CombatAction::RegularAttack
        );
    }

    #[test]
    fn test_single_run_respects_limits() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let run = simulate_single_run(&config, &mut rng).unwrap();
        assert!(run.battles <= config.max_battles_per_run);
        assert!(run.died || run.reached_target || run.battles == config.max_battles_per_run);
        assert_eq!(
            run.battles,
            run.battles_won + run.battles_fled + run.stalemates + run.died as u32
        );
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = test_config();
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a.num_runs, 5);
        assert_eq!(a.to_json(), b.to_json());
    }
}
