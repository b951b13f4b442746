//! Turn-based battle state machine.
//!
//! A [`Combat`] borrows the player and monster for the length of a battle and
//! advances one player action at a time. Each call to [`Combat::take_turn`]
//! resolves the player's action, the monster's reply (unless the player drank
//! a potion or the battle ended), and end-of-turn upkeep, then returns the
//! events in the order they happened.

use log::debug;
use rand::Rng;

use super::math::{
    apply_variance, poison_damage, regeneration_heal, roll_escape, roll_variance, scale_percent,
};
use super::types::{
    CombatAction, CombatEvent, CombatOutcome, CombatPhase, CombatRules, TurnReport,
};
use crate::character::player::Player;
use crate::character::stats::Combatant;
use crate::core::constants::MONSTER_ABILITY_COOLDOWN;
use crate::core::errors::GameError;
use crate::items::PotionKind;
use crate::monsters::{AbilitySpec, Monster, MonsterAbility, StatusEffect};

pub struct Combat<'a> {
    player: &'a mut Player,
    monster: &'a mut Monster,
    rules: CombatRules,
    phase: CombatPhase,
    turn: u32,
}

impl<'a> Combat<'a> {
    pub fn new(player: &'a mut Player, monster: &'a mut Monster) -> Self {
        Self::with_rules(player, monster, CombatRules::default())
    }

    pub fn with_rules(player: &'a mut Player, monster: &'a mut Monster, rules: CombatRules) -> Self {
        Self {
            player,
            monster,
            rules,
            phase: CombatPhase::PlayerTurn,
            turn: 1,
        }
    }

    pub fn player(&self) -> &Player {
        self.player
    }

    pub fn monster(&self) -> &Monster {
        self.monster
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, CombatPhase::Resolved(_))
    }

    pub fn outcome(&self) -> CombatOutcome {
        match self.phase {
            CombatPhase::Resolved(outcome) => outcome,
            _ => CombatOutcome::Ongoing,
        }
    }

    /// Resolves one player action and everything it triggers.
    ///
    /// A rejected action (special attack unavailable, potion unusable) returns
    /// the error and leaves the battle exactly as it was.
    pub fn take_turn(
        &mut self,
        action: CombatAction,
        rng: &mut impl Rng,
    ) -> Result<TurnReport, GameError> {
        if self.phase != CombatPhase::PlayerTurn {
            return Err(GameError::BattleOver);
        }

        let turn = self.turn;
        let mut events = Vec::new();

        match action {
            CombatAction::RegularAttack => {
                let damage = apply_variance(
                    self.player.attack(),
                    roll_variance(self.rules.player_variance, rng),
                );
                self.monster.take_damage(damage);
                events.push(CombatEvent::PlayerAttack { damage });
            }
            CombatAction::SpecialAttack => {
                self.player.use_special_attack()?;
                let damage = apply_variance(
                    self.player.special_damage,
                    roll_variance(self.rules.special_variance, rng),
                );
                self.monster.take_damage(damage);
                events.push(CombatEvent::SpecialAttack {
                    name: self.player.special_name(),
                    damage,
                });

                if self.monster.is_alive() {
                    if let Some((effect, turns)) = self.player.class.profile().special_effect {
                        self.monster.apply_status(effect, turns);
                        events.push(CombatEvent::StatusApplied { effect, turns });
                    }
                }
            }
            CombatAction::UseHealthPotion => {
                let restored = self.player.use_health_potion()?;
                events.push(CombatEvent::PotionUsed {
                    kind: PotionKind::Health,
                    restored,
                });
            }
            CombatAction::UseManaPotion => {
                let restored = self.player.use_mana_potion()?;
                events.push(CombatEvent::PotionUsed {
                    kind: PotionKind::Mana,
                    restored,
                });
            }
            CombatAction::TryEscape => {
                if roll_escape(self.rules.escape_chance_percent, rng) {
                    events.push(CombatEvent::EscapeSucceeded);
                    return Ok(self.finish(turn, events, CombatOutcome::Escaped));
                }
                events.push(CombatEvent::EscapeFailed);
            }
        }

        if !self.monster.is_alive() {
            events.push(CombatEvent::MonsterDefeated);
            return Ok(self.finish(turn, events, CombatOutcome::Victory));
        }

        if action.provokes_retaliation() {
            self.phase = CombatPhase::MonsterTurn;
            if let Some(outcome) = self.monster_turn(rng, &mut events) {
                return Ok(self.finish(turn, events, outcome));
            }
        }

        self.player.reduce_special_cooldown();
        self.turn += 1;
        self.phase = CombatPhase::PlayerTurn;

        debug!(
            "turn {}: {:?} -> player {}/{} hp, monster {}/{} hp",
            turn,
            action,
            self.player.hp(),
            self.player.max_hp(),
            self.monster.hp(),
            self.monster.character.max_hp
        );

        Ok(TurnReport {
            turn,
            events,
            outcome: CombatOutcome::Ongoing,
        })
    }

    /// Plays turns chosen by `choose` until the battle resolves or
    /// `max_actions` actions (accepted or rejected) have been attempted.
    pub fn fight<R, F>(&mut self, rng: &mut R, max_actions: u32, mut choose: F) -> CombatOutcome
    where
        R: Rng,
        F: FnMut(&Player, &Monster) -> CombatAction,
    {
        let mut attempts = 0;
        while !self.is_resolved() && attempts < max_actions {
            attempts += 1;
            let action = choose(self.player, self.monster);
            if let Err(e) = self.take_turn(action, rng) {
                debug!("rejected {:?}: {}", action, e);
            }
        }
        self.outcome()
    }

    fn finish(&mut self, turn: u32, events: Vec<CombatEvent>, outcome: CombatOutcome) -> TurnReport {
        debug!("battle resolved on turn {}: {}", turn, outcome.as_str());
        self.phase = CombatPhase::Resolved(outcome);
        TurnReport {
            turn,
            events,
            outcome,
        }
    }

    /// Returns the outcome if the monster's turn ended the battle.
    fn monster_turn(
        &mut self,
        rng: &mut impl Rng,
        events: &mut Vec<CombatEvent>,
    ) -> Option<CombatOutcome> {
        let stunned = self.tick_status_effects(events);
        if !self.monster.is_alive() {
            events.push(CombatEvent::MonsterDefeated);
            return Some(CombatOutcome::Victory);
        }

        self.monster.special_cooldown = self.monster.special_cooldown.saturating_sub(1);

        if stunned {
            events.push(CombatEvent::MonsterStunned);
            return None;
        }

        let mut basic_attack = true;
        if let Some(spec) = self.monster.ability {
            if self.monster.special_cooldown == 0 && rng.gen_bool(spec.trigger_chance.clamp(0.0, 1.0)) {
                self.monster.special_cooldown = MONSTER_ABILITY_COOLDOWN;
                basic_attack = self.use_ability(spec, rng, events);
            }
        }

        if basic_attack {
            let damage = self.roll_monster_damage(rng);
            self.player.take_damage(damage);
            events.push(CombatEvent::MonsterAttack { damage });
        }

        if !self.player.is_alive() {
            events.push(CombatEvent::PlayerDefeated);
            return Some(CombatOutcome::Defeat);
        }
        None
    }

    fn roll_monster_damage(&self, rng: &mut impl Rng) -> u32 {
        apply_variance(
            self.monster.attack(),
            roll_variance(self.rules.monster_variance, rng),
        )
    }

    /// Resolves a monster ability. Returns whether the basic attack follows.
    fn use_ability(
        &mut self,
        spec: AbilitySpec,
        rng: &mut impl Rng,
        events: &mut Vec<CombatEvent>,
    ) -> bool {
        events.push(CombatEvent::MonsterAbility {
            name: spec.name,
            ability: spec.ability,
        });

        match spec.ability {
            MonsterAbility::PowerStrike { percent } => {
                let damage = scale_percent(self.roll_monster_damage(rng), percent);
                self.player.take_damage(damage);
                events.push(CombatEvent::MonsterAttack { damage });
            }
            MonsterAbility::Enrage { bonus } => {
                self.monster.character.attack += bonus;
                events.push(CombatEvent::MonsterEnraged {
                    bonus,
                    new_attack: self.monster.attack(),
                });
            }
            MonsterAbility::Regenerate { turns } => {
                self.monster.apply_status(StatusEffect::Regeneration, turns);
                events.push(CombatEvent::StatusApplied {
                    effect: StatusEffect::Regeneration,
                    turns,
                });
            }
            MonsterAbility::LifeDrain { percent } => {
                let damage = self.roll_monster_damage(rng);
                let dealt = self.player.take_damage(damage);
                let healed = self.monster.heal(scale_percent(dealt, percent));
                events.push(CombatEvent::LifeDrain { damage, healed });
            }
        }

        spec.ability.keeps_basic_attack()
    }

    /// Applies one tick of every active effect, then counts durations down.
    /// Returns whether the monster is stunned this turn.
    fn tick_status_effects(&mut self, events: &mut Vec<CombatEvent>) -> bool {
        let max_hp = self.monster.character.max_hp;
        let active: Vec<StatusEffect> = self.monster.status_effects.keys().copied().collect();
        let mut stunned = false;

        for effect in active {
            if !self.monster.is_alive() {
                break;
            }
            match effect {
                StatusEffect::Poison => {
                    let damage = self.monster.take_damage(poison_damage(max_hp));
                    events.push(CombatEvent::PoisonDamage { damage });
                }
                StatusEffect::Regeneration => {
                    let healed = self.monster.heal(regeneration_heal(max_hp));
                    events.push(CombatEvent::Regenerated { healed });
                }
                StatusEffect::Stun => stunned = true,
            }
        }

        let mut expired = Vec::new();
        self.monster.status_effects.retain(|effect, turns| {
            *turns = turns.saturating_sub(1);
            if *turns == 0 {
                expired.push(*effect);
            }
            *turns > 0
        });
        events.extend(
            expired
                .into_iter()
                .map(|effect| CombatEvent::StatusExpired { effect }),
        );

        stunned
    }
}
