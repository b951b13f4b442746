//! Text rendering for the console frontend. Every function here is pure.

use chrono::{Local, TimeZone};

use super::frontend::Tone;
use crate::character::player::{LevelUpReport, Player};
use crate::character::save::SaveInfo;
use crate::character::skills::SkillType;
use crate::character::stats::Combatant;
use crate::combat::CombatEvent;
use crate::items::EquipmentSlot;
use crate::monsters::{Monster, StatusEffect};

pub const SEPARATOR_WIDTH: usize = 50;

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Title centered between two separator lines.
pub fn banner(title: &str) -> [String; 3] {
    let padding = SEPARATOR_WIDTH.saturating_sub(title.chars().count()) / 2;
    [
        separator(),
        format!("{}{}", " ".repeat(padding), title),
        separator(),
    ]
}

pub fn health_bar(current: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return format!("[{}]", " ".repeat(width));
    }
    let filled = ((current as f64 / max as f64) * width as f64) as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Green above two thirds, yellow above one third, red below.
pub fn hp_tone(current: u32, max: u32) -> Tone {
    let ratio = if max == 0 {
        0.0
    } else {
        current as f64 / max as f64
    };
    if ratio > 0.66 {
        Tone::Good
    } else if ratio > 0.33 {
        Tone::Info
    } else {
        Tone::Bad
    }
}

pub fn player_status(player: &Player) -> Vec<String> {
    vec![
        format!(
            "HP: {}/{} {} | Mana: {}/{} | Gold: {}",
            player.hp(),
            player.max_hp(),
            health_bar(player.hp(), player.max_hp(), 20),
            player.mana,
            player.max_mana,
            player.gold
        ),
        format!(
            "Attack: {} | Special: {} | XP: {}/{}",
            player.attack(),
            player.special_damage,
            player.xp,
            player.xp_to_next
        ),
        format!(
            "Special Attack Cooldown: {} turns | Mana Cost: {}",
            player.special_cooldown, player.special_mana_cost
        ),
        format!(
            "Health Potions: {} | Mana Potions: {}",
            player.inventory.health_potions, player.inventory.mana_potions
        ),
    ]
}

pub fn monster_status(monster: &Monster) -> String {
    let mut line = format!(
        "Enemy: {} - HP: {}/{} {} | Attack: {}",
        monster.character.name,
        monster.hp(),
        monster.character.max_hp,
        health_bar(monster.hp(), monster.character.max_hp, 20),
        monster.attack()
    );
    if !monster.status_effects.is_empty() {
        let effects: Vec<String> = monster
            .status_effects
            .iter()
            .map(|(effect, turns)| format!("{} ({})", effect.name(), turns))
            .collect();
        line.push_str(&format!(" | {}", effects.join(", ")));
    }
    line
}

/// Label for the special attack menu entry, with the reason it is unavailable.
pub fn special_attack_label(player: &Player) -> String {
    let base = format!("Special Attack: {}", player.special_name());
    if player.special_cooldown > 0 {
        format!("{} (COOLDOWN: {} turns)", base, player.special_cooldown)
    } else if player.mana < player.special_mana_cost {
        format!(
            "{} (Need {} mana, have {})",
            base, player.special_mana_cost, player.mana
        )
    } else {
        base
    }
}

pub fn describe_event(event: &CombatEvent, monster_name: &str) -> (String, Tone) {
    match event {
        CombatEvent::PlayerAttack { damage } => (
            format!("You attack {} for {} damage!", monster_name, damage),
            Tone::Normal,
        ),
        CombatEvent::SpecialAttack { name, damage } => (
            format!(
                "You use {} on {}! Critical hit for {} damage!",
                name.to_uppercase(),
                monster_name,
                damage
            ),
            Tone::Title,
        ),
        CombatEvent::PotionUsed { kind, restored } => (
            format!("You drink a {} and restore {}.", kind.name(), restored),
            Tone::Good,
        ),
        CombatEvent::EscapeSucceeded => (
            format!("You successfully escaped from {}!", monster_name),
            Tone::Info,
        ),
        CombatEvent::EscapeFailed => (
            format!("You couldn't escape from {}!", monster_name),
            Tone::Bad,
        ),
        CombatEvent::StatusApplied { effect, turns } => match effect {
            StatusEffect::Regeneration => (
                format!("{} begins regenerating for {} turns.", monster_name, turns),
                Tone::Bad,
            ),
            StatusEffect::Poison => (
                format!("{} is poisoned for {} turns.", monster_name, turns),
                Tone::Good,
            ),
            StatusEffect::Stun => (
                format!("{} is stunned for {} turns.", monster_name, turns),
                Tone::Good,
            ),
        },
        CombatEvent::PoisonDamage { damage } => (
            format!("{} takes {} poison damage.", monster_name, damage),
            Tone::Good,
        ),
        CombatEvent::Regenerated { healed } => (
            format!("{} regenerates {} HP.", monster_name, healed),
            Tone::Bad,
        ),
        CombatEvent::StatusExpired { effect } => (
            format!("{} wears off.", effect.name()),
            Tone::Muted,
        ),
        CombatEvent::MonsterStunned => (
            format!("{} is stunned and cannot act!", monster_name),
            Tone::Good,
        ),
        CombatEvent::MonsterAbility { name, .. } => (
            format!("{} uses {}!", monster_name, name),
            Tone::Bad,
        ),
        CombatEvent::MonsterEnraged { bonus, new_attack } => (
            format!(
                "{} grows stronger! Attack +{} (now {}).",
                monster_name, bonus, new_attack
            ),
            Tone::Bad,
        ),
        CombatEvent::MonsterAttack { damage } => (
            format!("{} attacks you for {} damage!", monster_name, damage),
            Tone::Bad,
        ),
        CombatEvent::LifeDrain { damage, healed } => (
            format!(
                "{} drains you for {} damage and heals {} HP!",
                monster_name, damage, healed
            ),
            Tone::Bad,
        ),
        CombatEvent::MonsterDefeated => (format!("{} is defeated!", monster_name), Tone::Good),
        CombatEvent::PlayerDefeated => (
            format!("You have been defeated by {}!", monster_name),
            Tone::Bad,
        ),
    }
}

pub fn level_up_lines(report: &LevelUpReport) -> Vec<String> {
    let mut lines = vec![
        format!("LEVEL UP! You are now level {}!", report.new_level),
        format!("Max HP +{}", report.hp_gain),
        format!("Max Mana +{}", report.mana_gain),
        format!("Attack +{}", report.attack_gain),
        format!("Special Damage +{}", report.special_gain),
        "HP and Mana fully restored!".to_string(),
    ];
    if report.skill_points_gained > 0 {
        lines.push(format!("Skill points +{}", report.skill_points_gained));
    }
    lines
}

pub fn character_sheet(player: &Player) -> Vec<String> {
    let mut lines = vec![
        format!("Name: {}", player.name()),
        format!("Class: {}", player.class.name()),
        format!("Level: {}", player.level()),
        format!("HP: {}/{}", player.hp(), player.max_hp()),
        format!("Mana: {}/{}", player.mana, player.max_mana),
        format!("Attack: {}", player.attack()),
        format!(
            "Special: {} ({} damage, {} mana, {} turn cooldown)",
            player.special_name(),
            player.special_damage,
            player.special_mana_cost,
            player.special_max_cooldown
        ),
        format!("XP: {}/{}", player.xp, player.xp_to_next),
        format!("Gold: {}", player.gold),
        format!("Health Potions: {}", player.inventory.health_potions),
        format!("Mana Potions: {}", player.inventory.mana_potions),
        String::new(),
        "Equipment:".to_string(),
    ];

    for slot in EquipmentSlot::all() {
        let entry = match player.equipment.get(slot) {
            Some(item) => format!("{} ({})", item.name, item.bonus_summary()),
            None => "(empty)".to_string(),
        };
        lines.push(format!("  {}: {}", slot.name(), entry));
    }
    lines.push(format!(
        "  Total: {}",
        player.equipment.total_bonuses().summary()
    ));

    lines.push(String::new());
    lines.push(format!("Skills ({} unspent points):", player.skill_points));
    for skill in SkillType::all() {
        lines.push(format!(
            "  {} [{}]: {}",
            skill.name(),
            skill.abbrev(),
            player.allocated_skills.get(skill)
        ));
    }

    let s = &player.stats;
    lines.push(String::new());
    lines.push(format!(
        "Battles: {} won, {} lost, {} fled | Bosses slain: {}",
        s.battles_won, s.battles_lost, s.battles_fled, s.bosses_defeated
    ));
    lines.push(format!(
        "Gold earned: {} | Gold spent: {} | Potions used: {}",
        s.gold_earned, s.gold_spent, s.potions_used
    ));
    lines
}

pub fn format_timestamp(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "unknown".to_string(),
    }
}

pub fn save_entry(info: &SaveInfo) -> String {
    if info.is_corrupted {
        return format!("{} (corrupted)", info.filename);
    }
    let class = info.class.map(|c| c.name()).unwrap_or("?");
    format!(
        "{} - {} the {} (Lv {}) saved {}",
        info.slot,
        info.character_name,
        class,
        info.level,
        format_timestamp(info.saved_at)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::PlayerClass;
    use crate::items::shop_items;
    use crate::monsters::MonsterKind;

    #[test]
    fn test_health_bar() {
        assert_eq!(health_bar(10, 10, 4), "[████]");
        assert_eq!(health_bar(5, 10, 4), "[██░░]");
        assert_eq!(health_bar(0, 10, 4), "[░░░░]");
        assert_eq!(health_bar(3, 0, 2), "[  ]");
    }

    #[test]
    fn test_hp_tone_thresholds() {
        assert_eq!(hp_tone(100, 100), Tone::Good);
        assert_eq!(hp_tone(50, 100), Tone::Info);
        assert_eq!(hp_tone(10, 100), Tone::Bad);
    }

    #[test]
    fn test_banner_centers_title() {
        let lines = banner("SHOP");
        assert_eq!(lines[0].len(), SEPARATOR_WIDTH);
        assert_eq!(lines[1], format!("{}SHOP", " ".repeat(23)));
    }

    #[test]
    fn test_special_attack_label_explains_unavailability() {
        let mut p = Player::new("Label", PlayerClass::Mage).unwrap();
        assert_eq!(special_attack_label(&p), "Special Attack: Fireball");
        p.special_cooldown = 2;
        assert!(special_attack_label(&p).ends_with("(COOLDOWN: 2 turns)"));
        p.special_cooldown = 0;
        p.mana = 5;
        assert!(special_attack_label(&p).ends_with("(Need 20 mana, have 5)"));
    }

    #[test]
    fn test_monster_status_lists_effects() {
        let mut m = Monster::new(MonsterKind::Goblin, 1, 30, 8).unwrap();
        m.apply_status(StatusEffect::Poison, 2);
        let line = monster_status(&m);
        assert!(line.contains("Goblin - HP: 30/30"));
        assert!(line.ends_with("Poison (2)"));
    }

    #[test]
    fn test_describe_event() {
        let (text, tone) = describe_event(&CombatEvent::MonsterAttack { damage: 7 }, "Orc");
        assert_eq!(text, "Orc attacks you for 7 damage!");
        assert_eq!(tone, Tone::Bad);
    }

    #[test]
    fn test_status_wording_depends_on_effect() {
        let (regen, tone) = describe_event(
            &CombatEvent::StatusApplied {
                effect: StatusEffect::Regeneration,
                turns: 3,
            },
            "Troll",
        );
        assert_eq!(regen, "Troll begins regenerating for 3 turns.");
        assert_eq!(tone, Tone::Bad);

        let (poison, _) = describe_event(
            &CombatEvent::StatusApplied {
                effect: StatusEffect::Poison,
                turns: 3,
            },
            "Orc",
        );
        assert_eq!(poison, "Orc is poisoned for 3 turns.");
    }

    #[test]
    fn test_character_sheet_lists_equipment_slots() {
        let p = Player::new("Sheet", PlayerClass::Rogue).unwrap();
        let sheet = character_sheet(&p);
        assert!(sheet.contains(&"  Weapon: (empty)".to_string()));
        assert!(sheet.contains(&"  Total: no bonuses".to_string()));
        assert!(sheet.iter().any(|l| l.starts_with("Skills (0 unspent")));
    }

    #[test]
    fn test_character_sheet_totals_equipment_bonuses() {
        let mut p = Player::new("Geared", PlayerClass::Warrior).unwrap();
        let stock = shop_items();
        p.equip(stock[0].clone());
        p.equip(stock[5].clone());
        let sheet = character_sheet(&p);
        assert!(sheet.contains(&"  Total: +5 ATK, +20 HP".to_string()));
    }
}
