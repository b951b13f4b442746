// Character creation
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_GOLD: u32 = 50;
pub const STARTING_HEALTH_POTIONS: u32 = 2;
pub const STARTING_MANA_POTIONS: u32 = 1;
pub const STARTING_XP_TO_NEXT: u32 = 50;
pub const MAX_NAME_LENGTH: usize = 16;
pub const MAX_LEVEL: u32 = 100;

// Potions: restore = BASE + level * PER_LEVEL
pub const HEALTH_POTION_BASE: u32 = 30;
pub const HEALTH_POTION_PER_LEVEL: u32 = 5;
pub const MANA_POTION_BASE: u32 = 25;
pub const MANA_POTION_PER_LEVEL: u32 = 3;

// Level up gains: BASE + new_level * PER_LEVEL
pub const LEVEL_UP_HP_BASE: u32 = 15;
pub const LEVEL_UP_HP_PER_LEVEL: u32 = 2;
pub const LEVEL_UP_MANA_BASE: u32 = 10;
pub const LEVEL_UP_ATTACK_BASE: u32 = 3;
pub const LEVEL_UP_SPECIAL_BASE: u32 = 5;
pub const XP_TO_NEXT_BASE: u32 = 50;
pub const XP_TO_NEXT_PER_LEVEL: u32 = 25;
pub const SKILL_POINTS_PER_LEVEL: u32 = 1;
pub const BONUS_SKILL_POINT_EVERY: u32 = 5;

// Skill allocation bonuses (per point)
pub const STRENGTH_ATTACK_BONUS: u32 = 3;
pub const VITALITY_HP_BONUS: u32 = 12;
pub const INTELLIGENCE_MANA_BONUS: u32 = 8;
pub const AGILITY_SPECIAL_BONUS: u32 = 4;

// Combat variance (inclusive +/- ranges)
pub const PLAYER_ATTACK_VARIANCE: i64 = 3;
pub const SPECIAL_ATTACK_VARIANCE: i64 = 5;
pub const MONSTER_ATTACK_VARIANCE: i64 = 2;
pub const ESCAPE_CHANCE_PERCENT: u32 = 30;

// Status effects
pub const POISON_DAMAGE_DIVISOR: u32 = 10;
pub const REGENERATION_HEAL_DIVISOR: u32 = 8;
pub const WARRIOR_STUN_TURNS: u32 = 1;
pub const ROGUE_POISON_TURNS: u32 = 3;
pub const MONSTER_ABILITY_COOLDOWN: u32 = 3;

// Monster generation
pub const BOSS_MIN_PLAYER_LEVEL: u32 = 5;
pub const BOSS_CHANCE_PER_LEVEL: f64 = 0.02;
pub const BOSS_STAT_MULTIPLIER: f64 = 1.5;
pub const MONSTER_LEVEL_SCALING: f64 = 0.3;
pub const MONSTER_HP_VARIANCE: (i64, i64) = (-5, 10);
pub const MONSTER_ATTACK_ROLL_VARIANCE: (i64, i64) = (-2, 3);
pub const MONSTER_MIN_HP: u32 = 20;
pub const MONSTER_MIN_ATTACK: u32 = 5;

// Rarity roll thresholds (cumulative)
pub const RARITY_COMMON_THRESHOLD: f64 = 0.70;
pub const RARITY_UNCOMMON_THRESHOLD: f64 = 0.90;
pub const RARITY_RARE_THRESHOLD: f64 = 0.98;

// Name decoration level thresholds (strictly greater than)
pub const APEX_LEVEL_THRESHOLD: u32 = 15;
pub const CHAMPION_LEVEL_THRESHOLD: u32 = 10;
pub const VETERAN_LEVEL_THRESHOLD: u32 = 6;

// Victory rewards: roll + level * PER_LEVEL
pub const VICTORY_XP_ROLL: (u32, u32) = (10, 20);
pub const VICTORY_XP_PER_LEVEL: u32 = 2;
pub const VICTORY_GOLD_ROLL: (u32, u32) = (5, 15);
pub const VICTORY_GOLD_PER_LEVEL: u32 = 1;
pub const BOSS_REWARD_MULTIPLIER: f64 = 2.0;

// Shop
pub const HEALTH_POTION_PRICE_BASE: u32 = 15;
pub const MANA_POTION_PRICE_BASE: u32 = 12;
pub const POTION_PRICE_PER_LEVEL: u32 = 2;
pub const SELL_BACK_PERCENT: u32 = 50;

// Persistence
pub const SAVE_VERSION: u32 = 1;
pub const SAVE_EXTENSION: &str = "json";
