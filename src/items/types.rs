use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 3] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Accessory,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionKind {
    Health,
    Mana,
}

impl PotionKind {
    pub fn name(&self) -> &'static str {
        match self {
            PotionKind::Health => "Health Potion",
            PotionKind::Mana => "Mana Potion",
        }
    }
}

/// Flat stat bonuses granted while an item is equipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonuses {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub max_hp: u32,
    #[serde(default)]
    pub max_mana: u32,
    #[serde(default)]
    pub special_damage: u32,
}

impl StatBonuses {
    pub fn total(&self) -> u32 {
        self.attack + self.max_hp + self.max_mana + self.special_damage
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero bonuses on one line, e.g. "+5 ATK, +20 HP".
    pub fn summary(&self) -> String {
        let parts: Vec<String> = [
            (self.attack, "ATK"),
            (self.max_hp, "HP"),
            (self.max_mana, "MP"),
            (self.special_damage, "SPC"),
        ]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, label)| format!("+{} {}", value, label))
        .collect();

        if parts.is_empty() {
            "no bonuses".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub slot: EquipmentSlot,
    pub bonuses: StatBonuses,
    pub price: u32,
    #[serde(default = "default_level_requirement")]
    pub level_requirement: u32,
}

fn default_level_requirement() -> u32 {
    1
}

impl Item {
    pub fn bonus_summary(&self) -> String {
        self.bonuses.summary()
    }
}
