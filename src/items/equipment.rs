use super::types::{EquipmentSlot, Item, StatBonuses};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<Item>,
    #[serde(default)]
    pub armor: Option<Item>,
    #[serde(default)]
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Accessory => &self.accessory,
        }
    }

    /// Puts `item` into `slot`, returning whatever was there before.
    pub fn set(&mut self, slot: EquipmentSlot, item: Option<Item>) -> Option<Item> {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Accessory => &mut self.accessory,
        };
        std::mem::replace(target, item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }

    /// Sum of bonuses over every equipped item.
    pub fn total_bonuses(&self) -> StatBonuses {
        self.iter_equipped()
            .fold(StatBonuses::default(), |mut acc, item| {
                acc.attack += item.bonuses.attack;
                acc.max_hp += item.bonuses.max_hp;
                acc.max_mana += item.bonuses.max_mana;
                acc.special_damage += item.bonuses.special_damage;
                acc
            })
    }
}
