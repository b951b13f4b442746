//! Fixed equipment stock sold by the merchant.

use super::types::{EquipmentSlot, Item, StatBonuses};

/// (name, slot, attack, max_hp, max_mana, special_damage, price, level requirement)
type CatalogEntry = (&'static str, EquipmentSlot, u32, u32, u32, u32, u32, u32);

const CATALOG: &[CatalogEntry] = &[
    ("Iron Sword", EquipmentSlot::Weapon, 5, 0, 0, 0, 60, 1),
    ("Oak Staff", EquipmentSlot::Weapon, 2, 0, 10, 6, 70, 1),
    ("Steel Dagger", EquipmentSlot::Weapon, 4, 0, 0, 4, 65, 1),
    ("Knight's Blade", EquipmentSlot::Weapon, 12, 0, 0, 4, 180, 4),
    ("Runed Warhammer", EquipmentSlot::Weapon, 20, 10, 0, 8, 380, 8),
    ("Leather Armor", EquipmentSlot::Armor, 0, 20, 0, 0, 50, 1),
    ("Chainmail", EquipmentSlot::Armor, 0, 45, 0, 0, 150, 3),
    ("Mystic Robe", EquipmentSlot::Armor, 0, 20, 25, 5, 160, 3),
    ("Dragonscale Plate", EquipmentSlot::Armor, 2, 90, 10, 0, 420, 8),
    ("Copper Ring", EquipmentSlot::Accessory, 1, 5, 5, 1, 40, 1),
    ("Amulet of Focus", EquipmentSlot::Accessory, 0, 0, 20, 8, 140, 3),
    ("Berserker Band", EquipmentSlot::Accessory, 6, 0, 0, 6, 210, 5),
];

/// Every item the shop can sell, in display order.
pub fn shop_items() -> Vec<Item> {
    CATALOG
        .iter()
        .map(
            |&(name, slot, attack, max_hp, max_mana, special_damage, price, level_requirement)| {
                Item {
                    name: name.to_string(),
                    slot,
                    bonuses: StatBonuses {
                        attack,
                        max_hp,
                        max_mana,
                        special_damage,
                    },
                    price,
                    level_requirement,
                }
            },
        )
        .collect()
}
