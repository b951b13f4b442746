use log::info;
use rand::Rng;

use crate::character::player::Player;
use crate::core::constants::{
    HEALTH_POTION_PRICE_BASE, MANA_POTION_PRICE_BASE, POTION_PRICE_PER_LEVEL, SELL_BACK_PERCENT,
};
use crate::core::errors::GameError;
use crate::items::{shop_items, Item, PotionKind};

const GREETINGS: [&str; 5] = [
    "Welcome to my humble shop, brave adventurer!",
    "Looking for supplies? You've come to the right place!",
    "Fresh potions, just brewed this morning!",
    "Quality goods for quality adventurers!",
    "Step right up! Don't be shy!",
];

pub fn health_potion_price(level: u32) -> u32 {
    HEALTH_POTION_PRICE_BASE.saturating_add(level.saturating_mul(POTION_PRICE_PER_LEVEL))
}

pub fn mana_potion_price(level: u32) -> u32 {
    MANA_POTION_PRICE_BASE.saturating_add(level.saturating_mul(POTION_PRICE_PER_LEVEL))
}

pub fn potion_price(kind: PotionKind, level: u32) -> u32 {
    match kind {
        PotionKind::Health => health_potion_price(level),
        PotionKind::Mana => mana_potion_price(level),
    }
}

/// Gold returned when an equipped item is replaced by a purchase.
pub fn sell_back_value(item: &Item) -> u32 {
    item.price * SELL_BACK_PERCENT / 100
}

/// Result of a successful equipment purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPurchase {
    pub item: Item,
    pub replaced: Option<Item>,
    pub refund: u32,
}

pub fn greeting(rng: &mut impl Rng) -> &'static str {
    GREETINGS[rng.gen_range(0..GREETINGS.len())]
}

fn charge(player: &mut Player, price: u32) -> Result<(), GameError> {
    if player.gold < price {
        return Err(GameError::InsufficientGold {
            price,
            available: player.gold,
        });
    }
    player.gold -= price;
    player.stats.gold_spent += price as u64;
    Ok(())
}

/// Buys one potion at the player's current level price. Returns the price paid.
pub fn buy_potion(player: &mut Player, kind: PotionKind) -> Result<u32, GameError> {
    let price = potion_price(kind, player.level());
    charge(player, price)?;
    *player.inventory.count_mut(kind) += 1;
    info!("{} bought a {} for {} gold", player.character.name, kind.name(), price);
    Ok(price)
}

/// Buys and equips the catalog item at `index`.
pub fn buy_item(player: &mut Player, index: usize) -> Result<ItemPurchase, GameError> {
    let item = shop_items()
        .into_iter()
        .nth(index)
        .ok_or_else(|| GameError::InvalidChoice(format!("no shop item #{}", index + 1)))?;
    buy_specific_item(player, item)
}

/// Buys and equips `item`. The item it replaces is sold back.
pub fn buy_specific_item(player: &mut Player, item: Item) -> Result<ItemPurchase, GameError> {
    if player.level() < item.level_requirement {
        return Err(GameError::LevelTooLow {
            required: item.level_requirement,
            current: player.level(),
        });
    }
    charge(player, item.price)?;

    let replaced = player.equip(item.clone());
    let refund = replaced.as_ref().map(sell_back_value).unwrap_or(0);
    player.gold = player.gold.saturating_add(refund);

    info!(
        "{} bought {} for {} gold (refund {})",
        player.character.name, item.name, item.price, refund
    );

    Ok(ItemPurchase {
        item,
        replaced,
        refund,
    })
}
