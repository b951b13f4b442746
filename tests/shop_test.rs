//! Integration test: the merchant
//!
//! Purchases move gold and stats together, and a rejected purchase changes
//! nothing.

use ember_quest::character::{Player, PlayerClass};
use ember_quest::core::GameError;
use ember_quest::items::{shop_items, EquipmentSlot, PotionKind};
use ember_quest::shop::{buy_item, buy_potion, potion_price, sell_back_value};

fn index_of(name: &str) -> usize {
    shop_items().iter().position(|i| i.name == name).unwrap()
}

#[test]
fn test_weapon_upgrade_path_refunds_half() {
    let mut player = Player::new("Shopper", PlayerClass::Warrior).unwrap();
    player.gold = 200;
    let base_attack = player.attack();

    let first = buy_item(&mut player, index_of("Iron Sword")).unwrap();
    assert!(first.replaced.is_none());
    assert_eq!(player.gold, 140);
    assert_eq!(player.attack(), base_attack + 5);

    let second = buy_item(&mut player, index_of("Steel Dagger")).unwrap();
    assert_eq!(second.replaced.as_ref().map(|i| i.name.as_str()), Some("Iron Sword"));
    assert_eq!(second.refund, 30);
    assert_eq!(player.gold, 140 - 65 + 30);
    assert_eq!(player.attack(), base_attack + 4);
    assert_eq!(
        player.equipment.get(EquipmentSlot::Weapon).as_ref().map(|i| i.name.as_str()),
        Some("Steel Dagger")
    );
    assert_eq!(player.stats.gold_spent, 125);
}

#[test]
fn test_rejected_purchases_leave_player_untouched() {
    let mut player = Player::new("Broke", PlayerClass::Mage).unwrap();
    player.gold = 10;
    let before = player.clone();

    assert!(matches!(
        buy_item(&mut player, index_of("Iron Sword")),
        Err(GameError::InsufficientGold { price: 60, available: 10 })
    ));
    assert!(matches!(
        buy_item(&mut player, index_of("Knight's Blade")),
        Err(GameError::LevelTooLow { required: 4, current: 1 })
    ));
    assert!(matches!(
        buy_item(&mut player, shop_items().len()),
        Err(GameError::InvalidChoice(_))
    ));
    assert!(buy_potion(&mut player, PotionKind::Health).is_err());
    assert_eq!(player, before);
}

#[test]
fn test_armor_does_not_heal() {
    let mut player = Player::new("Tank", PlayerClass::Rogue).unwrap();
    player.gold = 100;
    player.character.hp = 40;

    buy_item(&mut player, index_of("Leather Armor")).unwrap();
    assert_eq!(player.max_hp(), 110);
    assert_eq!(player.hp(), 40);
}

#[test]
fn test_potion_stock_up_until_broke() {
    let mut player = Player::new("Hoarder", PlayerClass::Warrior).unwrap();
    let price = potion_price(PotionKind::Mana, player.level());
    let mut bought = 0;
    while buy_potion(&mut player, PotionKind::Mana).is_ok() {
        bought += 1;
    }
    assert_eq!(bought, 50 / price);
    assert_eq!(player.gold, 50 % price);
    assert_eq!(player.inventory.mana_potions, 1 + bought);
}

#[test]
fn test_sell_back_value_rounds_down() {
    let dagger = shop_items().remove(index_of("Steel Dagger"));
    assert_eq!(sell_back_value(&dagger), 32);
}
