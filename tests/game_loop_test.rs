//! Integration test: scripted sessions
//!
//! Drives the whole menu system through `ScriptedFrontend` with a seeded RNG
//! and a throwaway save directory.

use std::io;

use ember_quest::character::SaveManager;
use ember_quest::core::{Game, SessionEnd};
use ember_quest::ui::ScriptedFrontend;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

fn play(inputs: &[&str], dir: &TempDir, seed: u64) -> (io::Result<SessionEnd>, ScriptedFrontend) {
    let mut game = Game::new(
        ScriptedFrontend::new(inputs.iter().copied()),
        ChaCha8Rng::seed_from_u64(seed),
        SaveManager::new(dir.path()).unwrap(),
    );
    let result = game.run();
    (result, game.into_frontend())
}

#[test]
fn test_save_then_load_in_a_new_session() {
    let dir = TempDir::new().unwrap();

    let (result, ui) = play(&["1", "Aria", "1", "7", "1", "aria_slot", "9"], &dir, 1);
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(ui.saw("Game saved to"));
    assert!(dir.path().join("aria_slot.json").exists());

    let (result, ui) = play(&["2", "1", "5", "9"], &dir, 2);
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(ui.saw("aria_slot - Aria the Warrior (Lv 1)"));
    assert!(ui.saw("Welcome back, Aria!"));
    assert!(ui.saw("Class: Warrior"));
}

#[test]
fn test_overwrite_existing_slot() {
    let dir = TempDir::new().unwrap();
    play(&["1", "Aria", "2", "7", "1", "slot", "9"], &dir, 1).0.unwrap();

    // The existing save is option 1, "Create new save file" is option 2.
    let (result, ui) = play(&["2", "1", "7", "1", "y", "9"], &dir, 1);
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(ui.saw("2. Create new save file"));
    assert!(ui.saw("Overwrite slot? (y/n): "));
    assert_eq!(SaveManager::new(dir.path()).unwrap().list_saves().unwrap().len(), 1);
}

#[test]
fn test_new_save_with_taken_name_asks_first() {
    let dir = TempDir::new().unwrap();
    play(&["1", "Aria", "1", "7", "1", "slot", "9"], &dir, 1).0.unwrap();

    // Bob types Aria's slot name under "Create new save file" and declines.
    let (result, ui) = play(&["1", "Bob", "3", "7", "2", "slot", "n", "9"], &dir, 2);
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(ui.saw("Overwrite slot? (y/n): "));
    assert!(!ui.saw("Game saved to"));
    let kept = SaveManager::new(dir.path()).unwrap().load("slot").unwrap();
    assert_eq!(kept.character.name, "Aria");

    // Accepting replaces it.
    play(&["1", "Bob", "3", "7", "2", "Slot", "y", "9"], &dir, 3).0.unwrap();
    let replaced = SaveManager::new(dir.path()).unwrap().load("slot").unwrap();
    assert_eq!(replaced.character.name, "Bob");
}

#[test]
fn test_buy_potion_in_shop() {
    let dir = TempDir::new().unwrap();
    let (result, ui) = play(&["1", "Bob", "1", "2", "1", "15", "9"], &dir, 3);
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(ui.saw("MERCHANT'S SHOP"));
    assert!(ui.saw("You bought a Health Potion for 17 gold! Remaining gold: 33"));
    assert!(ui.saw("Thank you for visiting!"));
}

#[test]
fn test_shop_rejects_unaffordable_item() {
    let dir = TempDir::new().unwrap();
    // Item 3 is the Iron Sword at 60 gold; a new character has 50.
    let (result, ui) = play(&["1", "Bob", "1", "2", "3", "15", "9"], &dir, 3);
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(ui.saw("Not enough gold! Need 60, have 50 (10 short)"));
}

#[test]
fn test_invalid_menu_input_is_retried() {
    let dir = TempDir::new().unwrap();
    let (result, ui) = play(&["0", "four", "3"], &dir, 4);
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(ui.saw("Invalid choice! Please enter one of: 1, 2, 3"));
}

#[test]
fn test_battle_runs_to_an_ending() {
    let dir = TempDir::new().unwrap();
    // Keep trying to flee. Once out of battle, "5" opens the empty skills menu.
    let mut inputs = vec!["1", "Runner", "3", "1"];
    inputs.extend(std::iter::repeat("5").take(60));
    let (result, ui) = play(&inputs, &dir, 5);

    assert!(ui.saw("BATTLE BEGINS!"));
    match result {
        Ok(SessionEnd::GameOver) => assert!(ui.saw("GAME OVER!")),
        Ok(SessionEnd::Quit) => panic!("script never quits"),
        Err(e) => {
            assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof);
            assert!(ui.saw("You successfully escaped"));
        }
    }
}
