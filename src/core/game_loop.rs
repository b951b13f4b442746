//! Menu-driven session: title screen, character creation, the main menu and
//! everything reachable from it.
//!
//! All output goes through the injected [`Frontend`] and all randomness
//! through the injected [`Rng`], so a whole session can be replayed from a
//! script and a seed.

use std::io;

use log::{info, warn};
use rand::Rng;

use crate::character::player::{validate_name, Player};
use crate::character::save::SaveManager;
use crate::character::skills::SkillType;
use crate::character::PlayerClass;
use crate::combat::{
    apply_victory, record_defeat, record_escape, roll_victory_rewards, Combat, CombatAction,
    CombatOutcome,
};
use crate::items::{shop_items, PotionKind};
use crate::monsters::create_monster;
use crate::shop::{buy_item, buy_potion, greeting, potion_price};
use crate::ui::render::{
    banner, character_sheet, describe_event, hp_tone, level_up_lines, monster_status,
    player_status, save_entry, special_attack_label,
};
use crate::ui::{choose, confirm, Frontend, Tone};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    GameOver,
}

const MAIN_MENU: [&str; 9] = [
    "Fight a monster",
    "Visit the shop",
    "Use a health potion",
    "Use a mana potion",
    "View character info",
    "Allocate skill points",
    "Save game",
    "Load game",
    "Quit game",
];

pub struct Game<F: Frontend, R: Rng> {
    frontend: F,
    rng: R,
    saves: SaveManager,
}

impl<F: Frontend, R: Rng> Game<F, R> {
    pub fn new(frontend: F, rng: R, saves: SaveManager) -> Self {
        Self {
            frontend,
            rng,
            saves,
        }
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }

    fn print_lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.frontend.print(line.as_ref())?;
        }
        Ok(())
    }

    fn print_title(&mut self, title: &str) -> io::Result<()> {
        for line in banner(title) {
            self.frontend.print_styled(&line, Tone::Title)?;
        }
        Ok(())
    }

    fn print_menu(&mut self, options: &[String]) -> io::Result<()> {
        for (i, option) in options.iter().enumerate() {
            self.frontend.print(&format!("{}. {}", i + 1, option))?;
        }
        Ok(())
    }

    /// Runs the title screen until the player quits or dies.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            self.frontend.clear()?;
            self.print_title("WELCOME TO EMBER QUEST!")?;
            self.frontend.print("")?;
            self.print_menu(&["New Game".to_string(), "Load Game".to_string(), "Quit".to_string()])?;

            match choose(&mut self.frontend, "Enter your choice (1-3): ", 3)? {
                0 => {
                    let player = self.create_character()?;
                    return self.main_menu(player);
                }
                1 => {
                    if let Some(player) = self.load_menu()? {
                        self.frontend
                            .print_styled(&format!("Welcome back, {}!", player.character.name), Tone::Good)?;
                        self.frontend.pause()?;
                        return self.main_menu(player);
                    }
                }
                _ => {
                    self.frontend.print("\nThanks for playing!")?;
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    fn create_character(&mut self) -> io::Result<Player> {
        self.frontend.clear()?;
        self.print_title("CHARACTER CREATION")?;

        let name = loop {
            let input = self.frontend.prompt("Enter your character's name: ")?;
            match validate_name(&input) {
                Ok(()) => break input,
                Err(e) => self.frontend.print_styled(&e, Tone::Bad)?,
            }
        };

        self.frontend.print("\nChoose your class:")?;
        let classes = PlayerClass::all();
        let options: Vec<String> = classes
            .iter()
            .map(|c| format!("{} - {}", c.name(), c.profile().tagline))
            .collect();
        self.print_menu(&options)?;
        let class = classes[choose(&mut self.frontend, "Enter your choice (1-3): ", classes.len())?];

        let player = match Player::new(&name, class) {
            Ok(player) => player,
            Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string())),
        };
        info!("created {} the {}", player.character.name, class.name());

        self.frontend.print_styled(
            &format!("\nWelcome, {} the {}!", player.character.name, class.name()),
            Tone::Good,
        )?;
        self.frontend.print("Your adventure begins now...")?;
        self.frontend.pause()?;
        Ok(player)
    }

    fn main_menu(&mut self, mut player: Player) -> io::Result<SessionEnd> {
        loop {
            self.frontend.clear()?;
            self.print_title(&format!(
                "{} - Level {} {}",
                player.character.name,
                player.level(),
                player.class.name()
            ))?;
            self.print_lines(player_status(&player))?;
            if player.skill_points > 0 {
                self.frontend.print_styled(
                    &format!("You have {} unspent skill points!", player.skill_points),
                    Tone::Info,
                )?;
            }
            self.frontend.print("\nWhat would you like to do?")?;
            let options: Vec<String> = MAIN_MENU.iter().map(|s| s.to_string()).collect();
            self.print_menu(&options)?;

            match choose(&mut self.frontend, "Enter your choice (1-9): ", MAIN_MENU.len())? {
                0 => {
                    if self.battle(&mut player)? == CombatOutcome::Defeat {
                        self.frontend.print_styled("\nGAME OVER!", Tone::Bad)?;
                        self.frontend.print("You have been defeated in battle...")?;
                        self.frontend.print("Thanks for playing Ember Quest!")?;
                        info!("{} fell at level {}", player.character.name, player.level());
                        return Ok(SessionEnd::GameOver);
                    }
                }
                1 => self.shop_menu(&mut player)?,
                2 => self.drink_potion(&mut player, PotionKind::Health)?,
                3 => self.drink_potion(&mut player, PotionKind::Mana)?,
                4 => {
                    self.frontend.clear()?;
                    self.print_title("CHARACTER INFORMATION")?;
                    self.print_lines(character_sheet(&player))?;
                    self.frontend.pause()?;
                }
                5 => self.skills_menu(&mut player)?,
                6 => self.save_menu(&player)?,
                7 => {
                    if let Some(loaded) = self.load_menu()? {
                        player = loaded;
                        self.frontend
                            .print_styled(&format!("Welcome back, {}!", player.character.name), Tone::Good)?;
                        self.frontend.pause()?;
                    }
                }
                _ => {
                    self.frontend.print("\nThanks for playing Ember Quest!")?;
                    self.frontend.print("Come back soon for more adventures!")?;
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    fn drink_potion(&mut self, player: &mut Player, kind: PotionKind) -> io::Result<()> {
        match player.use_potion(kind) {
            Ok(restored) => {
                let (resource, current, max) = match kind {
                    PotionKind::Health => ("HP", player.hp(), player.max_hp()),
                    PotionKind::Mana => ("Mana", player.mana, player.max_mana),
                };
                self.frontend.print_styled(
                    &format!(
                        "\nYou used a {} and restored {} {}! ({}/{})",
                        kind.name(),
                        restored,
                        resource,
                        current,
                        max
                    ),
                    Tone::Good,
                )?;
            }
            Err(e) => self.frontend.print_styled(&format!("\n{}", e), Tone::Bad)?,
        }
        self.frontend.pause()
    }

    /// Fights one freshly generated monster and settles the result.
    fn battle(&mut self, player: &mut Player) -> io::Result<CombatOutcome> {
        let mut monster = create_monster(player.level(), &mut self.rng)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        let monster_name = monster.character.name.clone();

        self.frontend.clear()?;
        self.print_title("BATTLE BEGINS!")?;
        if monster.is_boss {
            self.frontend
                .print_styled(&format!("A BOSS appears: {}!", monster_name), Tone::Bad)?;
        } else {
            self.frontend.print(&format!("A wild {} appears!", monster_name))?;
        }
        self.frontend.print_styled(monster.description(), Tone::Muted)?;
        self.frontend.print(&format!(
            "{} - HP: {}, Attack: {}",
            monster_name,
            monster.hp(),
            monster.attack()
        ))?;
        self.frontend.pause()?;

        let mut combat = Combat::new(player, &mut monster);
        let outcome = loop {
            self.frontend.clear()?;
            self.print_title(&format!("BATTLE - Turn {}", combat.turn()))?;
            self.frontend.print(&monster_status(combat.monster()))?;
            let p = combat.player();
            self.frontend.print_styled(
                &format!("You: {} - HP: {}/{}", p.character.name, p.hp(), p.max_hp()),
                hp_tone(p.hp(), p.max_hp()),
            )?;
            self.print_lines(player_status(p))?;

            self.frontend.print("\nChoose your action:")?;
            let options: Vec<String> = CombatAction::all()
                .iter()
                .map(|action| match action {
                    CombatAction::SpecialAttack => special_attack_label(combat.player()),
                    other => other.label().to_string(),
                })
                .collect();
            self.print_menu(&options)?;

            let index = choose(&mut self.frontend, "Enter your choice (1-5): ", options.len())?;
            let action = CombatAction::all()[index];

            match combat.take_turn(action, &mut self.rng) {
                Ok(report) => {
                    self.frontend.print("")?;
                    for event in &report.events {
                        let (text, tone) = describe_event(event, &monster_name);
                        self.frontend.print_styled(&text, tone)?;
                    }
                    self.frontend.pause()?;
                    if report.outcome != CombatOutcome::Ongoing {
                        break report.outcome;
                    }
                }
                Err(e) => {
                    self.frontend.print_styled(&format!("\n{}", e), Tone::Bad)?;
                    self.frontend.pause()?;
                }
            }
        };

        match outcome {
            CombatOutcome::Victory => {
                let rewards = roll_victory_rewards(player.level(), &monster, &mut self.rng);
                self.frontend.print_styled("Victory!", Tone::Good)?;
                self.frontend.print(&format!(
                    "\nYou gained {} XP and {} gold!",
                    rewards.xp, rewards.gold
                ))?;
                if let Some(report) = apply_victory(player, &monster, rewards) {
                    for line in level_up_lines(&report) {
                        self.frontend.print_styled(&line, Tone::Info)?;
                    }
                }
                self.frontend.pause()?;
            }
            CombatOutcome::Escaped => record_escape(player),
            CombatOutcome::Defeat => record_defeat(player),
            CombatOutcome::Ongoing => {}
        }

        Ok(outcome)
    }

    fn shop_menu(&mut self, player: &mut Player) -> io::Result<()> {
        let items = shop_items();
        let welcome = greeting(&mut self.rng);

        loop {
            self.frontend.clear()?;
            self.print_title("MERCHANT'S SHOP")?;
            self.frontend.print(welcome)?;
            self.frontend.print(&format!("\nYour Gold: {}", player.gold))?;
            self.frontend.print(&format!(
                "Health Potions: {} | Mana Potions: {}",
                player.inventory.health_potions, player.inventory.mana_potions
            ))?;
            self.frontend.print("\nItems for sale:")?;

            let level = player.level();
            let mut options = vec![
                format!(
                    "Health Potion - {} gold (Restores {} HP)",
                    potion_price(PotionKind::Health, level),
                    player.potion_restore_amount(PotionKind::Health)
                ),
                format!(
                    "Mana Potion - {} gold (Restores {} Mana)",
                    potion_price(PotionKind::Mana, level),
                    player.potion_restore_amount(PotionKind::Mana)
                ),
            ];
            options.extend(items.iter().map(|item| {
                format!(
                    "{} [{}] {} - {} gold (Lv {})",
                    item.name,
                    item.slot.name(),
                    item.bonus_summary(),
                    item.price,
                    item.level_requirement
                )
            }));
            options.push("Leave shop".to_string());
            self.print_menu(&options)?;

            let label = format!("Enter your choice (1-{}): ", options.len());
            let choice = choose(&mut self.frontend, &label, options.len())?;

            let message = match choice {
                0 | 1 => {
                    let kind = if choice == 0 {
                        PotionKind::Health
                    } else {
                        PotionKind::Mana
                    };
                    buy_potion(player, kind).map(|price| {
                        format!(
                            "You bought a {} for {} gold! Remaining gold: {}",
                            kind.name(),
                            price,
                            player.gold
                        )
                    })
                }
                n if n == options.len() - 1 => {
                    self.frontend.print("\nThank you for visiting! Come back anytime!")?;
                    return self.frontend.pause();
                }
                n => buy_item(player, n - 2).map(|purchase| {
                    let mut text = format!(
                        "You bought and equipped {} for {} gold!",
                        purchase.item.name, purchase.item.price
                    );
                    if let Some(old) = &purchase.replaced {
                        text.push_str(&format!(
                            " Sold your {} for {} gold.",
                            old.name, purchase.refund
                        ));
                    }
                    text
                }),
            };

            match message {
                Ok(text) => self.frontend.print_styled(&format!("\n{}", text), Tone::Good)?,
                Err(e) => self.frontend.print_styled(&format!("\n{}", e), Tone::Bad)?,
            }
            self.frontend.pause()?;
        }
    }

    fn skills_menu(&mut self, player: &mut Player) -> io::Result<()> {
        loop {
            if player.skill_points == 0 {
                self.frontend
                    .print_styled("\nYou have no skill points to spend.", Tone::Muted)?;
                return self.frontend.pause();
            }

            self.frontend.clear()?;
            self.print_title("ALLOCATE SKILL POINTS")?;
            self.frontend
                .print(&format!("Unspent points: {}", player.skill_points))?;

            let skills = SkillType::all();
            let mut options: Vec<String> = skills
                .iter()
                .map(|s| {
                    format!(
                        "{} ({}) - rank {}",
                        s.name(),
                        s.describe(),
                        player.allocated_skills.get(*s)
                    )
                })
                .collect();
            options.push("Back".to_string());
            self.print_menu(&options)?;

            let label = format!("Enter your choice (1-{}): ", options.len());
            let choice = choose(&mut self.frontend, &label, options.len())?;
            if choice == skills.len() {
                return Ok(());
            }

            match player.allocate_skill(skills[choice]) {
                Ok(gain) => self.frontend.print_styled(
                    &format!(
                        "{} is now rank {} ({}).",
                        gain.skill.name(),
                        gain.new_rank,
                        gain.skill.describe()
                    ),
                    Tone::Good,
                )?,
                Err(e) => self.frontend.print_styled(&e.to_string(), Tone::Bad)?,
            }
        }
    }

    fn save_menu(&mut self, player: &Player) -> io::Result<()> {
        let saves = match self.saves.list_saves() {
            Ok(saves) => saves,
            Err(e) => {
                warn!("could not list saves: {}", e);
                Vec::new()
            }
        };

        self.frontend.print("\nExisting save files:")?;
        let mut options: Vec<String> = saves.iter().map(save_entry).collect();
        options.push("Create new save file".to_string());
        self.print_menu(&options)?;

        let label = format!("Choose save slot (1-{}): ", options.len());
        let choice = choose(&mut self.frontend, &label, options.len())?;
        let slot = match saves.get(choice) {
            Some(info) => {
                if !confirm(&mut self.frontend, &format!("Overwrite {}?", info.slot))? {
                    return Ok(());
                }
                info.slot.clone()
            }
            None => {
                let slot = self.frontend.prompt("Enter save file name: ")?;
                if self.saves.exists(&slot)
                    && !confirm(&mut self.frontend, &format!("Overwrite {}?", slot))?
                {
                    return Ok(());
                }
                slot
            }
        };

        match self.saves.save(player, &slot) {
            Ok(path) => self
                .frontend
                .print_styled(&format!("Game saved to {}", path.display()), Tone::Good)?,
            Err(e) => self
                .frontend
                .print_styled(&format!("Could not save: {}", e), Tone::Bad)?,
        }
        self.frontend.pause()
    }

    /// Lets the player pick a save. `None` when nothing was loaded.
    fn load_menu(&mut self) -> io::Result<Option<Player>> {
        let saves = match self.saves.list_saves() {
            Ok(saves) => saves,
            Err(e) => {
                self.frontend
                    .print_styled(&format!("Could not read saves: {}", e), Tone::Bad)?;
                self.frontend.pause()?;
                return Ok(None);
            }
        };

        if saves.is_empty() {
            self.frontend.print_styled("\nNo save files found!", Tone::Bad)?;
            self.frontend.pause()?;
            return Ok(None);
        }

        self.frontend.print("\nAvailable save files:")?;
        let options: Vec<String> = saves.iter().map(save_entry).collect();
        self.print_menu(&options)?;

        let label = format!("Choose save file (1-{}): ", options.len());
        let info = &saves[choose(&mut self.frontend, &label, options.len())?];

        match self.saves.load(&info.slot) {
            Ok(player) => Ok(Some(player)),
            Err(e) => {
                self.frontend
                    .print_styled(&format!("Could not load {}: {}", info.filename, e), Tone::Bad)?;
                self.frontend.pause()?;
                Ok(None)
            }
        }
    }
}
