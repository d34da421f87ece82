//! Session state: the explicit screen-level state machine plus the data it
//! owns. Wires user intents to the engine operations and keeps the log.
//!
//! Timers stay with the caller: it is expected to call [`GameState::tick`]
//! every 1000 ms while in combat and [`GameState::monster_turn`] 750 ms
//! after a spawn or hero action. Leaving combat drops the monster, so a
//! stale timer firing afterwards is a no-op.

use crate::achievements::{check_achievements, Achievements};
use crate::character::classes::{create_hero, HeroClass};
use crate::character::Hero;
use crate::core::combat::{hero_action, monster_action};
use crate::core::progression::handle_monster_defeat;
use crate::items::data::find_template;
use crate::items::equipment::use_item;
use crate::items::shop::purchase_item;
use crate::log::GameLog;
use crate::monsters::{spawn_monster, Monster};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    CharacterCreation,
    Home,
    InCombat,
    /// Transient: shown after a kill, acknowledged back to Home.
    Victory,
    /// Terminal: the hero is gone; restart returns to character creation.
    Defeat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub hero: Option<Hero>,
    pub monster: Option<Monster>,
    pub session: SessionState,
    pub log: GameLog,
    pub achievements: Achievements,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            hero: None,
            monster: None,
            session: SessionState::CharacterCreation,
            log: GameLog::new(),
            achievements: Achievements::new(),
        }
    }

    /// Create the hero from a class template and move to the home screen.
    pub fn create_hero(&mut self, class: &HeroClass) -> bool {
        if self.hero.is_some() {
            return false;
        }
        let hero = create_hero(class);
        self.log
            .push(format!("{} embarks on their adventure!", hero.name));
        self.hero = Some(hero);
        self.session = SessionState::Home;
        true
    }

    /// Enter combat from the home screen.
    pub fn start_battle(&mut self) -> bool {
        let alive = self.hero.as_ref().is_some_and(|h| h.is_alive());
        if self.session != SessionState::Home || !alive {
            return false;
        }
        self.session = SessionState::InCombat;
        true
    }

    /// Spawn a monster if combat is active with a living hero and no
    /// monster present.
    pub fn ensure_monster(&mut self, rng: &mut impl Rng) {
        if self.session != SessionState::InCombat || self.monster.is_some() {
            return;
        }
        if self.hero.as_ref().is_some_and(|h| h.is_alive()) {
            self.monster = Some(spawn_monster(rng, &mut self.log));
        }
    }

    /// Advance both combatants' cooldowns by one time step.
    pub fn tick(&mut self, delta_ms: u32) {
        if self.session != SessionState::InCombat {
            return;
        }
        if let Some(hero) = self.hero.as_mut() {
            hero.tick_cooldowns(delta_ms);
        }
        if let Some(monster) = self.monster.as_mut() {
            monster.tick_cooldowns(delta_ms);
        }
    }

    /// Execute a hero skill. On a kill: rewards and loot are applied, the
    /// hero's cooldowns reset, achievements re-checked, and the session
    /// moves to the transient Victory state with the monster cleared.
    pub fn use_skill(&mut self, skill_index: usize, rng: &mut impl Rng) -> bool {
        if self.session != SessionState::InCombat {
            return false;
        }
        let (Some(hero), Some(monster)) = (self.hero.as_mut(), self.monster.as_mut()) else {
            return false;
        };

        let report = hero_action(hero, monster, skill_index, &mut self.log, rng);
        if report.monster_defeated {
            handle_monster_defeat(hero, monster, &mut self.log, rng);
            hero.reset_cooldowns();
            check_achievements(hero, &mut self.achievements, &mut self.log);
            self.monster = None;
            self.session = SessionState::Victory;
        }
        report.performed
    }

    /// Execute the monster's automatic response. On hero death the session
    /// ends in Defeat and both combatants are dropped.
    pub fn monster_turn(&mut self, rng: &mut impl Rng) -> bool {
        if self.session != SessionState::InCombat {
            return false;
        }
        let (Some(hero), Some(monster)) = (self.hero.as_mut(), self.monster.as_mut()) else {
            return false;
        };

        let report = monster_action(hero, monster, &mut self.log, rng);
        if report.hero_defeated {
            self.log.push("Game Over! The hero has been defeated.");
            self.hero = None;
            self.monster = None;
            self.session = SessionState::Defeat;
        }
        report.attacked
    }

    /// Acknowledge the victory screen and return home.
    pub fn finish_victory(&mut self) {
        if self.session == SessionState::Victory {
            self.session = SessionState::Home;
        }
    }

    /// Flee combat: the monster is dropped, so any pending monster action
    /// fires against nothing.
    pub fn return_home(&mut self) {
        if matches!(self.session, SessionState::InCombat | SessionState::Victory) {
            self.monster = None;
            self.session = SessionState::Home;
        }
    }

    /// Start over after a defeat.
    pub fn restart(&mut self) {
        if self.session == SessionState::Defeat {
            self.session = SessionState::CharacterCreation;
        }
    }

    /// Use or equip an inventory item by instance id.
    pub fn use_item(&mut self, item_id: &str) -> bool {
        let Some(hero) = self.hero.as_mut() else {
            return false;
        };
        let used = use_item(hero, item_id, &mut self.log);
        check_achievements(hero, &mut self.achievements, &mut self.log);
        used
    }

    /// Buy one instance of a shop template by base id.
    pub fn buy_item(&mut self, base_id: &str) -> bool {
        let Some(hero) = self.hero.as_mut() else {
            return false;
        };
        let Some(template) = find_template(base_id) else {
            self.log.push(format!("Unknown item template: {base_id}"));
            return false;
        };
        let bought = purchase_item(hero, &template, &mut self.log);
        check_achievements(hero, &mut self.achievements, &mut self.log);
        bought
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
