//! Skirmish - Turn-Based Combat and Progression Engine
//!
//! A hero fights monsters, gains experience and loot, manages inventory and
//! equipment, and unlocks achievements. The engine computes next-state
//! transitions and emits human-readable log lines; rendering, timers, and
//! menus belong to the caller.

pub mod achievements;
pub mod character;
pub mod core;
pub mod items;
pub mod log;
pub mod monsters;
pub mod skills;

pub use crate::core::game_state::{GameState, SessionState};
pub use crate::log::GameLog;
