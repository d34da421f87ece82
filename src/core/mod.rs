//! Core engine: combat math, the turn engine, effect resolution,
//! progression, and session state.

pub mod combat;
pub mod combat_math;
pub mod constants;
pub mod effects;
pub mod game_state;
pub mod progression;
