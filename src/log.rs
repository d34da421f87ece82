//! Bounded game log shared by every mutating engine operation.
//!
//! The log is the engine's only output channel besides the mutated state
//! itself; message content is part of the observable contract.

use crate::core::constants::GAME_LOG_CAPACITY;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl GameLog {
    pub fn new() -> Self {
        Self::with_capacity(GAME_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a message, dropping the oldest entry once full.
    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&String> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any entry contains the given substring.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|m| m.contains(needle))
    }
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new()
    }
}
