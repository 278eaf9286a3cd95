//! Lore domain: unlockable entries and the unlock ledger.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::content::LoreTier;

/// One unlocked codex entry, ready for the host's lore UI and save layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoreEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub origin: String,
    pub weakness: String,
    pub quote: String,
    pub tier: LoreTier,
}

/// Fired the first time an entry unlocks; never repeated for the same id.
#[derive(Debug)]
pub struct LoreUnlockedEvent {
    pub entry: LoreEntry,
}

impl Message for LoreUnlockedEvent {}

/// Which lore ids have been unlocked so far. The host seeds this from its
/// save file and persists it however it likes; this crate only mutates it
/// through [`LoreUnlocks::unlock`].
#[derive(Resource, Debug, Default)]
pub struct LoreUnlocks {
    unlocked: HashSet<String>,
}

impl LoreUnlocks {
    /// Mark `id` unlocked. Returns true only the first time; unlocking an
    /// already-unlocked id is a no-op.
    pub fn unlock(&mut self, id: &str) -> bool {
        self.unlocked.insert(id.to_string())
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    pub fn count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.unlocked.iter().map(String::as_str)
    }
}
