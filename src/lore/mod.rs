//! Lore domain: codex unlock evaluation driven by encounter messages.

mod evaluator;
mod types;

pub use evaluator::{defeat_lore_id, phase_lore_id};
pub use types::{LoreEntry, LoreUnlockedEvent, LoreUnlocks};

use bevy::prelude::*;

use crate::lore::evaluator::evaluate_lore_unlocks;

/// Registers the unlock ledger and the evaluator system. Requires
/// [`crate::boss::BossEncounterPlugin`] for the messages it consumes.
pub struct LorePlugin;

impl Plugin for LorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoreUnlocks>()
            .add_message::<LoreUnlockedEvent>()
            .add_systems(Update, evaluate_lore_unlocks);
    }
}
