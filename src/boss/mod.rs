//! Boss domain: encounter state machine, move catalog types, executor, and
//! the message channel tying them to the host.

mod encounter;
mod events;
mod executor;
mod moves;
mod systems;
#[cfg(test)]
mod tests;

pub use encounter::{BossEncounter, BossKind, EncounterConfigError, EncounterSignal};
pub use events::{BossDamageEvent, EncounterDefeatedEvent, MoveExecutedEvent, PhaseChangedEvent};
pub use executor::{EffectRequest, execute};
pub use moves::BossMove;

use bevy::prelude::*;

use crate::boss::systems::{apply_boss_damage, tick_encounters};

/// Registers the encounter messages and the per-frame update systems.
///
/// Spawn a [`BossEncounter`] (with a `Transform`) to start a fight; despawn
/// it to end one. Requires [`crate::content::BossContentPlugin`].
pub struct BossEncounterPlugin;

impl Plugin for BossEncounterPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BossDamageEvent>()
            .add_message::<PhaseChangedEvent>()
            .add_message::<MoveExecutedEvent>()
            .add_message::<EncounterDefeatedEvent>()
            .add_systems(Update, (apply_boss_damage, tick_encounters).chain());
    }
}
