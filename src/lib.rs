//! Boss-encounter engine for the Voidfall arcade shooter.
//!
//! The host game owns rendering, audio, input, and saves; this crate owns
//! the fight itself. Add [`VoidfallBossPlugin`] to the `App`, spawn a
//! [`boss::BossEncounter`] with a `Transform` to start a fight, report hits
//! with [`boss::BossDamageEvent`], and observe the fight through the typed
//! messages ([`boss::PhaseChangedEvent`], [`boss::MoveExecutedEvent`],
//! [`boss::EncounterDefeatedEvent`], [`lore::LoreUnlockedEvent`]).

pub mod boss;
pub mod content;
pub mod lore;

use bevy::prelude::*;

pub use boss::{
    BossDamageEvent, BossEncounter, BossKind, BossMove, EffectRequest, EncounterConfigError,
    EncounterDefeatedEvent, MoveExecutedEvent, PhaseChangedEvent,
};
pub use content::BossContent;
pub use lore::{LoreEntry, LoreUnlockedEvent, LoreUnlocks};

/// Everything the engine needs: content registry, encounter systems, and
/// the lore evaluator.
pub struct VoidfallBossPlugin;

impl Plugin for VoidfallBossPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            content::BossContentPlugin,
            boss::BossEncounterPlugin,
            lore::LorePlugin,
        ));
    }
}
