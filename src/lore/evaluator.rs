//! Lore domain: unlock evaluation from encounter messages.
//!
//! Entry ids are a pure function of the boss kind and the trigger, so the
//! same fight always yields the same codex entries regardless of when the
//! host processes the messages.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::boss::{BossKind, EncounterDefeatedEvent, PhaseChangedEvent};
use crate::content::{BossContent, LoreTier};
use crate::lore::types::{LoreEntry, LoreUnlockedEvent, LoreUnlocks};

/// Deterministic id for a boss/phase pair.
pub fn phase_lore_id(kind: BossKind, phase: u32) -> String {
    format!("{}_phase_{}", kind.id(), phase)
}

/// Deterministic id for a boss defeat.
pub fn defeat_lore_id(kind: BossKind) -> String {
    format!("{}_defeated", kind.id())
}

/// Build the entry for `id`, falling back to a bare titled entry when the
/// text tables don't cover it (e.g. a host-configured fourth phase).
pub(crate) fn entry_for(
    content: &BossContent,
    id: &str,
    kind: BossKind,
    phase: Option<u32>,
) -> LoreEntry {
    if let Some(def) = content.lore_text(id) {
        return LoreEntry {
            id: def.id.clone(),
            title: def.title.clone(),
            description: def.description.clone(),
            origin: def.origin.clone(),
            weakness: def.weakness.clone(),
            quote: def.quote.clone(),
            tier: def.tier,
        };
    }

    let title = match phase {
        Some(phase) => format!("{} - Phase {}", kind.title(), phase),
        None => format!("{} - Defeated", kind.title()),
    };
    LoreEntry {
        id: id.to_string(),
        title,
        description: String::new(),
        origin: String::new(),
        weakness: String::new(),
        quote: String::new(),
        tier: LoreTier::Mythic,
    }
}

fn try_unlock(
    unlocks: &mut LoreUnlocks,
    lore_writer: &mut MessageWriter<LoreUnlockedEvent>,
    entry: LoreEntry,
) {
    if unlocks.unlock(&entry.id) {
        info!("New lore unlocked: {}", entry.title);
        lore_writer.write(LoreUnlockedEvent { entry });
    }
}

/// Consumes phase and defeat messages and unlocks the matching codex
/// entries, once each.
pub(crate) fn evaluate_lore_unlocks(
    mut phase_events: MessageReader<PhaseChangedEvent>,
    mut defeat_events: MessageReader<EncounterDefeatedEvent>,
    content: Res<BossContent>,
    mut unlocks: ResMut<LoreUnlocks>,
    mut lore_writer: MessageWriter<LoreUnlockedEvent>,
) {
    for event in phase_events.read() {
        let id = phase_lore_id(event.kind, event.new_phase);
        let entry = entry_for(&content, &id, event.kind, Some(event.new_phase));
        try_unlock(&mut unlocks, &mut lore_writer, entry);
    }

    for event in defeat_events.read() {
        let id = defeat_lore_id(event.kind);
        let entry = entry_for(&content, &id, event.kind, None);
        try_unlock(&mut unlocks, &mut lore_writer, entry);
    }
}
