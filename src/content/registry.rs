//! BossContent resource providing lookups for move sets and lore text.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{LoreTextDef, PhaseMoveSetDef, default_lore_entries, default_move_sets};
use crate::boss::BossMove;

/// Central registry for the boss catalog: per-phase move rotations and the
/// lore text tables. Read-only at runtime.
#[derive(Resource)]
pub struct BossContent {
    /// Move rotation per phase, indexed by `phase - 1`.
    move_sets: Vec<Vec<BossMove>>,
    lore: HashMap<String, LoreTextDef>,
}

impl Default for BossContent {
    fn default() -> Self {
        Self::from_defs(default_move_sets(), default_lore_entries())
    }
}

impl BossContent {
    /// Assemble a registry from loaded definitions. Phase numbers in the
    /// defs are 1-based; `validation::validate_content` checks they are
    /// contiguous before a loaded registry replaces the default.
    pub fn from_defs(move_sets: Vec<PhaseMoveSetDef>, lore: Vec<LoreTextDef>) -> Self {
        let mut sets = move_sets;
        sets.sort_by_key(|def| def.phase);
        Self {
            move_sets: sets.into_iter().map(|def| def.moves).collect(),
            lore: lore
                .into_iter()
                .map(|def| (def.id.clone(), def))
                .collect(),
        }
    }

    /// The move rotation for `phase` (1-based). Unconfigured phases yield an
    /// empty slice, never a panic; callers treat that as "no moves to fire".
    pub fn moves_for_phase(&self, phase: u32) -> &[BossMove] {
        phase
            .checked_sub(1)
            .and_then(|index| self.move_sets.get(index as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of phases the catalog configures.
    pub fn phase_count(&self) -> u32 {
        self.move_sets.len() as u32
    }

    /// Lore text for a synthesized entry id, if the tables cover it.
    pub fn lore_text(&self, id: &str) -> Option<&LoreTextDef> {
        self.lore.get(id)
    }

    pub fn lore_entry_count(&self) -> usize {
        self.lore.len()
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "BossContent loaded: {} phases ({} moves), {} lore entries",
            self.move_sets.len(),
            self.move_sets.iter().map(Vec::len).sum::<usize>(),
            self.lore.len(),
        )
    }
}
