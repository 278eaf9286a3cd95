//! Validation for loaded content definitions.

use std::collections::HashSet;

use super::data::{LoreTextDef, PhaseMoveSetDef};

/// A validation error with context about what failed.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Phase numbers must run 1..=N with no gaps or duplicates.
    PhaseNumbering { expected: u32, found: u32 },
    /// Every configured phase needs at least one move.
    EmptyMoveSet { phase: u32 },
    /// Two lore entries share an id.
    DuplicateLoreId { id: String },
    /// A lore entry has an empty id.
    MissingLoreId,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::PhaseNumbering { expected, found } => write!(
                f,
                "phase move sets must be numbered contiguously from 1: expected phase {}, found {}",
                expected, found
            ),
            ValidationError::EmptyMoveSet { phase } => {
                write!(f, "phase {} has an empty move set", phase)
            }
            ValidationError::DuplicateLoreId { id } => {
                write!(f, "duplicate lore entry id '{}'", id)
            }
            ValidationError::MissingLoreId => write!(f, "lore entry with empty id"),
        }
    }
}

/// Cross-check loaded defs. Returns every problem found, empty if clean.
pub fn validate_content(
    move_sets: &[PhaseMoveSetDef],
    lore: &[LoreTextDef],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut phases: Vec<u32> = move_sets.iter().map(|def| def.phase).collect();
    phases.sort_unstable();
    for (index, &phase) in phases.iter().enumerate() {
        let expected = index as u32 + 1;
        if phase != expected {
            errors.push(ValidationError::PhaseNumbering {
                expected,
                found: phase,
            });
            break;
        }
    }

    for def in move_sets {
        if def.moves.is_empty() {
            errors.push(ValidationError::EmptyMoveSet { phase: def.phase });
        }
    }

    let mut seen = HashSet::new();
    for def in lore {
        if def.id.is_empty() {
            errors.push(ValidationError::MissingLoreId);
        } else if !seen.insert(def.id.as_str()) {
            errors.push(ValidationError::DuplicateLoreId {
                id: def.id.clone(),
            });
        }
    }

    errors
}
