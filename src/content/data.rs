//! Content definitions and the built-in tables.
//!
//! The flavor strings and move numerics live here as data, away from the
//! state machine; `Default for BossContent` assembles them, and the RON
//! files under `assets/data/` let a host override them.

use serde::{Deserialize, Serialize};

use crate::boss::BossMove;

/// Wrapper matching the shape of the RON data files.
#[derive(Debug, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub items: Vec<T>,
}

/// Ordered, non-empty move rotation for one phase.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhaseMoveSetDef {
    pub phase: u32,
    pub moves: Vec<BossMove>,
}

/// Rarity tier of a lore entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum LoreTier {
    Common,
    Rare,
    Mythic,
}

/// Narrative text for one unlockable lore entry, keyed by its synthesized id
/// (`{boss_id}_phase_{n}` or `{boss_id}_defeated`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoreTextDef {
    pub id: String,
    pub title: String,
    pub description: String,
    pub origin: String,
    pub weakness: String,
    pub quote: String,
    pub tier: LoreTier,
}

/// The standard escalating catalog: each phase adds a move and raises the
/// parameters of the ones it keeps.
pub(crate) fn default_move_sets() -> Vec<PhaseMoveSetDef> {
    vec![
        PhaseMoveSetDef {
            phase: 1,
            moves: vec![
                BossMove::VoidPulse {
                    count: 8,
                    speed: 200.0,
                },
                BossMove::ChronoSlam {
                    duration: 2.0,
                    damage: 50.0,
                },
                BossMove::QuantumSpiral {
                    count: 3,
                    speed: 150.0,
                },
            ],
        },
        PhaseMoveSetDef {
            phase: 2,
            moves: vec![
                BossMove::VoidPulse {
                    count: 12,
                    speed: 250.0,
                },
                BossMove::ChronoSlam {
                    duration: 1.5,
                    damage: 75.0,
                },
                BossMove::QuantumSpiral {
                    count: 5,
                    speed: 200.0,
                },
                BossMove::SummonMinions { count: 3 },
            ],
        },
        PhaseMoveSetDef {
            phase: 3,
            moves: vec![
                BossMove::VoidPulse {
                    count: 16,
                    speed: 300.0,
                },
                BossMove::ChronoSlam {
                    duration: 1.0,
                    damage: 100.0,
                },
                BossMove::QuantumSpiral {
                    count: 8,
                    speed: 250.0,
                },
                BossMove::SummonMinions { count: 5 },
                BossMove::VoidCorruption {
                    radius: 200.0,
                    duration: 3.0,
                },
            ],
        },
    ]
}

fn entry(
    id: &str,
    title: &str,
    description: &str,
    origin: &str,
    weakness: &str,
    quote: &str,
) -> LoreTextDef {
    LoreTextDef {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        origin: origin.to_string(),
        weakness: weakness.to_string(),
        quote: quote.to_string(),
        tier: LoreTier::Mythic,
    }
}

pub(crate) fn default_lore_entries() -> Vec<LoreTextDef> {
    vec![
        // Void Corruptor
        entry(
            "void_corruptor_phase_1",
            "The Void Corruptor - Phase 1",
            "The Void Corruptor begins to manifest, its form shifting between dimensions.",
            "Born from the collapse of a quantum singularity, the Void Corruptor exists between dimensions.",
            "Vulnerable to temporal weapons that can disrupt its quantum state.",
            "\"The void between worlds calls to me...\"",
        ),
        entry(
            "void_corruptor_phase_2",
            "The Void Corruptor - Phase 2",
            "As its power grows, the Void Corruptor begins to corrupt the space around it.",
            "As it grows in power, the Void Corruptor begins to manifest in multiple realities simultaneously.",
            "Quantum shields can temporarily prevent its dimensional shifts.",
            "\"Your reality is but one of many I shall consume...\"",
        ),
        entry(
            "void_corruptor_phase_3",
            "The Void Corruptor - Phase 3",
            "At its full power, the Void Corruptor threatens to consume all of reality.",
            "At its peak, the Void Corruptor threatens to collapse all possible realities into a single void.",
            "A perfect synchronization of quantum and temporal weapons can disrupt its core.",
            "\"The end of all things approaches...\"",
        ),
        entry(
            "void_corruptor_defeated",
            "The Void Corruptor - Defeated",
            "With its core disrupted, the corruption recedes and the space it claimed knits itself back together.",
            "Nothing born of the void truly dies; it merely waits between dimensions.",
            "It was beaten once. It can be beaten again.",
            "\"The void... remembers...\"",
        ),
        // Temporal Warden
        entry(
            "temporal_warden_phase_1",
            "The Temporal Warden - Phase 1",
            "The Temporal Warden emerges, its form flickering between past and future.",
            "A guardian of the time stream, the Temporal Warden exists across all points in time.",
            "Vulnerable to void energy that can disrupt its temporal anchor.",
            "\"Time is a river, and I am its keeper...\"",
        ),
        entry(
            "temporal_warden_phase_2",
            "The Temporal Warden - Phase 2",
            "Time itself begins to bend as the Warden's power increases.",
            "As it grows stronger, the Warden begins to manipulate the flow of time itself.",
            "Quantum entanglement can temporarily lock it in a single timeline.",
            "\"Your past and future are mine to command...\"",
        ),
        entry(
            "temporal_warden_phase_3",
            "The Temporal Warden - Phase 3",
            "The Temporal Warden reaches its peak, threatening to collapse the timeline.",
            "At full power, the Temporal Warden threatens to collapse the entire timeline.",
            "A perfect void-temporal resonance can disrupt its control over time.",
            "\"The timeline ends here...\"",
        ),
        entry(
            "temporal_warden_defeated",
            "The Temporal Warden - Defeated",
            "Severed from its anchor, the Warden scatters across the moments it once guarded.",
            "The time stream flows on without its keeper, for now.",
            "Its defeat is already written somewhere in the river of time.",
            "\"Time... flows on... without me...\"",
        ),
        // Quantum Behemoth
        entry(
            "quantum_behemoth_phase_1",
            "The Quantum Behemoth - Phase 1",
            "The Quantum Behemoth materializes, its form existing in multiple states.",
            "A massive quantum entity, the Behemoth exists in multiple states simultaneously.",
            "Temporal weapons can force it to collapse into a single state.",
            "\"I exist in all possible states...\"",
        ),
        entry(
            "quantum_behemoth_phase_2",
            "The Quantum Behemoth - Phase 2",
            "Quantum fluctuations intensify as the Behemoth's power grows.",
            "As it grows, the Behemoth begins to affect the quantum state of all matter around it.",
            "Void energy can temporarily disrupt its quantum field.",
            "\"Your reality is but one possibility among infinite...\"",
        ),
        entry(
            "quantum_behemoth_phase_3",
            "The Quantum Behemoth - Phase 3",
            "The Quantum Behemoth reaches its final form, threatening to collapse all possibilities.",
            "At its peak, the Quantum Behemoth threatens to collapse all quantum possibilities.",
            "A perfect harmony of void and temporal energy can disrupt its quantum core.",
            "\"The quantum sea shall consume all...\"",
        ),
        entry(
            "quantum_behemoth_defeated",
            "The Quantum Behemoth - Defeated",
            "Collapsed into a single state at last, the Behemoth dissolves into ordinary matter.",
            "Of all its possible futures, only this one remains.",
            "Every superposition eventually collapses.",
            "\"Only one... possibility... left...\"",
        ),
    ]
}
