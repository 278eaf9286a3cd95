//! Boss domain: the encounter state machine.
//!
//! All mechanics live in inherent methods on [`BossEncounter`] so the state
//! machine can be driven and asserted on without an `App`; the systems in
//! [`crate::boss::systems`] are a thin layer that feeds it frame deltas and
//! forwards its signals onto the message channel.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::boss::moves::BossMove;
use crate::content::BossContent;

/// Which boss variant an encounter is fighting.
///
/// Selects titles and lore tables only; mechanics come from the shared
/// per-phase move catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossKind {
    VoidCorruptor,
    TemporalWarden,
    QuantumBehemoth,
}

impl BossKind {
    /// Stable identifier used in lore ids and save data.
    pub fn id(&self) -> &'static str {
        match self {
            BossKind::VoidCorruptor => "void_corruptor",
            BossKind::TemporalWarden => "temporal_warden",
            BossKind::QuantumBehemoth => "quantum_behemoth",
        }
    }

    /// Display title for HUD and intro cards.
    pub fn title(&self) -> &'static str {
        match self {
            BossKind::VoidCorruptor => "The Void Corruptor",
            BossKind::TemporalWarden => "The Temporal Warden",
            BossKind::QuantumBehemoth => "The Quantum Behemoth",
        }
    }
}

/// Rejected encounter configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncounterConfigError {
    /// `phase_count` must be at least 1.
    PhaseCount(u32),
    /// `max_health` must be positive and finite.
    MaxHealth(f32),
}

impl std::fmt::Display for EncounterConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncounterConfigError::PhaseCount(count) => {
                write!(f, "phase count must be at least 1, got {}", count)
            }
            EncounterConfigError::MaxHealth(health) => {
                write!(f, "max health must be positive, got {}", health)
            }
        }
    }
}

impl std::error::Error for EncounterConfigError {}

/// A state change produced by [`BossEncounter::tick`] or
/// [`BossEncounter::apply_damage`], in the order it occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncounterSignal {
    /// The encounter advanced to `new_phase` because the health fraction
    /// dropped below the previous phase's threshold.
    PhaseChanged { new_phase: u32, health_fraction: f32 },
    /// A move fired from the active phase's rotation.
    MoveExecuted { phase: u32, executed: BossMove },
    /// Health reached zero. Terminal; emitted exactly once.
    Defeated,
}

/// The mutable aggregate for one boss fight.
///
/// Created when a scene starts the fight, despawned when the fight ends;
/// nothing here persists across scene visits.
#[derive(Component, Debug, Clone)]
pub struct BossEncounter {
    kind: BossKind,
    health: f32,
    max_health: f32,
    phase_count: u32,
    current_phase: u32,
    phase_thresholds: Vec<f32>,
    current_move_index: usize,
    cooldown_remaining: f32,
    defeated: bool,
}

impl BossEncounter {
    /// Build an encounter in phase 1 at full health.
    ///
    /// Thresholds are derived as `(phase_count - i) / phase_count`, so a
    /// three-phase boss shifts at 2/3 and 1/3 of max health.
    pub fn new(
        kind: BossKind,
        max_health: f32,
        phase_count: u32,
    ) -> Result<Self, EncounterConfigError> {
        if phase_count < 1 {
            return Err(EncounterConfigError::PhaseCount(phase_count));
        }
        if !(max_health > 0.0) || !max_health.is_finite() {
            return Err(EncounterConfigError::MaxHealth(max_health));
        }

        let phase_thresholds = (1..phase_count)
            .map(|phase| (phase_count - phase) as f32 / phase_count as f32)
            .collect();

        Ok(Self {
            kind,
            health: max_health,
            max_health,
            phase_count,
            current_phase: 1,
            phase_thresholds,
            current_move_index: 0,
            cooldown_remaining: 0.0,
            defeated: false,
        })
    }

    pub fn kind(&self) -> BossKind {
        self.kind
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn health_fraction(&self) -> f32 {
        self.health / self.max_health
    }

    pub fn phase_count(&self) -> u32 {
        self.phase_count
    }

    /// Current phase, 1-based. Monotonically non-decreasing.
    pub fn current_phase(&self) -> u32 {
        self.current_phase
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    /// Derived thresholds, strictly decreasing, one per phase shift.
    pub fn phase_thresholds(&self) -> &[f32] {
        &self.phase_thresholds
    }

    /// Report damage dealt to the boss. Negative amounts are caller bugs and
    /// are clamped to zero. Defeat is recognized synchronously so a fatal
    /// hit landing between frames stops the rotation before the next tick.
    pub fn apply_damage(&mut self, amount: f32) -> Option<EncounterSignal> {
        if self.defeated {
            return None;
        }
        self.health -= amount.max(0.0);
        self.check_defeat()
    }

    /// Advance the encounter by `delta` simulated seconds.
    ///
    /// At most one phase shift happens per tick; if health dropped past two
    /// thresholds at once, the next tick picks up the second shift. The
    /// move rotation fires whenever the cooldown runs out and reloads from
    /// the fired move's own cooldown.
    pub fn tick(&mut self, delta: f32, content: &BossContent) -> Vec<EncounterSignal> {
        let mut signals = Vec::new();
        if self.defeated {
            return signals;
        }
        let delta = delta.max(0.0);

        // Only the threshold belonging to the current phase can fire.
        if let Some(&threshold) = self
            .phase_thresholds
            .get(self.current_phase as usize - 1)
        {
            let health_fraction = self.health_fraction();
            if health_fraction <= threshold {
                self.current_phase += 1;
                self.current_move_index = 0;
                signals.push(EncounterSignal::PhaseChanged {
                    new_phase: self.current_phase,
                    health_fraction,
                });
            }
        }

        self.cooldown_remaining -= delta;
        if self.cooldown_remaining <= 0.0 {
            let moves = content.moves_for_phase(self.current_phase);
            if !moves.is_empty() {
                let executed = moves[self.current_move_index % moves.len()];
                self.current_move_index = (self.current_move_index + 1) % moves.len();
                self.cooldown_remaining = executed.cooldown();
                signals.push(EncounterSignal::MoveExecuted {
                    phase: self.current_phase,
                    executed,
                });
            }
        }

        // Unreachable when damage only arrives through apply_damage, but the
        // terminal state must hold even if a future path drains health here.
        if let Some(signal) = self.check_defeat() {
            signals.push(signal);
        }

        signals
    }

    fn check_defeat(&mut self) -> Option<EncounterSignal> {
        if !self.defeated && self.health <= 0.0 {
            self.defeated = true;
            Some(EncounterSignal::Defeated)
        } else {
            None
        }
    }
}
