//! Boss domain: attack move variants and their fixed cooldowns.

use serde::{Deserialize, Serialize};

/// One boss attack pattern with fixed parameters.
///
/// Moves are immutable value data; the catalog in [`crate::content`] assigns
/// an ordered set of them to each phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BossMove {
    /// Ring of projectiles fired radially outward.
    VoidPulse { count: u32, speed: f32 },
    /// Telegraphed area slam that also slows time while it winds up.
    ChronoSlam { duration: f32, damage: f32 },
    /// Projectiles riding expanding spiral arms.
    QuantumSpiral { count: u32, speed: f32 },
    /// Scatters minion adds around the boss.
    SummonMinions { count: u32 },
    /// Persistent damaging field centered on the boss.
    VoidCorruption { radius: f32, duration: f32 },
}

impl BossMove {
    /// Seconds until the next move may execute after this one fires.
    pub fn cooldown(&self) -> f32 {
        match self {
            BossMove::VoidPulse { .. } => 3.0,
            BossMove::ChronoSlam { .. } => 5.0,
            BossMove::QuantumSpiral { .. } => 4.0,
            BossMove::SummonMinions { .. } => 8.0,
            BossMove::VoidCorruption { .. } => 10.0,
        }
    }

    /// Display name for logging and HUD warnings.
    pub fn name(&self) -> &'static str {
        match self {
            BossMove::VoidPulse { .. } => "Void Pulse",
            BossMove::ChronoSlam { .. } => "Chrono Slam",
            BossMove::QuantumSpiral { .. } => "Quantum Spiral",
            BossMove::SummonMinions { .. } => "Summon Minions",
            BossMove::VoidCorruption { .. } => "Void Corruption",
        }
    }
}
