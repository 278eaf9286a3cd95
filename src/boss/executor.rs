//! Boss domain: translation of moves into effect requests.
//!
//! The executor is a pure function from a [`BossMove`] and the boss position
//! to a structured description of what presentation and physics should do.
//! Nothing here spawns entities or touches I/O; the host consumes the
//! [`EffectRequest`] carried on `MoveExecutedEvent`.

use bevy::prelude::*;

use crate::boss::moves::BossMove;

/// Radius of the Chrono Slam impact zone.
pub const SLAM_RADIUS: f32 = 200.0;
/// Global time scale applied while a Chrono Slam winds up.
pub const SLAM_TIME_SCALE: f32 = 0.5;
/// Radius around the boss in which summoned minions appear.
pub const MINION_SCATTER_RADIUS: f32 = 100.0;
/// Starting-radius step between consecutive spiral projectiles.
pub const SPIRAL_ARM_SPACING: f32 = 20.0;
/// How far each spiral arm expands over its lifetime.
pub const SPIRAL_EXPANSION: f32 = 200.0;
/// Full windings each spiral projectile completes.
pub const SPIRAL_WINDS: f32 = 2.0;

/// What the host should make happen in response to an executed move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectRequest {
    /// Spawn `count` projectiles evenly distributed on a circle, each moving
    /// outward at `speed`.
    RadialBurst { origin: Vec2, count: u32, speed: f32 },
    /// After `delay` seconds, apply `damage` to any target within `radius`
    /// of `origin`; run the world at `time_scale` until the impact lands.
    DelayedSlam {
        origin: Vec2,
        radius: f32,
        damage: f32,
        delay: f32,
        time_scale: f32,
    },
    /// Spawn `count` projectiles on expanding spiral arms. Projectile `i`
    /// starts `i * arm_spacing` from the origin and spirals outward by
    /// `expansion` over `winds` full turns.
    SpiralBarrage {
        origin: Vec2,
        count: u32,
        speed: f32,
        arm_spacing: f32,
        expansion: f32,
        winds: f32,
    },
    /// Spawn `count` minion adds at random points within `scatter_radius`
    /// of the origin.
    SpawnMinions {
        origin: Vec2,
        count: u32,
        scatter_radius: f32,
    },
    /// Persistent field of `radius` around the origin for `duration`
    /// seconds; anything inside is corrupted.
    CorruptionField {
        origin: Vec2,
        radius: f32,
        duration: f32,
    },
}

/// Translate a move into the effect the host should apply.
///
/// Total over every variant; adding a move without handling it here is a
/// compile error.
pub fn execute(mv: BossMove, origin: Vec2) -> EffectRequest {
    match mv {
        BossMove::VoidPulse { count, speed } => EffectRequest::RadialBurst {
            origin,
            count,
            speed,
        },
        BossMove::ChronoSlam { duration, damage } => EffectRequest::DelayedSlam {
            origin,
            radius: SLAM_RADIUS,
            damage,
            delay: duration,
            time_scale: SLAM_TIME_SCALE,
        },
        BossMove::QuantumSpiral { count, speed } => EffectRequest::SpiralBarrage {
            origin,
            count,
            speed,
            arm_spacing: SPIRAL_ARM_SPACING,
            expansion: SPIRAL_EXPANSION,
            winds: SPIRAL_WINDS,
        },
        BossMove::SummonMinions { count } => EffectRequest::SpawnMinions {
            origin,
            count,
            scatter_radius: MINION_SCATTER_RADIUS,
        },
        BossMove::VoidCorruption { radius, duration } => EffectRequest::CorruptionField {
            origin,
            radius,
            duration,
        },
    }
}
