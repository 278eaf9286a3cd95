//! Boss domain: the encounter's message channel.
//!
//! The state machine publishes here and never hears back; collaborators
//! (HUD, music layers, the lore evaluator) read these with `MessageReader`
//! and report damage with [`BossDamageEvent`].

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::boss::encounter::BossKind;
use crate::boss::executor::EffectRequest;
use crate::boss::moves::BossMove;

/// Inbound: a hit landed on the boss (e.g. from a collision callback).
#[derive(Debug)]
pub struct BossDamageEvent {
    pub boss: Entity,
    pub amount: f32,
}

impl Message for BossDamageEvent {}

/// The encounter advanced to a new phase.
#[derive(Debug)]
pub struct PhaseChangedEvent {
    pub boss: Entity,
    pub kind: BossKind,
    pub new_phase: u32,
    /// Health fraction at the moment of the shift.
    pub health_fraction: f32,
}

impl Message for PhaseChangedEvent {}

/// A move fired from the active phase's rotation.
#[derive(Debug)]
pub struct MoveExecutedEvent {
    pub boss: Entity,
    pub kind: BossKind,
    pub phase: u32,
    pub executed: BossMove,
    /// What the host should make happen; see [`crate::boss::executor`].
    pub effect: EffectRequest,
}

impl Message for MoveExecutedEvent {}

/// The boss's health reached zero. Published exactly once per encounter.
#[derive(Debug)]
pub struct EncounterDefeatedEvent {
    pub boss: Entity,
    pub kind: BossKind,
}

impl Message for EncounterDefeatedEvent {}
