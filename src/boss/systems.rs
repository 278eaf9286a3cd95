//! Boss domain: systems driving encounters each frame.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::boss::encounter::{BossEncounter, EncounterSignal};
use crate::boss::events::{
    BossDamageEvent, EncounterDefeatedEvent, MoveExecutedEvent, PhaseChangedEvent,
};
use crate::boss::executor::execute;
use crate::content::BossContent;

/// Drains reported hits into the targeted encounters. Runs before
/// [`tick_encounters`] so damage delivered between frames is visible to the
/// same frame's tick.
pub(crate) fn apply_boss_damage(
    mut damage_events: MessageReader<BossDamageEvent>,
    mut boss_query: Query<&mut BossEncounter>,
    mut defeat_writer: MessageWriter<EncounterDefeatedEvent>,
) {
    for event in damage_events.read() {
        let Ok(mut encounter) = boss_query.get_mut(event.boss) else {
            warn!("Damage reported for despawned boss {:?}", event.boss);
            continue;
        };

        if let Some(EncounterSignal::Defeated) = encounter.apply_damage(event.amount) {
            info!("{} defeated", encounter.kind().title());
            defeat_writer.write(EncounterDefeatedEvent {
                boss: event.boss,
                kind: encounter.kind(),
            });
        }
    }
}

/// Advances every live encounter by the frame delta and forwards its signals
/// onto the message channel.
pub(crate) fn tick_encounters(
    time: Res<Time>,
    content: Res<BossContent>,
    mut boss_query: Query<(Entity, &Transform, &mut BossEncounter)>,
    mut phase_writer: MessageWriter<PhaseChangedEvent>,
    mut move_writer: MessageWriter<MoveExecutedEvent>,
    mut defeat_writer: MessageWriter<EncounterDefeatedEvent>,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut encounter) in &mut boss_query {
        let origin = transform.translation.truncate();
        let kind = encounter.kind();

        for signal in encounter.tick(dt, &content) {
            match signal {
                EncounterSignal::PhaseChanged {
                    new_phase,
                    health_fraction,
                } => {
                    info!(
                        "{} entering phase {} at {:.0}% health",
                        kind.title(),
                        new_phase,
                        health_fraction * 100.0
                    );
                    phase_writer.write(PhaseChangedEvent {
                        boss: entity,
                        kind,
                        new_phase,
                        health_fraction,
                    });
                }
                EncounterSignal::MoveExecuted { phase, executed } => {
                    move_writer.write(MoveExecutedEvent {
                        boss: entity,
                        kind,
                        phase,
                        executed,
                        effect: execute(executed, origin),
                    });
                }
                EncounterSignal::Defeated => {
                    info!("{} defeated", kind.title());
                    defeat_writer.write(EncounterDefeatedEvent { boss: entity, kind });
                }
            }
        }
    }
}
