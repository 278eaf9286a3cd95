//! Boss domain: unit tests for the encounter state machine and executor.

use bevy::math::Vec2;

use super::executor::{
    MINION_SCATTER_RADIUS, SLAM_RADIUS, SLAM_TIME_SCALE, SPIRAL_ARM_SPACING, SPIRAL_EXPANSION,
    SPIRAL_WINDS,
};
use super::{
    BossEncounter, BossKind, BossMove, EffectRequest, EncounterConfigError, EncounterSignal,
    execute,
};
use crate::content::{BossContent, PhaseMoveSetDef};

fn standard_encounter() -> BossEncounter {
    BossEncounter::new(BossKind::VoidCorruptor, 1000.0, 3).unwrap()
}

fn executed_moves(signals: &[EncounterSignal]) -> Vec<BossMove> {
    signals
        .iter()
        .filter_map(|signal| match signal {
            EncounterSignal::MoveExecuted { executed, .. } => Some(*executed),
            _ => None,
        })
        .collect()
}

fn phase_changes(signals: &[EncounterSignal]) -> Vec<u32> {
    signals
        .iter()
        .filter_map(|signal| match signal {
            EncounterSignal::PhaseChanged { new_phase, .. } => Some(*new_phase),
            _ => None,
        })
        .collect()
}

#[test]
fn thresholds_have_one_entry_per_shift() {
    for phase_count in 1..=6u32 {
        let encounter = BossEncounter::new(BossKind::TemporalWarden, 500.0, phase_count).unwrap();
        let thresholds = encounter.phase_thresholds();
        assert_eq!(thresholds.len(), phase_count as usize - 1);

        for (i, &threshold) in thresholds.iter().enumerate() {
            let expected = (phase_count - (i as u32 + 1)) as f32 / phase_count as f32;
            assert!((threshold - expected).abs() < 1e-6);
            assert!(threshold > 0.0 && threshold < 1.0);
        }
        for pair in thresholds.windows(2) {
            assert!(pair[0] > pair[1], "thresholds must strictly decrease");
        }
    }
}

#[test]
fn rejects_invalid_configuration() {
    assert_eq!(
        BossEncounter::new(BossKind::VoidCorruptor, 1000.0, 0).unwrap_err(),
        EncounterConfigError::PhaseCount(0)
    );
    assert!(matches!(
        BossEncounter::new(BossKind::VoidCorruptor, 0.0, 3),
        Err(EncounterConfigError::MaxHealth(_))
    ));
    assert!(matches!(
        BossEncounter::new(BossKind::VoidCorruptor, -50.0, 3),
        Err(EncounterConfigError::MaxHealth(_))
    ));
}

#[test]
fn starts_in_phase_one_at_full_health() {
    let encounter = standard_encounter();
    assert_eq!(encounter.current_phase(), 1);
    assert_eq!(encounter.phase_count(), 3);
    assert_eq!(encounter.health(), 1000.0);
    assert_eq!(encounter.max_health(), 1000.0);
    assert!((encounter.health_fraction() - 1.0).abs() < 1e-6);
    assert!(!encounter.is_defeated());
}

#[test]
fn first_move_fires_on_first_tick() {
    let content = BossContent::default();
    let mut encounter = standard_encounter();

    let signals = encounter.tick(0.016, &content);
    assert_eq!(
        executed_moves(&signals),
        vec![BossMove::VoidPulse {
            count: 8,
            speed: 200.0
        }]
    );
}

#[test]
fn round_robin_cycles_in_catalog_order() {
    let content = BossContent::default();
    let mut encounter = standard_encounter();

    let mut fired = Vec::new();
    for _ in 0..10 {
        fired.extend(executed_moves(&encounter.tick(3.0, &content)));
    }

    assert_eq!(
        &fired[..4],
        &[
            BossMove::VoidPulse {
                count: 8,
                speed: 200.0
            },
            BossMove::ChronoSlam {
                duration: 2.0,
                damage: 50.0
            },
            BossMove::QuantumSpiral {
                count: 3,
                speed: 150.0
            },
            BossMove::VoidPulse {
                count: 8,
                speed: 200.0
            },
        ]
    );
}

#[test]
fn gap_between_executions_equals_fired_cooldown() {
    let content = BossContent::default();
    let mut encounter = standard_encounter();

    let mut fires: Vec<(f32, BossMove)> = Vec::new();
    let mut elapsed = 0.0;
    for _ in 0..40 {
        elapsed += 0.5;
        for mv in executed_moves(&encounter.tick(0.5, &content)) {
            fires.push((elapsed, mv));
        }
    }

    assert!(fires.len() >= 4);
    for pair in fires.windows(2) {
        let (t_prev, mv_prev) = pair[0];
        let (t_next, _) = pair[1];
        assert!(
            (t_next - t_prev - mv_prev.cooldown()).abs() < 1e-3,
            "gap after {:?} was {}",
            mv_prev,
            t_next - t_prev
        );
    }
}

#[test]
fn single_move_rotation_repeats_at_its_own_cooldown() {
    let content = BossContent::from_defs(
        vec![PhaseMoveSetDef {
            phase: 1,
            moves: vec![BossMove::VoidPulse {
                count: 4,
                speed: 100.0,
            }],
        }],
        Vec::new(),
    );
    let mut encounter = BossEncounter::new(BossKind::QuantumBehemoth, 100.0, 1).unwrap();

    let mut fire_times: Vec<f32> = Vec::new();
    let mut elapsed = 0.0;
    for _ in 0..30 {
        elapsed += 0.5;
        if !executed_moves(&encounter.tick(0.5, &content)).is_empty() {
            fire_times.push(elapsed);
        }
    }

    assert!(fire_times.len() >= 3);
    for pair in fire_times.windows(2) {
        assert!((pair[1] - pair[0] - 3.0).abs() < 1e-3);
    }
}

#[test]
fn phase_advances_one_threshold_per_tick() {
    let content = BossContent::default();
    let mut encounter = standard_encounter();

    // Past both thresholds at once; the shift resolves one phase per tick.
    assert!(encounter.apply_damage(900.0).is_none());

    let first = encounter.tick(0.016, &content);
    assert_eq!(phase_changes(&first), vec![2]);
    assert_eq!(encounter.current_phase(), 2);
    // The rotation restarts from the new phase's first move.
    assert_eq!(
        executed_moves(&first),
        vec![BossMove::VoidPulse {
            count: 12,
            speed: 250.0
        }]
    );

    let second = encounter.tick(0.016, &content);
    assert_eq!(phase_changes(&second), vec![3]);
    assert_eq!(encounter.current_phase(), 3);

    let third = encounter.tick(0.016, &content);
    assert!(phase_changes(&third).is_empty());
    assert_eq!(encounter.current_phase(), 3);
}

#[test]
fn phase_shift_fires_when_crossing_two_thirds() {
    let content = BossContent::default();
    let mut encounter = standard_encounter();

    encounter.apply_damage(340.0);
    let signals = encounter.tick(0.016, &content);

    let shifts: Vec<_> = signals
        .iter()
        .filter_map(|signal| match signal {
            EncounterSignal::PhaseChanged {
                new_phase,
                health_fraction,
            } => Some((*new_phase, *health_fraction)),
            _ => None,
        })
        .collect();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].0, 2);
    assert!((shifts[0].1 - 0.66).abs() < 1e-6);

    assert!(phase_changes(&encounter.tick(0.016, &content)).is_empty());
}

#[test]
fn no_phase_shift_above_threshold() {
    let content = BossContent::default();
    let mut encounter = standard_encounter();

    // 0.667 is still above the 2/3 threshold.
    encounter.apply_damage(333.0);
    assert!(phase_changes(&encounter.tick(0.016, &content)).is_empty());
    assert_eq!(encounter.current_phase(), 1);
}

#[test]
fn overkill_is_terminal_with_single_defeat_signal() {
    let content = BossContent::default();
    let mut encounter = standard_encounter();

    assert_eq!(
        encounter.apply_damage(1001.0),
        Some(EncounterSignal::Defeated)
    );
    assert!(encounter.is_defeated());
    let health_after_defeat = encounter.health();

    // Further damage and ticks are no-ops; the signal never repeats.
    assert!(encounter.apply_damage(50.0).is_none());
    assert_eq!(encounter.health(), health_after_defeat);
    for _ in 0..5 {
        assert!(encounter.tick(3.0, &content).is_empty());
    }
    assert_eq!(encounter.current_phase(), 1);
}

#[test]
fn negative_damage_is_clamped() {
    let mut encounter = standard_encounter();
    assert!(encounter.apply_damage(-25.0).is_none());
    assert_eq!(encounter.health(), 1000.0);
}

#[test]
fn negative_delta_is_clamped() {
    let content = BossContent::default();
    let mut encounter = standard_encounter();

    // First tick fires Void Pulse and loads its 3.0s cooldown.
    assert_eq!(executed_moves(&encounter.tick(0.016, &content)).len(), 1);

    // A negative delta must not inflate the cooldown.
    assert!(executed_moves(&encounter.tick(-10.0, &content)).is_empty());
    assert_eq!(executed_moves(&encounter.tick(3.0, &content)).len(), 1);
}

#[test]
fn empty_catalog_fires_nothing() {
    let content = BossContent::from_defs(Vec::new(), Vec::new());
    let mut encounter = standard_encounter();

    for _ in 0..5 {
        assert!(executed_moves(&encounter.tick(3.0, &content)).is_empty());
    }
}

#[test]
fn executor_maps_every_variant() {
    let origin = Vec2::new(12.0, -4.0);

    assert_eq!(
        execute(
            BossMove::VoidPulse {
                count: 8,
                speed: 200.0
            },
            origin
        ),
        EffectRequest::RadialBurst {
            origin,
            count: 8,
            speed: 200.0
        }
    );
    assert_eq!(
        execute(
            BossMove::ChronoSlam {
                duration: 2.0,
                damage: 50.0
            },
            origin
        ),
        EffectRequest::DelayedSlam {
            origin,
            radius: SLAM_RADIUS,
            damage: 50.0,
            delay: 2.0,
            time_scale: SLAM_TIME_SCALE,
        }
    );
    assert_eq!(
        execute(
            BossMove::QuantumSpiral {
                count: 5,
                speed: 200.0
            },
            origin
        ),
        EffectRequest::SpiralBarrage {
            origin,
            count: 5,
            speed: 200.0,
            arm_spacing: SPIRAL_ARM_SPACING,
            expansion: SPIRAL_EXPANSION,
            winds: SPIRAL_WINDS,
        }
    );
    assert_eq!(
        execute(BossMove::SummonMinions { count: 3 }, origin),
        EffectRequest::SpawnMinions {
            origin,
            count: 3,
            scatter_radius: MINION_SCATTER_RADIUS,
        }
    );
    assert_eq!(
        execute(
            BossMove::VoidCorruption {
                radius: 200.0,
                duration: 3.0
            },
            origin
        ),
        EffectRequest::CorruptionField {
            origin,
            radius: 200.0,
            duration: 3.0,
        }
    );
}

#[test]
fn move_cooldowns_match_catalog() {
    assert_eq!(
        BossMove::VoidPulse {
            count: 1,
            speed: 1.0
        }
        .cooldown(),
        3.0
    );
    assert_eq!(
        BossMove::ChronoSlam {
            duration: 1.0,
            damage: 1.0
        }
        .cooldown(),
        5.0
    );
    assert_eq!(
        BossMove::QuantumSpiral {
            count: 1,
            speed: 1.0
        }
        .cooldown(),
        4.0
    );
    assert_eq!(BossMove::SummonMinions { count: 1 }.cooldown(), 8.0);
    assert_eq!(
        BossMove::VoidCorruption {
            radius: 1.0,
            duration: 1.0
        }
        .cooldown(),
        10.0
    );
}
