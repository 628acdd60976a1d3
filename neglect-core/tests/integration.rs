//! Integration Tests — End-to-End Neglect Scenarios
//!
//! These tests drive a [`Plant`] through complete sessions on its logical
//! clock: neglect onset, decay arithmetic, death, care from the grave,
//! revives, and renames.

use std::time::Duration;

use neglect_core::messages::{self, MessageCategory};
use neglect_core::timers::TimerKind;
use neglect_core::{
    Effect, NameRejection, Plant, PlantEmotion, PlantError, PlantState, Signal, VitalStats,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn dying_plant(seed: u64) -> Plant {
    let stats = VitalStats {
        health: 10,
        water_level: 50,
        ..VitalStats::default()
    };
    Plant::with_seed(seed).with_stats(stats)
}

fn deaths(signals: &[Signal]) -> usize {
    signals
        .iter()
        .filter(|s| matches!(s, Signal::Died { .. }))
        .count()
}

// ---------------------------------------------------------------------------
// Neglect onset and decay arithmetic
// ---------------------------------------------------------------------------

#[test]
fn idle_plant_becomes_concerned_then_decays_per_tick() {
    let mut plant = Plant::with_seed(11);

    plant.advance_to(ms(2001));
    assert_eq!(plant.stats().state, PlantState::Concerned);
    assert_eq!(plant.stats().health, 100);

    // ticks land at 4000, 6000, 8000
    let expected = [
        (90, 85, PlantState::Healthy),
        (80, 70, PlantState::Healthy),
        (70, 55, PlantState::Concerned),
    ];
    for (i, (health, water, state)) in expected.into_iter().enumerate() {
        plant.advance_to(ms(4000 + 2000 * i as u64));
        let stats = plant.stats();
        assert_eq!((stats.health, stats.water_level), (health, water), "tick {}", i + 1);
        assert_eq!(stats.state, state, "tick {}", i + 1);
    }
}

#[test]
fn untouched_plant_dies_of_thirst_on_the_seventh_tick() {
    let mut plant = Plant::with_seed(12);
    plant.advance_to(ms(15_999));
    assert_ne!(plant.stats().state, PlantState::Dead);

    plant.advance_to(ms(16_000));
    let stats = plant.stats();
    assert_eq!(stats.state, PlantState::Dead);
    assert_eq!(stats.water_level, 0);
    assert_eq!(stats.health, 30);
    assert_eq!(stats.emotion, PlantEmotion::Devastated);
}

// ---------------------------------------------------------------------------
// Death
// ---------------------------------------------------------------------------

#[test]
fn death_stops_the_ticker_and_fires_once() {
    let mut plant = dying_plant(13);
    plant.advance_to(ms(4000));

    let stats = plant.stats().clone();
    assert_eq!(stats.health, 0);
    assert_eq!(stats.water_level, 35);
    assert_eq!(stats.state, PlantState::Dead);
    assert!(!plant.timers().is_live(TimerKind::Decay));

    let mut signals = plant.drain_signals();
    plant.advance_to(ms(120_000));
    signals.extend(plant.drain_signals());

    assert_eq!(deaths(&signals), 1);
    assert_eq!(plant.stats().health, 0);
    assert_eq!(plant.stats().water_level, 35);
    assert!(signals.iter().any(|s| matches!(
        s,
        Signal::Effect { effect: Effect::DeathBlast, clear_after } if *clear_after == ms(1000)
    )));
    let death_note = signals.iter().find_map(|s| match s {
        Signal::Notify(n) if n.category == MessageCategory::Death => Some(n),
        _ => None,
    });
    let death_note = death_note.expect("death notification");
    assert_eq!(death_note.display_for, ms(4000));
    assert!(death_note.message.contains("LYLY"));
}

#[test]
fn a_betrayed_plant_dies_betrayed() {
    let stats = VitalStats {
        health: 40,
        water_level: 40,
        abandonment_count: 2,
        ..VitalStats::default()
    };
    let mut plant = Plant::with_seed(14).with_stats(stats);
    // neglect at 2000, tick at 4000 -> wilting (betrayed), tick at 6000..
    plant.advance_to(ms(4000));
    assert_eq!(plant.stats().emotion, PlantEmotion::Betrayed);
    plant.drain_signals();

    plant.advance_to(ms(10_000));
    assert_eq!(plant.stats().state, PlantState::Dead);
    let signals = plant.drain_signals();
    let note = signals
        .iter()
        .find_map(|s| match s {
            Signal::Notify(n) if n.category == MessageCategory::Death => Some(n.message.clone()),
            _ => None,
        })
        .expect("death notification");
    let bank = messages::bank_for(MessageCategory::Death, PlantEmotion::Betrayed);
    assert!(bank.iter().any(|t| t.replace("{name}", "LYLY") == note));
}

#[test]
fn a_sad_plant_dies_with_a_generic_line() {
    let mut plant = Plant::with_seed(22);
    // ticks at 12000 and 14000 leave it wilting on (40, 10)
    plant.advance_to(ms(15_999));
    assert_eq!(plant.stats().state, PlantState::Wilting);
    assert_eq!(plant.stats().emotion, PlantEmotion::Sad);
    plant.drain_signals();

    plant.advance_to(ms(16_000));
    assert_eq!(plant.stats().emotion, PlantEmotion::Devastated);
    let note = plant
        .drain_signals()
        .into_iter()
        .find_map(|s| match s {
            Signal::Notify(n) if n.category == MessageCategory::Death => Some(n.message),
            _ => None,
        })
        .expect("death notification");
    let generic = messages::bank_for(MessageCategory::Death, PlantEmotion::Sad);
    assert!(generic.iter().any(|t| t.replace("{name}", "LYLY") == note));
    let devastated = messages::bank_for(MessageCategory::Death, PlantEmotion::Devastated);
    assert!(!devastated.iter().any(|t| t.replace("{name}", "LYLY") == note));
}

#[test]
fn a_dead_plant_stays_dead_while_ignored() {
    let mut plant = dying_plant(15);
    plant.advance_to(ms(4000));
    let revision = plant.revision();
    // the random-emotion timer still fires in this window, to no effect
    plant.advance_to(ms(60_000));
    assert_eq!(plant.revision(), revision);
    assert_eq!(plant.stats().state, PlantState::Dead);
}

// ---------------------------------------------------------------------------
// Care from the grave, and revives
// ---------------------------------------------------------------------------

#[test]
fn attention_on_a_dead_plant_marks_it_reviving() {
    let mut plant = dying_plant(16);
    plant.advance_to(ms(4000));
    assert_eq!(plant.stats().mood, 10); // 50 -10 (worried) -30 (devastated)

    plant.give_attention();
    let stats = plant.stats();
    assert_eq!(stats.state, PlantState::Reviving);
    assert_eq!(stats.health, 10);
    assert_eq!(stats.emotion, PlantEmotion::Happy);
    assert_eq!(stats.mood, 20);
    assert_eq!(stats.abandonment_count, 0);
    assert_eq!(stats.total_attention_received, 1);
}

#[test]
fn reviving_marker_is_cleared_by_the_next_derivation() {
    // Care re-arms the timers, so the neglect timer at 6000 is what replaces
    // the marker with Concerned; the decay tick at 8000 then finds health
    // exhausted and the plant dies a second time.
    let mut plant = dying_plant(17);
    plant.advance_to(ms(4000));
    plant.give_attention();
    assert_eq!(plant.stats().state, PlantState::Reviving);

    plant.advance_to(ms(6000));
    assert_eq!(plant.stats().state, PlantState::Concerned);
    plant.advance_to(ms(8000));
    assert_eq!(plant.stats().state, PlantState::Dead);
    assert_eq!(plant.stats().water_level, 20);
}

#[test]
fn revive_counts_an_abandonment_and_resets_the_streak() {
    let mut plant = dying_plant(18);
    plant.give_attention();
    plant.give_attention();
    assert_eq!(plant.stats().attention_streak, 2);

    plant.advance_to(ms(10_000));
    assert_eq!(plant.stats().state, PlantState::Dead);
    assert!(plant.revive_plant());

    let stats = plant.stats();
    assert_eq!(stats.abandonment_count, 1);
    assert_eq!(stats.attention_streak, 0);
    assert_eq!(stats.total_attention_received, 2);
    assert_eq!(stats.state, PlantState::Healthy);
    assert!(plant.timers().is_live(TimerKind::Neglect));
    assert!(!plant.revive_plant(), "second revive is a no-op");
}

#[test]
fn care_defers_decay_by_exactly_the_idle_window() {
    let mut plant = Plant::with_seed(19);
    plant.advance_to(ms(5000));
    plant.water_plant();
    let health = plant.stats().health;

    plant.advance_to(ms(6999));
    assert_eq!(plant.stats().state, PlantState::Healthy);
    plant.advance_to(ms(7000));
    assert_eq!(plant.stats().state, PlantState::Concerned);
    plant.advance_to(ms(8999));
    assert_eq!(plant.stats().health, health);
    plant.advance_to(ms(9000));
    assert_eq!(plant.stats().health, health - 10);
}

// ---------------------------------------------------------------------------
// Rename
// ---------------------------------------------------------------------------

#[test]
fn rename_validation() {
    let mut plant = Plant::with_seed(20);
    plant.drain_signals();

    let err = plant.rename("").unwrap_err();
    assert!(matches!(
        err,
        PlantError::InvalidName {
            reason: NameRejection::Empty
        }
    ));
    assert_eq!(plant.stats().name.as_str(), "LYLY");
    assert_eq!(
        plant.drain_signals(),
        vec![Signal::RenameRejected {
            reason: NameRejection::Empty
        }]
    );

    plant.rename("  Fern  ").unwrap();
    assert_eq!(plant.stats().name.as_str(), "Fern");
    let signals = plant.drain_signals();
    assert!(matches!(
        signals.as_slice(),
        [Signal::Notify(n)] if n.category == MessageCategory::RenameConfirmation && n.message.contains("Fern")
    ));
}

#[test]
fn rename_does_not_reset_the_neglect_clock() {
    let mut plant = Plant::with_seed(21);
    plant.advance_to(ms(1900));
    plant.rename("Sage").unwrap();
    plant.advance_to(ms(2000));
    assert_eq!(plant.stats().state, PlantState::Concerned);
}

#[test]
fn configured_name_is_used_in_messages() {
    let config = neglect_core::PlantConfig::from_toml(
        "[general]\nseed = 3\n[plant]\ninitial_name = \"Clover\"",
    )
    .unwrap();
    let mut plant = Plant::new(config);
    plant.give_attention();
    let signals = plant.drain_signals();
    assert!(signals.iter().any(|s| matches!(
        s,
        Signal::Notify(n) if n.message.contains("Clover")
    )));
}

#[test]
fn same_seed_same_session() {
    let run = |seed| {
        let mut plant = Plant::with_seed(seed);
        let mut log = Vec::new();
        for step in 0..40u64 {
            plant.advance_to(ms(step * 1500));
            if step % 9 == 0 {
                plant.give_attention();
            }
            log.extend(plant.drain_signals());
        }
        (plant.snapshot().stats.mood, plant.stats().emotion, log)
    };
    assert_eq!(run(5), run(5));
}
