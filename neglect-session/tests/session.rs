//! Session Tests — the driver on a paused tokio clock.
//!
//! Every test starts with time paused, so sleeps complete instantly and
//! timer deadlines land exactly where the plant scheduled them.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use neglect_core::name::suggested_names;
use neglect_core::{NameRejection, PlantConfig, PlantError, PlantName, PlantState, Signal};
use neglect_session::{
    AudioError, DeathSound, InputEvent, Session, SessionError, SessionEvent, Silence,
};
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn seeded(seed: u64) -> PlantConfig {
    PlantConfig::from_toml(&format!("[general]\nseed = {seed}")).unwrap()
}

fn drain(session: &mut Session) -> Vec<SessionEvent> {
    std::iter::from_fn(|| session.try_next_event()).collect()
}

fn deaths(events: &[SessionEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::Signal(Signal::Died { .. })))
        .count()
}

#[derive(Default)]
struct CountingSound(AtomicUsize);

impl DeathSound for CountingSound {
    fn play(&self, _name: &PlantName) -> Result<(), AudioError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Timers against real (paused) time
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn idle_session_becomes_concerned_then_decays() {
    let session = Session::spawn(seeded(1), Arc::new(Silence));
    let handle = session.handle();

    sleep(ms(1999)).await;
    assert_eq!(handle.current().await.unwrap().stats.state, PlantState::Healthy);

    sleep(ms(2)).await;
    assert_eq!(handle.current().await.unwrap().stats.state, PlantState::Concerned);

    sleep(ms(2000)).await;
    let stats = handle.current().await.unwrap().stats;
    assert_eq!((stats.health, stats.water_level), (90, 85));

    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn care_is_applied_in_order_and_published() {
    let session = Session::spawn(seeded(2), Arc::new(Silence));
    let handle = session.handle();
    let mut watcher = handle.subscribe();
    let start = watcher.borrow().revision;

    handle.give_attention().unwrap();
    handle.water_plant().unwrap();
    let snapshot = handle.current().await.unwrap();
    assert_eq!(snapshot.stats.total_attention_received, 2);
    assert_eq!(snapshot.stats.attention_streak, 2);

    watcher.changed().await.unwrap();
    assert!(watcher.borrow_and_update().revision > start);
    assert_eq!(handle.snapshot().revision, snapshot.revision);

    session.shutdown().await;
}

// ---------------------------------------------------------------------------
// Death, sound, and revive
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn death_is_announced_once_with_sound() {
    let sound = Arc::new(CountingSound::default());
    let mut session = Session::spawn(seeded(3), sound.clone());
    let handle = session.handle();

    sleep(ms(30_000)).await;
    let snapshot = handle.current().await.unwrap();
    assert_eq!(snapshot.stats.state, PlantState::Dead);

    let events = drain(&mut session);
    assert_eq!(deaths(&events), 1);
    assert_eq!(sound.0.load(Ordering::SeqCst), 1);

    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn disabled_audio_never_plays() {
    let mut config = seeded(4);
    config.audio.death_sound = false;
    let sound = Arc::new(CountingSound::default());
    let mut session = Session::spawn(config, sound.clone());

    sleep(ms(20_000)).await;
    session.handle().current().await.unwrap();
    assert_eq!(deaths(&drain(&mut session)), 1);
    assert_eq!(sound.0.load(Ordering::SeqCst), 0);

    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn any_input_revives_a_dead_plant() {
    let session = Session::spawn(seeded(5), Arc::new(Silence));
    let handle = session.handle();

    sleep(ms(20_000)).await;
    assert!(handle.revive_plant().await.unwrap());
    assert!(!handle.revive_plant().await.unwrap());

    sleep(ms(20_000)).await;
    assert_eq!(handle.current().await.unwrap().stats.state, PlantState::Dead);
    handle.input(InputEvent::Click).unwrap();
    let stats = handle.current().await.unwrap().stats;
    assert_eq!(stats.state, PlantState::Healthy);
    assert_eq!(stats.abandonment_count, 2);

    session.shutdown().await;
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn unnamed_plant_prompts_after_two_seconds() {
    let mut session = Session::spawn(seeded(6), Arc::new(Silence));
    let handle = session.handle();

    sleep(ms(1500)).await;
    handle.current().await.unwrap();
    assert!(!drain(&mut session)
        .iter()
        .any(|e| matches!(e, SessionEvent::NamePrompt { .. })));

    sleep(ms(600)).await;
    handle.current().await.unwrap();
    let prompts: Vec<_> = drain(&mut session)
        .into_iter()
        .filter_map(|e| match e {
            SessionEvent::NamePrompt { suggestion } => Some(suggestion),
            _ => None,
        })
        .collect();
    assert_eq!(prompts.len(), 1);
    assert!(suggested_names().contains(&prompts[0].as_str()));

    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn naming_early_skips_the_prompt() {
    let mut session = Session::spawn(seeded(7), Arc::new(Silence));
    let handle = session.handle();

    handle.rename("Basil").await.unwrap();
    sleep(ms(5000)).await;
    assert_eq!(handle.current().await.unwrap().stats.name.as_str(), "Basil");
    assert!(!drain(&mut session)
        .iter()
        .any(|e| matches!(e, SessionEvent::NamePrompt { .. })));

    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn rejected_rename_reports_the_reason() {
    let mut session = Session::spawn(seeded(8), Arc::new(Silence));
    let handle = session.handle();

    let err = handle.rename("x".repeat(21)).await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Plant(PlantError::InvalidName {
            reason: NameRejection::TooLong { len: 21 }
        })
    ));
    assert!(drain(&mut session).iter().any(|e| matches!(
        e,
        SessionEvent::Signal(Signal::RenameRejected { .. })
    )));

    session.shutdown().await;
}

// ---------------------------------------------------------------------------
// Shutdown
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn handles_fail_after_shutdown() {
    let session = Session::spawn(seeded(9), Arc::new(Silence));
    let handle = session.handle();
    session.shutdown().await;

    assert!(matches!(handle.give_attention(), Err(SessionError::Closed)));
    assert!(matches!(handle.current().await, Err(SessionError::Closed)));
    assert_eq!(handle.snapshot().stats.state, PlantState::Healthy);
}
