//! The plant — interaction API and timer handlers.
//!
//! [`Plant`] owns the vitals, the timer set, the logical clock, and the random
//! source. It is the single writer of [`VitalStats`]: every mutation goes
//! through one of its methods, each of which re-derives state and emotion and
//! queues any [`Signal`]s for the host to drain.
//!
//! The plant never sleeps. Hosts move time forward with
//! [`Plant::advance_to`], which fires every due timer at its scheduled
//! instant, in deadline order.

use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::PlantConfig;
use crate::decay;
use crate::error::{PlantError, Result};
use crate::messages::{MessageCategory, select_message};
use crate::name::PlantName;
use crate::signal::{Effect, Notification, Signal};
use crate::timers::{EMOTION_DELAY_MAX, EMOTION_DELAY_MIN, TimerKind, TimerSet};
use crate::transition::{EmotionInputs, apply_mood, derive_emotion, derive_state};
use crate::types::{PlantEmotion, PlantState, SASS_MAX, Snapshot, VITAL_MAX, VitalStats};

/// Health restored by attention.
pub const ATTENTION_HEALTH_BOOST: u8 = 10;
/// Health restored by watering.
pub const WATER_HEALTH_BOOST: u8 = 15;
/// Health restored by a revive.
pub const REVIVE_HEALTH_BOOST: u8 = 50;
/// Chance that a due random-emotion timer actually changes the emotion.
pub const RANDOM_EMOTION_CHANCE: f64 = 0.3;

/// The two care actions, which share everything but their numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Care {
    Attention,
    Water,
}

impl Care {
    fn health_boost(self) -> u8 {
        match self {
            Self::Attention => ATTENTION_HEALTH_BOOST,
            Self::Water => WATER_HEALTH_BOOST,
        }
    }

    fn particles(self) -> Effect {
        match self {
            Self::Attention => Effect::LoveParticles,
            Self::Water => Effect::WaterParticles,
        }
    }

    fn category(self) -> MessageCategory {
        match self {
            Self::Attention => MessageCategory::Attention,
            Self::Water => MessageCategory::Watering,
        }
    }
}

/// A simulated plant and everything that drives it.
#[derive(Debug)]
pub struct Plant {
    stats: VitalStats,
    timers: TimerSet,
    clock: Duration,
    revision: u64,
    rng: StdRng,
    config: PlantConfig,
    signals: Vec<Signal>,
}

impl Plant {
    /// Start a new session: default vitals, the configured name, and all
    /// timers armed from time zero.
    ///
    /// Uses `config.general.seed` when set, entropy otherwise.
    #[must_use]
    pub fn new(config: PlantConfig) -> Self {
        let rng = match config.general.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let stats = VitalStats::named(config.initial_name());
        let mut plant = Self {
            stats,
            timers: TimerSet::new(),
            clock: Duration::ZERO,
            revision: 0,
            rng,
            config,
            signals: Vec::new(),
        };
        plant.arm();
        plant
    }

    /// A plant with default configuration and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut config = PlantConfig::default();
        config.general.seed = Some(seed);
        Self::new(config)
    }

    /// Replace the starting vitals. Timers stay as armed.
    #[must_use]
    pub fn with_stats(mut self, stats: VitalStats) -> Self {
        self.stats = stats;
        self.touch();
        self
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// Current vitals.
    #[must_use]
    pub fn stats(&self) -> &VitalStats {
        &self.stats
    }

    /// An immutable copy for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision,
            stats: self.stats.clone(),
        }
    }

    /// Bumped on every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The timer set, for inspection.
    #[must_use]
    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    /// Current logical time since the session started.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// When the host should next call [`Plant::advance_to`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// The configuration this plant was built with.
    #[must_use]
    pub fn config(&self) -> &PlantConfig {
        &self.config
    }

    /// Take every signal emitted since the last drain, oldest first.
    pub fn drain_signals(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    // -----------------------------------------------------------------------
    // Clock
    // -----------------------------------------------------------------------

    /// Move the logical clock to `now`, firing due timers in order.
    ///
    /// Time never runs backwards; an earlier `now` is ignored.
    pub fn advance_to(&mut self, now: Duration) {
        if now < self.clock {
            debug!(?now, clock = ?self.clock, "ignoring backwards clock");
            return;
        }
        while let Some((kind, at)) = self.timers.take_due(now) {
            self.clock = at;
            self.fire(kind);
        }
        self.clock = now;
    }

    /// Move the logical clock forward by `dt`.
    pub fn advance_by(&mut self, dt: Duration) {
        self.advance_to(self.clock + dt);
    }

    fn fire(&mut self, kind: TimerKind) {
        debug!(?kind, at = ?self.clock, "timer fired");
        match kind {
            TimerKind::Neglect => self.on_neglect(),
            TimerKind::Decay => self.on_decay_tick(),
            TimerKind::RandomEmotion => self.on_random_emotion(),
        }
    }

    fn on_neglect(&mut self) {
        if self.stats.state == PlantState::Dead {
            return;
        }
        self.stats.state = PlantState::Concerned;
        self.apply_emotion(PlantState::Concerned, self.stats.health, false);
        self.timers.start_decay(self.clock);
        self.touch();
    }

    fn on_decay_tick(&mut self) {
        let emotion_before = self.stats.emotion;
        let (health, water_level) = decay::decay_tick(self.stats.health, self.stats.water_level);
        self.stats.health = health;
        self.stats.water_level = water_level;

        let state = derive_state(health, water_level);
        self.stats.state = state;
        self.apply_emotion(state, health, false);
        debug!(health, water_level, %state, "decay tick");

        if state == PlantState::Dead {
            self.timers.stop_decay();
            self.on_death(emotion_before);
        }
        self.touch();
    }

    fn on_death(&mut self, emotion_before: PlantEmotion) {
        info!(name = %self.stats.name, "plant died of neglect");
        self.emit_effect(Effect::DeathBlast);
        self.signals.push(Signal::Died {
            name: self.stats.name.clone(),
        });
        // The last words come from how the plant felt before the fatal tick.
        self.notify(MessageCategory::Death, emotion_before);
    }

    fn on_random_emotion(&mut self) {
        if self.stats.state != PlantState::Healthy {
            return;
        }
        if !self.rng.gen_bool(RANDOM_EMOTION_CHANCE) {
            return;
        }
        let emotion = PlantEmotion::IDLE_MOODS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PlantEmotion::Content);
        self.stats.emotion = emotion;
        self.notify(MessageCategory::IdleChatter, emotion);
        self.touch();
    }

    // -----------------------------------------------------------------------
    // Interaction API
    // -----------------------------------------------------------------------

    /// Give the plant attention: +10 health, streak and total +1.
    pub fn give_attention(&mut self) {
        self.care(Care::Attention);
    }

    /// Water the plant: +15 health, water refilled, streak and total +1.
    pub fn water_plant(&mut self) {
        self.care(Care::Water);
    }

    fn care(&mut self, care: Care) {
        let health = self
            .stats
            .health
            .saturating_add(care.health_boost())
            .min(VITAL_MAX);
        let state = if self.stats.state == PlantState::Dead {
            PlantState::Reviving
        } else {
            PlantState::Healthy
        };

        // Counters are judged as they stood before this action.
        self.apply_emotion(state, health, true);

        self.stats.health = health;
        if care == Care::Water {
            self.stats.water_level = VITAL_MAX;
        }
        self.stats.state = state;
        self.stats.attention_streak = self.stats.attention_streak.saturating_add(1);
        self.stats.total_attention_received =
            self.stats.total_attention_received.saturating_add(1);
        self.stats.last_interaction = Utc::now();
        debug!(?care, health, %state, streak = self.stats.attention_streak, "care given");

        self.emit_effect(care.particles());
        self.emit_effect(Effect::SparkleBurst);
        self.notify(care.category(), self.stats.emotion);

        self.arm();
        self.touch();
    }

    /// Bring a dead plant back: +50 health, healthy, one more abandonment.
    ///
    /// Returns `false` and changes nothing unless the plant is dead.
    pub fn revive_plant(&mut self) -> bool {
        if self.stats.state != PlantState::Dead {
            debug!(state = %self.stats.state, "revive ignored");
            return false;
        }

        let health = self
            .stats
            .health
            .saturating_add(REVIVE_HEALTH_BOOST)
            .min(VITAL_MAX);
        self.stats.health = health;
        self.stats.state = PlantState::Healthy;
        self.stats.abandonment_count = self.stats.abandonment_count.saturating_add(1);
        self.stats.sass_level = self.stats.sass_level.saturating_add(1).min(SASS_MAX);
        self.stats.attention_streak = 0;
        self.apply_emotion(PlantState::Healthy, health, false);
        self.stats.last_interaction = Utc::now();
        info!(
            name = %self.stats.name,
            abandonments = self.stats.abandonment_count,
            "plant revived"
        );

        self.arm();
        self.touch();
        true
    }

    /// Rename the plant. Vitals and timers are untouched.
    ///
    /// # Errors
    /// Returns [`PlantError::InvalidName`] if the trimmed name is empty or
    /// too long; a [`Signal::RenameRejected`] is queued as well.
    pub fn rename(&mut self, input: &str) -> Result<()> {
        match PlantName::parse(input) {
            Ok(name) => {
                info!(from = %self.stats.name, to = %name, "plant renamed");
                self.stats.name = name;
                self.notify(MessageCategory::RenameConfirmation, self.stats.emotion);
                self.touch();
                Ok(())
            }
            Err(err) => {
                if let PlantError::InvalidName { reason } = &err {
                    warn!(%reason, "rename rejected");
                    self.signals.push(Signal::RenameRejected { reason: *reason });
                }
                Err(err)
            }
        }
    }

    /// Generic user activity (pointer, keyboard, scroll, touch).
    ///
    /// Revives a dead plant; otherwise just restarts the idle window.
    pub fn record_activity(&mut self) {
        if self.stats.state == PlantState::Dead {
            self.revive_plant();
            return;
        }
        self.stats.last_interaction = Utc::now();
        self.arm();
        self.touch();
    }

    /// Cancel every pending timer. Call on session teardown.
    pub fn shutdown(&mut self) {
        self.timers.disarm();
        debug!("timers disarmed");
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn arm(&mut self) {
        let delay = self.rng.gen_range(EMOTION_DELAY_MIN..EMOTION_DELAY_MAX);
        self.timers.arm(self.clock, delay);
    }

    fn apply_emotion(&mut self, state: PlantState, health: u8, attention_given: bool) {
        let update = derive_emotion(&EmotionInputs::from_stats(
            &self.stats,
            state,
            health,
            attention_given,
        ));
        self.stats.emotion = update.emotion;
        self.stats.mood = apply_mood(self.stats.mood, update.mood_delta);
        if update.is_burst() {
            self.emit_effect(Effect::EmotionalBurst);
        }
    }

    fn emit_effect(&mut self, effect: Effect) {
        let clear_after = self.config.effects.duration_of(effect);
        self.signals.push(Signal::Effect {
            effect,
            clear_after,
        });
    }

    fn notify(&mut self, category: MessageCategory, emotion: PlantEmotion) {
        let message = select_message(category, emotion, self.stats.name.as_str(), &mut self.rng);
        let display_for = if category == MessageCategory::Death {
            self.config.display.death_notification()
        } else {
            self.config.display.notification()
        };
        self.signals.push(Signal::Notify(Notification {
            category,
            message,
            display_for,
        }));
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl Default for Plant {
    fn default() -> Self {
        Self::new(PlantConfig::default())
    }
}
