//! Neglect, decay, and random-emotion timers, kept as one value.
//!
//! Timers are deadlines on a logical session clock (time since the session
//! started), not OS handles. A host runtime sleeps until
//! [`TimerSet::next_deadline`] and then hands the current time back to
//! [`crate::plant::Plant::advance_to`], which pops due timers with
//! [`TimerSet::take_due`].
//!
//! Because re-arming simply overwrites the deadlines, a timer that has been
//! replaced can never fire: there is nothing left to cancel.

use std::time::Duration;

/// Idle time after the last qualifying activity before neglect starts.
pub const NEGLECT_AFTER: Duration = Duration::from_millis(2000);
/// Period of the decay ticker.
pub const DECAY_PERIOD: Duration = Duration::from_millis(2000);
/// Shortest delay before a random emotional moment (inclusive).
pub const EMOTION_DELAY_MIN: Duration = Duration::from_millis(10_000);
/// Longest delay before a random emotional moment (exclusive).
pub const EMOTION_DELAY_MAX: Duration = Duration::from_millis(25_000);

/// Which of the three timers fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Single-shot idle detector.
    Neglect,
    /// Repeating health/water decay.
    Decay,
    /// Single-shot random emotional moment.
    RandomEmotion,
}

/// The neglect, decay, and random-emotion timers, armed and disarmed as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSet {
    neglect: Option<Duration>,
    decay: Option<Duration>,
    random_emotion: Option<Duration>,
    arm_count: u64,
}

impl TimerSet {
    /// A set with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart from `now`: neglect fires after [`NEGLECT_AFTER`], the random
    /// emotion after `emotion_delay`, and any running decay ticker stops.
    pub fn arm(&mut self, now: Duration, emotion_delay: Duration) {
        self.neglect = Some(now + NEGLECT_AFTER);
        self.decay = None;
        self.random_emotion = Some(now + emotion_delay);
        self.arm_count += 1;
    }

    /// Cancel every pending timer.
    pub fn disarm(&mut self) {
        self.neglect = None;
        self.decay = None;
        self.random_emotion = None;
    }

    /// Start the decay ticker; the first tick lands one period after `now`.
    pub fn start_decay(&mut self, now: Duration) {
        self.decay = Some(now + DECAY_PERIOD);
    }

    /// Stop the decay ticker, leaving the other timers alone.
    pub fn stop_decay(&mut self) {
        self.decay = None;
    }

    /// Whether the given timer is currently scheduled.
    #[must_use]
    pub fn is_live(&self, kind: TimerKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Number of timers currently scheduled (0..=3).
    #[must_use]
    pub fn live_count(&self) -> usize {
        [self.neglect, self.decay, self.random_emotion]
            .iter()
            .filter(|t| t.is_some())
            .count()
    }

    /// How many times [`TimerSet::arm`] has been called.
    #[must_use]
    pub fn arm_count(&self) -> u64 {
        self.arm_count
    }

    /// The earliest scheduled timer. Ties go to neglect, then decay.
    #[must_use]
    pub fn next_due(&self) -> Option<(TimerKind, Duration)> {
        [
            (TimerKind::Neglect, self.neglect),
            (TimerKind::Decay, self.decay),
            (TimerKind::RandomEmotion, self.random_emotion),
        ]
        .into_iter()
        .filter_map(|(kind, at)| at.map(|at| (kind, at)))
        .min_by_key(|&(kind, at)| (at, kind))
    }

    /// Deadline of the earliest scheduled timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.next_due().map(|(_, at)| at)
    }

    /// Pop the earliest timer due at or before `now`.
    ///
    /// Single-shot timers are cleared; the decay ticker is rescheduled one
    /// period after the deadline it fired at, so ticks never drift.
    pub fn take_due(&mut self, now: Duration) -> Option<(TimerKind, Duration)> {
        let (kind, at) = self.next_due().filter(|&(_, at)| at <= now)?;
        match kind {
            TimerKind::Neglect => self.neglect = None,
            TimerKind::Decay => self.decay = Some(at + DECAY_PERIOD),
            TimerKind::RandomEmotion => self.random_emotion = None,
        }
        Some((kind, at))
    }

    fn slot(&self, kind: TimerKind) -> Option<Duration> {
        match kind {
            TimerKind::Neglect => self.neglect,
            TimerKind::Decay => self.decay,
            TimerKind::RandomEmotion => self.random_emotion,
        }
    }
}
