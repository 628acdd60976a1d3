//! Core type definitions for the plant simulation.
//!
//! [`VitalStats`] is the single mutable record a session owns. Everything a
//! renderer sees is a [`Snapshot`], an immutable copy taken after a change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decay;
use crate::name::PlantName;

// ---------------------------------------------------------------------------
// Ranges
// ---------------------------------------------------------------------------

/// Upper bound for health and water level.
pub const VITAL_MAX: u8 = 100;
/// Lower bound for mood.
pub const MOOD_MIN: i16 = -100;
/// Upper bound for mood.
pub const MOOD_MAX: i16 = 100;
/// Upper bound for sass level.
pub const SASS_MAX: u8 = 10;

// ---------------------------------------------------------------------------
// Physical state
// ---------------------------------------------------------------------------

/// Physical condition of the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantState {
    /// Everything is fine.
    Healthy,
    /// Neglect has begun, or vitals have slipped.
    Concerned,
    /// Health or water is critically low.
    Wilting,
    /// Health or water has run out.
    Dead,
    /// Transitional marker set when a care action lands on a dead plant.
    Reviving,
}

impl fmt::Display for PlantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Healthy => "healthy",
            Self::Concerned => "concerned",
            Self::Wilting => "wilting",
            Self::Dead => "dead",
            Self::Reviving => "reviving",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Emotion
// ---------------------------------------------------------------------------

/// Discrete affective label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantEmotion {
    /// Pleased with recent care.
    Happy,
    /// Thriving and in a great mood.
    Excited,
    /// Baseline.
    Content,
    /// First signs of neglect.
    Worried,
    /// Neglected by an owner with a history of abandonment.
    Anxious,
    /// Wilting.
    Sad,
    /// Furious. Only reachable through message banks and host overrides.
    Angry,
    /// Dead.
    Devastated,
    /// Cared for by a long-time owner, or revived.
    Grateful,
    /// On a streak of care.
    Loved,
    /// Revived too many times to trust it.
    Lonely,
    /// Wilting again after being abandoned before.
    Betrayed,
}

impl PlantEmotion {
    /// Emotions the random-emotion timer may pick from.
    pub const IDLE_MOODS: [Self; 3] = [Self::Excited, Self::Happy, Self::Content];

    /// Lower-case label, matching the serialized form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Content => "content",
            Self::Worried => "worried",
            Self::Anxious => "anxious",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Devastated => "devastated",
            Self::Grateful => "grateful",
            Self::Loved => "loved",
            Self::Lonely => "lonely",
            Self::Betrayed => "betrayed",
        }
    }
}

impl fmt::Display for PlantEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Vital stats
// ---------------------------------------------------------------------------

/// The plant's mutable record.
///
/// Only [`crate::plant::Plant`] writes to this; fields are public so hosts
/// and tests can build arbitrary starting conditions with
/// [`crate::plant::Plant::with_stats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalStats {
    /// Health in [0, 100].
    pub health: u8,
    /// Water level in [0, 100].
    pub water_level: u8,
    /// Mood trend in [-100, 100].
    pub mood: i16,
    /// Physical condition.
    pub state: PlantState,
    /// Current affective label.
    pub emotion: PlantEmotion,
    /// Completed death→revive cycles.
    pub abandonment_count: u32,
    /// Care actions since the last revive.
    pub attention_streak: u32,
    /// Lifetime care actions. Never decreases.
    pub total_attention_received: u32,
    /// Grows by one per revive, capped at [`SASS_MAX`].
    pub sass_level: u8,
    /// User-assigned name.
    pub name: PlantName,
    /// Wall-clock time of the last qualifying activity.
    pub last_interaction: DateTime<Utc>,
}

impl Default for VitalStats {
    fn default() -> Self {
        Self {
            health: VITAL_MAX,
            water_level: VITAL_MAX,
            mood: 50,
            state: PlantState::Healthy,
            emotion: PlantEmotion::Content,
            abandonment_count: 0,
            attention_streak: 0,
            total_attention_received: 0,
            sass_level: 0,
            name: PlantName::default(),
            last_interaction: Utc::now(),
        }
    }
}

impl VitalStats {
    /// Default stats with a custom name.
    #[must_use]
    pub fn named(name: PlantName) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Whether health or water has run out.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.health == 0 || self.water_level == 0
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Read-only copy of the vitals handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Bumped on every mutation of the underlying stats.
    pub revision: u64,
    /// The copied stats.
    #[serde(flatten)]
    pub stats: VitalStats,
}

impl Snapshot {
    /// Display band for health.
    #[must_use]
    pub fn health_band(&self) -> VitalBand {
        VitalBand::of(self.stats.health)
    }

    /// Display band for water level.
    #[must_use]
    pub fn water_band(&self) -> VitalBand {
        VitalBand::of(self.stats.water_level)
    }

    /// Display band for mood.
    #[must_use]
    pub fn mood_band(&self) -> MoodBand {
        MoodBand::of(self.stats.mood)
    }

    /// Decay ticks left before the plant dies if nobody intervenes.
    #[must_use]
    pub fn ticks_until_depleted(&self) -> u32 {
        decay::ticks_until_depleted(self.stats.health, self.stats.water_level)
    }
}

/// Coarse grading of a 0–100 vital for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalBand {
    /// Above 70.
    Good,
    /// Above 30.
    Fair,
    /// 30 or below.
    Poor,
}

impl VitalBand {
    /// Grade a vital value.
    #[must_use]
    pub fn of(value: u8) -> Self {
        match value {
            v if v > 70 => Self::Good,
            v if v > 30 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

impl fmt::Display for VitalBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        })
    }
}

/// Coarse grading of mood for the mood bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodBand {
    /// Above 70.
    Thriving,
    /// Above 30.
    Okay,
    /// Above -30.
    Low,
    /// -30 or below.
    Miserable,
}

impl MoodBand {
    /// Grade a mood value.
    #[must_use]
    pub fn of(mood: i16) -> Self {
        match mood {
            m if m > 70 => Self::Thriving,
            m if m > 30 => Self::Okay,
            m if m > -30 => Self::Low,
            _ => Self::Miserable,
        }
    }
}

impl fmt::Display for MoodBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Thriving => "thriving",
            Self::Okay => "okay",
            Self::Low => "low",
            Self::Miserable => "miserable",
        })
    }
}
