//! Physical state and emotion derivation.
//!
//! Two pure rules drive everything the plant shows:
//!
//! ```text
//! derive_state(health, water)         -> PlantState
//! derive_emotion(EmotionInputs)       -> EmotionUpdate { emotion, mood_delta }
//! ```
//!
//! Physical state is a strict priority ladder over health and water; the
//! first matching rung wins. Emotion depends on whether the user just gave
//! care and, if not, on the physical state and the owner's history.
//!
//! | State      | Emotion                                         | Mood delta |
//! |------------|-------------------------------------------------|------------|
//! | (care)     | loved (streak > 3) / grateful (total > 10) / happy | +20/+15/+10 |
//! | healthy    | excited or happy (health > 90) / content        | +5 / +2    |
//! | concerned  | anxious (abandoned > 2) / worried               | −10        |
//! | wilting    | betrayed (abandoned > 1) / sad                  | −20        |
//! | dead       | devastated                                      | −30        |
//! | reviving   | lonely (abandoned > 3) / grateful               | +5         |

use crate::types::{MOOD_MAX, MOOD_MIN, PlantEmotion, PlantState, VitalStats};

/// Mood swings larger than this (in either direction) raise an emotional burst.
pub const BURST_THRESHOLD: i16 = 15;

/// Derive the physical state from health and water level.
///
/// Never returns [`PlantState::Reviving`]; that marker is only ever set by a
/// care action landing on a dead plant.
#[must_use]
pub fn derive_state(health: u8, water_level: u8) -> PlantState {
    if health == 0 || water_level == 0 {
        PlantState::Dead
    } else if health <= 30 || water_level <= 30 {
        PlantState::Wilting
    } else if health <= 70 || water_level <= 50 {
        PlantState::Concerned
    } else {
        PlantState::Healthy
    }
}

/// Everything [`derive_emotion`] looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionInputs {
    /// State the plant is in (or is about to be in).
    pub state: PlantState,
    /// Health the plant is at (or is about to be at).
    pub health: u8,
    /// Current mood, before this update.
    pub mood: i16,
    /// Care actions since the last revive.
    pub attention_streak: u32,
    /// Lifetime care actions.
    pub total_attention_received: u32,
    /// Completed death→revive cycles.
    pub abandonment_count: u32,
    /// Whether this update is the direct result of a care action.
    pub attention_given: bool,
}

impl EmotionInputs {
    /// Build inputs from the current stats, overriding state and health with
    /// the values the caller is about to commit.
    #[must_use]
    pub fn from_stats(
        stats: &VitalStats,
        state: PlantState,
        health: u8,
        attention_given: bool,
    ) -> Self {
        Self {
            state,
            health,
            mood: stats.mood,
            attention_streak: stats.attention_streak,
            total_attention_received: stats.total_attention_received,
            abandonment_count: stats.abandonment_count,
            attention_given,
        }
    }
}

/// Result of an emotion derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionUpdate {
    /// New emotion label.
    pub emotion: PlantEmotion,
    /// Change to apply to mood.
    pub mood_delta: i16,
}

impl EmotionUpdate {
    /// Whether this update is strong enough to raise an emotional burst.
    #[must_use]
    pub fn is_burst(&self) -> bool {
        self.mood_delta.abs() > BURST_THRESHOLD
    }
}

/// Derive the next emotion and mood delta.
#[must_use]
pub fn derive_emotion(inputs: &EmotionInputs) -> EmotionUpdate {
    let (emotion, mood_delta) = if inputs.attention_given {
        if inputs.attention_streak > 3 {
            (PlantEmotion::Loved, 20)
        } else if inputs.total_attention_received > 10 {
            (PlantEmotion::Grateful, 15)
        } else {
            (PlantEmotion::Happy, 10)
        }
    } else {
        match inputs.state {
            PlantState::Healthy if inputs.health > 90 => {
                if inputs.mood > 70 {
                    (PlantEmotion::Excited, 5)
                } else {
                    (PlantEmotion::Happy, 5)
                }
            }
            PlantState::Healthy => (PlantEmotion::Content, 2),
            PlantState::Concerned if inputs.abandonment_count > 2 => (PlantEmotion::Anxious, -10),
            PlantState::Concerned => (PlantEmotion::Worried, -10),
            PlantState::Wilting if inputs.abandonment_count > 1 => (PlantEmotion::Betrayed, -20),
            PlantState::Wilting => (PlantEmotion::Sad, -20),
            PlantState::Dead => (PlantEmotion::Devastated, -30),
            PlantState::Reviving if inputs.abandonment_count > 3 => (PlantEmotion::Lonely, 5),
            PlantState::Reviving => (PlantEmotion::Grateful, 5),
        }
    };

    EmotionUpdate {
        emotion,
        mood_delta,
    }
}

/// Apply a mood delta, clamping to [-100, 100].
#[must_use]
pub fn apply_mood(mood: i16, delta: i16) -> i16 {
    mood.saturating_add(delta).clamp(MOOD_MIN, MOOD_MAX)
}
