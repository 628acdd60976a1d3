//! Outward-facing signals drained from a [`crate::plant::Plant`].
//!
//! Signals are fire-and-forget: the core never waits on them and owns no
//! display timers. Each effect carries the duration after which the renderer
//! should clear it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::NameRejection;
use crate::messages::MessageCategory;
use crate::name::PlantName;

/// Transient visual effects a renderer may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Screen flash and shake on death.
    DeathBlast,
    /// Hearts after attention.
    LoveParticles,
    /// Droplets after watering.
    WaterParticles,
    /// Sparkles after any care action.
    SparkleBurst,
    /// Emoji burst after a large mood swing.
    EmotionalBurst,
}

/// A popup message for the host to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// What triggered the message.
    pub category: MessageCategory,
    /// Rendered text.
    pub message: String,
    /// How long the host should keep it on screen.
    pub display_for: Duration,
}

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signal {
    /// Show a popup.
    Notify(Notification),
    /// Play an effect, clearing it after `clear_after`.
    Effect {
        /// Which effect.
        effect: Effect,
        /// When to clear it.
        clear_after: Duration,
    },
    /// The plant just died. Raised exactly once per death.
    Died {
        /// Name at the time of death.
        name: PlantName,
    },
    /// A rename was rejected; the naming form should shake.
    RenameRejected {
        /// Why.
        reason: NameRejection,
    },
}
