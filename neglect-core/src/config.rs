//! Configuration for a plant session.
//!
//! Maps directly to `neglect.toml`. Every field has a default, so an empty
//! file (or no file) yields a fully working configuration. Timer periods,
//! decay amounts, and state thresholds are deliberately absent: they are
//! fixed constants in [`crate::timers`] and [`crate::transition`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::name::{DEFAULT_NAME, PlantName};
use crate::signal::Effect;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Starting conditions.
    #[serde(default)]
    pub plant: PlantSection,
    /// Popup display durations.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Effect auto-clear durations.
    #[serde(default)]
    pub effects: EffectsConfig,
    /// Audio settings.
    #[serde(default)]
    pub audio: AudioConfig,
}

impl PlantConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `PlantError::Config` if the TOML is invalid or fails
    /// [`PlantConfig::validate`].
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| crate::PlantError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check values serde cannot: the initial name and non-zero durations.
    ///
    /// # Errors
    /// Returns `PlantError::Config` describing the first problem found.
    pub fn validate(&self) -> crate::error::Result<()> {
        PlantName::parse(&self.plant.initial_name).map_err(|e| {
            crate::PlantError::Config(format!("plant.initial_name: {e}"))
        })?;

        let durations = [
            ("display.notification_ms", self.display.notification_ms),
            ("display.death_notification_ms", self.display.death_notification_ms),
            ("effects.death_blast_ms", self.effects.death_blast_ms),
            ("effects.love_particles_ms", self.effects.love_particles_ms),
            ("effects.water_particles_ms", self.effects.water_particles_ms),
            ("effects.sparkle_burst_ms", self.effects.sparkle_burst_ms),
            ("effects.emotional_burst_ms", self.effects.emotional_burst_ms),
        ];
        if let Some((key, _)) = durations.iter().find(|(_, ms)| *ms == 0) {
            return Err(crate::PlantError::Config(format!("{key} must be non-zero")));
        }
        Ok(())
    }

    /// The validated initial name, falling back to the default on error.
    #[must_use]
    pub fn initial_name(&self) -> PlantName {
        PlantName::parse(&self.plant.initial_name).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Fixed random seed for reproducible sessions. Entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

/// Starting conditions for a new plant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantSection {
    /// Name the plant starts with. Same rules as a rename.
    #[serde(default = "default_name")]
    pub initial_name: String,
}

impl Default for PlantSection {
    fn default() -> Self {
        Self {
            initial_name: DEFAULT_NAME.to_string(),
        }
    }
}

/// How long popups stay on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Ordinary notifications (ms).
    #[serde(default = "default_3000")]
    pub notification_ms: u64,
    /// Death notifications (ms).
    #[serde(default = "default_4000")]
    pub death_notification_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            notification_ms: 3000,
            death_notification_ms: 4000,
        }
    }
}

impl DisplayConfig {
    /// Display duration for ordinary notifications.
    #[must_use]
    pub fn notification(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// Display duration for death notifications.
    #[must_use]
    pub fn death_notification(&self) -> Duration {
        Duration::from_millis(self.death_notification_ms)
    }
}

/// Auto-clear durations for renderer effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Death flash (ms).
    #[serde(default = "default_1000")]
    pub death_blast_ms: u64,
    /// Hearts after attention (ms).
    #[serde(default = "default_2000")]
    pub love_particles_ms: u64,
    /// Droplets after watering (ms).
    #[serde(default = "default_3000")]
    pub water_particles_ms: u64,
    /// Sparkles after care (ms).
    #[serde(default = "default_3000")]
    pub sparkle_burst_ms: u64,
    /// Emoji burst after a big mood swing (ms).
    #[serde(default = "default_1500")]
    pub emotional_burst_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            death_blast_ms: 1000,
            love_particles_ms: 2000,
            water_particles_ms: 3000,
            sparkle_burst_ms: 3000,
            emotional_burst_ms: 1500,
        }
    }
}

impl EffectsConfig {
    /// How long the renderer should show `effect`.
    #[must_use]
    pub fn duration_of(&self, effect: Effect) -> Duration {
        let ms = match effect {
            Effect::DeathBlast => self.death_blast_ms,
            Effect::LoveParticles => self.love_particles_ms,
            Effect::WaterParticles => self.water_particles_ms,
            Effect::SparkleBurst => self.sparkle_burst_ms,
            Effect::EmotionalBurst => self.emotional_burst_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Audio settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Attempt the dramatic death sound. Failure is never fatal.
    #[serde(default = "default_true")]
    pub death_sound: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { death_sound: true }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool { true }
fn default_log_level() -> String { "info".to_string() }
fn default_name() -> String { DEFAULT_NAME.to_string() }
fn default_1000() -> u64 { 1000 }
fn default_1500() -> u64 { 1500 }
fn default_2000() -> u64 { 2000 }
fn default_3000() -> u64 { 3000 }
fn default_4000() -> u64 { 4000 }
