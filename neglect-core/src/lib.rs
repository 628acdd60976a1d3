//! # Neglect-o-Plant Core Library
//!
//! A virtual plant whose condition decays while it is ignored and recovers
//! when it is cared for. This crate is the neglect/decay state machine and
//! nothing else: no rendering, no audio, no async runtime.
//!
//! - **Timers** — idle detector, decay ticker, random emotional moments
//!   ([`timers::TimerSet`])
//! - **Vitals** — health, water, mood, and history counters
//!   ([`types::VitalStats`])
//! - **Transitions** — physical state and emotion derivation
//!   ([`transition`])
//! - **Interaction** — attention, watering, revive, rename ([`Plant`])
//! - **Notifications** — popup text selection ([`messages`])
//!
//! ## Driving a plant
//!
//! A [`Plant`] runs on a logical clock. Hosts call
//! [`Plant::advance_to`] with the time since the session started and drain
//! [`Signal`]s afterwards:
//!
//! ```
//! use std::time::Duration;
//! use neglect_core::{Plant, PlantState};
//!
//! let mut plant = Plant::with_seed(7);
//! plant.advance_to(Duration::from_millis(2000));
//! assert_eq!(plant.stats().state, PlantState::Concerned);
//!
//! plant.water_plant();
//! assert_eq!(plant.stats().state, PlantState::Healthy);
//! assert!(!plant.drain_signals().is_empty());
//! ```

#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod decay;
pub mod error;
pub mod messages;
pub mod name;
pub mod plant;
pub mod signal;
pub mod timers;
pub mod transition;
pub mod types;

pub use config::PlantConfig;
pub use error::{NameRejection, PlantError};
pub use messages::MessageCategory;
pub use name::PlantName;
pub use plant::Plant;
pub use signal::{Effect, Notification, Signal};
pub use types::*;
