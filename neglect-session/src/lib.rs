//! # neglect-session — Tokio Host Runtime for Neglect-o-Plant
//!
//! Runs a [`neglect_core::Plant`] against real time:
//!   - **Driver** — one task owns the plant and sleeps until its next timer
//!     deadline ([`Session`])
//!   - **Handles** — cloneable command senders for UI code ([`SessionHandle`])
//!   - **Snapshots** — published on a `watch` channel after every change
//!   - **Events** — plant signals plus the first-run name prompt
//!     ([`SessionEvent`])
//!   - **Hooks** — raw input and terminal command parsing ([`hooks`])
//!   - **Render** — status line and event text for the terminal ([`render`])
//!   - **Audio** — optional death sound, degraded to a log line when
//!     unavailable ([`audio`])

#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod error;
pub mod hooks;
pub mod render;
pub mod session;

pub use audio::{DeathSound, Silence, TerminalBell};
pub use error::{AudioError, SessionError};
pub use hooks::{HostCommand, InputEvent};
pub use session::{Session, SessionEvent, SessionHandle};
