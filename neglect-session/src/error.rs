//! Session error types.

use neglect_core::PlantError;
use thiserror::Error;

/// Errors returned through a [`crate::SessionHandle`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// The plant rejected the request (e.g. an invalid name).
    #[error(transparent)]
    Plant(#[from] PlantError),

    /// The session task has stopped; no further commands are accepted.
    #[error("plant session is closed")]
    Closed,
}

/// Failure to play the optional death sound.
///
/// Never propagated past the session driver: a silent death is still a death.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No audio output is available in this environment.
    #[error("audio unavailable: {0}")]
    Unsupported(String),

    /// The output device accepted the sound and then failed.
    #[error("audio output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for session results.
pub type Result<T> = std::result::Result<T, SessionError>;
