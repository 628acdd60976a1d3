//! Death sound playback.
//!
//! The sound is decoration. Every implementation may fail, and the session
//! driver only logs the failure.

use std::io::{IsTerminal, Write};

use neglect_core::PlantName;

use crate::error::AudioError;

/// Something that can announce a death audibly.
pub trait DeathSound: Send + Sync {
    /// Play the death sound for `name`.
    ///
    /// # Errors
    /// Returns [`AudioError`] when no sound could be produced.
    fn play(&self, name: &PlantName) -> Result<(), AudioError>;
}

/// Rings the terminal bell on stderr, if stderr is a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl DeathSound for TerminalBell {
    fn play(&self, _name: &PlantName) -> Result<(), AudioError> {
        let mut stderr = std::io::stderr();
        if !stderr.is_terminal() {
            return Err(AudioError::Unsupported("stderr is not a terminal".into()));
        }
        stderr.write_all(b"\x07")?;
        stderr.flush()?;
        Ok(())
    }
}

/// Always fails with [`AudioError::Unsupported`]. Used when audio is
/// disabled and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silence;

impl DeathSound for Silence {
    fn play(&self, _name: &PlantName) -> Result<(), AudioError> {
        Err(AudioError::Unsupported("audio disabled".into()))
    }
}
