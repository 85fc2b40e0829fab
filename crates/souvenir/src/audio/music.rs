//! Kira-backed music playback.
//!
//! Loads the configured track once, loops it, and maps the platform's
//! start failures onto [`PlaybackError`].

use std::fmt;
use std::path::Path;

use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::{AudioManager, AudioManagerSettings, DefaultBackend, Tween};

use super::{Playback, PlaybackError};

/// Kira reports silence at -60 dB; clamp conversions there.
const SILENCE_DB: f32 = -60.0;

/// A looping background track on the default audio device.
pub struct MusicPlayback {
    manager: AudioManager<DefaultBackend>,
    sound: StaticSoundData,
    handle: Option<StaticSoundHandle>,
}

impl MusicPlayback {
    /// Open the default audio device and decode `track`.
    ///
    /// `volume` is linear amplitude in `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Unavailable`] when no device can be opened
    /// or the track cannot be decoded.
    pub fn load(track: &Path, volume: f32) -> Result<Self, PlaybackError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|err| PlaybackError::Unavailable(err.to_string()))?;
        let sound = StaticSoundData::from_file(track)
            .map_err(|err| PlaybackError::Unavailable(err.to_string()))?
            .volume(amplitude_to_db(volume))
            .loop_region(..);
        Ok(Self {
            manager,
            sound,
            handle: None,
        })
    }
}

impl Playback for MusicPlayback {
    fn resume(&mut self) -> Result<(), PlaybackError> {
        if let Some(handle) = &mut self.handle {
            handle.resume(Tween::default());
            return Ok(());
        }
        let handle = self
            .manager
            .play(self.sound.clone())
            .map_err(|err| PlaybackError::Denied(err.to_string()))?;
        self.handle = Some(handle);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(handle) = &mut self.handle {
            handle.pause(Tween::default());
        }
    }
}

impl fmt::Debug for MusicPlayback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MusicPlayback")
            .field("started", &self.handle.is_some())
            .finish_non_exhaustive()
    }
}

/// Linear amplitude to decibels, clamped to kira's silence floor.
fn amplitude_to_db(amplitude: f32) -> f32 {
    if amplitude <= 0.0 {
        return SILENCE_DB;
    }
    (20.0 * amplitude.log10()).max(SILENCE_DB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_conversion() {
        assert!((amplitude_to_db(1.0)).abs() < f32::EPSILON);
        // 30% amplitude is roughly -10.5 dB
        let db = amplitude_to_db(0.3);
        assert!(db < -10.0 && db > -11.0, "got {db}");
    }

    #[test]
    fn test_zero_amplitude_is_silence() {
        assert_eq!(amplitude_to_db(0.0), SILENCE_DB);
        assert_eq!(amplitude_to_db(-1.0), SILENCE_DB);
    }
}
