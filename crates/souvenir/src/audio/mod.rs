//! Background-music control.
//!
//! One looping track, played through a [`Playback`] backend. The controller
//! attempts autoplay once at startup; a platform denial is absorbed into a
//! paused state and surfaces only through the play/pause indicator. The
//! user's explicit toggle retries playback under a gesture context.

#[cfg(feature = "music")]
pub mod music;

use thiserror::Error;

/// Errors reported by a playback backend.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The platform refused to start playback (policy, not a defect).
    #[error("playback denied: {0}")]
    Denied(String),

    /// No usable audio device or track.
    #[error("audio unavailable: {0}")]
    Unavailable(String),
}

/// A handle on one looping background track.
///
/// Starting playback is fallible by design: autoplay policies and missing
/// devices are reported as values, not exceptions.
pub trait Playback: std::fmt::Debug {
    /// Start or resume playback.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Denied`] when the platform refuses to play,
    /// or [`PlaybackError::Unavailable`] when no device or track exists.
    fn resume(&mut self) -> Result<(), PlaybackError>;

    /// Pause playback. Pausing an already-paused backend is a no-op.
    fn pause(&mut self);
}

impl<P: Playback + ?Sized> Playback for Box<P> {
    fn resume(&mut self) -> Result<(), PlaybackError> {
        (**self).resume()
    }

    fn pause(&mut self) {
        (**self).pause();
    }
}

/// A backend for builds or hosts without audio; every start is denied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPlayback;

impl Playback for NullPlayback {
    fn resume(&mut self) -> Result<(), PlaybackError> {
        Err(PlaybackError::Unavailable(
            "no playback backend configured".to_string(),
        ))
    }

    fn pause(&mut self) {}
}

/// Owns the playback backend and mirrors the playback intent.
#[derive(Debug)]
pub struct AudioController<P: Playback> {
    playback: P,
    playing: bool,
}

impl<P: Playback> AudioController<P> {
    /// Wrap a backend and, when `autoplay` holds, attempt to start it once.
    ///
    /// A denied or unavailable start leaves the controller paused; the
    /// next explicit [`toggle`](Self::toggle) retries.
    pub fn start(playback: P, autoplay: bool) -> Self {
        let mut controller = Self {
            playback,
            playing: false,
        };
        if autoplay {
            match controller.playback.resume() {
                Ok(()) => controller.playing = true,
                Err(err) => {
                    tracing::debug!(%err, "autoplay denied, starting paused");
                }
            }
        }
        controller
    }

    /// Whether playback is currently intended to be running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip between playing and paused.
    ///
    /// Resuming can be denied again; the controller then stays paused.
    pub fn toggle(&mut self) {
        if self.playing {
            self.playback.pause();
            self.playing = false;
        } else {
            match self.playback.resume() {
                Ok(()) => self.playing = true,
                Err(err) => {
                    tracing::warn!(%err, "could not start playback");
                    self.playing = false;
                }
            }
        }
    }

    /// Pause playback and release the intent; called at teardown.
    pub fn shutdown(&mut self) {
        self.playback.pause();
        self.playing = false;
    }
}
