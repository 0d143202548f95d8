//! Audio domain: playback failures.
//!
//! None of these are fatal. Callers log them and carry on; the next user
//! gesture retries naturally.

/// Why a sound could not be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The output has not accepted the stream yet (no device, or the
    /// platform blocks audio until the user interacts)
    Blocked { sound: &'static str },
    /// The sound asset failed to load
    AssetFailed { path: &'static str },
    /// Audio handles were already released
    Released,
}

impl std::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackError::Blocked { sound } => write!(f, "Playback of {} is blocked", sound),
            PlaybackError::AssetFailed { path } => write!(f, "Sound asset {} failed to load", path),
            PlaybackError::Released => write!(f, "Audio handles were released"),
        }
    }
}

impl std::error::Error for PlaybackError {}
