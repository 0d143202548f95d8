//! Audio domain: the four sounds of the flow and their handle lifecycle.
//!
//! The stage controller decides what to play by writing `PlaySound` and
//! `ResumeMusic`; this module is the only place that touches audio sinks.

mod assets;
mod error;
mod events;
mod playback;
#[cfg(test)]
mod tests;

pub use assets::{BackgroundMusic, SoundCue, SoundEffect, Soundboard};
pub use error::PlaybackError;
pub use events::{PlaySound, ResumeMusic};
pub use playback::{MusicChannel, apply_mute, check_playable, resume_if_paused};

use bevy::audio::AudioSink;
use bevy::prelude::*;

use crate::audio::playback::{
    play_sounds, release_audio, resume_music, setup_audio, sync_music_mute,
};

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlaySound>()
            .add_message::<ResumeMusic>()
            .add_systems(Startup, setup_audio)
            .add_systems(
                Update,
                (play_sounds, resume_music, sync_music_mute::<AudioSink>),
            )
            .add_systems(Last, release_audio);
    }
}
