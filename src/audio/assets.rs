//! Audio domain: sound asset paths and loaded handles.

use bevy::prelude::*;

pub const BACKGROUND_MUSIC_PATH: &str = "music/background.ogg";
pub const CLICK_SFX_PATH: &str = "music/button_click.ogg";
pub const SHAKE_SFX_PATH: &str = "music/shaking_box.ogg";
pub const REVEAL_SFX_PATH: &str = "music/character_reveal.ogg";

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Click,
    Shake,
    Reveal,
}

impl SoundCue {
    pub fn path(self) -> &'static str {
        match self {
            SoundCue::Click => CLICK_SFX_PATH,
            SoundCue::Shake => SHAKE_SFX_PATH,
            SoundCue::Reveal => REVEAL_SFX_PATH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Shake => "shake",
            SoundCue::Reveal => "reveal",
        }
    }
}

/// Handles for every sound, loaded once at startup and removed on teardown.
#[derive(Resource, Debug, Clone)]
pub struct Soundboard {
    pub background: Handle<AudioSource>,
    pub click: Handle<AudioSource>,
    pub shake: Handle<AudioSource>,
    pub reveal: Handle<AudioSource>,
    pub effects_volume: f32,
}

impl Soundboard {
    pub fn handle(&self, cue: SoundCue) -> &Handle<AudioSource> {
        match cue {
            SoundCue::Click => &self.click,
            SoundCue::Shake => &self.shake,
            SoundCue::Reveal => &self.reveal,
        }
    }
}

/// Marker for the looping background music entity
#[derive(Component, Debug)]
pub struct BackgroundMusic;

/// Marker for a playing one-shot effect
#[derive(Component, Debug)]
pub struct SoundEffect {
    pub cue: SoundCue,
}
