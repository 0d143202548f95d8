//! Audio domain: playback requests issued by the stage controller.

use bevy::ecs::message::Message;

use crate::audio::assets::SoundCue;

/// Play a one-shot effect from the start
#[derive(Debug, Clone, Copy)]
pub struct PlaySound(pub SoundCue);

impl Message for PlaySound {}

/// Start the background loop if it is paused
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeMusic;

impl Message for ResumeMusic {}
