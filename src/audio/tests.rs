//! Audio domain: tests for mute and resume logic against a fake channel.

use bevy::asset::LoadState;
use bevy::prelude::*;

use super::playback::sync_music_mute;
use super::{
    BackgroundMusic, MusicChannel, PlaybackError, SoundCue, apply_mute, check_playable,
    resume_if_paused,
};
use crate::core::MuteState;

/// Looping channel that tracks position while playing.
#[derive(Component, Debug, Default)]
struct FakeChannel {
    paused: bool,
    muted: bool,
    position_ms: u64,
    resume_calls: u32,
}

impl FakeChannel {
    fn stopped() -> Self {
        Self {
            paused: true,
            ..Default::default()
        }
    }

    fn advance(&mut self, ms: u64) {
        if !self.paused {
            self.position_ms += ms;
        }
    }
}

impl MusicChannel for FakeChannel {
    fn paused(&self) -> bool {
        self.paused
    }

    fn resume(&mut self) {
        self.paused = false;
        self.resume_calls += 1;
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

// -----------------------------------------------------------------------------
// Resume tests
// -----------------------------------------------------------------------------

#[test]
fn test_resume_starts_paused_channel() {
    let mut channel = FakeChannel::stopped();
    let started = resume_if_paused(Some(&mut channel)).expect("channel exists");
    assert!(started);
    assert!(!channel.paused);
}

#[test]
fn test_resume_leaves_playing_channel_alone() {
    let mut channel = FakeChannel::stopped();
    resume_if_paused(Some(&mut channel)).expect("channel exists");
    let started = resume_if_paused(Some(&mut channel)).expect("channel exists");
    assert!(!started);
    assert_eq!(channel.resume_calls, 1);
}

#[test]
fn test_resume_without_channel_is_blocked() {
    let result = resume_if_paused::<FakeChannel>(None);
    assert!(matches!(result, Err(PlaybackError::Blocked { .. })));
}

// -----------------------------------------------------------------------------
// Mute tests
// -----------------------------------------------------------------------------

#[test]
fn test_apply_mute_changes_only_when_needed() {
    let mut channel = FakeChannel::default();
    assert!(!apply_mute(&mut channel, false));
    assert!(apply_mute(&mut channel, true));
    assert!(channel.muted);
    assert!(!apply_mute(&mut channel, true));
}

#[test]
fn test_mute_keeps_position_advancing() {
    let mut channel = FakeChannel::stopped();
    resume_if_paused(Some(&mut channel)).expect("channel exists");
    channel.advance(500);

    apply_mute(&mut channel, true);
    channel.advance(500);

    assert!(channel.muted);
    assert!(!channel.paused);
    assert_eq!(channel.position_ms, 1000);
}

#[test]
fn test_mute_twice_restores_channel() {
    let mut channel = FakeChannel::default();
    apply_mute(&mut channel, true);
    apply_mute(&mut channel, false);
    assert!(!channel.muted);
}

fn mute_sync_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<MuteState>()
        .add_systems(Update, sync_music_mute::<FakeChannel>);
    app
}

fn background_muted(app: &mut App) -> bool {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&FakeChannel, With<BackgroundMusic>>();
    query.single(world).expect("one background channel").muted
}

#[test]
fn test_background_channel_follows_mute_state() {
    let mut app = mute_sync_app();
    app.world_mut()
        .spawn((BackgroundMusic, FakeChannel::stopped()));
    app.update();
    assert!(!background_muted(&mut app));

    app.world_mut().resource_mut::<MuteState>().muted = true;
    app.update();
    assert!(background_muted(&mut app));

    app.world_mut().resource_mut::<MuteState>().muted = false;
    app.update();
    assert!(!background_muted(&mut app));
}

#[test]
fn test_channel_created_after_mute_is_muted() {
    let mut app = mute_sync_app();
    app.world_mut().resource_mut::<MuteState>().muted = true;
    app.update();

    app.world_mut()
        .spawn((BackgroundMusic, FakeChannel::stopped()));
    app.update();
    assert!(background_muted(&mut app));
}

#[test]
fn test_effect_channels_are_not_muted() {
    let mut app = mute_sync_app();
    let effect = app.world_mut().spawn(FakeChannel::stopped()).id();
    app.world_mut().resource_mut::<MuteState>().muted = true;
    app.update();

    let channel = app.world().get::<FakeChannel>(effect).expect("effect exists");
    assert!(!channel.muted);
}

// -----------------------------------------------------------------------------
// Load state tests
// -----------------------------------------------------------------------------

#[test]
fn test_check_playable_accepts_loading_assets() {
    assert!(check_playable(&LoadState::Loading, SoundCue::Click).is_ok());
    assert!(check_playable(&LoadState::Loaded, SoundCue::Reveal).is_ok());
    assert!(check_playable(&LoadState::NotLoaded, SoundCue::Shake).is_ok());
}

#[test]
fn test_playback_error_messages() {
    let blocked = PlaybackError::Blocked { sound: "click" };
    assert_eq!(blocked.to_string(), "Playback of click is blocked");
    assert!(PlaybackError::Released.to_string().contains("released"));
}

#[test]
fn test_sound_cue_paths() {
    assert_eq!(SoundCue::Click.path(), "music/button_click.ogg");
    assert_eq!(SoundCue::Shake.path(), "music/shaking_box.ogg");
    assert_eq!(SoundCue::Reveal.path(), "music/character_reveal.ogg");
}
