//! Audio domain: audio handle lifecycle and playback systems.

use bevy::asset::LoadState;
use bevy::audio::{AudioSink, AudioSinkPlayback, PlaybackMode, Volume};
use bevy::ecs::component::Mutable;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::audio::assets::{
    BACKGROUND_MUSIC_PATH, BackgroundMusic, CLICK_SFX_PATH, REVEAL_SFX_PATH, SHAKE_SFX_PATH,
    SoundCue, SoundEffect, Soundboard,
};
use crate::audio::error::PlaybackError;
use crate::audio::events::{PlaySound, ResumeMusic};
use crate::content::UnboxSettings;
use crate::core::MuteState;

/// The controls the flow needs from a looping music channel.
pub trait MusicChannel {
    fn paused(&self) -> bool;
    fn resume(&mut self);
    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
}

impl MusicChannel for AudioSink {
    fn paused(&self) -> bool {
        AudioSinkPlayback::is_paused(self)
    }

    fn resume(&mut self) {
        AudioSinkPlayback::play(self);
    }

    fn muted(&self) -> bool {
        AudioSinkPlayback::is_muted(self)
    }

    fn set_muted(&mut self, muted: bool) {
        if muted {
            AudioSinkPlayback::mute(self);
        } else {
            AudioSinkPlayback::unmute(self);
        }
    }
}

/// Resume the channel if it is paused.
/// Returns whether playback was started by this call.
pub fn resume_if_paused<C: MusicChannel + ?Sized>(
    channel: Option<&mut C>,
) -> Result<bool, PlaybackError> {
    let Some(channel) = channel else {
        return Err(PlaybackError::Blocked {
            sound: "background music",
        });
    };

    if channel.paused() {
        channel.resume();
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Bring the channel's mute flag in line with `muted`.
/// Muting never pauses, so the playback position keeps advancing.
/// Returns whether the channel changed.
pub fn apply_mute<C: MusicChannel + ?Sized>(channel: &mut C, muted: bool) -> bool {
    if channel.muted() == muted {
        return false;
    }
    channel.set_muted(muted);
    true
}

/// Refuse to play a sound whose asset failed to load.
pub fn check_playable(load_state: &LoadState, cue: SoundCue) -> Result<(), PlaybackError> {
    match load_state {
        LoadState::Failed(_) => Err(PlaybackError::AssetFailed { path: cue.path() }),
        _ => Ok(()),
    }
}

fn log_playback_error(error: &PlaybackError) {
    match error {
        PlaybackError::AssetFailed { .. } => warn!("{}", error),
        _ => info!("{}", error),
    }
}

/// Load every sound and spawn the background loop, paused until the
/// first unbox.
pub(crate) fn setup_audio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<UnboxSettings>,
) {
    let soundboard = Soundboard {
        background: asset_server.load(BACKGROUND_MUSIC_PATH),
        click: asset_server.load(CLICK_SFX_PATH),
        shake: asset_server.load(SHAKE_SFX_PATH),
        reveal: asset_server.load(REVEAL_SFX_PATH),
        effects_volume: settings.effects_volume,
    };

    commands.spawn((
        BackgroundMusic,
        AudioPlayer::new(soundboard.background.clone()),
        PlaybackSettings {
            mode: PlaybackMode::Loop,
            volume: Volume::Linear(settings.background_volume),
            paused: true,
            ..default()
        },
    ));
    commands.insert_resource(soundboard);
    info!("Audio handles created");
}

pub(crate) fn play_sounds(
    mut commands: Commands,
    mut requests: MessageReader<PlaySound>,
    soundboard: Option<Res<Soundboard>>,
    asset_server: Res<AssetServer>,
    playing: Query<(Entity, &SoundEffect)>,
) {
    for &PlaySound(cue) in requests.read() {
        let Some(soundboard) = soundboard.as_deref() else {
            log_playback_error(&PlaybackError::Released);
            continue;
        };

        let handle = soundboard.handle(cue);
        if let Err(e) = check_playable(&asset_server.load_state(handle.id()), cue) {
            log_playback_error(&e);
            continue;
        }

        // Restart from the beginning rather than layering a second copy
        for (entity, effect) in &playing {
            if effect.cue == cue {
                commands.entity(entity).try_despawn();
            }
        }

        commands.spawn((
            SoundEffect { cue },
            AudioPlayer::new(handle.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(soundboard.effects_volume)),
        ));
        debug!("Playing {} sound", cue.name());
    }
}

pub(crate) fn resume_music(
    mut requests: MessageReader<ResumeMusic>,
    mut sinks: Query<&mut AudioSink, With<BackgroundMusic>>,
) {
    if requests.read().count() == 0 {
        return;
    }

    let result = match sinks.single_mut() {
        Ok(mut sink) => resume_if_paused(Some(&mut *sink)),
        Err(_) => resume_if_paused::<AudioSink>(None),
    };

    match result {
        Ok(true) => info!("Background music started"),
        Ok(false) => {}
        Err(e) => log_playback_error(&e),
    }
}

/// Keep the background sink's mute flag in line with `MuteState`,
/// including sinks created after the flag was flipped.
pub(crate) fn sync_music_mute<C>(
    mute: Res<MuteState>,
    mut sinks: Query<&mut C, With<BackgroundMusic>>,
) where
    C: MusicChannel + Component<Mutability = Mutable>,
{
    for mut sink in &mut sinks {
        if apply_mute(&mut *sink, mute.muted) {
            debug!("Background music muted: {}", mute.muted);
        }
    }
}

/// Pause and drop the background loop and the sound handles on exit.
pub(crate) fn release_audio(
    mut commands: Commands,
    mut exits: MessageReader<AppExit>,
    music: Query<(Entity, Option<&AudioSink>), With<BackgroundMusic>>,
) {
    if exits.read().count() == 0 {
        return;
    }

    for (entity, sink) in &music {
        if let Some(sink) = sink {
            sink.pause();
        }
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<Soundboard>();
    info!("Audio handles released");
}
