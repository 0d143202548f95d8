//! Core domain: stage controller systems and setup.
//!
//! Each operation of the flow consumes one request message. Requests that are
//! not valid in the current stage are dropped, so the flow can only move
//! along Intro -> Unboxing -> Revealed -> Intro.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;

use crate::audio::{PlaySound, ResumeMusic, SoundCue};
use crate::content::{BACKGROUND_IMAGE, UnboxSettings, draw_character};
use crate::core::events::{
    BoxOpened, CharacterRevealed, ResetRequested, ToggleMuteRequested, UnboxRequested,
};
use crate::core::resources::{CurrentCharacter, DrawRng, DrawTally, MuteState};
use crate::core::state::{Stage, StageAction};

/// Marker for the full-screen background image
#[derive(Component, Debug)]
pub struct Backdrop;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn spawn_backdrop(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        Backdrop,
        ImageNode::new(asset_server.load(BACKGROUND_IMAGE)),
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::srgb(0.55, 0.08, 0.1)),
        ZIndex(-10),
    ));
}

/// Seed the draw RNG from settings, or randomly when no seed is configured
pub(crate) fn seed_draw_rng(mut commands: Commands, settings: Option<Res<UnboxSettings>>) {
    let seed = settings
        .and_then(|settings| settings.seed)
        .unwrap_or_else(|| rand::rng().random());

    info!("Character draws seeded with {}", seed);
    commands.insert_resource(DrawRng::from_seed(seed));
}

/// Intro -> Unboxing: click sound, wake the music, draw a character
pub(crate) fn start_unboxing(
    mut requests: MessageReader<UnboxRequested>,
    stage: Res<State<Stage>>,
    mut next_stage: ResMut<NextState<Stage>>,
    mut draw_rng: ResMut<DrawRng>,
    mut current: ResMut<CurrentCharacter>,
    mut tally: ResMut<DrawTally>,
    mut sounds: MessageWriter<PlaySound>,
    mut music: MessageWriter<ResumeMusic>,
) {
    // Repeated requests within a frame count once
    if requests.read().count() == 0 {
        return;
    }

    let Some(next) = stage.get().after(StageAction::StartUnboxing) else {
        debug!("Ignoring unbox request in {:?}", stage.get());
        return;
    };

    sounds.write(PlaySound(SoundCue::Click));
    music.write(ResumeMusic);

    let character = draw_character(&mut draw_rng.rng);
    current.select(character);
    tally.record(character.id);
    info!("Unboxing... drew {}", character.name);

    next_stage.set(next);
}

/// Unboxing -> Revealed
pub(crate) fn on_box_opened(
    mut opened: MessageReader<BoxOpened>,
    stage: Res<State<Stage>>,
    mut next_stage: ResMut<NextState<Stage>>,
    current: Res<CurrentCharacter>,
    mut sounds: MessageWriter<PlaySound>,
    mut revealed: MessageWriter<CharacterRevealed>,
) {
    if opened.read().count() == 0 {
        return;
    }

    let Some(next) = stage.get().after(StageAction::BoxOpened) else {
        debug!("Ignoring box open in {:?}", stage.get());
        return;
    };

    let Some(character_id) = current.id() else {
        warn!("Box opened without a drawn character");
        return;
    };

    sounds.write(PlaySound(SoundCue::Reveal));
    revealed.write(CharacterRevealed { character_id });
    info!("Revealed {}", character_id);

    next_stage.set(next);
}

/// Revealed -> Intro
pub(crate) fn reset_to_intro(
    mut requests: MessageReader<ResetRequested>,
    stage: Res<State<Stage>>,
    mut next_stage: ResMut<NextState<Stage>>,
    mut current: ResMut<CurrentCharacter>,
    mut sounds: MessageWriter<PlaySound>,
) {
    if requests.read().count() == 0 {
        return;
    }

    let Some(next) = stage.get().after(StageAction::Reset) else {
        debug!("Ignoring reset in {:?}", stage.get());
        return;
    };

    sounds.write(PlaySound(SoundCue::Click));
    current.clear();
    next_stage.set(next);
}

/// Flip the mute flag once per request. Valid in every stage.
pub(crate) fn toggle_mute(
    mut requests: MessageReader<ToggleMuteRequested>,
    mut mute: ResMut<MuteState>,
) {
    for _ in requests.read() {
        let muted = mute.toggle();
        info!("Background music {}", if muted { "muted" } else { "unmuted" });
    }
}
