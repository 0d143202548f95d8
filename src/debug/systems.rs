//! Debug domain: hotkeys and overlay refresh.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::UnboxSettings;
use crate::core::{CharacterRevealed, CurrentCharacter, DrawRng, DrawTally, MuteState, Stage};
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, overlay_text, spawn_debug_info_overlay};

/// Toggle the info overlay with F3
pub(crate) fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.overlay_visible = !debug_state.overlay_visible;
    }
}

/// Dump the active settings and draw seed with F5
pub(crate) fn log_settings(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<UnboxSettings>,
    draw_rng: Option<Res<DrawRng>>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }
    info!("Settings: {:?}", *settings);
    if let Some(draw_rng) = draw_rng {
        info!("Draw seed: {}", draw_rng.seed);
    }
}

/// Log each reveal against the session tally
pub(crate) fn log_reveals(mut revealed: MessageReader<CharacterRevealed>, tally: Res<DrawTally>) {
    for message in revealed.read() {
        debug!(
            "Revealed {} ({} of {} draws)",
            message.character_id,
            tally.count(message.character_id),
            tally.total
        );
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    stage: Res<State<Stage>>,
    current: Res<CurrentCharacter>,
    mute: Res<MuteState>,
    tally: Res<DrawTally>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.overlay_visible {
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if overlay_query.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let Ok((_, mut text)) = overlay_query.single_mut() {
        **text = overlay_text(*stage.get(), current.id(), mute.muted, &tally);
    }
}
