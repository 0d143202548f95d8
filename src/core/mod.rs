//! Core domain: the stage controller.
//!
//! Owns the current stage and the drawn character, and turns view requests
//! into stage transitions and sound cues.

mod events;
mod resources;
mod state;
mod systems;
mod ui;

pub use events::{
    BoxOpened, CharacterRevealed, ResetRequested, ToggleMuteRequested, UnboxRequested,
};
pub use resources::{CurrentCharacter, DrawRng, DrawTally, MuteState};
pub use state::{Stage, StageAction};

use bevy::prelude::*;

use crate::core::systems::{
    on_box_opened, reset_to_intro, seed_draw_rng, setup_camera, spawn_backdrop, start_unboxing,
    toggle_mute,
};
use crate::core::ui::intro::{cleanup_intro_ui, handle_intro_input, spawn_intro_ui};

/// Ordering for the controller's request handlers.
/// Views write requests before this set, effects react after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StageControllerSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Stage>()
            .init_resource::<CurrentCharacter>()
            .init_resource::<DrawTally>()
            .init_resource::<MuteState>()
            .add_message::<UnboxRequested>()
            .add_message::<BoxOpened>()
            .add_message::<ResetRequested>()
            .add_message::<ToggleMuteRequested>()
            .add_message::<CharacterRevealed>()
            .add_systems(Startup, (setup_camera, spawn_backdrop, seed_draw_rng))
            .add_systems(OnEnter(Stage::Intro), spawn_intro_ui)
            .add_systems(OnExit(Stage::Intro), cleanup_intro_ui)
            .add_systems(
                Update,
                handle_intro_input
                    .before(StageControllerSet)
                    .run_if(in_state(Stage::Intro)),
            )
            .add_systems(
                Update,
                (start_unboxing, on_box_opened, reset_to_intro, toggle_mute)
                    .chain()
                    .in_set(StageControllerSet),
            );
    }
}
