//! UI domain: the persistent HUD shown over every stage.

mod mute;

pub use mute::{MuteButton, MuteLabel, mute_label};

use bevy::prelude::*;

use crate::core::StageControllerSet;
use crate::ui::mute::{handle_mute_input, spawn_mute_button, update_mute_label};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_mute_button)
            .add_systems(Update, handle_mute_input.before(StageControllerSet))
            .add_systems(Update, update_mute_label.after(StageControllerSet));
    }
}
