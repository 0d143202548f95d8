//! Unboxing domain: the closed box, its shake, and the open signal.

mod animation;
mod components;
mod events;
pub(crate) mod systems;
#[cfg(test)]
mod tests;

pub use animation::{BoxPose, SHAKE_CYCLE_SECS, shake_pose};
pub use components::{BlindBoxButton, BlindBoxUI, BoxShake};
pub use events::BoxTapped;

use bevy::prelude::*;

use crate::core::{Stage, StageControllerSet};
use crate::unboxing::systems::{
    animate_box, begin_shake, cleanup_blind_box_ui, handle_box_input, reset_box_shake,
    spawn_blind_box_ui, tick_box_shake,
};

pub struct UnboxingPlugin;

impl Plugin for UnboxingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoxShake>()
            .add_message::<BoxTapped>()
            .add_systems(
                OnEnter(Stage::Unboxing),
                (reset_box_shake, spawn_blind_box_ui),
            )
            .add_systems(OnExit(Stage::Unboxing), cleanup_blind_box_ui)
            .add_systems(
                Update,
                // The tap frame itself does not count toward the delay
                (handle_box_input, tick_box_shake, begin_shake, animate_box)
                    .chain()
                    .before(StageControllerSet)
                    .run_if(in_state(Stage::Unboxing)),
            );
    }
}
