//! Reveal domain: the character card, its entrance and the confetti.

mod components;
pub(crate) mod confetti;
mod ui;

pub use components::{
    CardEntrance, ConfettiEmitter, ConfettiParticle, OpenAnotherButton, RevealCardUI,
};
pub use confetti::{
    CONFETTI_COLORS, EdgeBurst, LEFT_BURST, ParticleSeed, RIGHT_BURST, SPREAD_DEG, burst_origin,
    burst_seeds, launch_velocity, particle_alpha, step_particle,
};
pub use ui::card_entrance_pose;

use bevy::prelude::*;

use crate::core::{Stage, StageControllerSet};
use crate::reveal::confetti::{cancel_confetti, emit_confetti, start_confetti, update_confetti};
use crate::reveal::ui::{
    animate_card_entrance, cleanup_reveal_card, handle_reveal_input, spawn_reveal_card,
};

pub struct RevealPlugin;

impl Plugin for RevealPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(Stage::Revealed),
            (spawn_reveal_card, start_confetti),
        )
        .add_systems(
            OnExit(Stage::Revealed),
            (cleanup_reveal_card, cancel_confetti),
        )
        .add_systems(
            Update,
            handle_reveal_input
                .before(StageControllerSet)
                .run_if(in_state(Stage::Revealed)),
        )
        .add_systems(
            Update,
            (animate_card_entrance, emit_confetti, update_confetti)
                .run_if(in_state(Stage::Revealed)),
        );
    }
}
