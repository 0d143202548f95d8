//! Debug tooling for fast iteration, compiled with the `dev-tools` feature.
//!
//! Hotkeys:
//! - F3 toggles the info overlay (stage, drawn character, mute, draw tally)
//! - F5 logs the active settings and draw seed
//!
//! Every reveal is also logged with its share of the session tally.

mod state;
mod systems;
mod ui;

pub use state::DebugState;
pub use ui::{DebugInfoOverlay, overlay_text};

use bevy::prelude::*;

use crate::core::StageControllerSet;
use crate::debug::systems::{
    log_reveals, log_settings, toggle_debug_overlay, update_debug_info_overlay,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                (toggle_debug_overlay, update_debug_info_overlay).chain(),
                log_settings,
                log_reveals.after(StageControllerSet),
            ),
        );
    }
}
