//! Content domain: the character roster and settings loaded at startup.

mod data;
mod loader;
mod roster;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{BACKGROUND_IMAGE, BOX_IMAGE, CHARACTERS, CharacterDef, UnboxSettings};
pub use loader::{
    SETTINGS_PATH, SettingsLoadError, load_settings_file, parse_settings, resolve_settings,
};
pub use roster::{character_by_id, draw_character, roster_ids};
pub use validation::{
    MAX_DURATION_SECS, MAX_PARTICLES_PER_SIDE, ValidationIssue, validate_settings,
};

use bevy::prelude::*;

use crate::content::loader::load_settings;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_settings);
    }
}
