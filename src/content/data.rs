//! Data definitions for the character roster and the settings file.
//!
//! The roster is fixed at compile time. Settings mirror the structure of
//! assets/data/settings.ron and are used for deserialization.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Characters
// ============================================================================

/// A collectible that can come out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Image path relative to the assets directory
    pub image: &'static str,
    pub description: &'static str,
}

pub static CHARACTERS: [CharacterDef; 4] = [
    CharacterDef {
        id: "molly",
        name: "Molly",
        image: "images/char_molly.png",
        description: "The pouting painter!",
    },
    CharacterDef {
        id: "dimoo",
        name: "Dimoo",
        image: "images/char_dimoo.png",
        description: "Dreaming in the clouds.",
    },
    CharacterDef {
        id: "labubu",
        name: "Labubu",
        image: "images/char_labubu.png",
        description: "Mischievous but cute!",
    },
    CharacterDef {
        id: "skullpanda",
        name: "Skullpanda",
        image: "images/char_skullpanda.png",
        description: "Cool and futuristic style.",
    },
];

// ============================================================================
// Static images
// ============================================================================

pub const BACKGROUND_IMAGE: &str = "images/bg_christmas.png";
pub const BOX_IMAGE: &str = "images/box_closed.png";

// ============================================================================
// Settings (settings.ron)
// ============================================================================

/// Tunable constants for the unboxing flow.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UnboxSettings {
    /// Linear volume of the background loop
    pub background_volume: f32,
    /// Linear volume of click, shake and reveal sounds
    pub effects_volume: f32,
    /// How long the box shakes before it opens
    pub shake_duration_secs: f32,
    /// How long confetti keeps emitting after the reveal
    pub confetti_duration_secs: f32,
    /// Particles emitted from each screen edge per frame
    pub confetti_particles_per_side: u32,
    /// Fixed seed for character draws. Random when absent.
    pub seed: Option<u64>,
}

const DEFAULT_SHAKE_DURATION_SECS: f32 = 1.0;
const DEFAULT_CONFETTI_DURATION_SECS: f32 = 3.0;

impl Default for UnboxSettings {
    fn default() -> Self {
        Self {
            background_volume: 0.3,
            effects_volume: 1.0,
            shake_duration_secs: DEFAULT_SHAKE_DURATION_SECS,
            confetti_duration_secs: DEFAULT_CONFETTI_DURATION_SECS,
            confetti_particles_per_side: 2,
            seed: None,
        }
    }
}

impl UnboxSettings {
    /// Shake delay. Values `Duration` cannot hold fall back to the default.
    pub fn shake_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.shake_duration_secs)
            .unwrap_or(Duration::from_secs_f32(DEFAULT_SHAKE_DURATION_SECS))
    }

    pub fn confetti_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.confetti_duration_secs)
            .unwrap_or(Duration::from_secs_f32(DEFAULT_CONFETTI_DURATION_SECS))
    }
}
