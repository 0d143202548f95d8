//! Core domain: resources owned by the stage controller.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use crate::content::CharacterDef;

/// Resource tracking the character drawn for the current box
#[derive(Resource, Debug, Default)]
pub struct CurrentCharacter {
    pub character: Option<&'static CharacterDef>,
}

impl CurrentCharacter {
    pub fn select(&mut self, character: &'static CharacterDef) {
        self.character = Some(character);
    }

    pub fn clear(&mut self) {
        self.character = None;
    }

    pub fn id(&self) -> Option<&'static str> {
        self.character.map(|character| character.id)
    }
}

/// Random source for character draws.
#[derive(Resource)]
pub struct DrawRng {
    pub seed: u64,
    pub rng: ChaCha8Rng,
}

impl DrawRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

/// Mute flag for the background loop
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MuteState {
    pub muted: bool,
}

impl MuteState {
    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

/// How many times each character has been drawn this session
#[derive(Resource, Debug, Default)]
pub struct DrawTally {
    pub counts: HashMap<&'static str, u32>,
    pub total: u32,
}

impl DrawTally {
    pub fn record(&mut self, character_id: &'static str) {
        *self.counts.entry(character_id).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, character_id: &str) -> u32 {
        self.counts.get(character_id).copied().unwrap_or(0)
    }
}
