//! Lookup and random selection over the fixed character roster.

use rand::Rng;

use super::data::{CHARACTERS, CharacterDef};

/// Find a character by id.
pub fn character_by_id(id: &str) -> Option<&'static CharacterDef> {
    CHARACTERS.iter().find(|character| character.id == id)
}

/// Draw one character with uniform probability.
pub fn draw_character<R: Rng + ?Sized>(rng: &mut R) -> &'static CharacterDef {
    let index = rng.random_range(0..CHARACTERS.len());
    &CHARACTERS[index]
}

/// Ids of every character, in roster order.
pub fn roster_ids() -> impl Iterator<Item = &'static str> {
    CHARACTERS.iter().map(|character| character.id)
}
