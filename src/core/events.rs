//! Core domain: messages that drive the stage flow.

use bevy::ecs::message::Message;

/// The user asked to open a new box (intro "Open Box")
#[derive(Debug, Clone, Copy, Default)]
pub struct UnboxRequested;

impl Message for UnboxRequested {}

/// The box finished shaking and is open
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxOpened;

impl Message for BoxOpened {}

/// The user asked to go back to the intro ("Open Another")
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetRequested;

impl Message for ResetRequested {}

/// The user pressed the mute button
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleMuteRequested;

impl Message for ToggleMuteRequested {}

/// Fired when the reveal stage is entered with a character
#[derive(Debug, Clone)]
pub struct CharacterRevealed {
    pub character_id: &'static str,
}

impl Message for CharacterRevealed {}
