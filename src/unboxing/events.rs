//! Unboxing domain: input messages.

use bevy::ecs::message::Message;

/// The box was tapped or the open key pressed
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxTapped;

impl Message for BoxTapped {}
