//! Reveal domain: card UI markers, entrance animation and confetti state.

use bevy::prelude::*;
use std::time::Duration;

/// Marker for the reveal view UI root
#[derive(Component, Debug)]
pub struct RevealCardUI;

/// The "Open Another" button
#[derive(Component, Debug)]
pub struct OpenAnotherButton;

/// Pop-in animation on the card
#[derive(Component, Debug)]
pub struct CardEntrance {
    pub timer: Timer,
}

impl CardEntrance {
    pub const DURATION_SECS: f32 = 0.6;
}

impl Default for CardEntrance {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(Self::DURATION_SECS, TimerMode::Once),
        }
    }
}

/// Emits confetti every frame until its window runs out.
#[derive(Component, Debug)]
pub struct ConfettiEmitter {
    window: Timer,
    pub particles_per_side: u32,
}

impl ConfettiEmitter {
    pub fn new(duration: Duration, particles_per_side: u32) -> Self {
        Self {
            window: Timer::new(duration, TimerMode::Once),
            particles_per_side,
        }
    }

    /// Advance the window. Returns whether to emit this frame: every frame
    /// up to and including the one that crosses the deadline.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.window.is_finished() {
            return false;
        }
        self.window.tick(delta);
        true
    }

    pub fn is_done(&self) -> bool {
        self.window.is_finished()
    }
}

/// A single confetti piece, positioned in screen space (y down).
#[derive(Component, Debug)]
pub struct ConfettiParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation_deg: f32,
    pub spin_deg_per_sec: f32,
    pub color: Color,
    pub lifetime: Timer,
}
