//! Unboxing domain: box UI markers and the shake timer.

use bevy::prelude::*;
use std::time::Duration;

/// Marker for the box view UI root
#[derive(Component, Debug)]
pub struct BlindBoxUI;

/// The tappable box
#[derive(Component, Debug)]
pub struct BlindBoxButton;

/// Shake-then-open timer for the box on screen.
///
/// Only one shake can ever be started per visit to the box view; the timer
/// stays in place after it fires until `reset` is called on the next visit.
#[derive(Resource, Debug, Default)]
pub struct BoxShake {
    timer: Option<Timer>,
}

impl BoxShake {
    pub fn reset(&mut self) {
        self.timer = None;
    }

    /// Start shaking. Returns false if a shake was already started.
    pub fn begin(&mut self, duration: Duration) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.timer = Some(Timer::new(duration, TimerMode::Once));
        true
    }

    pub fn is_started(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_shaking(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.timer.as_ref().map_or(0.0, Timer::elapsed_secs)
    }

    /// Advance the shake. Returns true exactly once, on the tick where
    /// the delay runs out.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if timer.is_finished() {
            return false;
        }
        timer.tick(delta);
        timer.just_finished()
    }
}
