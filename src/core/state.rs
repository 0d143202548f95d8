//! Core domain: stage definitions for the unboxing flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum Stage {
    #[default]
    Intro,
    Unboxing,
    Revealed,
}

/// User-triggered actions that move the flow forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAction {
    StartUnboxing,
    BoxOpened,
    Reset,
}

impl Stage {
    /// Stage reached by applying `action` in this stage.
    /// Returns `None` when the action is not valid here.
    pub fn after(self, action: StageAction) -> Option<Stage> {
        match (self, action) {
            (Stage::Intro, StageAction::StartUnboxing) => Some(Stage::Unboxing),
            (Stage::Unboxing, StageAction::BoxOpened) => Some(Stage::Revealed),
            (Stage::Revealed, StageAction::Reset) => Some(Stage::Intro),
            _ => None,
        }
    }

    /// Whether a character must be selected while in this stage
    pub fn requires_character(self) -> bool {
        matches!(self, Stage::Unboxing | Stage::Revealed)
    }
}
