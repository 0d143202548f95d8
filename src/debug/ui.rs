//! Debug domain: info overlay layout and text.

use bevy::prelude::*;

use crate::content::{character_by_id, roster_ids};
use crate::core::{DrawTally, Stage};

/// Marker for the debug info overlay
#[derive(Component)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        GlobalZIndex(500),
    ));
}

pub fn overlay_text(
    stage: Stage,
    character_id: Option<&str>,
    muted: bool,
    tally: &DrawTally,
) -> String {
    let character = match character_id.and_then(character_by_id) {
        Some(character) => format!("{} ({})", character.name, character.id),
        None if stage.requires_character() => "- (missing)".to_string(),
        None => "-".to_string(),
    };
    let mut text = format!(
        "Stage: {:?}\nCharacter: {}\nMuted: {}\nDraws: {}",
        stage, character, muted, tally.total
    );
    for id in roster_ids() {
        text.push_str(&format!("\n  {}: {}", id, tally.count(id)));
    }
    text
}
