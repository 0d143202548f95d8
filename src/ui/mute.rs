//! UI domain: background music mute toggle.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{MuteState, ToggleMuteRequested};

const HUD_PADDING: f32 = 16.0;
const BUTTON_COLOR: Color = Color::srgba(0.1, 0.1, 0.12, 0.75);
const BUTTON_HOVER_COLOR: Color = Color::srgba(0.2, 0.2, 0.24, 0.85);

/// Marker for the mute toggle button
#[derive(Component)]
pub struct MuteButton;

/// Marker for the mute button label
#[derive(Component)]
pub struct MuteLabel;

pub fn mute_label(muted: bool) -> &'static str {
    if muted { "Muted" } else { "Sound On" }
}

pub(crate) fn spawn_mute_button(mut commands: Commands, mute: Res<MuteState>) {
    commands
        .spawn((
            MuteButton,
            Button,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
            BorderColor::all(Color::srgb(1.0, 0.84, 0.0)),
            ZIndex(100),
        ))
        .with_child((
            MuteLabel,
            Text::new(mute_label(mute.muted)),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(Color::srgb(0.98, 0.98, 0.95)),
        ));
}

/// Mute toggle from the HUD button or the M key
pub(crate) fn handle_mute_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut button_query: Query<
        (&Interaction, &mut BackgroundColor),
        (With<MuteButton>, Changed<Interaction>),
    >,
    mut requests: MessageWriter<ToggleMuteRequested>,
) {
    let mut pressed = keyboard.just_pressed(KeyCode::KeyM);

    for (interaction, mut bg_color) in &mut button_query {
        match interaction {
            Interaction::Pressed => pressed = true,
            Interaction::Hovered => *bg_color = BackgroundColor(BUTTON_HOVER_COLOR),
            Interaction::None => *bg_color = BackgroundColor(BUTTON_COLOR),
        }
    }

    if pressed {
        requests.write(ToggleMuteRequested);
    }
}

pub(crate) fn update_mute_label(
    mute: Res<MuteState>,
    mut query: Query<&mut Text, With<MuteLabel>>,
) {
    if mute.is_changed() {
        for mut text in &mut query {
            **text = mute_label(mute.muted).to_string();
        }
    }
}
