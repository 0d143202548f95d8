//! Core domain: intro screen UI and input handling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::UnboxRequested;

/// Marker for the intro screen UI root
#[derive(Component, Debug)]
pub struct IntroUI;

/// The "Open Box" button
#[derive(Component, Debug)]
pub struct OpenBoxButton;

const BUTTON_COLOR: Color = Color::srgb(0.83, 0.14, 0.15);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.93, 0.25, 0.22);

pub(crate) fn spawn_intro_ui(mut commands: Commands) {
    let title_color = Color::srgb(1.0, 0.84, 0.0);
    let text_color = Color::srgb(0.98, 0.98, 0.95);
    let hint_color = Color::srgba(1.0, 1.0, 1.0, 0.7);

    commands
        .spawn((
            IntroUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            ZIndex(10),
        ))
        .with_children(|parent| {
            // Title
            parent.spawn((
                Text::new("Pop Mart\nChristmas"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                TextLayout::new_with_justify(Justify::Center),
                Node {
                    margin: UiRect::bottom(Val::Px(48.0)),
                    ..default()
                },
            ));

            // Open Box button
            parent
                .spawn((
                    OpenBoxButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(48.0), Val::Px(18.0)),
                        border: UiRect::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(BUTTON_COLOR),
                    BorderColor::all(title_color),
                ))
                .with_child((
                    Text::new("Open Box"),
                    TextFont {
                        font_size: 32.0,
                        ..default()
                    },
                    TextColor(text_color),
                ));

            parent.spawn((
                Text::new("Press [Enter] or click to open"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(hint_color),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn cleanup_intro_ui(mut commands: Commands, query: Query<Entity, With<IntroUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_intro_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut button_query: Query<
        (&Interaction, &mut BackgroundColor),
        (With<OpenBoxButton>, Changed<Interaction>),
    >,
    mut requests: MessageWriter<UnboxRequested>,
) {
    let mut pressed = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || keyboard.just_pressed(KeyCode::Space);

    for (interaction, mut bg_color) in &mut button_query {
        match interaction {
            Interaction::Pressed => pressed = true,
            Interaction::Hovered => *bg_color = BackgroundColor(BUTTON_HOVER_COLOR),
            Interaction::None => *bg_color = BackgroundColor(BUTTON_COLOR),
        }
    }

    if pressed {
        requests.write(UnboxRequested);
    }
}
