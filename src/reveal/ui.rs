//! Reveal domain: character card presentation and restart input.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{CurrentCharacter, ResetRequested};
use crate::reveal::components::{CardEntrance, OpenAnotherButton, RevealCardUI};

const BUTTON_COLOR: Color = Color::srgb(0.08, 0.42, 0.23);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.12, 0.52, 0.3);

/// Overshoot of the pop-in, close to a lightly damped spring
const ENTRANCE_OVERSHOOT: f32 = 1.70158;

/// Scale and rotation of the card `t` (0..=1) into its entrance.
pub fn card_entrance_pose(t: f32) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    let c3 = ENTRANCE_OVERSHOOT + 1.0;
    let u = t - 1.0;
    let eased = 1.0 + c3 * u * u * u + ENTRANCE_OVERSHOOT * u * u;
    let rotation_deg = -180.0 * (1.0 - eased);
    (eased.max(0.0), rotation_deg)
}

pub(crate) fn spawn_reveal_card(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    current: Res<CurrentCharacter>,
) {
    let Some(character) = current.character else {
        warn!("Reveal view entered without a drawn character");
        return;
    };

    let card_color = Color::srgba(1.0, 0.98, 0.94, 0.96);
    let glow_color = Color::srgba(1.0, 0.84, 0.0, 0.35);
    let name_color = Color::srgb(0.83, 0.14, 0.15);
    let desc_color = Color::srgb(0.3, 0.3, 0.35);
    let text_color = Color::srgb(0.98, 0.98, 0.95);

    commands
        .spawn((
            RevealCardUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            ZIndex(10),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    CardEntrance::default(),
                    Node {
                        width: Val::Px(360.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(24.0)),
                        border: UiRect::all(Val::Px(4.0)),
                        ..default()
                    },
                    BackgroundColor(card_color),
                    BorderColor::all(glow_color),
                    UiTransform {
                        scale: Vec2::ZERO,
                        rotation: Rot2::degrees(-180.0),
                        ..default()
                    },
                ))
                .with_children(|card| {
                    card.spawn((
                        ImageNode::new(asset_server.load(character.image)),
                        Node {
                            width: Val::Px(260.0),
                            height: Val::Px(260.0),
                            margin: UiRect::bottom(Val::Px(16.0)),
                            ..default()
                        },
                    ));

                    card.spawn((
                        Text::new(character.name),
                        TextFont {
                            font_size: 40.0,
                            ..default()
                        },
                        TextColor(name_color),
                        Node {
                            margin: UiRect::bottom(Val::Px(8.0)),
                            ..default()
                        },
                    ));

                    card.spawn((
                        Text::new(character.description),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(desc_color),
                        TextLayout::new_with_justify(Justify::Center),
                        Node {
                            margin: UiRect::bottom(Val::Px(24.0)),
                            ..default()
                        },
                    ));

                    card.spawn((
                        OpenAnotherButton,
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(32.0), Val::Px(12.0)),
                            ..default()
                        },
                        BackgroundColor(BUTTON_COLOR),
                    ))
                    .with_child((
                        Text::new("Open Another"),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(text_color),
                    ));
                });
        });

    info!("Showing {}", character.name);
}

pub(crate) fn cleanup_reveal_card(
    mut commands: Commands,
    query: Query<Entity, With<RevealCardUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn animate_card_entrance(
    time: Res<Time>,
    mut cards: Query<(&mut CardEntrance, &mut UiTransform)>,
) {
    for (mut entrance, mut transform) in &mut cards {
        if entrance.timer.is_finished() {
            continue;
        }
        entrance.timer.tick(time.delta());

        let (scale, rotation_deg) = card_entrance_pose(entrance.timer.fraction());
        transform.scale = Vec2::splat(scale);
        transform.rotation = Rot2::degrees(rotation_deg);
    }
}

pub(crate) fn handle_reveal_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut button_query: Query<
        (&Interaction, &mut BackgroundColor),
        (With<OpenAnotherButton>, Changed<Interaction>),
    >,
    mut requests: MessageWriter<ResetRequested>,
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
        requests.write(ResetRequested);
    }
}
