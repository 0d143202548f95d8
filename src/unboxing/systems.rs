//! Unboxing domain: box view UI, tap handling and the shake timer.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySound, SoundCue};
use crate::content::{BOX_IMAGE, UnboxSettings};
use crate::core::BoxOpened;
use crate::unboxing::animation::{BoxPose, HOVER_SCALE, PRESS_SCALE, shake_pose};
use crate::unboxing::components::{BlindBoxButton, BlindBoxUI, BoxShake};
use crate::unboxing::events::BoxTapped;

pub(crate) fn spawn_blind_box_ui(mut commands: Commands, asset_server: Res<AssetServer>) {
    let text_color = Color::srgb(0.98, 0.98, 0.95);

    commands
        .spawn((
            BlindBoxUI,
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
            parent.spawn((
                Text::new("Tap to Open!"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    ..default()
                },
            ));

            parent.spawn((
                BlindBoxButton,
                Button,
                ImageNode::new(asset_server.load(BOX_IMAGE)),
                Node {
                    width: Val::Px(300.0),
                    height: Val::Px(300.0),
                    ..default()
                },
                UiTransform::default(),
            ));
        });
}

pub(crate) fn cleanup_blind_box_ui(mut commands: Commands, query: Query<Entity, With<BlindBoxUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn reset_box_shake(mut shake: ResMut<BoxShake>) {
    shake.reset();
}

pub(crate) fn handle_box_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<BlindBoxButton>, Changed<Interaction>)>,
    mut taps: MessageWriter<BoxTapped>,
) {
    let tapped = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || keyboard.just_pressed(KeyCode::Space)
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if tapped {
        taps.write(BoxTapped);
    }
}

/// Start the shake on the first tap; later taps are ignored.
pub(crate) fn begin_shake(
    mut taps: MessageReader<BoxTapped>,
    mut shake: ResMut<BoxShake>,
    settings: Res<UnboxSettings>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for _ in taps.read() {
        if shake.begin(settings.shake_duration()) {
            sounds.write(PlaySound(SoundCue::Shake));
            info!("Shaking box for {:.2}s", settings.shake_duration_secs);
        } else {
            debug!("Box already shaking, tap ignored");
        }
    }
}

pub(crate) fn tick_box_shake(
    time: Res<Time>,
    mut shake: ResMut<BoxShake>,
    mut opened: MessageWriter<BoxOpened>,
) {
    if shake.tick(time.delta()) {
        opened.write(BoxOpened);
    }
}

pub(crate) fn animate_box(
    shake: Res<BoxShake>,
    mut box_query: Query<(&Interaction, &mut UiTransform), With<BlindBoxButton>>,
) {
    for (interaction, mut transform) in &mut box_query {
        let pose = if shake.is_shaking() {
            shake_pose(shake.elapsed_secs())
        } else if shake.is_started() {
            BoxPose::IDLE
        } else {
            match interaction {
                Interaction::Hovered => BoxPose {
                    scale: HOVER_SCALE,
                    ..BoxPose::IDLE
                },
                Interaction::Pressed => BoxPose {
                    scale: PRESS_SCALE,
                    ..BoxPose::IDLE
                },
                Interaction::None => BoxPose::IDLE,
            }
        };

        transform.rotation = Rot2::degrees(pose.rotation_deg);
        transform.scale = Vec2::splat(pose.scale);
    }
}
