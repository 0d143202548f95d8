mod audio;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod reveal;
mod ui;
mod unboxing;

use bevy::log::LogPlugin;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Blind Box".to_string(),
                    resolution: (1280, 720).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "info,wgpu=error,naga=warn,blind_box=debug".to_string(),
                ..default()
            }),
    )
    .add_plugins((
        content::ContentPlugin,
        core::CorePlugin,
        audio::SoundPlugin,
        unboxing::UnboxingPlugin,
        reveal::RevealPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
