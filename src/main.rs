use bevy::{prelude::*, window::WindowResolution};

mod data;
mod startup;
mod systems;

use data::settings::KioskSettings;
use startup::StartupPlugin;

fn main() -> AppExit {
    let settings = KioskSettings::default();
    App::new()
        .insert_resource(settings)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: settings.window_title.to_string(),
                resolution: WindowResolution::new(settings.window_size.x, settings.window_size.y),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(StartupPlugin)
        .run()
}
