use bevy::prelude::*;

use crate::{
    data::DataPlugin,
    systems::{
        interaction::InteractionPlugin,
        kiosk::{KioskPlugin, KioskSystem},
        resize::ResizePlugin,
        ui::UiPlugin,
    },
};

pub mod render;
pub mod shortcuts;

use render::RenderPlugin;

pub struct StartupPlugin;
impl Plugin for StartupPlugin {
    fn build(&self, app: &mut App) {
        // Data first: the scroll controllers size themselves from the session and catalog.
        app.add_plugins((
            DataPlugin,
            KioskPlugin,
            UiPlugin,
            ResizePlugin,
            InteractionPlugin,
            RenderPlugin,
        ))
        .add_systems(
            Update,
            shortcuts::close_on_esc.in_set(KioskSystem::Input),
        );
    }
}
