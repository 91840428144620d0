use bevy::prelude::*;

use crate::systems::colors::BACKGROUND_COLOR;

#[derive(Component)]
pub struct MainCamera;

pub fn setup_cameras(mut commands: Commands, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = BACKGROUND_COLOR;
    commands.spawn((Name::new("main_camera"), Camera2d, MainCamera));
}

pub struct RenderPlugin;
impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClearColor>()
            .add_systems(Startup, setup_cameras);
    }
}
