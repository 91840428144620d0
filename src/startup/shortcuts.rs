use bevy::prelude::*;

use crate::systems::kiosk::KioskCommand;

pub fn close_on_esc(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut kiosk_commands: EventWriter<KioskCommand>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        kiosk_commands.write(KioskCommand::Exit);
    }
}
