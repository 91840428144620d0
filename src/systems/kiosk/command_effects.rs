use bevy::prelude::*;

use crate::{
    data::{catalog::Catalog, session::KioskSession, states::KioskScreen},
    systems::ui::{scroll::ScrollControllers, view::KioskView},
};

use super::{command_reducer::reduce_kiosk_command, KioskCommand};

pub(super) fn apply_kiosk_commands(
    mut commands_in: EventReader<KioskCommand>,
    mut session: ResMut<KioskSession>,
    catalog: Res<Catalog>,
    mut scrolls: ResMut<ScrollControllers>,
    mut view: ResMut<KioskView>,
    mut next_screen: ResMut<NextState<KioskScreen>>,
    mut app_exit: EventWriter<AppExit>,
) {
    for &command in commands_in.read() {
        let result = reduce_kiosk_command(command, &mut session, &catalog);

        if result.refresh_content_height {
            scrolls.sync_content_heights(&session, &catalog);
        }
        if let Some(screen) = result.screen_transition {
            info!("kiosk: {:?} -> {:?}", command, screen);
            next_screen.set(screen);
            scrolls.get_mut(screen).reset();
        }
        if session.modal.is_open() {
            scrolls.end_drags();
        }
        if result.dirty_view {
            view.mark_dirty();
        }
        if result.exit_application {
            info!("kiosk: exit requested");
            app_exit.write(AppExit::Success);
            return;
        }
    }
}
