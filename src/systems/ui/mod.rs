//! Kiosk presentation.
//!
//! - `scroll`: per-screen scroll controllers and wheel/keyboard scrolling
//! - `layout`: pure geometry shared by hit-testing and drawing
//! - `view`: turns the current layout into sprites and `Text2d`
use bevy::prelude::*;

pub mod layout;
pub mod scroll;
pub mod view;

use crate::systems::kiosk::KioskSystem;

use layout::KioskLayout;
use scroll::ScrollPlugin;
use view::{rebuild_kiosk_view, refresh_kiosk_layout, KioskView};

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KioskView>()
            .init_resource::<KioskLayout>()
            .add_plugins(ScrollPlugin)
            .add_systems(Update, refresh_kiosk_layout.in_set(KioskSystem::Layout))
            .add_systems(Update, rebuild_kiosk_view.in_set(KioskSystem::Render));
    }
}
