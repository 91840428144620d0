use bevy::prelude::*;

pub mod catalog;
pub mod money;
pub mod order;
pub mod session;
pub mod settings;
pub mod states;

use catalog::Catalog;
use session::KioskSession;
use settings::KioskSettings;
use states::KioskStatesPlugin;

pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KioskSettings>()
            .init_resource::<Catalog>()
            .init_resource::<KioskSession>()
            .add_plugins(KioskStatesPlugin);
    }
}
