use bevy::prelude::*;
use enum_map::Enum;

pub struct KioskStatesPlugin;
impl Plugin for KioskStatesPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<KioskScreen>();
    }
}

#[derive(Default, States, Enum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KioskScreen {
    #[default]
    Menu,
    Order,
    Bill,
}

impl KioskScreen {
    pub fn title(self) -> &'static str {
        match self {
            KioskScreen::Menu => "RESTAURANTE ITALIANO - MENU DO DIA",
            KioskScreen::Order => "SEU PEDIDO",
            KioskScreen::Bill => "OBRIGADO PELA VISITA!",
        }
    }
}
