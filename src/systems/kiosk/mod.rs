use bevy::prelude::*;

use crate::{
    data::{
        session::{KioskSession, PaymentMethod},
        states::KioskScreen,
    },
    systems::ui::scroll::{ScrollControllers, ScrollInputSystem},
};

mod command_effects;
mod command_reducer;
#[cfg(test)]
mod flow_tests;

/// Everything a customer can ask the kiosk to do. Pointer and keyboard input are translated
/// into these before they touch the session.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KioskCommand {
    SelectMenuItem(usize),
    AddSelected,
    ViewOrder,
    Finish,
    SelectOrderLine(usize),
    RemoveSelected,
    IncrementRemoval,
    DecrementRemoval,
    ConfirmRemoval,
    CancelRemoval,
    ClearOrder,
    BackToMenu,
    ChoosePayment(PaymentMethod),
    CancelPayment,
    NewOrder,
    Exit,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum KioskSystem {
    Input,
    Reduce,
    Layout,
    Render,
}

pub struct KioskPlugin;
impl Plugin for KioskPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<KioskCommand>()
            .configure_sets(
                Update,
                (
                    KioskSystem::Input,
                    KioskSystem::Reduce,
                    KioskSystem::Layout,
                    KioskSystem::Render,
                )
                    .chain(),
            )
            .configure_sets(Update, ScrollInputSystem.in_set(KioskSystem::Input))
            .add_systems(
                Update,
                command_effects::apply_kiosk_commands.in_set(KioskSystem::Reduce),
            )
            .add_systems(OnEnter(KioskScreen::Menu), log_screen_entry)
            .add_systems(OnEnter(KioskScreen::Order), log_screen_entry)
            .add_systems(OnEnter(KioskScreen::Bill), log_screen_entry);
    }
}

fn log_screen_entry(
    screen: Res<State<KioskScreen>>,
    session: Res<KioskSession>,
    scrolls: Res<ScrollControllers>,
) {
    let screen = *screen.get();
    info!(
        "kiosk screen {:?}: {} units in order, content height {}",
        screen,
        session.order.len(),
        scrolls.get(screen).content_extent()
    );
}
