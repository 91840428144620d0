use bevy::log::debug;

use crate::data::{
    catalog::Catalog,
    session::{KioskSession, Modal, PaymentMethod},
    states::KioskScreen,
};

use super::KioskCommand;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KioskReducerResult {
    pub screen_transition: Option<KioskScreen>,
    pub dirty_view: bool,
    pub refresh_content_height: bool,
    pub exit_application: bool,
}

impl KioskReducerResult {
    fn redraw() -> Self {
        Self {
            dirty_view: true,
            ..Self::default()
        }
    }

    fn order_changed() -> Self {
        Self {
            dirty_view: true,
            refresh_content_height: true,
            ..Self::default()
        }
    }

    fn transition(screen: KioskScreen) -> Self {
        Self {
            screen_transition: Some(screen),
            dirty_view: true,
            refresh_content_height: true,
            exit_application: false,
        }
    }
}

fn ignored(command: KioskCommand, session: &KioskSession) -> KioskReducerResult {
    debug!(
        "ignoring {:?} on {:?} (modal open: {})",
        command,
        session.screen,
        session.modal.is_open()
    );
    KioskReducerResult::default()
}

fn enter(session: &mut KioskSession, screen: KioskScreen) -> KioskReducerResult {
    session.enter_screen(screen);
    KioskReducerResult::transition(screen)
}

fn open_payment_choice(command: KioskCommand, session: &mut KioskSession) -> KioskReducerResult {
    if session.order.is_empty() {
        return ignored(command, session);
    }
    session.modal = Modal::PaymentChoice;
    KioskReducerResult::redraw()
}

fn reduce_remove_quantity_command(
    command: KioskCommand,
    session: &mut KioskSession,
) -> KioskReducerResult {
    let Modal::RemoveQuantity { target, amount } = &mut session.modal else {
        return KioskReducerResult::default();
    };

    match command {
        KioskCommand::IncrementRemoval => {
            *amount = (*amount + 1).min(target.quantity.max(1));
            KioskReducerResult::redraw()
        }
        KioskCommand::DecrementRemoval => {
            *amount = amount.saturating_sub(1).max(1);
            KioskReducerResult::redraw()
        }
        KioskCommand::ConfirmRemoval => {
            let available = session.order.count_of(&target.entry).min(target.quantity);
            if *amount < 1 || *amount > available {
                debug!(
                    "rejecting removal of {} from a line of {}",
                    amount, available
                );
                return KioskReducerResult::default();
            }
            let entry = target.entry.clone();
            let amount = *amount;
            session.modal = Modal::None;
            session.order.remove_units(&entry, amount);
            session.order_selection = None;
            KioskReducerResult::order_changed()
        }
        KioskCommand::CancelRemoval => {
            session.modal = Modal::None;
            KioskReducerResult::redraw()
        }
        _ => ignored(command, session),
    }
}

fn reduce_payment_choice_command(
    command: KioskCommand,
    session: &mut KioskSession,
) -> KioskReducerResult {
    match command {
        KioskCommand::ChoosePayment(method) => choose_payment(session, method),
        KioskCommand::CancelPayment => {
            session.modal = Modal::None;
            KioskReducerResult::redraw()
        }
        _ => ignored(command, session),
    }
}

fn choose_payment(session: &mut KioskSession, method: PaymentMethod) -> KioskReducerResult {
    session.modal = Modal::None;
    session.payment = Some(method);
    enter(session, KioskScreen::Bill)
}

fn reduce_menu_command(
    command: KioskCommand,
    session: &mut KioskSession,
    catalog: &Catalog,
) -> KioskReducerResult {
    match command {
        KioskCommand::SelectMenuItem(index) if index < catalog.entries().len() => {
            session.menu_selection = Some(index);
            KioskReducerResult::redraw()
        }
        KioskCommand::AddSelected => {
            let Some(entry) = session
                .menu_selection
                .and_then(|index| catalog.entry(index))
            else {
                return ignored(command, session);
            };
            session.order.push(entry.clone());
            session.menu_selection = None;
            KioskReducerResult::order_changed()
        }
        KioskCommand::ViewOrder => enter(session, KioskScreen::Order),
        KioskCommand::Finish => open_payment_choice(command, session),
        _ => ignored(command, session),
    }
}

fn reduce_order_command(
    command: KioskCommand,
    session: &mut KioskSession,
    catalog: &Catalog,
) -> KioskReducerResult {
    match command {
        KioskCommand::SelectOrderLine(index) => {
            if index >= session.aggregated(catalog).len() {
                return ignored(command, session);
            }
            session.order_selection = if session.order_selection == Some(index) {
                None
            } else {
                Some(index)
            };
            KioskReducerResult::redraw()
        }
        KioskCommand::RemoveSelected => {
            let lines = session.aggregated(catalog);
            let Some(line) = session
                .order_selection
                .and_then(|index| lines.get(index))
            else {
                return ignored(command, session);
            };
            if line.quantity > 1 {
                session.modal = Modal::remove_quantity(line.clone());
                return KioskReducerResult::redraw();
            }
            let entry = line.entry.clone();
            session.order.remove_units(&entry, 1);
            session.order_selection = None;
            KioskReducerResult::order_changed()
        }
        KioskCommand::ClearOrder => {
            session.order.clear();
            session.order_selection = None;
            KioskReducerResult::order_changed()
        }
        KioskCommand::BackToMenu => enter(session, KioskScreen::Menu),
        KioskCommand::Finish => open_payment_choice(command, session),
        _ => ignored(command, session),
    }
}

fn reduce_bill_command(command: KioskCommand, session: &mut KioskSession) -> KioskReducerResult {
    match command {
        KioskCommand::NewOrder => {
            session.order.clear();
            session.payment = None;
            enter(session, KioskScreen::Menu)
        }
        _ => ignored(command, session),
    }
}

/// Applies one command to the session. Commands that make no sense for the current screen or
/// modal leave the session untouched and return an empty result.
pub fn reduce_kiosk_command(
    command: KioskCommand,
    session: &mut KioskSession,
    catalog: &Catalog,
) -> KioskReducerResult {
    if command == KioskCommand::Exit {
        return KioskReducerResult {
            exit_application: true,
            ..KioskReducerResult::default()
        };
    }

    match session.modal {
        Modal::RemoveQuantity { .. } => return reduce_remove_quantity_command(command, session),
        Modal::PaymentChoice => return reduce_payment_choice_command(command, session),
        Modal::None => {}
    }

    match session.screen {
        KioskScreen::Menu => reduce_menu_command(command, session, catalog),
        KioskScreen::Order => reduce_order_command(command, session, catalog),
        KioskScreen::Bill => reduce_bill_command(command, session),
    }
}
