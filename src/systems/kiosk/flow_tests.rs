use bevy::{
    input::mouse::MouseWheel, prelude::*, state::app::StatesPlugin, window::WindowResized,
};

use crate::{
    data::{
        catalog::Catalog,
        money::Money,
        order::{aggregated_total, AggregatedLine},
        session::{KioskSession, Modal, PaymentMethod},
        states::KioskScreen,
        DataPlugin,
    },
    startup::shortcuts::close_on_esc,
    systems::{
        interaction::{InteractionPlugin, KioskPointer},
        resize::ResizePlugin,
        ui::{
            layout::{KioskButton, KioskLayout},
            scroll::ScrollControllers,
            UiPlugin,
        },
    },
};

use super::{KioskCommand, KioskPlugin, KioskSystem};

fn make_kiosk_test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.add_event::<MouseWheel>();
    app.add_event::<WindowResized>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.add_plugins((DataPlugin, KioskPlugin, UiPlugin, ResizePlugin, InteractionPlugin));
    app.add_systems(Update, close_on_esc.in_set(KioskSystem::Input));
    app.update();
    app
}

/// Second update lets the state transition land.
fn run_command(app: &mut App, command: KioskCommand) {
    app.world_mut().send_event(command);
    app.update();
    app.update();
}

fn press(app: &mut App, point: Vec2) {
    app.world_mut().resource_mut::<KioskPointer>().position = Some(point);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
}

fn release(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .release(MouseButton::Left);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
}

fn click(app: &mut App, point: Vec2) {
    press(app, point);
    release(app);
}

fn button_center(app: &App, button: KioskButton) -> Vec2 {
    let layout = app.world().resource::<KioskLayout>();
    layout
        .buttons
        .iter()
        .chain(layout.modal.iter().flat_map(|modal| modal.buttons.iter()))
        .find(|slot| slot.button == button)
        .map(|slot| slot.rect.center())
        .unwrap_or_else(|| panic!("{button:?} is not on screen"))
}

fn index_of(app: &App, name: &str) -> usize {
    app.world()
        .resource::<Catalog>()
        .entries()
        .iter()
        .position(|entry| entry.name == name)
        .expect("entry in default catalog")
}

fn screen(app: &App) -> KioskScreen {
    *app.world().resource::<State<KioskScreen>>().get()
}

fn session(app: &App) -> &KioskSession {
    app.world().resource::<KioskSession>()
}

fn offset(app: &App, screen: KioskScreen) -> f32 {
    app.world().resource::<ScrollControllers>().get(screen).offset()
}

fn exit_requested(app: &mut App) -> bool {
    app.world_mut()
        .resource_mut::<Events<AppExit>>()
        .drain()
        .any(|exit| exit == AppExit::Success)
}

fn layout_texts(app: &App) -> Vec<String> {
    let layout = app.world().resource::<KioskLayout>();
    layout
        .texts
        .iter()
        .chain(layout.footer.iter())
        .map(|text| text.text.clone())
        .collect()
}

#[test]
fn order_pay_and_start_over() {
    let mut app = make_kiosk_test_app();
    let bruschetta = index_of(&app, "Bruschetta al Pomodoro");
    let margherita = index_of(&app, "Pizza Margherita");

    for index in [bruschetta, bruschetta, margherita] {
        run_command(&mut app, KioskCommand::SelectMenuItem(index));
        run_command(&mut app, KioskCommand::AddSelected);
    }
    run_command(&mut app, KioskCommand::ViewOrder);

    assert_eq!(screen(&app), KioskScreen::Order);
    let catalog = app.world().resource::<Catalog>().clone();
    let lines = session(&app).aggregated(&catalog);
    let summary: Vec<_> = lines
        .iter()
        .map(|line: &AggregatedLine| (line.entry.name.as_str(), line.quantity))
        .collect();
    assert_eq!(
        summary,
        [("Bruschetta al Pomodoro", 2), ("Pizza Margherita", 1)]
    );
    assert_eq!(aggregated_total(&lines), Money::from_cents(2000));
    assert_eq!(
        app.world()
            .resource::<ScrollControllers>()
            .get(KioskScreen::Order)
            .content_extent(),
        470.0
    );

    run_command(&mut app, KioskCommand::Finish);
    assert_eq!(session(&app).modal, Modal::PaymentChoice);

    run_command(&mut app, KioskCommand::ChoosePayment(PaymentMethod::Card));
    assert_eq!(screen(&app), KioskScreen::Bill);
    let texts = layout_texts(&app);
    assert!(texts.iter().any(|text| text == "TOTAL A PAGAR: 20.00€"));
    assert!(texts.iter().any(|text| text == "Pagamento em Cartão"));

    run_command(&mut app, KioskCommand::NewOrder);
    assert_eq!(screen(&app), KioskScreen::Menu);
    assert_eq!(session(&app), &KioskSession::default());
}

#[test]
fn entering_a_screen_resets_its_scroll() {
    let mut app = make_kiosk_test_app();
    app.world_mut()
        .resource_mut::<ScrollControllers>()
        .get_mut(KioskScreen::Menu)
        .scroll_to_end();
    assert_eq!(offset(&app, KioskScreen::Menu), 700.0);

    run_command(&mut app, KioskCommand::ViewOrder);
    run_command(&mut app, KioskCommand::BackToMenu);

    assert_eq!(screen(&app), KioskScreen::Menu);
    assert_eq!(offset(&app, KioskScreen::Menu), 0.0);
}

#[test]
fn exit_command_requests_app_exit() {
    let mut app = make_kiosk_test_app();
    assert!(!exit_requested(&mut app));

    app.world_mut().send_event(KioskCommand::Exit);
    app.update();

    assert!(exit_requested(&mut app));
}

#[test]
fn escape_key_requests_app_exit() {
    let mut app = make_kiosk_test_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();

    assert!(exit_requested(&mut app));
}

#[test]
fn clicking_row_then_add_updates_order_and_footer() {
    let mut app = make_kiosk_test_app();

    click(&mut app, Vec2::new(400.0, 190.0));
    assert_eq!(session(&app).menu_selection, Some(0));

    let add = button_center(&app, KioskButton::Add);
    click(&mut app, add);

    assert_eq!(session(&app).order.len(), 1);
    assert_eq!(session(&app).menu_selection, None);
    assert!(layout_texts(&app)
        .iter()
        .any(|text| text == "Itens no pedido: 1"));
}

#[test]
fn clicks_behind_modal_are_ignored() {
    let mut app = make_kiosk_test_app();
    run_command(&mut app, KioskCommand::SelectMenuItem(0));
    run_command(&mut app, KioskCommand::AddSelected);
    run_command(&mut app, KioskCommand::Finish);
    assert_eq!(session(&app).modal, Modal::PaymentChoice);

    click(&mut app, Vec2::new(400.0, 250.0));
    assert_eq!(session(&app).menu_selection, None);

    let cancel = button_center(&app, KioskButton::CancelPayment);
    click(&mut app, cancel);
    assert_eq!(session(&app).modal, Modal::None);
    assert_eq!(screen(&app), KioskScreen::Menu);
    assert_eq!(session(&app).order.len(), 1);
}

#[test]
fn removal_modal_through_clicks() {
    let mut app = make_kiosk_test_app();
    let tiramisu = index_of(&app, "Tiramisù");
    for _ in 0..3 {
        run_command(&mut app, KioskCommand::SelectMenuItem(tiramisu));
        run_command(&mut app, KioskCommand::AddSelected);
    }
    run_command(&mut app, KioskCommand::ViewOrder);

    let row = app.world().resource::<KioskLayout>().rows[0].rect.center();
    click(&mut app, row);
    assert_eq!(session(&app).order_selection, Some(0));

    let remove = button_center(&app, KioskButton::Remove);
    click(&mut app, remove);
    assert!(matches!(
        session(&app).modal,
        Modal::RemoveQuantity { amount: 1, .. }
    ));

    let plus = button_center(&app, KioskButton::IncrementRemoval);
    click(&mut app, plus);
    let confirm = button_center(&app, KioskButton::ConfirmRemoval);
    click(&mut app, confirm);

    assert_eq!(session(&app).modal, Modal::None);
    assert_eq!(session(&app).order.len(), 1);
    assert_eq!(session(&app).order_selection, None);
}

#[test]
fn dragging_thumb_scrolls_menu() {
    let mut app = make_kiosk_test_app();
    let thumb = app
        .world()
        .resource::<KioskLayout>()
        .scrollbar
        .expect("menu scrolls")
        .thumb;

    press(&mut app, thumb.center());
    assert!(app
        .world()
        .resource::<ScrollControllers>()
        .get(KioskScreen::Menu)
        .is_dragging());

    app.world_mut().resource_mut::<KioskPointer>().position =
        Some(thumb.center() + Vec2::new(0.0, 100.0));
    app.update();

    let travel = 680.0 - thumb.height();
    let expected = 100.0 / travel * 700.0;
    assert!((offset(&app, KioskScreen::Menu) - expected).abs() < 0.5);

    release(&mut app);
    assert!(!app
        .world()
        .resource::<ScrollControllers>()
        .get(KioskScreen::Menu)
        .is_dragging());
}

#[test]
fn session_screen_and_bevy_state_agree_after_transitions() {
    let mut app = make_kiosk_test_app();
    run_command(&mut app, KioskCommand::SelectMenuItem(0));
    run_command(&mut app, KioskCommand::AddSelected);

    for command in [
        KioskCommand::ViewOrder,
        KioskCommand::BackToMenu,
        KioskCommand::ViewOrder,
        KioskCommand::Finish,
        KioskCommand::ChoosePayment(PaymentMethod::Cash),
        KioskCommand::NewOrder,
    ] {
        run_command(&mut app, command);
        assert_eq!(session(&app).screen, screen(&app), "after {command:?}");
    }
}
