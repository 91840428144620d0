use bevy::{prelude::*, window::PrimaryWindow};

use crate::{
    data::session::KioskSession,
    systems::{
        kiosk::{KioskCommand, KioskSystem},
        ui::{
            layout::{HitTarget, KioskLayout},
            scroll::{ScrollController, ScrollControllers},
            view::KioskView,
        },
    },
};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum InteractionSystem {
    Pointer,
    Drag,
    Press,
}

pub struct InteractionPlugin;
impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KioskPointer>()
            .configure_sets(
                Update,
                (
                    InteractionSystem::Pointer,
                    InteractionSystem::Drag,
                    InteractionSystem::Press,
                )
                    .chain()
                    .in_set(KioskSystem::Input),
            )
            .add_systems(Update, track_pointer.in_set(InteractionSystem::Pointer))
            .add_systems(
                Update,
                (release_scroll_drags, follow_scroll_drag, update_hover)
                    .chain()
                    .in_set(InteractionSystem::Drag),
            )
            .add_systems(Update, dispatch_presses.in_set(InteractionSystem::Press));
    }
}

/// Cursor position in window coordinates, `None` while the cursor is outside the window.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct KioskPointer {
    pub position: Option<Vec2>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    Command(KioskCommand),
    DragStarted,
    TrackPaged,
    Nothing,
}

/// Resolves a left press. With a modal open only the modal's own controls respond.
pub fn resolve_press(
    position: Vec2,
    modal_open: bool,
    layout: &KioskLayout,
    controller: &mut ScrollController,
) -> PressOutcome {
    let command = |layout: &KioskLayout| {
        layout
            .hit_test(position)
            .and_then(HitTarget::command)
            .map_or(PressOutcome::Nothing, PressOutcome::Command)
    };

    if modal_open {
        if layout.modal.is_none() {
            return PressOutcome::Nothing;
        }
        return command(layout);
    }
    if controller.handle_drag_start(position) {
        return PressOutcome::DragStarted;
    }
    if controller.handle_track_click(position) {
        return PressOutcome::TrackPaged;
    }
    command(layout)
}

fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<KioskPointer>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let position = window.cursor_position();
    if pointer.position != position {
        pointer.position = position;
    }
}

fn release_scroll_drags(
    mouse: Res<ButtonInput<MouseButton>>,
    session: Res<KioskSession>,
    mut scrolls: ResMut<ScrollControllers>,
    mut view: ResMut<KioskView>,
) {
    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    if scrolls.get(session.screen).is_dragging() {
        view.mark_dirty();
    }
    scrolls.end_drags();
}

fn follow_scroll_drag(
    pointer: Res<KioskPointer>,
    session: Res<KioskSession>,
    mut scrolls: ResMut<ScrollControllers>,
    mut view: ResMut<KioskView>,
) {
    let Some(position) = pointer.position else {
        return;
    };
    if !scrolls.get(session.screen).is_dragging() {
        return;
    }
    if scrolls.get_mut(session.screen).handle_drag_move(position.y) {
        view.mark_dirty();
    }
}

fn update_hover(pointer: Res<KioskPointer>, layout: Res<KioskLayout>, mut view: ResMut<KioskView>) {
    // Rows only highlight on selection.
    let hovered = pointer
        .position
        .and_then(|position| layout.hit_test(position))
        .filter(|target| !matches!(target, HitTarget::Row(_)));
    view.set_hovered(hovered);
}

fn dispatch_presses(
    mouse: Res<ButtonInput<MouseButton>>,
    pointer: Res<KioskPointer>,
    session: Res<KioskSession>,
    layout: Res<KioskLayout>,
    mut scrolls: ResMut<ScrollControllers>,
    mut view: ResMut<KioskView>,
    mut commands_out: EventWriter<KioskCommand>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(position) = pointer.position else {
        return;
    };

    let controller = scrolls.get_mut(session.screen);
    match resolve_press(position, session.modal.is_open(), &layout, controller) {
        PressOutcome::Command(command) => {
            debug!("press at {position} -> {command:?}");
            commands_out.write(command);
        }
        PressOutcome::DragStarted | PressOutcome::TrackPaged => view.mark_dirty(),
        PressOutcome::Nothing => {}
    }
}
