use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
};
use enum_map::EnumMap;

use crate::{
    data::{catalog::Catalog, session::KioskSession, settings::KioskSettings, states::KioskScreen},
    systems::ui::{
        layout::{content_height, scroll_track_rect},
        view::KioskView,
    },
};

mod scrollbar_math;

pub use self::scrollbar_math::{
    offset_from_thumb_top, thumb_extent_for_state, thumb_top_for_offset,
};

const SCROLL_EPSILON: f32 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

/// One-dimensional scroll offset for a vertical viewport. The scrollbar track spans the
/// viewport's vertical extent, so the track height doubles as the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollController {
    track: Rect,
    content_extent: f32,
    offset_px: f32,
    max_offset: f32,
    dragging: bool,
    grab_offset: f32,
    wheel_step: f32,
    page_factor: f32,
    min_thumb_extent: f32,
}

impl ScrollController {
    pub fn new(track: Rect, settings: &KioskSettings) -> Self {
        let mut controller = Self {
            track,
            content_extent: 0.0,
            offset_px: 0.0,
            max_offset: 0.0,
            dragging: false,
            grab_offset: 0.0,
            wheel_step: settings.wheel_step_px,
            page_factor: settings.page_factor,
            min_thumb_extent: settings.min_thumb_extent,
        };
        controller.clamp();
        controller
    }

    pub fn offset(&self) -> f32 {
        self.offset_px
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub fn viewport_extent(&self) -> f32 {
        self.track.height().max(0.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_scrollable(&self) -> bool {
        self.max_offset > SCROLL_EPSILON
    }

    pub fn set_track(&mut self, track: Rect) {
        self.track = track;
        self.clamp();
    }

    pub fn set_content_height(&mut self, content_extent: f32) {
        self.content_extent = content_extent;
        self.clamp();
    }

    pub fn reset(&mut self) {
        self.offset_px = 0.0;
        self.dragging = false;
        self.grab_offset = 0.0;
    }

    /// Moves by one wheel step. Returns whether the offset changed.
    pub fn handle_wheel(&mut self, direction: WheelDirection) -> bool {
        self.handle_wheel_lines(direction, 1.0)
    }

    /// Moves by `lines` wheel steps in a single clamped update.
    pub fn handle_wheel_lines(&mut self, direction: WheelDirection, lines: f32) -> bool {
        let delta = self.wheel_step * lines.max(0.0);
        match direction {
            WheelDirection::Up => self.scroll_by(-delta),
            WheelDirection::Down => self.scroll_by(delta),
        }
    }

    pub fn page(&mut self, direction: WheelDirection) -> bool {
        let page = self.viewport_extent() * self.page_factor;
        match direction {
            WheelDirection::Up => self.scroll_by(-page),
            WheelDirection::Down => self.scroll_by(page),
        }
    }

    pub fn scroll_by(&mut self, delta: f32) -> bool {
        if !self.is_scrollable() {
            return false;
        }
        self.set_offset(self.offset_px + delta)
    }

    pub fn scroll_to_start(&mut self) -> bool {
        self.set_offset(0.0)
    }

    pub fn scroll_to_end(&mut self) -> bool {
        self.set_offset(self.max_offset)
    }

    /// Starts a drag when `pointer` lands on the thumb. Returns whether a drag began.
    pub fn handle_drag_start(&mut self, pointer: Vec2) -> bool {
        let Some(thumb) = self.thumb_rect() else {
            return false;
        };
        if !thumb.contains(pointer) {
            return false;
        }
        self.dragging = true;
        self.grab_offset = pointer.y - thumb.min.y;
        true
    }

    pub fn handle_drag_move(&mut self, pointer_y: f32) -> bool {
        if !self.dragging || !self.is_scrollable() {
            return false;
        }
        let thumb_extent = self.thumb_extent();
        let offset = offset_from_thumb_top(
            self.track.min.y,
            self.viewport_extent(),
            thumb_extent,
            pointer_y - self.grab_offset,
            self.max_offset,
        );
        self.set_offset(offset)
    }

    pub fn handle_drag_end(&mut self) {
        self.dragging = false;
    }

    /// Pages toward `pointer` when it lands on the track but not the thumb.
    pub fn handle_track_click(&mut self, pointer: Vec2) -> bool {
        let (Some(track), Some(thumb)) = (self.track_rect(), self.thumb_rect()) else {
            return false;
        };
        if !track.contains(pointer) || thumb.contains(pointer) {
            return false;
        }
        if pointer.y < thumb.min.y {
            self.page(WheelDirection::Up)
        } else {
            self.page(WheelDirection::Down)
        }
    }

    pub fn track_rect(&self) -> Option<Rect> {
        self.is_scrollable().then_some(self.track)
    }

    pub fn thumb_rect(&self) -> Option<Rect> {
        if !self.is_scrollable() {
            return None;
        }
        let thumb_extent = self.thumb_extent();
        let top = thumb_top_for_offset(
            self.track.min.y,
            self.viewport_extent(),
            thumb_extent,
            self.offset_px,
            self.max_offset,
        );
        Some(Rect::new(
            self.track.min.x,
            top,
            self.track.max.x,
            top + thumb_extent,
        ))
    }

    fn thumb_extent(&self) -> f32 {
        let viewport_extent = self.viewport_extent();
        thumb_extent_for_state(
            viewport_extent,
            viewport_extent,
            self.content_extent,
            self.min_thumb_extent,
        )
    }

    fn set_offset(&mut self, offset: f32) -> bool {
        let previous = self.offset_px;
        self.offset_px = offset;
        self.clamp();
        (self.offset_px - previous).abs() > SCROLL_EPSILON
    }

    fn clamp(&mut self) {
        self.content_extent = self.content_extent.max(0.0);
        self.max_offset = (self.content_extent - self.viewport_extent()).max(0.0);
        if self.max_offset <= SCROLL_EPSILON {
            self.max_offset = 0.0;
            self.dragging = false;
        }
        self.offset_px = self.offset_px.clamp(0.0, self.max_offset);
    }
}

/// Independent scroll state for each screen.
#[derive(Resource, Clone, Debug)]
pub struct ScrollControllers {
    controllers: EnumMap<KioskScreen, ScrollController>,
}

impl ScrollControllers {
    pub fn new(window_size: Vec2, settings: &KioskSettings) -> Self {
        let track = scroll_track_rect(window_size);
        Self {
            controllers: EnumMap::from_fn(|_| ScrollController::new(track, settings)),
        }
    }

    pub fn get(&self, screen: KioskScreen) -> &ScrollController {
        &self.controllers[screen]
    }

    pub fn get_mut(&mut self, screen: KioskScreen) -> &mut ScrollController {
        &mut self.controllers[screen]
    }

    pub fn sync_tracks(&mut self, window_size: Vec2) {
        let track = scroll_track_rect(window_size);
        for (_, controller) in self.controllers.iter_mut() {
            controller.set_track(track);
        }
    }

    pub fn sync_content_heights(&mut self, session: &KioskSession, catalog: &Catalog) {
        for (screen, controller) in self.controllers.iter_mut() {
            controller.set_content_height(content_height(screen, session, catalog));
        }
    }

    pub fn end_drags(&mut self) {
        for (_, controller) in self.controllers.iter_mut() {
            controller.handle_drag_end();
        }
    }
}

impl FromWorld for ScrollControllers {
    fn from_world(world: &mut World) -> Self {
        let settings = world
            .get_resource::<KioskSettings>()
            .copied()
            .unwrap_or_default();
        let mut controllers = ScrollControllers::new(settings.window_size, &settings);
        if let (Some(session), Some(catalog)) = (
            world.get_resource::<KioskSession>(),
            world.get_resource::<Catalog>(),
        ) {
            controllers.sync_content_heights(session, catalog);
        }
        controllers
    }
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ScrollInputSystem;

pub struct ScrollPlugin;

impl Plugin for ScrollPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScrollControllers>()
            .add_systems(Update, handle_scroll_wheel_and_keys.in_set(ScrollInputSystem));
    }
}

fn handle_scroll_wheel_and_keys(
    session: Res<KioskSession>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut wheel_events: EventReader<MouseWheel>,
    mut scrolls: ResMut<ScrollControllers>,
    mut view: ResMut<KioskView>,
) {
    if session.modal.is_open() {
        wheel_events.clear();
        return;
    }

    let controller = scrolls.get_mut(session.screen);
    let mut changed = false;

    for event in wheel_events.read() {
        if event.y.abs() <= SCROLL_EPSILON {
            continue;
        }
        let direction = if event.y > 0.0 {
            WheelDirection::Up
        } else {
            WheelDirection::Down
        };
        match event.unit {
            MouseScrollUnit::Line => {
                let notches = event.y.abs().round().max(1.0);
                changed |= controller.handle_wheel_lines(direction, notches);
            }
            MouseScrollUnit::Pixel => {
                changed |= controller.scroll_by(-event.y);
            }
        }
    }

    if keyboard_input.just_pressed(KeyCode::ArrowUp) {
        changed |= controller.handle_wheel(WheelDirection::Up);
    }
    if keyboard_input.just_pressed(KeyCode::ArrowDown) {
        changed |= controller.handle_wheel(WheelDirection::Down);
    }
    if keyboard_input.just_pressed(KeyCode::PageUp) {
        changed |= controller.page(WheelDirection::Up);
    }
    if keyboard_input.just_pressed(KeyCode::PageDown) {
        changed |= controller.page(WheelDirection::Down);
    }
    if keyboard_input.just_pressed(KeyCode::Home) {
        changed |= controller.scroll_to_start();
    } else if keyboard_input.just_pressed(KeyCode::End) {
        changed |= controller.scroll_to_end();
    }

    if changed {
        view.mark_dirty();
    }
}
