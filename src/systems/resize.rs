use bevy::{
    prelude::*,
    window::{PrimaryWindow, WindowResized},
};

use crate::{
    data::settings::KioskSettings,
    systems::ui::{scroll::ScrollControllers, view::KioskView},
};

pub struct ResizePlugin;
impl Plugin for ResizePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindowMetrics>()
            .add_systems(Startup, sync_window_metrics)
            .add_systems(Update, handle_resize);
    }
}

/// Logical size of the primary window as last seen by the kiosk.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WindowMetrics {
    pub size: Vec2,
}

impl WindowMetrics {
    /// Returns whether the size actually changed.
    pub fn update(&mut self, size: Vec2) -> bool {
        let size = size.max(Vec2::ONE);
        if self.size == size {
            return false;
        }
        self.size = size;
        true
    }
}

impl FromWorld for WindowMetrics {
    fn from_world(world: &mut World) -> Self {
        let size = world
            .get_resource::<KioskSettings>()
            .map(|settings| settings.window_size)
            .unwrap_or_else(|| KioskSettings::default().window_size);
        Self { size }
    }
}

fn apply_window_size(
    size: Vec2,
    metrics: &mut WindowMetrics,
    scrolls: &mut ScrollControllers,
    view: &mut KioskView,
) {
    if !metrics.update(size) {
        return;
    }
    debug!("window resized to {}x{}", metrics.size.x, metrics.size.y);
    scrolls.sync_tracks(metrics.size);
    view.mark_dirty();
}

fn sync_window_metrics(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut metrics: ResMut<WindowMetrics>,
    mut scrolls: ResMut<ScrollControllers>,
    mut view: ResMut<KioskView>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    apply_window_size(
        Vec2::new(window.width(), window.height()),
        &mut metrics,
        &mut scrolls,
        &mut view,
    );
}

pub fn handle_resize(
    mut resize_events: EventReader<WindowResized>,
    mut metrics: ResMut<WindowMetrics>,
    mut scrolls: ResMut<ScrollControllers>,
    mut view: ResMut<KioskView>,
) {
    // Only the final size of a burst matters.
    let Some(event) = resize_events.read().last() else {
        return;
    };
    apply_window_size(
        Vec2::new(event.width, event.height),
        &mut metrics,
        &mut scrolls,
        &mut view,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{catalog::Catalog, session::KioskSession, states::KioskScreen};

    fn make_resize_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_event::<WindowResized>();
        app.init_resource::<KioskSettings>();
        app.init_resource::<Catalog>();
        app.init_resource::<KioskSession>();
        app.init_resource::<ScrollControllers>();
        app.init_resource::<KioskView>();
        app.add_plugins(ResizePlugin);
        app
    }

    fn send_resize(app: &mut App, width: f32, height: f32) {
        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width,
            height,
        });
    }

    #[test]
    fn metrics_start_at_configured_size() {
        let app = make_resize_test_app();
        assert_eq!(
            app.world().resource::<WindowMetrics>().size,
            Vec2::new(1400.0, 900.0)
        );
    }

    #[test]
    fn resize_moves_scroll_tracks_and_marks_view_dirty() {
        let mut app = make_resize_test_app();
        app.update();
        app.world_mut().resource_mut::<KioskView>().dirty = false;

        send_resize(&mut app, 800.0, 1000.0);
        send_resize(&mut app, 1000.0, 600.0);
        app.update();

        assert_eq!(
            app.world().resource::<WindowMetrics>().size,
            Vec2::new(1000.0, 600.0)
        );
        let track = app
            .world()
            .resource::<ScrollControllers>()
            .get(KioskScreen::Menu)
            .track_rect()
            .expect("menu scrolls in a short window");
        assert_eq!(track, Rect::new(960.0, 120.0, 972.0, 500.0));
        assert!(app.world().resource::<KioskView>().dirty);
    }

    #[test]
    fn same_size_is_ignored() {
        let mut app = make_resize_test_app();
        app.update();
        app.world_mut().resource_mut::<KioskView>().dirty = false;

        send_resize(&mut app, 1400.0, 900.0);
        app.update();

        assert!(!app.world().resource::<KioskView>().dirty);
    }
}
