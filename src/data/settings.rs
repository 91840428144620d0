use bevy::prelude::*;

/// Kiosk tuning knobs. Layout geometry lives next to the layout code as constants.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct KioskSettings {
    pub window_title: &'static str,
    pub window_size: Vec2,
    pub wheel_step_px: f32,
    pub page_factor: f32,
    pub min_thumb_extent: f32,
}

impl Default for KioskSettings {
    fn default() -> Self {
        Self {
            window_title: "Restaurante Italiano - Menu do Dia",
            window_size: Vec2::new(1400.0, 900.0),
            wheel_step_px: 40.0,
            page_factor: 0.92,
            min_thumb_extent: 30.0,
        }
    }
}
