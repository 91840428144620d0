use bevy::prelude::*;

use crate::systems::ui::layout::TextTone;

const fn chalk(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
    Color::Srgba(Srgba::new(
        red as f32 / 255.0,
        green as f32 / 255.0,
        blue as f32 / 255.0,
        alpha as f32 / 255.0,
    ))
}

pub const BACKGROUND_COLOR: Color = chalk(30, 30, 40, 255);
pub const PRIMARY_COLOR: Color = chalk(240, 240, 240, 255);
pub const SECONDARY_COLOR: Color = chalk(180, 220, 180, 255);
pub const HIGHLIGHT_COLOR: Color = chalk(255, 200, 100, 255);
pub const HEADER_COLOR: Color = chalk(40, 35, 30, 255);
pub const FRAME_COLOR: Color = chalk(80, 60, 40, 255);
pub const FRAME_CORNER_COLOR: Color = chalk(130, 100, 70, 255);

pub const BUTTON_COLOR: Color = chalk(100, 80, 60, 255);
pub const HOVERED_BUTTON: Color = chalk(130, 100, 70, 255);
pub const MUTED_BUTTON: Color = chalk(80, 60, 40, 255);

pub const SCROLLBAR_TRACK_COLOR: Color = chalk(60, 50, 40, 100);
pub const SCROLLBAR_THUMB_COLOR: Color = chalk(120, 100, 80, 180);
pub const SCROLLBAR_THUMB_ACTIVE: Color = chalk(150, 130, 110, 220);

pub const SELECTION_OUTLINE_COLOR: Color = chalk(255, 255, 255, 50);
pub const DIM_BACKGROUND_COLOR: Color = chalk(0, 0, 0, 150);
pub const MODAL_BACKGROUND_COLOR: Color = chalk(20, 20, 30, 240);
pub const MODAL_BORDER_COLOR: Color = HIGHLIGHT_COLOR;

pub fn tone_color(tone: TextTone) -> Color {
    match tone {
        TextTone::Primary => PRIMARY_COLOR,
        TextTone::Secondary => SECONDARY_COLOR,
        TextTone::Highlight => HIGHLIGHT_COLOR,
    }
}
