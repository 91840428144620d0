use bevy::{prelude::*, sprite::Anchor};

use crate::{
    data::{catalog::Catalog, session::KioskSession},
    systems::{
        colors::{
            tone_color, BUTTON_COLOR, DIM_BACKGROUND_COLOR, FRAME_COLOR, FRAME_CORNER_COLOR,
            HEADER_COLOR, HOVERED_BUTTON, MODAL_BACKGROUND_COLOR, MODAL_BORDER_COLOR,
            MUTED_BUTTON, PRIMARY_COLOR, SCROLLBAR_THUMB_ACTIVE, SCROLLBAR_THUMB_COLOR,
            SCROLLBAR_TRACK_COLOR, SELECTION_OUTLINE_COLOR, BACKGROUND_COLOR,
        },
        resize::WindowMetrics,
    },
};

use super::{
    layout::{
        compute_layout, ButtonSlot, HitTarget, KioskLayout, ScrollbarSlot, TextAlign, TextSlot,
        HEADER_HEIGHT,
    },
    scroll::ScrollControllers,
};

const CONTENT_Z: f32 = 1.0;
const BACKDROP_Z: f32 = 10.0;
const HEADER_Z: f32 = 10.5;
const CHROME_Z: f32 = 11.0;
const FRAME_Z: f32 = 15.0;
const OVERLAY_Z: f32 = 20.0;
const MODAL_Z: f32 = 21.0;

const FRAME_THICKNESS: f32 = 15.0;
const FRAME_CORNER: f32 = 40.0;
const BUTTON_BORDER: f32 = 3.0;
const BUTTON_LABEL_SIZE: f32 = 28.0;
const STEPPER_LABEL_SIZE: f32 = 36.0;

/// Redraw bookkeeping. Anything that changes what is on screen calls [`KioskView::mark_dirty`].
#[derive(Resource, Debug, PartialEq, Eq)]
pub struct KioskView {
    pub dirty: bool,
    pub hovered: Option<HitTarget>,
}

impl Default for KioskView {
    fn default() -> Self {
        Self {
            dirty: true,
            hovered: None,
        }
    }
}

impl KioskView {
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn set_hovered(&mut self, hovered: Option<HitTarget>) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.dirty = true;
        }
    }
}

#[derive(Component)]
pub struct KioskViewElement;

pub fn refresh_kiosk_layout(
    view: Res<KioskView>,
    metrics: Res<WindowMetrics>,
    session: Res<KioskSession>,
    catalog: Res<Catalog>,
    scrolls: Res<ScrollControllers>,
    mut layout: ResMut<KioskLayout>,
) {
    if !view.dirty {
        return;
    }
    *layout = compute_layout(metrics.size, &session, &catalog, &scrolls);
}

pub fn rebuild_kiosk_view(
    mut commands: Commands,
    mut view: ResMut<KioskView>,
    layout: Res<KioskLayout>,
    scrolls: Res<ScrollControllers>,
    elements: Query<Entity, With<KioskViewElement>>,
) {
    if !view.dirty {
        return;
    }
    view.dirty = false;

    for entity in &elements {
        commands.entity(entity).despawn();
    }

    let painter = Painter {
        window: layout.window,
    };
    let hovered = view.hovered;

    // Header and footer bands hide rows that overhang the viewport.
    painter.rect(
        &mut commands,
        "top_backdrop",
        Rect::new(0.0, 0.0, layout.window.x, layout.viewport.min.y),
        BACKGROUND_COLOR,
        BACKDROP_Z,
    );
    painter.rect(
        &mut commands,
        "header_band",
        Rect::new(0.0, 0.0, layout.window.x, HEADER_HEIGHT),
        HEADER_COLOR,
        HEADER_Z,
    );
    painter.rect(
        &mut commands,
        "footer_backdrop",
        Rect::new(0.0, layout.viewport.max.y, layout.window.x, layout.window.y),
        BACKGROUND_COLOR,
        BACKDROP_Z,
    );
    if let Some(title) = &layout.title {
        painter.text(&mut commands, title, CHROME_Z + 0.2);
    }

    for row in layout.rows.iter().filter(|row| row.selected) {
        painter.outline(
            &mut commands,
            "selection_outline",
            row.rect,
            2.0,
            SELECTION_OUTLINE_COLOR,
            CONTENT_Z,
        );
    }
    for rule in &layout.rules {
        painter.rect(
            &mut commands,
            "rule",
            rule.rect,
            tone_color(rule.tone),
            CONTENT_Z,
        );
    }
    for text in &layout.texts {
        painter.text(&mut commands, text, CONTENT_Z + 0.1);
    }

    for slot in &layout.buttons {
        painter.button(&mut commands, slot, hovered, CHROME_Z);
    }
    for hint in &layout.footer {
        painter.text(&mut commands, hint, CHROME_Z + 0.2);
    }

    if let Some(scrollbar) = layout.scrollbar {
        let active = hovered == Some(HitTarget::ScrollThumb)
            || scrolls.get(layout.screen).is_dragging();
        painter.scrollbar(&mut commands, scrollbar, active);
    }

    painter.frame(&mut commands);

    if let Some(modal) = &layout.modal {
        painter.rect(
            &mut commands,
            "modal_dim",
            Rect::new(0.0, 0.0, layout.window.x, layout.window.y),
            DIM_BACKGROUND_COLOR,
            OVERLAY_Z,
        );
        painter.rect(
            &mut commands,
            "modal_panel",
            modal.panel,
            MODAL_BACKGROUND_COLOR,
            MODAL_Z,
        );
        painter.outline(
            &mut commands,
            "modal_border",
            modal.panel,
            3.0,
            MODAL_BORDER_COLOR,
            MODAL_Z + 0.1,
        );
        for text in &modal.texts {
            painter.text(&mut commands, text, MODAL_Z + 0.5);
        }
        for slot in &modal.buttons {
            painter.button(&mut commands, slot, hovered, MODAL_Z + 0.2);
        }
    }
}

/// Converts window coordinates (top-left origin, y down) into the centred world space of the
/// 2D camera and spawns view elements there.
struct Painter {
    window: Vec2,
}

impl Painter {
    fn to_world(&self, point: Vec2, z: f32) -> Vec3 {
        Vec3::new(
            point.x - self.window.x * 0.5,
            self.window.y * 0.5 - point.y,
            z,
        )
    }

    fn rect(&self, commands: &mut Commands, name: &'static str, rect: Rect, color: Color, z: f32) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        commands.spawn((
            Name::new(name),
            KioskViewElement,
            Sprite::from_color(color, rect.size()),
            Transform::from_translation(self.to_world(rect.center(), z)),
        ));
    }

    fn outline(
        &self,
        commands: &mut Commands,
        name: &'static str,
        rect: Rect,
        thickness: f32,
        color: Color,
        z: f32,
    ) {
        let edges = [
            Rect::new(rect.min.x, rect.min.y, rect.max.x, rect.min.y + thickness),
            Rect::new(rect.min.x, rect.max.y - thickness, rect.max.x, rect.max.y),
            Rect::new(rect.min.x, rect.min.y, rect.min.x + thickness, rect.max.y),
            Rect::new(rect.max.x - thickness, rect.min.y, rect.max.x, rect.max.y),
        ];
        for edge in edges {
            self.rect(commands, name, edge, color, z);
        }
    }

    fn text(&self, commands: &mut Commands, slot: &TextSlot, z: f32) {
        let anchor = match slot.align {
            TextAlign::Left => Anchor::TopLeft,
            TextAlign::Center => Anchor::TopCenter,
            TextAlign::Right => Anchor::TopRight,
        };
        commands.spawn((
            Name::new("kiosk_text"),
            KioskViewElement,
            Text2d::new(slot.text.clone()),
            TextFont {
                font_size: slot.role.font_size(),
                ..default()
            },
            TextColor(tone_color(slot.tone)),
            anchor,
            Transform::from_translation(self.to_world(slot.anchor, z)),
        ));
    }

    fn button(
        &self,
        commands: &mut Commands,
        slot: &ButtonSlot,
        hovered: Option<HitTarget>,
        z: f32,
    ) {
        let fill = if hovered == Some(HitTarget::Button(slot.button)) || slot.button.is_emphasised()
        {
            HOVERED_BUTTON
        } else if slot.button.is_muted() {
            MUTED_BUTTON
        } else {
            BUTTON_COLOR
        };
        self.rect(commands, "button_fill", slot.rect, fill, z);
        self.outline(
            commands,
            "button_border",
            slot.rect,
            BUTTON_BORDER,
            PRIMARY_COLOR,
            z + 0.05,
        );

        let font_size = if slot.button.is_round() {
            STEPPER_LABEL_SIZE
        } else {
            BUTTON_LABEL_SIZE
        };
        commands.spawn((
            Name::new("button_label"),
            KioskViewElement,
            Text2d::new(slot.button.label()),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(PRIMARY_COLOR),
            Anchor::Center,
            Transform::from_translation(self.to_world(slot.rect.center(), z + 0.1)),
        ));
    }

    fn scrollbar(&self, commands: &mut Commands, scrollbar: ScrollbarSlot, active: bool) {
        self.rect(
            commands,
            "scrollbar_track",
            scrollbar.track,
            SCROLLBAR_TRACK_COLOR,
            CHROME_Z,
        );
        let thumb_color = if active {
            SCROLLBAR_THUMB_ACTIVE
        } else {
            SCROLLBAR_THUMB_COLOR
        };
        self.rect(
            commands,
            "scrollbar_thumb",
            scrollbar.thumb,
            thumb_color,
            CHROME_Z + 0.1,
        );
        self.outline(
            commands,
            "scrollbar_thumb_border",
            scrollbar.thumb,
            1.0,
            PRIMARY_COLOR,
            CHROME_Z + 0.2,
        );
    }

    fn frame(&self, commands: &mut Commands) {
        let size = self.window;
        self.outline(
            commands,
            "frame",
            Rect::new(0.0, 0.0, size.x, size.y),
            FRAME_THICKNESS,
            FRAME_COLOR,
            FRAME_Z,
        );

        let far_x = size.x - 10.0;
        let far_y = size.y - 10.0;
        let corners = [
            Rect::new(10.0, 10.0, 10.0 + FRAME_CORNER, 20.0),
            Rect::new(10.0, 10.0, 20.0, 10.0 + FRAME_CORNER),
            Rect::new(far_x - FRAME_CORNER, 10.0, far_x, 20.0),
            Rect::new(far_x - 10.0, 10.0, far_x, 10.0 + FRAME_CORNER),
            Rect::new(10.0, far_y - 10.0, 10.0 + FRAME_CORNER, far_y),
            Rect::new(10.0, far_y - FRAME_CORNER, 20.0, far_y),
            Rect::new(far_x - FRAME_CORNER, far_y - 10.0, far_x, far_y),
            Rect::new(far_x - 10.0, far_y - FRAME_CORNER, far_x, far_y),
        ];
        for corner in corners {
            self.rect(commands, "frame_corner", corner, FRAME_CORNER_COLOR, FRAME_Z + 0.1);
        }
    }
}
