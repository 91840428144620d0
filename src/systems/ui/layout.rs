use bevy::prelude::*;
use smallvec::SmallVec;

use crate::{
    data::{
        catalog::Catalog,
        order::{aggregated_total, category_group_count, AggregatedLine},
        session::{KioskSession, Modal, PaymentMethod},
        states::KioskScreen,
    },
    systems::kiosk::KioskCommand,
};

use super::scroll::ScrollControllers;

pub const HEADER_HEIGHT: f32 = 100.0;
pub const VIEWPORT_TOP: f32 = 120.0;
pub const VIEWPORT_BOTTOM_INSET: f32 = 100.0;
pub const VIEWPORT_SIDE_INSET: f32 = 50.0;
pub const SCROLLBAR_RIGHT_INSET: f32 = 40.0;
pub const SCROLLBAR_WIDTH: f32 = 12.0;

pub const CATEGORY_BAND: f32 = 50.0;
pub const ROW_STEP: f32 = 45.0;
pub const ROW_HEIGHT: f32 = 40.0;

const ORDER_TITLE_BAND: f32 = 60.0;
const ORDER_SUMMARY_BAND: f32 = 80.0;
const ORDER_FOOTER_CLEARANCE: f32 = 140.0;
const BILL_TITLE_BAND: f32 = 80.0;
const BILL_SUMMARY_BAND: f32 = 140.0;
const EMPTY_CONTENT_HEIGHT: f32 = 100.0;

const FOOTER_BUTTON_TOP_INSET: f32 = 100.0;
const FOOTER_BUTTON_HEIGHT: f32 = 60.0;
const FOOTER_HINT_TOP_INSET: f32 = 40.0;

const REMOVE_MODAL_SIZE: Vec2 = Vec2::new(550.0, 380.0);
const PAYMENT_MODAL_SIZE: Vec2 = Vec2::new(550.0, 320.0);
const STEPPER_SIZE: f32 = 50.0;
const STEPPER_SPACING: f32 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KioskButton {
    ViewOrder,
    Add,
    Finish,
    Exit,
    Back,
    Remove,
    Clear,
    NewOrder,
    DecrementRemoval,
    IncrementRemoval,
    CancelRemoval,
    ConfirmRemoval,
    PayCash,
    PayCard,
    CancelPayment,
}

impl KioskButton {
    pub fn label(self) -> &'static str {
        match self {
            KioskButton::ViewOrder => "Ver Pedido",
            KioskButton::Add => "Adicionar",
            KioskButton::Finish => "Finalizar",
            KioskButton::Exit => "Sair",
            KioskButton::Back => "Voltar",
            KioskButton::Remove => "Remover",
            KioskButton::Clear => "Limpar",
            KioskButton::NewOrder => "Novo Pedido",
            KioskButton::DecrementRemoval => "-",
            KioskButton::IncrementRemoval => "+",
            KioskButton::CancelRemoval | KioskButton::CancelPayment => "Cancelar",
            KioskButton::ConfirmRemoval => "Confirmar",
            KioskButton::PayCash => PaymentMethod::Cash.label(),
            KioskButton::PayCard => PaymentMethod::Card.label(),
        }
    }

    pub fn command(self) -> KioskCommand {
        match self {
            KioskButton::ViewOrder => KioskCommand::ViewOrder,
            KioskButton::Add => KioskCommand::AddSelected,
            KioskButton::Finish => KioskCommand::Finish,
            KioskButton::Exit => KioskCommand::Exit,
            KioskButton::Back => KioskCommand::BackToMenu,
            KioskButton::Remove => KioskCommand::RemoveSelected,
            KioskButton::Clear => KioskCommand::ClearOrder,
            KioskButton::NewOrder => KioskCommand::NewOrder,
            KioskButton::DecrementRemoval => KioskCommand::DecrementRemoval,
            KioskButton::IncrementRemoval => KioskCommand::IncrementRemoval,
            KioskButton::CancelRemoval => KioskCommand::CancelRemoval,
            KioskButton::ConfirmRemoval => KioskCommand::ConfirmRemoval,
            KioskButton::PayCash => KioskCommand::ChoosePayment(PaymentMethod::Cash),
            KioskButton::PayCard => KioskCommand::ChoosePayment(PaymentMethod::Card),
            KioskButton::CancelPayment => KioskCommand::CancelPayment,
        }
    }

    /// Modal accept buttons are drawn with the hover fill even when idle.
    pub fn is_emphasised(self) -> bool {
        matches!(self, KioskButton::ConfirmRemoval)
    }

    pub fn is_muted(self) -> bool {
        matches!(self, KioskButton::CancelPayment)
    }

    pub fn is_round(self) -> bool {
        matches!(
            self,
            KioskButton::DecrementRemoval | KioskButton::IncrementRemoval
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowTarget {
    MenuItem(usize),
    OrderLine(usize),
}

impl RowTarget {
    pub fn command(self) -> KioskCommand {
        match self {
            RowTarget::MenuItem(index) => KioskCommand::SelectMenuItem(index),
            RowTarget::OrderLine(index) => KioskCommand::SelectOrderLine(index),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTarget {
    Button(KioskButton),
    Row(RowTarget),
    ScrollThumb,
}

impl HitTarget {
    pub fn command(self) -> Option<KioskCommand> {
        match self {
            HitTarget::Button(button) => Some(button.command()),
            HitTarget::Row(row) => Some(row.command()),
            HitTarget::ScrollThumb => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Category,
    Item,
    Price,
    Hint,
    ModalTitle,
    ModalBody,
}

impl TextRole {
    pub fn font_size(self) -> f32 {
        match self {
            TextRole::Title => 48.0,
            TextRole::Category => 32.0,
            TextRole::Item => 28.0,
            TextRole::Price => 26.0,
            TextRole::Hint | TextRole::ModalTitle => 24.0,
            TextRole::ModalBody => 22.0,
        }
    }

    pub fn line_height(self) -> f32 {
        (self.font_size() * 1.3).ceil()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTone {
    Primary,
    Secondary,
    Highlight,
}

/// `anchor.x` is the left edge, centre or right edge depending on `align`; `anchor.y` is the
/// top of the line.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSlot {
    pub text: String,
    pub anchor: Vec2,
    pub align: TextAlign,
    pub role: TextRole,
    pub tone: TextTone,
}

impl TextSlot {
    fn new(text: impl Into<String>, anchor: Vec2, align: TextAlign, role: TextRole, tone: TextTone) -> Self {
        Self {
            text: text.into(),
            anchor,
            align,
            role,
            tone,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonSlot {
    pub button: KioskButton,
    pub rect: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSlot {
    pub target: RowTarget,
    pub rect: Rect,
    pub selected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuleSlot {
    pub rect: Rect,
    pub tone: TextTone,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarSlot {
    pub track: Rect,
    pub thumb: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalLayout {
    pub panel: Rect,
    pub texts: Vec<TextSlot>,
    pub buttons: SmallVec<[ButtonSlot; 4]>,
}

/// Everything drawn or clickable on the current frame, in window coordinates
/// (origin top-left, y down).
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct KioskLayout {
    pub window: Vec2,
    pub screen: KioskScreen,
    pub viewport: Rect,
    pub title: Option<TextSlot>,
    pub buttons: SmallVec<[ButtonSlot; 4]>,
    pub rows: Vec<RowSlot>,
    pub texts: Vec<TextSlot>,
    pub rules: Vec<RuleSlot>,
    pub footer: Vec<TextSlot>,
    pub scrollbar: Option<ScrollbarSlot>,
    pub modal: Option<ModalLayout>,
}

impl KioskLayout {
    /// While a modal is open only its controls are hit-testable.
    pub fn hit_test(&self, point: Vec2) -> Option<HitTarget> {
        if let Some(modal) = &self.modal {
            return modal
                .buttons
                .iter()
                .find(|slot| slot.rect.contains(point))
                .map(|slot| HitTarget::Button(slot.button));
        }

        if self
            .scrollbar
            .is_some_and(|scrollbar| scrollbar.thumb.contains(point))
        {
            return Some(HitTarget::ScrollThumb);
        }

        if let Some(slot) = self.buttons.iter().find(|slot| slot.rect.contains(point)) {
            return Some(HitTarget::Button(slot.button));
        }

        if !self.viewport.contains(point) {
            return None;
        }
        self.rows
            .iter()
            .find(|slot| slot.rect.contains(point))
            .map(|slot| HitTarget::Row(slot.target))
    }
}

fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

pub fn viewport_rect(window: Vec2) -> Rect {
    Rect::new(
        VIEWPORT_SIDE_INSET,
        VIEWPORT_TOP,
        (window.x - VIEWPORT_SIDE_INSET).max(VIEWPORT_SIDE_INSET),
        (window.y - VIEWPORT_BOTTOM_INSET).max(VIEWPORT_TOP),
    )
}

/// Scrollbar column; its vertical extent is the scrollable viewport.
pub fn scroll_track_rect(window: Vec2) -> Rect {
    let viewport = viewport_rect(window);
    let x = (window.x - SCROLLBAR_RIGHT_INSET).max(0.0);
    Rect::new(x, viewport.min.y, x + SCROLLBAR_WIDTH, viewport.max.y)
}

pub fn content_height(screen: KioskScreen, session: &KioskSession, catalog: &Catalog) -> f32 {
    match screen {
        KioskScreen::Menu => {
            catalog.category_group_count() as f32 * CATEGORY_BAND
                + catalog.entries().len() as f32 * ROW_STEP
        }
        KioskScreen::Order => {
            if session.order.is_empty() {
                return EMPTY_CONTENT_HEIGHT;
            }
            let lines = session.aggregated(catalog);
            ORDER_TITLE_BAND
                + category_group_count(&lines) as f32 * CATEGORY_BAND
                + lines.len() as f32 * ROW_STEP
                + ORDER_SUMMARY_BAND
                + ORDER_FOOTER_CLEARANCE
        }
        KioskScreen::Bill => {
            if session.order.is_empty() {
                return EMPTY_CONTENT_HEIGHT;
            }
            let lines = session.aggregated(catalog);
            BILL_TITLE_BAND + lines.len() as f32 * ROW_STEP + BILL_SUMMARY_BAND
        }
    }
}

pub fn footer_buttons(screen: KioskScreen, window: Vec2) -> SmallVec<[ButtonSlot; 4]> {
    let top = window.y - FOOTER_BUTTON_TOP_INSET;
    let buttons: &[KioskButton] = match screen {
        KioskScreen::Menu => &[
            KioskButton::ViewOrder,
            KioskButton::Add,
            KioskButton::Finish,
            KioskButton::Exit,
        ],
        KioskScreen::Order => &[
            KioskButton::Back,
            KioskButton::Remove,
            KioskButton::Clear,
            KioskButton::Finish,
        ],
        KioskScreen::Bill => &[KioskButton::NewOrder, KioskButton::Exit],
    };

    let (width, spacing) = match screen {
        KioskScreen::Menu | KioskScreen::Order => {
            let width = 200.0_f32.min((window.x / 6.0).floor() - 20.0).max(1.0);
            (width, ((window.x - 4.0 * width) / 5.0).floor())
        }
        KioskScreen::Bill => {
            let width = 180.0_f32.min((window.x / 4.0).floor() - 20.0).max(1.0);
            (width, ((window.x - 2.0 * width) / 3.0).floor())
        }
    };

    buttons
        .iter()
        .enumerate()
        .map(|(index, &button)| {
            let index = index as f32;
            ButtonSlot {
                button,
                rect: rect(
                    spacing * (index + 1.0) + width * index,
                    top,
                    width,
                    FOOTER_BUTTON_HEIGHT,
                ),
            }
        })
        .collect()
}

struct ContentBuilder<'a> {
    viewport: Rect,
    texts: &'a mut Vec<TextSlot>,
    rules: &'a mut Vec<RuleSlot>,
    rows: &'a mut Vec<RowSlot>,
}

impl ContentBuilder<'_> {
    fn visible(&self, top: f32, height: f32) -> bool {
        top < self.viewport.max.y && top + height > self.viewport.min.y
    }

    fn text(&mut self, slot: TextSlot) {
        if self.visible(slot.anchor.y, slot.role.line_height()) {
            self.texts.push(slot);
        }
    }

    fn rule(&mut self, rule: RuleSlot) {
        if self.visible(rule.rect.min.y, rule.rect.height()) {
            self.rules.push(rule);
        }
    }

    fn row(&mut self, row: RowSlot) {
        if self.visible(row.rect.min.y, row.rect.height()) {
            self.rows.push(row);
        }
    }
}

fn tone_for(selected: bool) -> TextTone {
    if selected {
        TextTone::Highlight
    } else {
        TextTone::Primary
    }
}

fn layout_menu(
    builder: &mut ContentBuilder,
    window: Vec2,
    session: &KioskSession,
    catalog: &Catalog,
    offset: f32,
) {
    let mut y = VIEWPORT_TOP - offset;
    let mut current_category: Option<&str> = None;

    for (index, entry) in catalog.entries().iter().enumerate() {
        if current_category != Some(entry.category.as_str()) {
            current_category = Some(entry.category.as_str());
            builder.text(TextSlot::new(
                entry.category.to_uppercase(),
                Vec2::new(100.0, y),
                TextAlign::Left,
                TextRole::Category,
                TextTone::Secondary,
            ));
            builder.rule(RuleSlot {
                rect: rect(100.0, y + 40.0, 300.0, 2.0),
                tone: TextTone::Secondary,
            });
            y += CATEGORY_BAND;
        }

        let selected = session.menu_selection == Some(index);
        builder.row(RowSlot {
            target: RowTarget::MenuItem(index),
            rect: rect(100.0, y, window.x - 200.0, ROW_HEIGHT),
            selected,
        });
        builder.text(TextSlot::new(
            entry.name.clone(),
            Vec2::new(120.0, y),
            TextAlign::Left,
            TextRole::Item,
            tone_for(selected),
        ));
        builder.text(TextSlot::new(
            entry.price.to_string(),
            Vec2::new(window.x - 120.0, y),
            TextAlign::Right,
            TextRole::Price,
            TextTone::Secondary,
        ));
        y += ROW_STEP;
    }
}

/// Returns the top of the total line so the caller can tell whether it is on screen.
fn layout_order(
    builder: &mut ContentBuilder,
    window: Vec2,
    session: &KioskSession,
    lines: &[AggregatedLine],
    offset: f32,
) -> Option<f32> {
    let mut y = VIEWPORT_TOP - offset;
    builder.text(TextSlot::new(
        "SEU PEDIDO",
        Vec2::new(window.x * 0.5, y),
        TextAlign::Center,
        TextRole::Category,
        TextTone::Highlight,
    ));
    y += ORDER_TITLE_BAND;

    if lines.is_empty() {
        builder.text(TextSlot::new(
            "O pedido está vazio.",
            Vec2::new(window.x * 0.5, y),
            TextAlign::Center,
            TextRole::Item,
            TextTone::Secondary,
        ));
        return None;
    }

    // Hit-testing ignores anything past the viewport edge.
    let row_right = viewport_rect(window).max.x.max(160.0);
    let mut current_category: Option<&str> = None;
    for (index, line) in lines.iter().enumerate() {
        if current_category != Some(line.entry.category.as_str()) {
            current_category = Some(line.entry.category.as_str());
            builder.text(TextSlot::new(
                line.entry.category.to_uppercase(),
                Vec2::new(150.0, y),
                TextAlign::Left,
                TextRole::Category,
                TextTone::Secondary,
            ));
            y += CATEGORY_BAND;
        }

        let selected = session.order_selection == Some(index);
        builder.row(RowSlot {
            target: RowTarget::OrderLine(index),
            rect: Rect::new(160.0, y - 5.0, row_right, y - 5.0 + ROW_HEIGHT),
            selected,
        });
        builder.text(TextSlot::new(
            format!("{}x {}", line.quantity, line.entry.name),
            Vec2::new(170.0, y),
            TextAlign::Left,
            TextRole::Item,
            tone_for(selected),
        ));
        builder.text(TextSlot::new(
            line.line_total().to_string(),
            Vec2::new(window.x - 150.0, y),
            TextAlign::Right,
            TextRole::Price,
            TextTone::Secondary,
        ));
        y += ROW_STEP;
    }

    y += 20.0;
    builder.rule(RuleSlot {
        rect: Rect::new(150.0, y, window.x - 150.0, y + 2.0),
        tone: TextTone::Primary,
    });
    y += 30.0;
    builder.text(TextSlot::new(
        format!("TOTAL: {}", aggregated_total(lines)),
        Vec2::new(window.x - 150.0, y),
        TextAlign::Right,
        TextRole::Category,
        TextTone::Highlight,
    ));
    Some(y)
}

fn layout_bill(
    builder: &mut ContentBuilder,
    window: Vec2,
    session: &KioskSession,
    lines: &[AggregatedLine],
    offset: f32,
) {
    let mut y = VIEWPORT_TOP - offset;
    builder.text(TextSlot::new(
        "CONTA FINAL",
        Vec2::new(window.x * 0.5, y),
        TextAlign::Center,
        TextRole::Title,
        TextTone::Highlight,
    ));
    y += BILL_TITLE_BAND;

    if lines.is_empty() {
        return;
    }

    for line in lines {
        builder.text(TextSlot::new(
            format!("{}x {}", line.quantity, line.entry.name),
            Vec2::new(200.0, y),
            TextAlign::Left,
            TextRole::Item,
            TextTone::Primary,
        ));
        builder.text(TextSlot::new(
            line.line_total().to_string(),
            Vec2::new(window.x - 200.0, y),
            TextAlign::Right,
            TextRole::Price,
            TextTone::Secondary,
        ));
        y += ROW_STEP;
    }

    y += 30.0;
    builder.rule(RuleSlot {
        rect: Rect::new(200.0, y, window.x - 200.0, y + 3.0),
        tone: TextTone::Highlight,
    });
    y += 50.0;
    builder.text(TextSlot::new(
        format!("TOTAL A PAGAR: {}", aggregated_total(lines)),
        Vec2::new(window.x * 0.5, y),
        TextAlign::Center,
        TextRole::Category,
        TextTone::Highlight,
    ));
    y += 60.0;
    if let Some(method) = session.payment {
        builder.text(TextSlot::new(
            method.bill_caption(),
            Vec2::new(window.x * 0.5, y),
            TextAlign::Center,
            TextRole::ModalTitle,
            TextTone::Secondary,
        ));
        y += 50.0;
    }
    builder.text(TextSlot::new(
        "Obrigado! Volte sempre!",
        Vec2::new(window.x * 0.5, y),
        TextAlign::Center,
        TextRole::Item,
        TextTone::Secondary,
    ));
}

fn footer_hints(
    screen: KioskScreen,
    window: Vec2,
    session: &KioskSession,
    total_hidden: bool,
) -> Vec<TextSlot> {
    let y = window.y - FOOTER_HINT_TOP_INSET;
    let mut hints = Vec::new();
    match screen {
        KioskScreen::Menu => {
            hints.push(TextSlot::new(
                format!("Itens no pedido: {}", session.order.len()),
                Vec2::new(window.x - 250.0, y),
                TextAlign::Left,
                TextRole::Hint,
                TextTone::Secondary,
            ));
            let instruction = if session.menu_selection.is_some() {
                "Item Selecionado. Clique em \"Adicionar\" para adicionar."
            } else {
                "Clique em um item para selecionar • Use a roda do mouse para scroll"
            };
            hints.push(TextSlot::new(
                instruction,
                Vec2::new(50.0, y),
                TextAlign::Left,
                TextRole::Hint,
                TextTone::Secondary,
            ));
        }
        KioskScreen::Order => {
            let instruction = if session.order_selection.is_some() {
                "Item selecionado. Clique em 'Remover' para remover."
            } else {
                "Clique em um item do pedido para selecioná-lo"
            };
            hints.push(TextSlot::new(
                instruction,
                Vec2::new(50.0, y),
                TextAlign::Left,
                TextRole::Hint,
                TextTone::Secondary,
            ));
            if total_hidden {
                hints.push(TextSlot::new(
                    "... mais itens (faça scroll para ver o total)",
                    Vec2::new(window.x * 0.5, window.y - 120.0 - TextRole::Item.line_height()),
                    TextAlign::Center,
                    TextRole::Item,
                    TextTone::Secondary,
                ));
            }
        }
        KioskScreen::Bill => {}
    }
    hints
}

fn centered_panel(window: Vec2, size: Vec2) -> Rect {
    let x = ((window.x - size.x) * 0.5).floor();
    let y = ((window.y - size.y) * 0.5).floor();
    rect(x, y, size.x, size.y)
}

fn modal_layout(window: Vec2, modal: &Modal) -> Option<ModalLayout> {
    match modal {
        Modal::None => None,
        Modal::RemoveQuantity { target, amount } => {
            let panel = centered_panel(window, REMOVE_MODAL_SIZE);
            let center_x = panel.center().x;
            let value_top = panel.min.y + 210.0;
            let value_center_y = value_top + TextRole::Category.line_height() * 0.5;
            let stepper = |center: f32| {
                rect(
                    center - STEPPER_SIZE * 0.5,
                    value_center_y - STEPPER_SIZE * 0.5,
                    STEPPER_SIZE,
                    STEPPER_SIZE,
                )
            };
            let action_top = panel.max.y - 50.0 - 30.0;

            let texts = vec![
                TextSlot::new(
                    "Quantos itens pretende remover?",
                    Vec2::new(center_x, panel.min.y + 30.0),
                    TextAlign::Center,
                    TextRole::ModalTitle,
                    TextTone::Primary,
                ),
                TextSlot::new(
                    target.entry.name.clone(),
                    Vec2::new(center_x, panel.min.y + 80.0),
                    TextAlign::Center,
                    TextRole::ModalBody,
                    TextTone::Primary,
                ),
                TextSlot::new(
                    format!("Quantidade no pedido: {}", target.quantity),
                    Vec2::new(center_x, panel.min.y + 120.0),
                    TextAlign::Center,
                    TextRole::ModalBody,
                    TextTone::Secondary,
                ),
                TextSlot::new(
                    "Quantidade a remover:",
                    Vec2::new(center_x, panel.min.y + 180.0),
                    TextAlign::Center,
                    TextRole::ModalBody,
                    TextTone::Primary,
                ),
                TextSlot::new(
                    amount.to_string(),
                    Vec2::new(center_x, value_top),
                    TextAlign::Center,
                    TextRole::Category,
                    TextTone::Highlight,
                ),
            ];

            let buttons = SmallVec::from_buf([
                ButtonSlot {
                    button: KioskButton::DecrementRemoval,
                    rect: stepper(center_x - STEPPER_SPACING),
                },
                ButtonSlot {
                    button: KioskButton::IncrementRemoval,
                    rect: stepper(center_x + STEPPER_SPACING),
                },
                ButtonSlot {
                    button: KioskButton::CancelRemoval,
                    rect: rect(panel.min.x + 40.0, action_top, 180.0, 50.0),
                },
                ButtonSlot {
                    button: KioskButton::ConfirmRemoval,
                    rect: rect(panel.max.x - 180.0 - 40.0, action_top, 180.0, 50.0),
                },
            ]);

            Some(ModalLayout {
                panel,
                texts,
                buttons,
            })
        }
        Modal::PaymentChoice => {
            let panel = centered_panel(window, PAYMENT_MODAL_SIZE);
            let center_x = panel.center().x;
            let choice_top = panel.min.y + 100.0;

            let texts = vec![TextSlot::new(
                "Escolha o método de pagamento",
                Vec2::new(center_x, panel.min.y + 30.0),
                TextAlign::Center,
                TextRole::ModalTitle,
                TextTone::Primary,
            )];

            let mut buttons = SmallVec::new();
            buttons.push(ButtonSlot {
                button: KioskButton::PayCash,
                rect: rect(center_x - 200.0 - 10.0, choice_top, 200.0, 60.0),
            });
            buttons.push(ButtonSlot {
                button: KioskButton::PayCard,
                rect: rect(center_x + 10.0, choice_top, 200.0, 60.0),
            });
            buttons.push(ButtonSlot {
                button: KioskButton::CancelPayment,
                rect: rect(center_x - 100.0, panel.max.y - 60.0 - 30.0, 200.0, 60.0),
            });

            Some(ModalLayout {
                panel,
                texts,
                buttons,
            })
        }
    }
}

pub fn compute_layout(
    window: Vec2,
    session: &KioskSession,
    catalog: &Catalog,
    scrolls: &ScrollControllers,
) -> KioskLayout {
    let screen = session.screen;
    let controller = scrolls.get(screen);
    let offset = controller.offset();
    let viewport = viewport_rect(window);

    let mut texts = Vec::new();
    let mut rules = Vec::new();
    let mut rows = Vec::new();
    let mut builder = ContentBuilder {
        viewport,
        texts: &mut texts,
        rules: &mut rules,
        rows: &mut rows,
    };

    let mut total_hidden = false;
    match screen {
        KioskScreen::Menu => layout_menu(&mut builder, window, session, catalog, offset),
        KioskScreen::Order => {
            let lines = session.aggregated(catalog);
            if let Some(total_top) = layout_order(&mut builder, window, session, &lines, offset) {
                total_hidden = total_top >= viewport.max.y;
            }
        }
        KioskScreen::Bill => {
            let lines = session.aggregated(catalog);
            layout_bill(&mut builder, window, session, &lines, offset);
        }
    }

    let scrollbar = controller
        .track_rect()
        .zip(controller.thumb_rect())
        .map(|(track, thumb)| ScrollbarSlot { track, thumb });

    KioskLayout {
        window,
        screen,
        viewport,
        title: Some(TextSlot::new(
            screen.title(),
            Vec2::new(window.x * 0.5, (HEADER_HEIGHT - TextRole::Title.line_height()) * 0.5),
            TextAlign::Center,
            TextRole::Title,
            TextTone::Highlight,
        )),
        buttons: footer_buttons(screen, window),
        rows,
        texts,
        rules,
        footer: footer_hints(screen, window, session, total_hidden),
        scrollbar,
        modal: modal_layout(window, &session.modal),
    }
}
