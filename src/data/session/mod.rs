use bevy::prelude::*;

use super::{
    catalog::Catalog,
    order::{aggregate, AggregatedLine, RawOrder},
    states::KioskScreen,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Numerário",
            PaymentMethod::Card => "Cartão",
        }
    }

    pub fn bill_caption(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Pagamento em Numerário",
            PaymentMethod::Card => "Pagamento em Cartão",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    RemoveQuantity {
        target: AggregatedLine,
        amount: usize,
    },
    PaymentChoice,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::None)
    }

    pub fn remove_quantity(target: AggregatedLine) -> Self {
        Modal::RemoveQuantity { target, amount: 1 }
    }
}

/// Everything the kiosk knows about the customer in front of it.
#[derive(Resource, Clone, Debug, Default, PartialEq, Eq)]
pub struct KioskSession {
    /// Screen that input dispatch and layout read. `State<KioskScreen>` trails it by a frame;
    /// change it only through the reducer so both move together.
    pub screen: KioskScreen,
    pub modal: Modal,
    pub order: RawOrder,
    pub menu_selection: Option<usize>,
    pub order_selection: Option<usize>,
    pub payment: Option<PaymentMethod>,
}

impl KioskSession {
    pub fn aggregated(&self, catalog: &Catalog) -> Vec<AggregatedLine> {
        aggregate(&self.order, catalog)
    }

    pub fn clear_selections(&mut self) {
        self.menu_selection = None;
        self.order_selection = None;
    }

    pub fn enter_screen(&mut self, screen: KioskScreen) {
        self.screen = screen;
        self.clear_selections();
    }
}
