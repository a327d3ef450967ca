//! Plain-data form used by tests and headless hosts.

use super::view::{PriceDisplay, PriceFormView};
use crate::domain::form::ErrorSlot;
use crate::domain::order::OrderPayload;
use crate::shared::ProductId;
use std::collections::HashMap;

/// An in-memory [`PriceFormView`] that records host effects.
#[derive(Debug, Clone, Default)]
pub struct InMemoryForm {
    pub quantity: String,
    pub postal_code: String,
    pub product_id: Option<ProductId>,
    pub order_quantity: Option<f64>,
    pub price: PriceDisplay,
    pub errors: HashMap<ErrorSlot, String>,
    pub order_enabled: bool,
    pub order_payload: Option<OrderPayload>,
    /// URLs passed to `navigate`, oldest first.
    pub navigations: Vec<String>,
    /// Hidden-field values at each `submit_form`.
    pub submissions: Vec<(Option<ProductId>, Option<f64>)>,
}

impl InMemoryForm {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
            ..Self::default()
        }
    }

    /// Pre-filled values, as after a reload or back-navigation.
    pub fn prefilled(product_id: ProductId, quantity: &str, postal_code: &str) -> Self {
        Self {
            quantity: quantity.to_string(),
            postal_code: postal_code.to_string(),
            ..Self::new(product_id)
        }
    }
}

impl PriceFormView for InMemoryForm {
    fn quantity(&self) -> String {
        self.quantity.clone()
    }

    fn set_quantity(&mut self, value: &str) {
        self.quantity = value.to_string();
    }

    fn postal_code(&self) -> String {
        self.postal_code.clone()
    }

    fn set_postal_code(&mut self, value: &str) {
        self.postal_code = value.to_string();
    }

    fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    fn set_product_id(&mut self, id: ProductId) {
        self.product_id = Some(id);
    }

    fn order_quantity(&self) -> Option<f64> {
        self.order_quantity
    }

    fn set_order_quantity(&mut self, quantity: f64) {
        self.order_quantity = Some(quantity);
    }

    fn price(&self) -> PriceDisplay {
        self.price.clone()
    }

    fn set_price(&mut self, display: PriceDisplay) {
        self.price = display;
    }

    fn error(&self, slot: ErrorSlot) -> Option<String> {
        self.errors.get(&slot).cloned()
    }

    fn set_error(&mut self, slot: ErrorSlot, message: Option<String>) {
        match message {
            Some(m) => {
                self.errors.insert(slot, m);
            }
            None => {
                self.errors.remove(&slot);
            }
        }
    }

    fn order_enabled(&self) -> bool {
        self.order_enabled
    }

    fn set_order_enabled(&mut self, enabled: bool) {
        self.order_enabled = enabled;
    }

    fn order_payload(&self) -> Option<OrderPayload> {
        self.order_payload.clone()
    }

    fn set_order_payload(&mut self, payload: Option<OrderPayload>) {
        self.order_payload = payload;
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }

    fn submit_form(&mut self) {
        self.submissions.push((self.product_id, self.order_quantity));
    }
}
