//! The form as seen by the controller: typed accessors instead of DOM lookups.

use crate::domain::form::ErrorSlot;
use crate::domain::order::OrderPayload;
use crate::shared::ProductId;

/// Neutral text shown while inputs are incomplete.
pub const PRICE_PLACEHOLDER: &str = "--- Enter postal code and quantity ---";

/// Shown when no usable answer came back from the shop.
pub const SERVER_ERROR: &str = "Server error.";

/// Shown when the page carries no product to price.
pub const PRODUCT_UNAVAILABLE: &str = "Product unavailable.";

/// What the price area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PriceDisplay {
    #[default]
    Placeholder,
    Loading,
    Price(String),
    /// `---`, after a postal-code rejection.
    Unavailable,
    /// Message rendered in an alerting style.
    Alert(String),
}

impl PriceDisplay {
    pub fn text(&self) -> &str {
        match self {
            Self::Placeholder => PRICE_PLACEHOLDER,
            Self::Loading => "…",
            Self::Price(p) => p,
            Self::Unavailable => "---",
            Self::Alert(m) => m,
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Alert(_))
    }
}

impl std::fmt::Display for PriceDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Accessors for every element of the pricing form the controller touches.
///
/// Implemented by the host's UI binding; [`InMemoryForm`](super::InMemoryForm)
/// is a plain-data implementation.
pub trait PriceFormView: Send {
    // ── Inputs ───────────────────────────────────────────────────────────
    fn quantity(&self) -> String;
    fn set_quantity(&mut self, value: &str);
    fn postal_code(&self) -> String;
    fn set_postal_code(&mut self, value: &str);

    // ── Hidden fields posted with the form ───────────────────────────────
    fn product_id(&self) -> Option<ProductId>;
    fn set_product_id(&mut self, id: ProductId);
    fn order_quantity(&self) -> Option<f64>;
    fn set_order_quantity(&mut self, quantity: f64);

    // ── Price area ───────────────────────────────────────────────────────
    fn price(&self) -> PriceDisplay;
    fn set_price(&mut self, display: PriceDisplay);

    // ── Error slots ──────────────────────────────────────────────────────
    fn error(&self, slot: ErrorSlot) -> Option<String>;
    fn set_error(&mut self, slot: ErrorSlot, message: Option<String>);

    // ── Order button ─────────────────────────────────────────────────────
    fn order_enabled(&self) -> bool;
    fn set_order_enabled(&mut self, enabled: bool);
    fn order_payload(&self) -> Option<OrderPayload>;
    fn set_order_payload(&mut self, payload: Option<OrderPayload>);

    // ── Host effects ─────────────────────────────────────────────────────
    fn navigate(&mut self, url: &str);
    /// Submits the form to its own action endpoint
    /// ([`CREATE_ORDER_PATH`](crate::network::CREATE_ORDER_PATH) on product pages).
    fn submit_form(&mut self);
}
