//! Order domain: the order button's payload and the hand-off it triggers.

use crate::shared::{PostalCode, ProductId};
use serde::{Deserialize, Serialize};

/// Values stored on the order button by the last successful quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub product_id: ProductId,
    pub quantity: f64,
    pub postal_code: PostalCode,
    pub ul: bool,
}

impl OrderPayload {
    /// Builds a payload from raw form values when the button carries none.
    pub fn from_form(
        product_id: Option<ProductId>,
        quantity: Option<f64>,
        postal_code: PostalCode,
        ul: bool,
    ) -> Option<Self> {
        Some(Self {
            product_id: product_id?,
            quantity: quantity?,
            postal_code,
            ul,
        })
    }

    /// Address-collection URL for anonymous visitors, every value percent-encoded.
    pub fn signup_url(&self, path: &str) -> String {
        format!(
            "{}?product_id={}&fuel_quantity={}&postal_code={}&ul={}",
            path,
            urlencoding::encode(&self.product_id.to_string()),
            urlencoding::encode(&self.quantity.to_string()),
            urlencoding::encode(self.postal_code.as_str()),
            urlencoding::encode(if self.ul { "true" } else { "false" }),
        )
    }
}

/// What activating the order button did.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Anonymous visitor sent to the address-collection page.
    Navigate(String),
    /// Logged-in user's form submitted in place with its hidden fields.
    SubmitForm(OrderPayload),
}
