//! Quote domain: price requests, server-confirmed quotes, rejections.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod source;
pub mod wire;

pub use source::QuoteSource;

use crate::shared::{PostalCode, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the controller asks the pricing route to price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub product_id: ProductId,
    pub quantity: f64,
    pub postal_code: PostalCode,
    pub is_ul: bool,
}

impl QuoteRequest {
    pub fn to_params(&self) -> wire::PriceUpdateParams {
        wire::PriceUpdateParams {
            product_id: self.product_id,
            quantity: self.quantity,
            postal_code: self.postal_code.clone(),
            ul: self.is_ul,
        }
    }
}

/// A priced quote, immutable once received.
///
/// `product_id` and `quantity` are the server-confirmed values, which may
/// differ from the requested ones (the shop switches to the degressive
/// product above a volume threshold).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub product_id: ProductId,
    pub quantity: f64,
    pub formatted_price: String,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
    /// Quantity the client sent.
    pub requested_quantity: f64,
    pub postal_code: PostalCode,
    pub is_ul: bool,
    pub received_at: DateTime<Utc>,
}

/// Which field a server-side rejection refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionKind {
    Quantity,
    PostalCode,
    /// Any other `error_type`, including none at all.
    Generic(Option<String>),
}

impl RejectionKind {
    pub fn from_error_type(error_type: Option<&str>) -> Self {
        match error_type {
            Some("quantity") => Self::Quantity,
            Some("postal_code") => Self::PostalCode,
            other => Self::Generic(other.map(str::to_string)),
        }
    }
}

/// A domain error reported by the pricing route (e.g. quantity out of range).
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRejection {
    pub kind: RejectionKind,
    pub message: String,
}

impl std::fmt::Display for QuoteRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A well-formed answer from the pricing route.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteResponse {
    Quoted(Quote),
    Rejected(QuoteRejection),
}
