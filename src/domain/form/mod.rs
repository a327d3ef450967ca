//! Form domain: field values, validation results, field-scoped errors.

mod validate;

pub use validate::validate;

use crate::domain::quote::Quote;
use crate::shared::{PostalCode, ProductId};

/// Message shown next to the postal-code field when the code is unknown.
pub const INVALID_POSTAL_CODE: &str = "Invalid postal code.";

/// Which error slot of the form a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSlot {
    Quantity,
    PostalCode,
    /// Not tied to a field. The controller shows generic failures as a
    /// price-area alert and only clears this slot; hosts may use it for
    /// messages of their own.
    Generic,
}

impl ErrorSlot {
    pub const ALL: [ErrorSlot; 3] = [ErrorSlot::Quantity, ErrorSlot::PostalCode, ErrorSlot::Generic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quantity => "quantity",
            Self::PostalCode => "postal_code",
            Self::Generic => "generic",
        }
    }
}

impl std::fmt::Display for ErrorSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-facing error tied to one slot of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub slot: ErrorSlot,
    pub message: String,
}

impl ValidationError {
    pub fn new(slot: ErrorSlot, message: impl Into<String>) -> Self {
        Self {
            slot,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.slot, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Inputs that passed validation and may be priced.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInput {
    pub quantity: f64,
    pub postal_code: PostalCode,
}

/// Result of one validation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Ready(ValidInput),
    /// Input is incomplete; nothing to report to the user yet.
    NotReady,
    Invalid(Vec<ValidationError>),
}

impl Validation {
    pub fn is_ready(&self) -> bool {
        matches!(self, Validation::Ready(_))
    }
}

/// Controller-owned snapshot of the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// `None` when the field does not hold a positive number.
    pub quantity: Option<f64>,
    pub postal_code: PostalCode,
    pub product_id: Option<ProductId>,
    pub is_ul: bool,
    pub last_quote: Option<Quote>,
}

impl FormState {
    pub fn new(is_ul: bool) -> Self {
        Self {
            is_ul,
            ..Self::default()
        }
    }

    /// True when the stored quote was priced for the current field values.
    pub fn quote_matches_inputs(&self) -> bool {
        match (&self.last_quote, self.quantity) {
            (Some(quote), Some(quantity)) => {
                quote.requested_quantity == quantity && quote.postal_code == self.postal_code
            }
            _ => false,
        }
    }
}
