//! Validation of the quantity and postal-code fields.

use super::{ValidInput, Validation, ValidationError, ErrorSlot, INVALID_POSTAL_CODE};
use crate::shared::{parse_leading_number, AllowedPostalCodes, PostalCode};

/// Validates raw field values.
///
/// The postal code is checked first: a non-empty code that is not four
/// digits or not delivered to is an error, an empty one is simply not ready.
/// A quantity that is not a positive number is never an error, only not ready.
pub fn validate(quantity: &str, postal_code: &str, allowed: &AllowedPostalCodes) -> Validation {
    let postal_code = PostalCode::new(postal_code);

    if !postal_code.is_well_formed() || !allowed.contains(&postal_code) {
        if postal_code.is_empty() {
            return Validation::NotReady;
        }
        return Validation::Invalid(vec![ValidationError::new(
            ErrorSlot::PostalCode,
            INVALID_POSTAL_CODE,
        )]);
    }

    match parse_leading_number(quantity) {
        Some(q) if q.is_finite() && q > 0.0 => Validation::Ready(ValidInput {
            quantity: q,
            postal_code,
        }),
        _ => Validation::NotReady,
    }
}
