//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the pricing route uses, so they can be used directly in wire
//! types without conversion overhead.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::str::FromStr;

// ─── ProductId ───────────────────────────────────────────────────────────────

/// Newtype for shop product identifiers (e.g. `42`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    /// Parses the leading integer of a hidden-field value (`"42"`, `" 42 "`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(ProductId)
    }
}

impl Serialize for ProductId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        Ok(ProductId(id))
    }
}

// ─── PostalCode ──────────────────────────────────────────────────────────────

/// A postal code as typed by the user, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn new(s: &str) -> Self {
        Self(s.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exactly four ASCII digits.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 4 && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PostalCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PostalCode {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl Serialize for PostalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PostalCode::new(&s))
    }
}

// ─── AllowedPostalCodes ──────────────────────────────────────────────────────

/// The read-only set of postal codes the shop delivers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedPostalCodes(BTreeSet<String>);

impl AllowedPostalCodes {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            codes
                .into_iter()
                .map(|c| c.as_ref().trim().to_string())
                .collect(),
        )
    }

    pub fn contains(&self, code: &PostalCode) -> bool {
        self.0.contains(code.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for AllowedPostalCodes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ─── Number parsing ──────────────────────────────────────────────────────────

/// Parses the longest numeric prefix of `input`, the way a browser's
/// `parseFloat` reads a number field (`"1500L"` → `1500.0`).
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits = has_digits || frac_end > frac_start;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code_trims_and_checks_shape() {
        assert!(PostalCode::new(" 4990 ").is_well_formed());
        assert!(!PostalCode::new("499").is_well_formed());
        assert!(!PostalCode::new("49901").is_well_formed());
        assert!(!PostalCode::new("49a0").is_well_formed());
        assert!(PostalCode::new("   ").is_empty());
    }

    #[test]
    fn test_allowed_codes_membership() {
        let allowed = AllowedPostalCodes::new(["4990", "6960"]);
        assert!(allowed.contains(&PostalCode::new("6960")));
        assert!(!allowed.contains(&PostalCode::new("1000")));
        assert_eq!(allowed.len(), 2);
    }

    #[test]
    fn test_allowed_codes_deserialize_from_list() {
        let allowed: AllowedPostalCodes = serde_json::from_str(r#"["4990","6960"]"#).unwrap();
        assert!(allowed.contains(&PostalCode::new("4990")));
    }

    #[test]
    fn test_product_id_from_hidden_field() {
        assert_eq!(" 42 ".parse::<ProductId>().unwrap(), ProductId::new(42));
        assert!("".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("1500"), Some(1500.0));
        assert_eq!(parse_leading_number(" 1500.5L"), Some(1500.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("-3"), Some(-3.0));
        assert_eq!(parse_leading_number("2e3 litres"), Some(2000.0));
        assert_eq!(parse_leading_number("12e"), Some(12.0));
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("."), None);
    }
}
