//! Controller configuration and host-page globals.
//!
//! The controller receives a [`ControllerConfig`] at construction. Product
//! pages inject their settings as globals; [`HostGlobals`] reads that shape.

use crate::error::SdkError;
use crate::shared::serde_util;
use crate::shared::AllowedPostalCodes;
use serde::Deserialize;
use std::time::Duration;

/// Debounce window applied to quantity and postal-code input events.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Explicit controller configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub allowed_postal_codes: AllowedPostalCodes,
    /// Ultra-low-sulphur variant of the product page.
    pub is_ul: bool,
    /// Anonymous visitor; orders go through the address-collection page.
    pub is_public_user: bool,
    pub debounce: Duration,
    pub signup_path: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            allowed_postal_codes: AllowedPostalCodes::default(),
            is_ul: false,
            is_public_user: true,
            debounce: DEFAULT_DEBOUNCE,
            signup_path: crate::network::SIGNUP_WITH_ADDRESS_PATH.to_string(),
        }
    }
}

impl ControllerConfig {
    pub fn builder() -> ControllerConfigBuilder {
        ControllerConfigBuilder::default()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct ControllerConfigBuilder {
    config: ControllerConfig,
}

impl ControllerConfigBuilder {
    pub fn allowed_postal_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.allowed_postal_codes = AllowedPostalCodes::new(codes);
        self
    }

    pub fn ul(mut self, is_ul: bool) -> Self {
        self.config.is_ul = is_ul;
        self
    }

    pub fn public_user(mut self, is_public: bool) -> Self {
        self.config.is_public_user = is_public;
        self
    }

    pub fn debounce(mut self, delay: Duration) -> Self {
        self.config.debounce = delay;
        self
    }

    pub fn signup_path(mut self, path: &str) -> Self {
        self.config.signup_path = path.to_string();
        self
    }

    pub fn build(self) -> Result<ControllerConfig, SdkError> {
        if self.config.debounce.is_zero() {
            return Err(SdkError::Config("debounce delay must be non-zero".into()));
        }
        if !self.config.signup_path.starts_with('/') {
            return Err(SdkError::Config(format!(
                "signup path must be absolute: {}",
                self.config.signup_path
            )));
        }
        if self.config.allowed_postal_codes.is_empty() {
            tracing::warn!("no allowed postal codes configured; every code will be rejected");
        }
        Ok(self.config)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Host globals
// ═════════════════════════════════════════════════════════════════════════════

/// Globals a product page injects for the pricing form.
///
/// ```json
/// { "ALLOWED_POSTAL_CODES": ["4990", "6960"], "IS_UL": false, "USER_IS_PUBLIC": "true" }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct HostGlobals {
    #[serde(rename = "ALLOWED_POSTAL_CODES", default)]
    pub allowed_postal_codes: AllowedPostalCodes,
    #[serde(rename = "IS_UL", default)]
    pub is_ul: bool,
    /// Absent means the visitor is treated as anonymous.
    #[serde(
        rename = "USER_IS_PUBLIC",
        default,
        deserialize_with = "serde_util::opt_bool_or_string::deserialize"
    )]
    pub user_is_public: Option<bool>,
}

impl HostGlobals {
    pub fn from_json(raw: &str) -> Result<Self, SdkError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn into_config(self) -> ControllerConfig {
        ControllerConfig {
            allowed_postal_codes: self.allowed_postal_codes,
            is_ul: self.is_ul,
            is_public_user: self.user_is_public.unwrap_or(true),
            ..ControllerConfig::default()
        }
    }
}

impl From<HostGlobals> for ControllerConfig {
    fn from(globals: HostGlobals) -> Self {
        globals.into_config()
    }
}
