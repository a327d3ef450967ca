//! # Fuel Order SDK
//!
//! Client-side controller for a fuel-order pricing form: it validates the
//! quantity and postal code, asks the shop for a price, and decides whether
//! and where the order button sends the visitor.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Newtypes, domain slices (form, quote, order), errors, configuration
//! 2. **HTTP**: `FuelHttp` posting JSON-RPC calls with per-route retry policies
//! 3. **Debounce**: Burst collapsing on the tokio timer
//! 4. **Controller**: `PriceController` driving a `PriceFormView`
//! 5. **High-Level Client**: `FuelClient` with sub-clients and form attachment
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fuel_order_sdk::prelude::*;
//!
//! let client = FuelClient::builder()
//!     .base_url("https://shop.example")
//!     .build()?;
//!
//! let config = ControllerConfig::builder()
//!     .allowed_postal_codes(["4990", "6960"])
//!     .public_user(true)
//!     .build()?;
//!
//! let form = client.attach(Some(my_form_binding), config).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices).
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and route constants.
pub mod network;

/// Controller configuration and host-page globals.
pub mod config;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Debounce ────────────────────────────────────────────────────────

pub mod debounce;

// ── Layer 4: Controller ──────────────────────────────────────────────────────

/// Price controller, form view seam, page wiring.
pub mod controller;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `FuelClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AllowedPostalCodes, PostalCode, ProductId};

    // Domain types
    pub use crate::domain::form::{ErrorSlot, FormState, ValidInput, Validation, ValidationError};
    pub use crate::domain::order::{OrderAction, OrderPayload};
    pub use crate::domain::quote::{
        Quote, QuoteRejection, QuoteRequest, QuoteResponse, QuoteSource, RejectionKind,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Configuration
    pub use crate::config::{ControllerConfig, ControllerConfigBuilder, HostGlobals};

    // Debounce
    pub use crate::debounce::{debounce, Debounced};

    // Controller
    pub use crate::controller::{
        AttachedForm, InMemoryForm, PriceController, PriceDisplay, PriceFormView, RefreshOutcome,
    };

    // HTTP client
    #[cfg(feature = "http")]
    pub use crate::client::{FuelClient, FuelClientBuilder, QuotesClient};
    #[cfg(feature = "http")]
    pub use crate::http::{FuelHttp, RetryConfig, RetryPolicy};
}
