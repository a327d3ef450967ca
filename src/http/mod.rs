//! HTTP client layer: `FuelHttp` with per-route retry policies.

pub mod client;
pub mod retry;

pub use client::FuelHttp;
pub use retry::{RetryConfig, RetryPolicy};
