//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains its rich domain types in `mod.rs`; the quote
//! slice additionally has:
//! - `wire.rs`: Raw serde structs matching the JSON-RPC route
//! - `convert.rs`: `TryFrom` conversion with shape checks
//! - `source.rs`: The `QuoteSource` seam
//! - `client.rs`: Sub-client with HTTP methods

pub mod form;
pub mod order;
pub mod quote;
