//! Wire types for the JSON-RPC pricing route.

use crate::shared::{PostalCode, ProductId};
use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";
pub const JSONRPC_METHOD: &str = "call";

/// JSON-RPC envelope sent to the shop.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<P> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: P,
}

impl<P> RpcRequest<P> {
    pub fn call(params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: JSONRPC_METHOD,
            params,
        }
    }
}

/// JSON-RPC envelope received from the shop.
///
/// `result` stays untyped until conversion so that a wrongly shaped result
/// surfaces as a malformed response instead of a transport failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// JSON-RPC error object (server exceptions, session expiry).
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Parameters of a price update call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceUpdateParams {
    pub product_id: ProductId,
    pub quantity: f64,
    pub postal_code: PostalCode,
    pub ul: bool,
}

/// `result` payload of a price update call: either a priced quote or an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceUpdateResult {
    #[serde(default)]
    pub formatted_price: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_type: Option<String>,
}
