//! Shared fixtures: a scripted pricing route and form builders.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use fuel_order_sdk::domain::quote::wire::RpcResponse;
use fuel_order_sdk::error::HttpError;
use fuel_order_sdk::prelude::*;

pub const PRODUCT: i64 = 12;

/// How the fake shop answers one request.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Price the request as sent.
    Echo(&'static str),
    /// Raw JSON-RPC body, run through the real response conversion.
    Body(Value),
    /// No answer at all.
    Transport,
}

impl Reply {
    pub fn quote(product_id: i64, quantity: f64, price: &str) -> Self {
        Reply::Body(json!({"jsonrpc": "2.0", "id": null, "result": {
            "formatted_price": price,
            "quantity": quantity,
            "product_id": product_id,
            "error_type": "none"
        }}))
    }

    pub fn rejected(error_type: &str, message: &str) -> Self {
        Reply::Body(json!({"jsonrpc": "2.0", "result": {"error": message, "error_type": error_type}}))
    }
}

/// Scripted `QuoteSource`; replies are consumed in order, then `Echo("1.00 €")`.
#[derive(Default)]
pub struct FakeShop {
    replies: Mutex<VecDeque<(Duration, Reply)>>,
    requests: Mutex<Vec<QuoteRequest>>,
}

impl FakeShop {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, reply: Reply) {
        self.push_delayed(Duration::ZERO, reply);
    }

    pub fn push_delayed(&self, delay: Duration, reply: Reply) {
        self.replies.lock().unwrap().push_back((delay, reply));
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<QuoteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteSource for FakeShop {
    async fn fetch_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse, SdkError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.replies.lock().unwrap().pop_front();
        let (delay, reply) = next.unwrap_or((Duration::ZERO, Reply::Echo("1.00 €")));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let body = match reply {
            Reply::Echo(price) => json!({"result": {
                "formatted_price": price,
                "quantity": request.quantity,
                "product_id": request.product_id.get()
            }}),
            Reply::Body(body) => body,
            Reply::Transport => return Err(HttpError::Timeout.into()),
        };
        let response: RpcResponse = serde_json::from_value(body)?;
        QuoteResponse::try_from((response, request))
    }
}

pub fn config(public_user: bool) -> ControllerConfig {
    ControllerConfig::builder()
        .allowed_postal_codes(["4990", "6960"])
        .public_user(public_user)
        .build()
        .unwrap()
}

pub type Controller = Arc<PriceController<InMemoryForm, Arc<FakeShop>>>;

pub fn controller(form: InMemoryForm, public_user: bool, shop: &Arc<FakeShop>) -> Controller {
    Arc::new(PriceController::new(form, config(public_user), Arc::clone(shop)))
}

pub fn form(quantity: &str, postal_code: &str) -> InMemoryForm {
    InMemoryForm::prefilled(ProductId::new(PRODUCT), quantity, postal_code)
}
