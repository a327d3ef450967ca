//! The pricing seam between the controller and the network.

use super::{QuoteRequest, QuoteResponse};
use crate::error::SdkError;
use async_trait::async_trait;
use std::sync::Arc;

/// Anything that can price a [`QuoteRequest`].
///
/// `FuelHttp` talks to the shop; tests and headless hosts supply their own.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse, SdkError>;
}

#[async_trait]
impl<T: QuoteSource + ?Sized> QuoteSource for Arc<T> {
    async fn fetch_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse, SdkError> {
        (**self).fetch_quote(request).await
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl QuoteSource for crate::http::FuelHttp {
    async fn fetch_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse, SdkError> {
        let body = super::wire::RpcRequest::call(request.to_params());
        let response = self.price_update(&body).await?;
        QuoteResponse::try_from((response, request))
    }
}
