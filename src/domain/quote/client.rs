//! Quotes sub-client: one-shot price lookups outside a form.

use super::{QuoteRequest, QuoteResponse, QuoteSource};
use crate::client::FuelClient;
use crate::error::SdkError;

pub struct Quotes<'a> {
    pub(crate) client: &'a FuelClient,
}

impl<'a> Quotes<'a> {
    pub async fn get(&self, request: &QuoteRequest) -> Result<QuoteResponse, SdkError> {
        let response = self.client.http.fetch_quote(request).await;
        if let Err(e) = &response {
            tracing::debug!(
                product_id = %request.product_id,
                postal_code = %request.postal_code,
                "quote lookup failed: {}",
                e
            );
        }
        response
    }
}
