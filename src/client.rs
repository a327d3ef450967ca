//! High-level client: `FuelClient` with sub-client accessors and form attachment.

use crate::config::ControllerConfig;
use crate::controller::{AttachedForm, PriceController, PriceFormView};
use crate::domain::quote::client::Quotes;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::{FuelHttp, RetryPolicy};

use std::time::Duration;

pub use crate::domain::quote::client::Quotes as QuotesClient;

/// The primary entry point: one shop, one HTTP client.
#[derive(Clone, Debug)]
pub struct FuelClient {
    pub(crate) http: FuelHttp,
}

impl FuelClient {
    pub fn builder() -> FuelClientBuilder {
        FuelClientBuilder::default()
    }

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn http(&self) -> &FuelHttp {
        &self.http
    }

    /// Attaches a price controller for `form`, priced through this client.
    pub async fn attach<V>(
        &self,
        form: Option<V>,
        config: ControllerConfig,
    ) -> Option<AttachedForm<V, FuelHttp>>
    where
        V: PriceFormView + 'static,
    {
        PriceController::attach(form, config, self.http.clone()).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FuelClientBuilder {
    base_url: String,
    timeout: Duration,
    price_retry: RetryPolicy,
}

impl Default for FuelClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            price_retry: RetryPolicy::None,
        }
    }
}

impl FuelClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy for the price route (default: a single attempt).
    pub fn price_retry(mut self, policy: RetryPolicy) -> Self {
        self.price_retry = policy;
        self
    }

    pub fn build(self) -> Result<FuelClient, SdkError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "base url must be http(s): {}",
                self.base_url
            )));
        }
        Ok(FuelClient {
            http: FuelHttp::with_options(&self.base_url, self.timeout, self.price_retry)?,
        })
    }
}
