//! Low-level HTTP client: `FuelHttp`.
//!
//! Posts JSON-RPC envelopes to the shop and returns wire types; conversion to
//! domain types happens in `domain::quote`.

use crate::domain::quote::wire::{PriceUpdateParams, RpcRequest, RpcResponse};
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::network::PRICE_UPDATE_PATH;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default per-request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the shop's pricing route.
#[derive(Clone)]
pub struct FuelHttp {
    base_url: String,
    client: Client,
    price_retry: RetryPolicy,
}

impl FuelHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_options(base_url, DEFAULT_TIMEOUT, RetryPolicy::None)
    }

    pub fn with_options(
        base_url: &str,
        timeout: Duration,
        price_retry: RetryPolicy,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            price_retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Pricing ──────────────────────────────────────────────────────────

    pub async fn price_update(
        &self,
        body: &RpcRequest<PriceUpdateParams>,
    ) -> Result<RpcResponse, HttpError> {
        let url = format!("{}{}", self.base_url, PRICE_UPDATE_PATH);
        self.post(&url, body, &self.price_retry).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: &RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_post(url, body).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_post::<T, B>(url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => config.retries_status(*status),
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "retrying POST {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let resp = self.client.post(url).json(body).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 | 403 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            408 => Err(HttpError::Timeout),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl std::fmt::Debug for FuelHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuelHttp")
            .field("base_url", &self.base_url)
            .field("price_retry", &self.price_retry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = FuelHttp::new("https://shop.example/").unwrap();
        assert_eq!(http.base_url(), "https://shop.example");
    }
}
