//! Live check of the pricing route against a running shop.
//!
//! Ignored by default because it needs a reachable server. Configure it with
//! a `.env` file or the environment:
//!
//! ```bash
//! FUEL_API_URL=https://shop.example FUEL_PRODUCT_ID=12 FUEL_POSTAL_CODE=4990 \
//!     cargo test --test price_update_live -- --ignored
//! ```

use std::time::Duration;

use fuel_order_sdk::prelude::*;

fn env_or(name: &str, fallback: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| fallback.to_string())
}

#[tokio::test]
#[ignore]
async fn live_price_update_answers() {
    dotenvy::dotenv().ok();

    let client = FuelClient::builder()
        .base_url(&env_or("FUEL_API_URL", fuel_order_sdk::network::DEFAULT_API_URL))
        .timeout(Duration::from_secs(15))
        .price_retry(RetryPolicy::Transient)
        .build()
        .expect("client should build");

    let request = QuoteRequest {
        product_id: env_or("FUEL_PRODUCT_ID", "1")
            .parse()
            .expect("FUEL_PRODUCT_ID should be an integer"),
        quantity: 1500.0,
        postal_code: PostalCode::new(&env_or("FUEL_POSTAL_CODE", "4990")),
        is_ul: false,
    };

    match client.quotes().get(&request).await {
        Ok(QuoteResponse::Quoted(quote)) => {
            assert!(!quote.formatted_price.is_empty());
            assert!(quote.quantity > 0.0);
        }
        Ok(QuoteResponse::Rejected(rejection)) => {
            assert!(!rejection.message.is_empty());
        }
        Err(e) => panic!("price update failed: {e}"),
    }
}
