//! Conversion: RpcResponse → QuoteResponse (TryFrom + shape checks).

use super::wire;
use super::{Quote, QuoteRejection, QuoteRequest, QuoteResponse, RejectionKind};
use crate::error::SdkError;
use chrono::Utc;

impl TryFrom<(wire::RpcResponse, &QuoteRequest)> for QuoteResponse {
    type Error = SdkError;

    fn try_from(value: (wire::RpcResponse, &QuoteRequest)) -> Result<Self, Self::Error> {
        let (source, request) = value;

        let raw = match source.result {
            Some(v) if !v.is_null() => v,
            _ => {
                return Err(match source.error {
                    Some(e) => SdkError::Rpc {
                        code: e.code,
                        message: e.message,
                    },
                    None => SdkError::MalformedResponse("missing `result`".into()),
                })
            }
        };

        let result: wire::PriceUpdateResult = serde_json::from_value(raw)
            .map_err(|e| SdkError::MalformedResponse(format!("unexpected `result` shape: {e}")))?;

        if let Some(message) = result.error.filter(|m| !m.is_empty()) {
            return Ok(QuoteResponse::Rejected(QuoteRejection {
                kind: RejectionKind::from_error_type(result.error_type.as_deref()),
                message,
            }));
        }

        let formatted_price = result
            .formatted_price
            .filter(|p| !p.is_empty())
            .ok_or_else(|| SdkError::MalformedResponse("neither `error` nor `formatted_price`".into()))?;
        let product_id = result
            .product_id
            .ok_or_else(|| SdkError::MalformedResponse("quote without `product_id`".into()))?;
        let quantity = result
            .quantity
            .ok_or_else(|| SdkError::MalformedResponse("quote without `quantity`".into()))?;

        Ok(QuoteResponse::Quoted(Quote {
            product_id,
            quantity,
            formatted_price,
            unit_price: result.unit_price,
            total_price: result.total_price,
            requested_quantity: request.quantity,
            postal_code: request.postal_code.clone(),
            is_ul: request.is_ul,
            received_at: Utc::now(),
        }))
    }
}
