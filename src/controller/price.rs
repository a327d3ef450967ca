//! `PriceController`: validation, pricing and order hand-off for one form.

use super::view::{PriceDisplay, PriceFormView, PRODUCT_UNAVAILABLE, SERVER_ERROR};
use crate::config::ControllerConfig;
use crate::domain::form::{self, ErrorSlot, FormState, Validation, ValidationError};
use crate::domain::order::{OrderAction, OrderPayload};
use crate::domain::quote::{
    Quote, QuoteRejection, QuoteRequest, QuoteResponse, QuoteSource, RejectionKind,
};
use crate::error::SdkError;
use crate::shared::{parse_leading_number, PostalCode};

use async_lock::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// What a refresh pass ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Inputs incomplete; nothing requested, nothing reported.
    NotReady,
    /// Field errors shown; nothing requested.
    Invalid(Vec<ValidationError>),
    Quoted(Quote),
    Rejected(QuoteRejection),
    /// Malformed answer or transport failure; the message was logged.
    Failed(String),
    /// A newer pass started while this one's request was in flight.
    Superseded,
}

impl RefreshOutcome {
    pub fn is_orderable(&self) -> bool {
        matches!(self, RefreshOutcome::Quoted(_))
    }
}

struct Shared<V> {
    view: V,
    state: FormState,
}

/// Owns a pricing form and drives it from input to orderable quote.
///
/// Every [`refresh`](Self::refresh) takes a new pass id; a response is only
/// applied if its pass is still the latest when it arrives.
pub struct PriceController<V, Q> {
    shared: Mutex<Shared<V>>,
    quotes: Q,
    config: ControllerConfig,
    pass: AtomicU64,
    /// Set by an input edit, cleared when the next pass starts.
    edited: AtomicBool,
}

impl<V, Q> PriceController<V, Q>
where
    V: PriceFormView,
    Q: QuoteSource,
{
    pub fn new(view: V, config: ControllerConfig, quotes: Q) -> Self {
        Self {
            shared: Mutex::new(Shared {
                view,
                state: FormState::new(config.is_ul),
            }),
            quotes,
            config,
            pass: AtomicU64::new(0),
            edited: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Snapshot of the controller-owned form state.
    pub async fn form_state(&self) -> FormState {
        self.shared.lock().await.state.clone()
    }

    /// Runs `f` against the view, e.g. to type into a field.
    pub async fn with_view<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.shared.lock().await.view)
    }

    /// Records that an input changed since the last pass.
    ///
    /// The stored quote no longer matches the form, so the order button is
    /// disabled and any in-flight response is discarded. Orders are refused
    /// until the next [`refresh`](Self::refresh) starts, even when the view
    /// is busy and the button cannot be disabled right away.
    pub fn mark_edited(&self) {
        self.pass.fetch_add(1, Ordering::SeqCst);
        self.edited.store(true, Ordering::SeqCst);
        if let Some(mut guard) = self.shared.try_lock() {
            guard.view.set_order_enabled(false);
        }
    }

    /// One validation pass, followed by a price fetch when the inputs allow.
    ///
    /// Never fails: every error ends as form state and a returned outcome.
    pub async fn refresh(&self) -> RefreshOutcome {
        let pass = self.pass.fetch_add(1, Ordering::SeqCst) + 1;

        let request = {
            let mut guard = self.shared.lock().await;
            let Shared { view, state } = &mut *guard;
            self.edited.store(false, Ordering::SeqCst);

            for slot in ErrorSlot::ALL {
                view.set_error(slot, None);
            }
            view.set_price(PriceDisplay::Placeholder);
            view.set_order_enabled(false);

            let quantity = view.quantity();
            let postal_code = view.postal_code();
            state.quantity = parse_leading_number(&quantity).filter(|q| q.is_finite() && *q > 0.0);
            state.postal_code = PostalCode::new(&postal_code);
            state.product_id = view.product_id();

            let input = match form::validate(&quantity, &postal_code, &self.config.allowed_postal_codes) {
                Validation::Ready(input) => input,
                Validation::NotReady => {
                    tracing::trace!(pass, "inputs not ready");
                    return RefreshOutcome::NotReady;
                }
                Validation::Invalid(errors) => {
                    for e in &errors {
                        view.set_error(e.slot, Some(e.message.clone()));
                    }
                    tracing::debug!(pass, errors = errors.len(), "inputs invalid");
                    return RefreshOutcome::Invalid(errors);
                }
            };

            let Some(product_id) = state.product_id else {
                tracing::error!(pass, "form carries no product id");
                view.set_price(PriceDisplay::Alert(PRODUCT_UNAVAILABLE.to_string()));
                return RefreshOutcome::Failed(PRODUCT_UNAVAILABLE.to_string());
            };

            view.set_price(PriceDisplay::Loading);
            QuoteRequest {
                product_id,
                quantity: input.quantity,
                postal_code: input.postal_code,
                is_ul: state.is_ul,
            }
        };

        tracing::debug!(
            pass,
            product_id = %request.product_id,
            quantity = request.quantity,
            postal_code = %request.postal_code,
            "requesting price"
        );
        let response = self.quotes.fetch_quote(&request).await;

        let mut guard = self.shared.lock().await;
        let latest = self.pass.load(Ordering::SeqCst);
        if latest != pass {
            tracing::debug!(pass, latest, "discarding stale price response");
            return RefreshOutcome::Superseded;
        }

        let Shared { view, state } = &mut *guard;
        self.apply(view, state, &request, response)
    }

    fn apply(
        &self,
        view: &mut V,
        state: &mut FormState,
        request: &QuoteRequest,
        response: Result<QuoteResponse, SdkError>,
    ) -> RefreshOutcome {
        match response {
            Ok(QuoteResponse::Quoted(quote)) => {
                view.set_price(PriceDisplay::Price(quote.formatted_price.clone()));
                view.set_order_quantity(quote.quantity);
                view.set_product_id(quote.product_id);
                view.set_order_payload(Some(OrderPayload {
                    product_id: quote.product_id,
                    quantity: quote.quantity,
                    postal_code: request.postal_code.clone(),
                    ul: self.config.is_ul,
                }));
                view.set_order_enabled(true);

                tracing::info!(
                    product_id = %quote.product_id,
                    quantity = quote.quantity,
                    price = %quote.formatted_price,
                    "quote accepted"
                );
                state.last_quote = Some(quote.clone());
                RefreshOutcome::Quoted(quote)
            }
            Ok(QuoteResponse::Rejected(rejection)) => {
                view.set_order_enabled(false);
                match &rejection.kind {
                    RejectionKind::Quantity => {
                        view.set_error(ErrorSlot::Quantity, Some(rejection.message.clone()));
                        view.set_price(PriceDisplay::Placeholder);
                    }
                    RejectionKind::PostalCode => {
                        view.set_error(ErrorSlot::PostalCode, Some(rejection.message.clone()));
                        view.set_price(PriceDisplay::Unavailable);
                    }
                    RejectionKind::Generic(_) => {
                        view.set_price(PriceDisplay::Alert(rejection.message.clone()));
                    }
                }
                tracing::warn!(kind = ?rejection.kind, "price rejected: {}", rejection.message);
                RefreshOutcome::Rejected(rejection)
            }
            Err(e) => {
                if e.is_transport() {
                    tracing::error!(postal_code = %request.postal_code, "price request failed: {}", e);
                } else {
                    tracing::error!(postal_code = %request.postal_code, "invalid price response: {}", e);
                }
                view.set_price(PriceDisplay::Alert(SERVER_ERROR.to_string()));
                view.set_order_enabled(false);
                RefreshOutcome::Failed(e.to_string())
            }
        }
    }

    /// Order-button activation.
    ///
    /// Uses the payload stored by the last quote, or the current form values
    /// when there is none. Returns `None` when the button is disabled or the
    /// form holds nothing to order.
    pub async fn submit_order(&self) -> Option<OrderAction> {
        let mut guard = self.shared.lock().await;
        let view = &mut guard.view;

        if !view.order_enabled() {
            tracing::debug!("order button disabled; ignoring activation");
            return None;
        }
        if self.edited.load(Ordering::SeqCst) {
            tracing::debug!("inputs edited since the last quote; ignoring activation");
            return None;
        }

        let payload = view.order_payload().or_else(|| {
            OrderPayload::from_form(
                view.product_id(),
                view.order_quantity()
                    .or_else(|| parse_leading_number(&view.quantity())),
                PostalCode::new(&view.postal_code()),
                self.config.is_ul,
            )
        });
        let Some(payload) = payload else {
            tracing::warn!("order activated without product or quantity");
            return None;
        };

        if self.config.is_public_user {
            let url = payload.signup_url(&self.config.signup_path);
            tracing::info!(url = %url, "redirecting anonymous visitor to address collection");
            view.navigate(&url);
            Some(OrderAction::Navigate(url))
        } else {
            tracing::info!(product_id = %payload.product_id, "submitting order form");
            view.submit_form();
            Some(OrderAction::SubmitForm(payload))
        }
    }
}
