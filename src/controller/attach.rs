//! Wiring a controller to a page: debounced input handlers and the order click.

use super::price::{PriceController, RefreshOutcome};
use super::view::PriceFormView;
use crate::config::ControllerConfig;
use crate::debounce::{debounce, Debounced};
use crate::domain::order::OrderAction;
use crate::domain::quote::QuoteSource;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type RefreshFn = Box<dyn Fn(()) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// A controller attached to a live form.
///
/// Quantity and postal-code events share one debounce window, so a burst of
/// typing in either field yields a single refresh. Each event disables the
/// order button at once; only the refresh can re-enable it.
pub struct AttachedForm<V, Q> {
    controller: Arc<PriceController<V, Q>>,
    refresh: Debounced<(), RefreshFn>,
}

impl<V, Q> PriceController<V, Q>
where
    V: PriceFormView + 'static,
    Q: QuoteSource + 'static,
{
    /// Attaches to `form` and runs one pass over its pre-filled values.
    ///
    /// Returns `None` without doing anything when the page has no form.
    pub async fn attach(
        form: Option<V>,
        config: ControllerConfig,
        quotes: Q,
    ) -> Option<AttachedForm<V, Q>> {
        let Some(view) = form else {
            tracing::debug!("no pricing form on page; controller not attached");
            return None;
        };

        let delay = config.debounce;
        let controller = Arc::new(PriceController::new(view, config, quotes));

        let target = Arc::clone(&controller);
        let action: RefreshFn = Box::new(move |()| -> Pin<Box<dyn Future<Output = ()> + Send>> {
            let target = Arc::clone(&target);
            Box::pin(async move {
                target.refresh().await;
            })
        });

        let attached = AttachedForm {
            controller,
            refresh: debounce(action, delay),
        };
        attached.controller.refresh().await;
        Some(attached)
    }
}

impl<V, Q> AttachedForm<V, Q>
where
    V: PriceFormView + 'static,
    Q: QuoteSource + 'static,
{
    pub fn controller(&self) -> &Arc<PriceController<V, Q>> {
        &self.controller
    }

    /// `input`/`change` on the quantity field.
    pub fn on_quantity_input(&self) {
        tracing::trace!(field = "quantity", "input event");
        self.controller.mark_edited();
        self.refresh.trigger(());
    }

    /// `input`/`change` on the postal-code field.
    pub fn on_postal_code_input(&self) {
        tracing::trace!(field = "postal_code", "input event");
        self.controller.mark_edited();
        self.refresh.trigger(());
    }

    /// Order-button click.
    pub async fn on_order_click(&self) -> Option<OrderAction> {
        self.controller.submit_order().await
    }

    /// Whether an input refresh is scheduled but has not started.
    pub fn refresh_pending(&self) -> bool {
        self.refresh.is_pending()
    }

    /// Runs a pass immediately, dropping any scheduled one.
    pub async fn refresh_now(&self) -> RefreshOutcome {
        self.refresh.cancel();
        self.controller.refresh().await
    }
}
