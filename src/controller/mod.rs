//! Controller layer: the form view seam, the price state machine, page wiring.
//!
//! ```rust,ignore
//! let attached = PriceController::attach(Some(form), config, http).await?;
//! attached.controller().with_view(|v| v.set_quantity("1500")).await;
//! attached.on_quantity_input();
//! ```

pub mod attach;
pub mod memory;
pub mod price;
pub mod view;

pub use attach::AttachedForm;
pub use memory::InMemoryForm;
pub use price::{PriceController, RefreshOutcome};
pub use view::{PriceDisplay, PriceFormView};
