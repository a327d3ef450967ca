//! Network URL constants for the fuel order SDK.

/// Default shop base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8069";

/// JSON-RPC route that prices a fuel quantity for a postal code.
pub const PRICE_UPDATE_PATH: &str = "/shop/fuel_price_update";

/// Address-collection page for anonymous visitors.
pub const SIGNUP_WITH_ADDRESS_PATH: &str = "/mazout/signup_with_address";

/// Order-creation endpoint the product form posts to for logged-in users.
pub const CREATE_ORDER_PATH: &str = "/mazout/create_order";
