//! API middleware layer
//!
//! Provides CORS, request logging, JSON error fallbacks and extraction helpers.

pub mod cors;
pub mod fallback;
pub mod logging;
pub mod validation;

pub use cors::{cors_from_config, cors_layer, cors_layer_restricted};
pub use fallback::{json_error_envelope, not_found, panic_response};
pub use logging::logging_layer;
pub use validation::{json_body, json_entity, path_id};
