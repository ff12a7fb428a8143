//! HTTP API module for the novated lease engine.
//!
//! This module exposes the calculation, validation and share-link operations
//! over HTTP for the presentation layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DEFAULT_SHARE_BASE_URL, ShareRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, ShareResponse};
pub use state::AppState;
