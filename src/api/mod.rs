//! HTTP API module for the Leave Engine.
//!
//! Exposes `POST /calculate`, which charges a leave request in business days
//! and selects its approval chain, and `GET /leave-types`, which lists the
//! configured leave types.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, MAX_REQUEST_HOLIDAYS, MAX_SPAN_DAYS};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
