//! HTTP API module for the Salary Breakup Engine.
//!
//! This module provides the REST API endpoints for listing compensation
//! templates and computing salary breakups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::BreakupRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
