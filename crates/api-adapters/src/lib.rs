//! # api-adapters
//!
//! The web routing and orchestration layer: axum routes, request/response
//! wire shapes, the `{message, data}` envelope, and the mapping from
//! `AppError` to HTTP statuses.

pub mod authz;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
