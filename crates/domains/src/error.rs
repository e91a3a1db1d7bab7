//! # AppError
//!
//! Centralized error taxonomy for heartboard. Errors are raised at the point
//! of detection inside a lifecycle manager and propagate unmodified to the
//! boundary, which maps them to a response shape. No recovery or retry logic
//! exists anywhere in this layer.

use thiserror::Error;

/// The primary error type for all service operations.
///
/// The static strings are the wire-level error codes the API surfaces
/// verbatim (e.g. `userNotFound`, `emailAlreadyExists`).
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested entity id does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// Request violates a business invariant (missing required field,
    /// uniqueness conflict, wrong password).
    #[error("{0}")]
    Validation(&'static str),

    /// Missing or unverifiable credentials.
    #[error("unauthorized")]
    Unauthorized,

    /// Caller identity does not match the resource owner.
    #[error("forbidden")]
    Forbidden,

    /// Infrastructure failure (store down, file I/O, token signing).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// A specialized Result type for heartboard logic.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// The wire-level code emitted in the response envelope.
    pub fn code(&self) -> &str {
        match self {
            AppError::NotFound(code) | AppError::Validation(code) => code,
            AppError::Unauthorized => "unauthorized",
            AppError::Forbidden => "forbidden",
            AppError::Internal(_) => "internalError",
        }
    }
}
