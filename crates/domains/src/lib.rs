//! # domains
//!
//! The central domain logic and interface definitions for heartboard:
//! entity models, service DTOs, the error taxonomy, and the port traits
//! implemented by the storage and auth adapters.

pub mod dto;
pub mod error;
pub mod models;
pub mod ports;

// Re-exporting for easier access in other crates
pub use dto::*;
pub use error::*;
pub use models::*;
pub use ports::*;
