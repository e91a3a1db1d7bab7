//! Request handlers, one module per resource.

pub mod auth;
pub mod comments;
pub mod hearts;
pub mod images;
pub mod members;
pub mod posts;
