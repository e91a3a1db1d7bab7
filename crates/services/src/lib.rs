//! # services
//!
//! The lifecycle managers: one per entity type, each owning the
//! create/read/update/delete rules and invariants for that entity. Managers
//! talk to the store exclusively through the `domains` port traits and map
//! entities to DTO projections before anything crosses the boundary.

pub mod comment;
pub mod heart;
pub mod image;
pub mod member;
pub mod post;

pub use comment::CommentService;
pub use heart::HeartService;
pub use image::ImageService;
pub use member::MemberService;
pub use post::PostService;
