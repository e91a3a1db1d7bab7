//! # storage-adapters
//!
//! SQLite implementations of the `domains` repository ports, plus a local
//! filesystem `FileStore` for image bytes. All data mapping between the
//! relational model and the domain models lives here.

pub mod comments;
pub mod db;
pub mod files;
pub mod hearts;
pub mod images;
pub mod members;
pub mod posts;

pub use comments::SqliteCommentRepo;
pub use files::LocalFileStore;
pub use hearts::SqliteHeartRepo;
pub use images::SqliteImageRepo;
pub use members::SqliteMemberRepo;
pub use posts::SqlitePostRepo;
