//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound query parameters.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
