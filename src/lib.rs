//! # Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate keeps a clean layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entities and the repository trait
//! - **Application Layer** ([`application`]) - The link lifecycle service
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Random 6-character alphanumeric short codes
//! - Create, resolve, update, delete and stats for each code
//! - Access counting on every resolve
//! - Timestamps persisted as `YYYY-MM-DDTHH:mm:ss.sssZ` text
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db?mode=rwc"   # Optional
//! cargo run
//!
//! curl -X POST localhost:8080/shorten -d '{"url":"https://www.rust-lang.org"}' \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, LinkStats, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
