//! Application layer services implementing business logic.
//!
//! Services coordinate validation, code generation and repository calls, and
//! expose the link operations consumed by HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Create, resolve, update, delete and stats

pub mod services;
