//! Helpers shared by the link service and the HTTP layer.
//!
//! - [`code_generator`] - Random short code generation
//! - [`timestamp`] - Text codec for persisted timestamps
//! - [`url_validator`] - Absolute URL validation

pub mod code_generator;
pub mod timestamp;
pub mod url_validator;
