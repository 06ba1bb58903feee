//! Common test utilities and helpers
//!
//! - In-process fake of the platform backend
//! - Client fixtures pointed at a base URL

pub mod fake_backend;

pub use fake_backend::*;
pub use fixtures::*;
