//! Shared Module
//!
//! Types that do not depend on the UI: record wire shapes and their
//! vocabularies, form validation errors and application configuration.
//! Everything here serializes with serde and is free of egui types.

/// Record wire shapes
pub mod records;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::FormError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
