//! Shared Error Types
//!
//! Errors raised while turning user input into wire payloads. They never
//! reach the network: a form that fails validation issues no request.
//!
//! # Usage
//!
//! ```rust
//! use realty_admin::shared::error::FormError;
//!
//! let error = FormError::required("name");
//! assert_eq!(error.field(), "name");
//! ```
use thiserror::Error;

/// A single rejected form field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Field left empty
    #[error("{field} is required")]
    Required {
        /// The field that failed validation
        field: &'static str,
    },

    /// Field could not be converted to its wire type
    #[error("{field}: {message}")]
    Invalid {
        /// The field that failed validation
        field: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// Value outside the field's vocabulary
    #[error("{field}: '{value}' is not one of the allowed values")]
    UnknownChoice {
        /// The field that failed validation
        field: &'static str,
        /// The rejected value
        value: String,
    },
}

impl FormError {
    /// Create a new required-field error
    pub fn required(field: &'static str) -> Self {
        Self::Required { field }
    }

    /// Create a new conversion error
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }

    /// Create a new vocabulary error
    pub fn unknown_choice(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownChoice {
            field,
            value: value.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field } | Self::Invalid { field, .. } | Self::UnknownChoice { field, .. } => field,
        }
    }
}
