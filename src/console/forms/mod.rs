//! Entity forms
//!
//! Text inputs stay strings while the user types; selects hold the typed
//! vocabulary value. Everything is checked and converted in one place, when
//! the form is turned into a wire payload, so a bad value never leaves the
//! dialog.
//!
//! A stored value outside a vocabulary opens as an empty select. Left
//! untouched, an update sends the stored value back unchanged.

use chrono::NaiveDate;

use crate::shared::error::FormError;

pub mod admin_user;
pub mod amenity;
pub mod country;
pub mod developer;
pub mod invoice;
pub mod lead;
pub mod project;

pub use admin_user::AdminUserForm;
pub use amenity::AmenityForm;
pub use country::CountryForm;
pub use developer::DeveloperForm;
pub use invoice::InvoiceForm;
pub use lead::LeadForm;
pub use project::ProjectForm;

/// Trimmed, non-empty text
pub(crate) fn text(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::required(field));
    }
    Ok(value.to_string())
}

/// Trimmed text that may be empty
pub(crate) fn optional_text(value: &str) -> String {
    value.trim().to_string()
}

pub(crate) fn email(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = text(field, value)?;
    let valid = value
        .split_once('@')
        .map(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'))
        .unwrap_or(false);
    if !valid {
        return Err(FormError::invalid(field, "expected an email address"));
    }
    Ok(value)
}

pub(crate) fn integer(field: &'static str, value: &str) -> Result<i64, FormError> {
    text(field, value)?
        .parse()
        .map_err(|_| FormError::invalid(field, "expected a whole number"))
}

/// Identifier of another record; must be positive
pub(crate) fn reference(field: &'static str, value: &str) -> Result<i64, FormError> {
    let id = integer(field, value)?;
    if id <= 0 {
        return Err(FormError::invalid(field, "expected a positive id"));
    }
    Ok(id)
}

/// Finite, non-negative decimal
pub(crate) fn amount(field: &'static str, value: &str) -> Result<f64, FormError> {
    let amount: f64 = text(field, value)?
        .parse()
        .map_err(|_| FormError::invalid(field, "expected a number"))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(FormError::invalid(field, "expected a non-negative number"));
    }
    Ok(amount)
}

/// `YYYY-MM-DD`
pub(crate) fn date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(&text(field, value)?, "%Y-%m-%d")
        .map_err(|_| FormError::invalid(field, "expected a date as YYYY-MM-DD"))
}

pub(crate) fn choice<T: Copy>(field: &'static str, value: Option<T>) -> Result<T, FormError> {
    value.ok_or_else(|| FormError::required(field))
}

/// The picked wire value, else the record's stored one
pub(crate) fn kept_choice(
    field: &'static str,
    value: Option<&'static str>,
    stored: &str,
) -> Result<String, FormError> {
    match value {
        Some(value) => Ok(value.to_string()),
        None if !stored.trim().is_empty() => Ok(stored.to_string()),
        None => Err(FormError::required(field)),
    }
}
