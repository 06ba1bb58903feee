use chrono::{SecondsFormat, Utc};

use crate::console::forms::text;
use crate::console::screen::EntityForm;
use crate::shared::error::FormError;
use crate::shared::records::Country;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryForm {
    pub name: String,
}

impl EntityForm for CountryForm {
    type Record = Country;
    /// The backend takes the full record shape with a placeholder id.
    type Create = Country;
    type Update = Country;

    fn from_record(record: &Country) -> Self {
        Self {
            name: record.name.clone(),
        }
    }

    fn to_create(&self) -> Result<Country, FormError> {
        Ok(Country {
            id: 0,
            name: text("name", &self.name)?,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    fn to_update(&self, original: &Country) -> Result<Country, FormError> {
        Ok(Country {
            name: text("name", &self.name)?,
            ..original.clone()
        })
    }
}
