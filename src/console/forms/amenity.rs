use chrono::{SecondsFormat, Utc};

use crate::console::forms::{choice, kept_choice, text};
use crate::console::screen::EntityForm;
use crate::shared::error::FormError;
use crate::shared::records::{Amenity, AmenityCategory};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmenityForm {
    pub name: String,
    pub category: Option<AmenityCategory>,
}

impl EntityForm for AmenityForm {
    type Record = Amenity;
    type Create = Amenity;
    type Update = Amenity;

    fn from_record(record: &Amenity) -> Self {
        Self {
            name: record.name.clone(),
            category: AmenityCategory::parse(&record.category),
        }
    }

    fn to_create(&self) -> Result<Amenity, FormError> {
        Ok(Amenity {
            id: 0,
            name: text("name", &self.name)?,
            category: choice("category", self.category)?.as_str().to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    fn to_update(&self, original: &Amenity) -> Result<Amenity, FormError> {
        Ok(Amenity {
            name: text("name", &self.name)?,
            category: kept_choice(
                "category",
                self.category.map(AmenityCategory::as_str),
                &original.category,
            )?,
            ..original.clone()
        })
    }
}
