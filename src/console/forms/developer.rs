use crate::console::forms::{email, text};
use crate::console::screen::EntityForm;
use crate::shared::error::FormError;
use crate::shared::records::{Developer, DeveloperCreate, DeveloperUpdate};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeveloperForm {
    /// Only editable on create
    pub rera_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl EntityForm for DeveloperForm {
    type Record = Developer;
    type Create = DeveloperCreate;
    type Update = DeveloperUpdate;

    fn from_record(record: &Developer) -> Self {
        Self {
            rera_id: record.rera_id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
        }
    }

    fn to_create(&self) -> Result<DeveloperCreate, FormError> {
        Ok(DeveloperCreate {
            rera_id: text("reraId", &self.rera_id)?,
            name: text("name", &self.name)?,
            email: email("email", &self.email)?,
            phone: text("phone", &self.phone)?,
        })
    }

    fn to_update(&self, _original: &Developer) -> Result<DeveloperUpdate, FormError> {
        Ok(DeveloperUpdate {
            name: text("name", &self.name)?,
            email: email("email", &self.email)?,
            phone: text("phone", &self.phone)?,
        })
    }
}
