use crate::console::forms::{choice, email, kept_choice, text};
use crate::console::screen::EntityForm;
use crate::shared::error::FormError;
use crate::shared::records::{AdminRole, AdminUser, AdminUserWrite};

#[derive(Clone, Default, PartialEq)]
pub struct AdminUserForm {
    pub email: String,
    /// Never prefilled
    pub password: String,
    pub first_name: String,
    pub role: Option<AdminRole>,
}

impl std::fmt::Debug for AdminUserForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminUserForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("role", &self.role)
            .finish()
    }
}

impl AdminUserForm {
    fn write(&self, role: String) -> Result<AdminUserWrite, FormError> {
        Ok(AdminUserWrite {
            email: email("email", &self.email)?,
            password_hash: self.password.clone(),
            first_name: text("firstName", &self.first_name)?,
            role,
        })
    }
}

impl EntityForm for AdminUserForm {
    type Record = AdminUser;
    type Create = AdminUserWrite;
    type Update = AdminUserWrite;

    fn from_record(record: &AdminUser) -> Self {
        Self {
            email: record.email.clone(),
            password: String::new(),
            first_name: record.first_name.clone(),
            role: AdminRole::parse(&record.role),
        }
    }

    fn to_create(&self) -> Result<AdminUserWrite, FormError> {
        if self.password.is_empty() {
            return Err(FormError::required("password"));
        }
        self.write(choice("role", self.role)?.as_str().to_string())
    }

    /// A blank password is sent as-is and left to the backend.
    fn to_update(&self, original: &AdminUser) -> Result<AdminUserWrite, FormError> {
        self.write(kept_choice("role", self.role.map(AdminRole::as_str), &original.role)?)
    }
}
