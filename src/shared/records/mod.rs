//! Wire shapes of every record the console manages.
//!
//! Field names are camelCase on the wire. `id` is assigned by the backend and
//! is 0 (or absent) before creation; `createdAt` is set by the backend and is
//! carried through updates untouched.

pub mod admin_user;
pub mod amenity;
pub mod country;
pub mod developer;
pub mod display;
pub mod invoice;
pub mod lead;
pub mod project;
pub mod vocab;

pub use admin_user::{AdminUser, AdminUserWrite, LoginRequest, LoginResponse};
pub use amenity::Amenity;
pub use country::Country;
pub use developer::{Developer, DeveloperCreate, DeveloperUpdate};
pub use display::{display_amount, display_date, parse_date};
pub use invoice::{Invoice, InvoiceCreate};
pub use lead::{Lead, LeadCreate};
pub use project::{Project, ProjectCreate};
pub use vocab::{
    AdminRole, AmenityCategory, BadgeColor, LeadStatus, PaymentStatus, ProjectStatus, PropertyType,
};
