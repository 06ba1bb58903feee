//! The seven managed collections, each bound to its record, form, endpoint
//! and search fields.

use crate::console::forms::{
    AdminUserForm, AmenityForm, CountryForm, DeveloperForm, InvoiceForm, LeadForm, ProjectForm,
};
use crate::console::screen::{Entity, SearchQuery};
use crate::shared::records::{
    AdminRole, AdminUser, Amenity, AmenityCategory, BadgeColor, Country, Developer, Invoice, Lead,
    LeadStatus, PaymentStatus, Project, ProjectStatus,
};

pub struct Developers;
pub struct Projects;
pub struct Leads;
pub struct Invoices;
pub struct AdminUsers;
pub struct Countries;
pub struct Amenities;

impl Entity for Developers {
    type Record = Developer;
    type Form = DeveloperForm;
    const COLLECTION: &'static str = "/api/developers";
    const NOUN: &'static str = "developer";

    fn id(record: &Developer) -> i64 {
        record.id
    }

    fn matches(record: &Developer, query: &SearchQuery) -> bool {
        query.hits(&record.name) || query.hits(&record.email) || query.hits(&record.rera_id)
    }
}

impl Entity for Projects {
    type Record = Project;
    type Form = ProjectForm;
    const COLLECTION: &'static str = "/admin/project-cores";
    const NOUN: &'static str = "project";

    fn id(record: &Project) -> i64 {
        record.id
    }

    fn matches(record: &Project, query: &SearchQuery) -> bool {
        query.hits(&record.name) || query.hits(&record.rera_id) || query.hits(&record.status)
    }

    fn badge(record: &Project) -> Option<(&str, BadgeColor)> {
        Some((&record.status, ProjectStatus::badge(&record.status)))
    }
}

impl Entity for Leads {
    type Record = Lead;
    type Form = LeadForm;
    const COLLECTION: &'static str = "/admin/leads";
    const NOUN: &'static str = "lead";

    fn id(record: &Lead) -> i64 {
        record.id
    }

    /// Phone numbers are matched as typed.
    fn matches(record: &Lead, query: &SearchQuery) -> bool {
        query.hits(&record.name)
            || query.hits(&record.email)
            || query.hits(&record.lead_status)
            || query.hits_exact(&record.phone)
    }

    fn badge(record: &Lead) -> Option<(&str, BadgeColor)> {
        Some((&record.lead_status, LeadStatus::badge(&record.lead_status)))
    }
}

impl Entity for Invoices {
    type Record = Invoice;
    type Form = InvoiceForm;
    const COLLECTION: &'static str = "/admin/invoices";
    const NOUN: &'static str = "invoice";

    fn id(record: &Invoice) -> i64 {
        record.id
    }

    fn matches(record: &Invoice, query: &SearchQuery) -> bool {
        query.hits(&record.invoice_number) || query.hits(&record.payment_status)
    }

    fn badge(record: &Invoice) -> Option<(&str, BadgeColor)> {
        Some((&record.payment_status, PaymentStatus::badge(&record.payment_status)))
    }
}

impl Entity for AdminUsers {
    type Record = AdminUser;
    type Form = AdminUserForm;
    const COLLECTION: &'static str = "/api/admin-users";
    const NOUN: &'static str = "admin user";

    fn id(record: &AdminUser) -> i64 {
        record.id
    }

    fn matches(record: &AdminUser, query: &SearchQuery) -> bool {
        query.hits(&record.first_name) || query.hits(&record.email) || query.hits(&record.role)
    }

    fn badge(record: &AdminUser) -> Option<(&str, BadgeColor)> {
        Some((&record.role, AdminRole::badge(&record.role)))
    }
}

impl Entity for Countries {
    type Record = Country;
    type Form = CountryForm;
    const COLLECTION: &'static str = "/admin/countries";
    const NOUN: &'static str = "country";

    fn id(record: &Country) -> i64 {
        record.id
    }

    fn matches(record: &Country, query: &SearchQuery) -> bool {
        query.hits(&record.name)
    }
}

impl Entity for Amenities {
    type Record = Amenity;
    type Form = AmenityForm;
    const COLLECTION: &'static str = "/admin/amenities";
    const NOUN: &'static str = "amenity";

    fn id(record: &Amenity) -> i64 {
        record.id
    }

    fn matches(record: &Amenity, query: &SearchQuery) -> bool {
        query.hits(&record.name) || query.hits(&record.category)
    }

    fn badge(record: &Amenity) -> Option<(&str, BadgeColor)> {
        Some((&record.category, AmenityCategory::badge(&record.category)))
    }
}
