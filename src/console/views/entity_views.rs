use eframe::egui;

use crate::console::entities::{
    AdminUsers, Amenities, Countries, Developers, Invoices, Leads, Projects,
};
use crate::console::screen::Entity;
use crate::console::forms::{
    AdminUserForm, AmenityForm, CountryForm, DeveloperForm, InvoiceForm, LeadForm, ProjectForm,
};
use crate::console::views::crud_view::{
    choice_field, form_grid, multiline_field, password_field, text_field, Cell, EntityView,
    FormContext,
};
use crate::shared::records::{
    display_amount, display_date, AdminRole, AdminUser, Amenity, AmenityCategory, Country,
    Developer, Invoice, Lead, LeadStatus, PaymentStatus, Project, ProjectStatus, PropertyType,
};

fn badge<E: Entity>(record: &E::Record) -> Cell {
    match E::badge(record) {
        Some((text, color)) => Cell::Badge(text.to_string(), color),
        None => Cell::Text(String::new()),
    }
}

fn created(raw: &str) -> Cell {
    Cell::Muted(display_date(raw))
}

impl EntityView for Developers {
    const TITLE: &'static str = "Developers";
    const SUBTITLE: &'static str = "Manage real estate developers and their information";
    const SEARCH_HINT: &'static str = "Search developers by name, email, or RERA ID...";
    const HEADERS: &'static [&'static str] = &["RERA ID", "Name", "Email", "Phone", "Created"];

    fn cells(record: &Developer) -> Vec<Cell> {
        vec![
            Cell::Text(record.rera_id.clone()),
            Cell::Text(record.name.clone()),
            Cell::Text(record.email.clone()),
            Cell::Muted(record.phone.clone()),
            created(&record.created_at),
        ]
    }

    fn form_ui(
        ui: &mut egui::Ui,
        form: &mut DeveloperForm,
        original: Option<&Developer>,
        _context: &FormContext<'_>,
    ) {
        form_grid(ui, "developer-form", |ui| {
            if original.is_some() {
                ui.label("RERA ID");
                ui.label(form.rera_id.as_str());
                ui.end_row();
            } else {
                text_field(ui, "RERA ID", &mut form.rera_id, "Enter RERA ID");
            }
            text_field(ui, "Developer Name", &mut form.name, "Enter developer name");
            text_field(ui, "Email", &mut form.email, "Enter email address");
            text_field(ui, "Phone", &mut form.phone, "Enter phone number");
        });
    }
}

impl EntityView for Projects {
    const TITLE: &'static str = "Projects";
    const SUBTITLE: &'static str = "Manage real estate projects and their details";
    const SEARCH_HINT: &'static str = "Search projects by name, RERA ID, or status...";
    const HEADERS: &'static [&'static str] = &[
        "RERA ID",
        "Name",
        "Property Type",
        "Area",
        "Price",
        "Status",
        "Created",
    ];

    fn cells(record: &Project) -> Vec<Cell> {
        vec![
            Cell::Text(record.rera_id.clone()),
            Cell::Text(record.name.clone()),
            Cell::Text(
                PropertyType::parse(&record.property_type)
                    .map(|t| t.label().to_string())
                    .unwrap_or_else(|| record.property_type.clone()),
            ),
            Cell::Text(format!("{} sq ft", display_amount(record.carpet_area_sqft as f64))),
            Cell::Text(format!("₹{}", display_amount(record.min_price))),
            badge::<Projects>(record),
            created(&record.created_at),
        ]
    }

    fn form_ui(
        ui: &mut egui::Ui,
        form: &mut ProjectForm,
        original: Option<&Project>,
        context: &FormContext<'_>,
    ) {
        form_grid(ui, "project-form", |ui| {
            if original.is_some() {
                ui.label("RERA ID");
                ui.label(form.rera_id.as_str());
                ui.end_row();
            } else {
                text_field(ui, "RERA ID", &mut form.rera_id, "Enter RERA ID");
            }
            text_field(ui, "Project Name", &mut form.name, "Enter project name");
            text_field(ui, "Slug", &mut form.slug, "project-slug");

            ui.label("Developer");
            ui.horizontal(|ui| {
                developer_select(ui, &mut form.developer_id, context.developers);
                if context.developers_loading {
                    ui.spinner();
                }
            });
            ui.end_row();

            multiline_field(ui, "Description", &mut form.description, "Project description");
            choice_field(
                ui,
                "Property Type",
                &mut form.property_type,
                PropertyType::ALL,
                PropertyType::label,
                original.map(|p| p.property_type.as_str()),
            );
            text_field(ui, "Carpet Area (sq ft)", &mut form.carpet_area_sqft, "1200");
            text_field(ui, "Minimum Price", &mut form.min_price, "5000000");
            text_field(ui, "Area ID", &mut form.area_id, "1");
            choice_field(
                ui,
                "Status",
                &mut form.status,
                ProjectStatus::ALL,
                ProjectStatus::label,
                original.map(|p| p.status.as_str()),
            );
        });
    }
}

/// Pick a developer by name; falls back to typing the id when none loaded
fn developer_select(ui: &mut egui::Ui, developer_id: &mut String, developers: &[Developer]) {
    if developers.is_empty() {
        ui.add(egui::TextEdit::singleline(developer_id).hint_text("Developer ID").desired_width(260.0));
        return;
    }
    let selected = developers
        .iter()
        .find(|d| d.id.to_string() == *developer_id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| "Select developer".to_string());
    egui::ComboBox::from_id_salt("project-developer")
        .selected_text(selected)
        .width(260.0)
        .show_ui(ui, |ui| {
            for developer in developers {
                let id = developer.id.to_string();
                let is_selected = *developer_id == id;
                if ui.selectable_label(is_selected, developer.name.as_str()).clicked() {
                    *developer_id = id;
                }
            }
        });
}

impl EntityView for Leads {
    const TITLE: &'static str = "Leads";
    const SUBTITLE: &'static str = "Manage sales leads and track their progress";
    const SEARCH_HINT: &'static str = "Search leads by name, email, phone, or status...";
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "Email",
        "Phone",
        "Budget Range",
        "Score",
        "Status",
        "Created",
    ];

    fn cells(record: &Lead) -> Vec<Cell> {
        vec![
            Cell::Text(record.name.clone()),
            Cell::Text(record.email.clone()),
            Cell::Muted(record.phone.clone()),
            Cell::Text(format!(
                "₹{} - ₹{}",
                display_amount(record.budget_min),
                display_amount(record.budget_max)
            )),
            Cell::Text(record.lead_score.to_string()),
            badge::<Leads>(record),
            created(&record.created_at),
        ]
    }

    fn form_ui(ui: &mut egui::Ui, form: &mut LeadForm, original: Option<&Lead>, _context: &FormContext<'_>) {
        form_grid(ui, "lead-form", |ui| {
            text_field(ui, "Full Name", &mut form.name, "Enter full name");
            text_field(ui, "Email", &mut form.email, "Enter email address");
            text_field(ui, "Phone", &mut form.phone, "Enter phone number");
            choice_field(
                ui,
                "Lead Status",
                &mut form.lead_status,
                LeadStatus::ALL,
                LeadStatus::label,
                original.map(|l| l.lead_status.as_str()),
            );
            text_field(ui, "Project ID", &mut form.project_id, "1");
            text_field(ui, "Developer ID", &mut form.developer_id, "1");
            text_field(ui, "User ID", &mut form.user_id, "1");
            text_field(ui, "Budget Min", &mut form.budget_min, "5000000");
            text_field(ui, "Budget Max", &mut form.budget_max, "7500000");
            text_field(ui, "Lead Score", &mut form.lead_score, "1-10");
        });
    }
}

impl EntityView for Invoices {
    const TITLE: &'static str = "Invoices";
    const SUBTITLE: &'static str = "Manage invoices and track payment status";
    const SEARCH_HINT: &'static str = "Search invoices by number or status...";
    const HEADERS: &'static [&'static str] = &[
        "Invoice Number",
        "Developer ID",
        "Amount",
        "Due Date",
        "Status",
        "Created",
    ];

    fn cells(record: &Invoice) -> Vec<Cell> {
        vec![
            Cell::Text(record.invoice_number.clone()),
            Cell::Text(record.developer_id.to_string()),
            Cell::Text(format!("₹{}", display_amount(record.total_amount))),
            Cell::Text(display_date(&record.due_date)),
            badge::<Invoices>(record),
            created(&record.created_at),
        ]
    }

    fn form_ui(ui: &mut egui::Ui, form: &mut InvoiceForm, original: Option<&Invoice>, _context: &FormContext<'_>) {
        form_grid(ui, "invoice-form", |ui| {
            text_field(ui, "Invoice Number", &mut form.invoice_number, "INV-001");
            text_field(ui, "Developer ID", &mut form.developer_id, "1");
            text_field(ui, "Total Amount", &mut form.total_amount, "0.00");
            choice_field(
                ui,
                "Payment Status",
                &mut form.payment_status,
                PaymentStatus::ALL,
                PaymentStatus::label,
                original.map(|i| i.payment_status.as_str()),
            );
            text_field(ui, "Due Date", &mut form.due_date, "YYYY-MM-DD");
        });
    }
}

impl EntityView for AdminUsers {
    const TITLE: &'static str = "Admin Users";
    const SUBTITLE: &'static str = "Manage admin users and their permissions";
    const SEARCH_HINT: &'static str = "Search admin users by name, email, or role...";
    const HEADERS: &'static [&'static str] = &["Name", "Email", "Role", "Created"];

    fn cells(record: &AdminUser) -> Vec<Cell> {
        let role = AdminRole::parse(&record.role)
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| record.role.clone());
        vec![
            Cell::Text(record.first_name.clone()),
            Cell::Text(record.email.clone()),
            Cell::Badge(role, AdminRole::badge(&record.role)),
            created(&record.created_at),
        ]
    }

    fn form_ui(
        ui: &mut egui::Ui,
        form: &mut AdminUserForm,
        original: Option<&AdminUser>,
        _context: &FormContext<'_>,
    ) {
        form_grid(ui, "admin-user-form", |ui| {
            text_field(ui, "First Name", &mut form.first_name, "Enter first name");
            text_field(ui, "Email", &mut form.email, "Enter email address");
            let hint = if original.is_some() { "Leave blank to keep" } else { "Enter password" };
            password_field(ui, "Password", &mut form.password, hint);
            choice_field(
                ui,
                "Role",
                &mut form.role,
                AdminRole::ALL,
                AdminRole::label,
                original.map(|u| u.role.as_str()),
            );
        });
    }
}

impl EntityView for Countries {
    const TITLE: &'static str = "Countries";
    const SUBTITLE: &'static str = "Manage countries in the system";
    const SEARCH_HINT: &'static str = "Search countries by name...";
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Created"];

    fn cells(record: &Country) -> Vec<Cell> {
        vec![
            Cell::Muted(record.id.to_string()),
            Cell::Text(record.name.clone()),
            created(&record.created_at),
        ]
    }

    fn form_ui(ui: &mut egui::Ui, form: &mut CountryForm, _original: Option<&Country>, _context: &FormContext<'_>) {
        form_grid(ui, "country-form", |ui| {
            text_field(ui, "Country Name", &mut form.name, "Enter country name");
        });
    }
}

impl EntityView for Amenities {
    const TITLE: &'static str = "Amenities";
    const SUBTITLE: &'static str = "Manage property amenities and their categories";
    const SEARCH_HINT: &'static str = "Search amenities by name or category...";
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Category", "Created"];

    fn cells(record: &Amenity) -> Vec<Cell> {
        vec![
            Cell::Muted(record.id.to_string()),
            Cell::Text(record.name.clone()),
            badge::<Amenities>(record),
            created(&record.created_at),
        ]
    }

    fn form_ui(ui: &mut egui::Ui, form: &mut AmenityForm, original: Option<&Amenity>, _context: &FormContext<'_>) {
        form_grid(ui, "amenity-form", |ui| {
            text_field(ui, "Amenity Name", &mut form.name, "Enter amenity name");
            choice_field(
                ui,
                "Category",
                &mut form.category,
                AmenityCategory::ALL,
                AmenityCategory::label,
                original.map(|a| a.category.as_str()),
            );
        });
    }
}
