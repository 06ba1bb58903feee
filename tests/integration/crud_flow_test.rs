//! Full create/edit/delete cycles through the generic screen against the
//! fake backend.

use pretty_assertions::assert_eq;
use serde_json::json;

use realty_admin::console::entities::{AdminUsers, Amenities, Countries, Developers, Invoices, Projects};
use realty_admin::console::screen::{execute, Command, CrudScreen, Entity, Phase};
use realty_admin::console::ApiClient;
use realty_admin::shared::records::{AdminRole, PaymentStatus, ProjectStatus, PropertyType};

use crate::common::{client_for, FakeBackend, FAKE_TOKEN};

/// Run `command` and every follow-up it triggers
async fn settle<E: Entity>(client: &ApiClient, screen: &mut CrudScreen<E>, command: Command<E>) {
    let mut next = Some(command);
    while let Some(command) = next.take() {
        let outcome = execute::<E>(client, command).await;
        next = screen.apply(outcome);
    }
}

async fn mounted<E: Entity>(client: &ApiClient) -> CrudScreen<E> {
    let mut screen = CrudScreen::<E>::new();
    let command = screen.mount();
    settle(client, &mut screen, command).await;
    screen
}

async fn submit<E: Entity>(client: &ApiClient, screen: &mut CrudScreen<E>) {
    let command = screen.submit().expect("form should be valid");
    settle(client, screen, command).await;
}

#[tokio::test]
async fn test_create_country_india() {
    let backend = FakeBackend::start().await;
    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let mut screen = mounted::<Countries>(&client).await;
    assert_eq!(screen.records().len(), 0);

    screen.open_create();
    screen.dialog_mut().unwrap().form.name = "India".to_string();
    submit(&client, &mut screen).await;

    assert!(screen.dialog().is_none());
    assert_eq!(screen.phase(), Phase::Ready);
    assert_eq!(screen.records().len(), 1);
    let india = &screen.records()[0];
    assert_eq!(india.name, "India");
    assert!(india.id > 0);
    assert!(backend.requests().contains(&"POST /admin/countries".to_string()));
}

#[tokio::test]
async fn test_mark_invoice_paid() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "/admin/invoices",
        json!({
            "id": 7,
            "developerId": 2,
            "invoiceNumber": "INV-007",
            "totalAmount": 1200.0,
            "paymentStatus": "pending",
            "dueDate": "2025-04-30",
            "createdAt": "2025-04-01T12:00:00"
        }),
    );
    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let mut screen = mounted::<Invoices>(&client).await;

    assert!(screen.open_edit(7));
    screen.dialog_mut().unwrap().form.payment_status = Some(PaymentStatus::Paid);
    submit(&client, &mut screen).await;

    assert!(backend.requests().contains(&"PUT /admin/invoices/7".to_string()));
    let invoice = screen.records().iter().find(|i| i.id == 7).unwrap();
    assert_eq!(invoice.payment_status, "paid");
    assert_eq!(invoice.invoice_number, "INV-007");
    assert_eq!(invoice.created_at, "2025-04-01T12:00:00");

    // The full record went over the wire, not just the changed field.
    let stored = &backend.records("/admin/invoices")[0];
    assert_eq!(stored["totalAmount"], json!(1200.0));
    assert_eq!(stored["dueDate"], json!("2025-04-30"));
}

#[tokio::test]
async fn test_update_keeps_id_and_created_at() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "/api/developers",
        json!({
            "id": 4,
            "reraId": "MAHA-0004",
            "name": "Acme Homes",
            "email": "sales@acme.test",
            "phone": "555-0100",
            "createdAt": "2024-11-11T11:11:11"
        }),
    );
    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let mut screen = mounted::<Developers>(&client).await;

    assert!(screen.open_edit(4));
    {
        let form = &mut screen.dialog_mut().unwrap().form;
        form.name = "Acme Realty".to_string();
        form.phone = "555-0199".to_string();
    }
    submit(&client, &mut screen).await;

    assert_eq!(screen.records().len(), 1);
    let developer = &screen.records()[0];
    assert_eq!(developer.id, 4);
    assert_eq!(developer.created_at, "2024-11-11T11:11:11");
    assert_eq!(developer.name, "Acme Realty");
    assert_eq!(developer.phone, "555-0199");
    assert_eq!(developer.rera_id, "MAHA-0004");
}

#[tokio::test]
async fn test_delete_removes_record() {
    let backend = FakeBackend::start().await;
    for (id, name) in [(1, "Pool"), (2, "Gym")] {
        backend.seed(
            "/admin/amenities",
            json!({ "id": id, "name": name, "category": "recreation", "createdAt": "2025-01-01T00:00:00" }),
        );
    }
    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let mut screen = mounted::<Amenities>(&client).await;
    assert_eq!(screen.records().len(), 2);

    screen.request_delete(1);
    let command = screen.confirm_delete().unwrap();
    settle(&client, &mut screen, command).await;

    let ids: Vec<i64> = screen.records().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2]);
    assert!(screen.pending_delete().is_none());
}

#[tokio::test]
async fn test_create_project_and_admin_user() {
    let backend = FakeBackend::start().await;
    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));

    let mut projects = mounted::<Projects>(&client).await;
    projects.open_create();
    {
        let form = &mut projects.dialog_mut().unwrap().form;
        form.rera_id = "P-1".to_string();
        form.name = "Lake View".to_string();
        form.slug = "lake-view".to_string();
        form.developer_id = "4".to_string();
        form.area_id = "2".to_string();
        form.property_type = Some(PropertyType::Villa);
        form.carpet_area_sqft = "1800".to_string();
        form.min_price = "9500000".to_string();
        form.status = Some(ProjectStatus::UnderConstruction);
    }
    submit(&client, &mut projects).await;
    let project = &projects.records()[0];
    assert_eq!(project.status, "under_construction");
    assert_eq!(project.carpet_area_sqft, 1800);

    let mut users = mounted::<AdminUsers>(&client).await;
    users.open_create();
    {
        let form = &mut users.dialog_mut().unwrap().form;
        form.first_name = "Priya".to_string();
        form.email = "priya@example.com".to_string();
        form.password = "initial-pass".to_string();
        form.role = Some(AdminRole::Editor);
    }
    submit(&client, &mut users).await;
    assert_eq!(users.records()[0].role, "editor");
    assert_eq!(
        backend.records("/api/admin-users")[0]["passwordHash"],
        json!("initial-pass")
    );
}

#[tokio::test]
async fn test_edit_keeps_status_outside_vocabulary() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "/admin/project-cores",
        json!({
            "id": 3, "reraId": "P-3", "name": "Hill Crest", "slug": "hill-crest",
            "description": "", "developerId": 1, "areaId": 2, "propertyType": "apartment",
            "carpetAreaSqft": 900, "minPrice": 3500000.0, "status": "on_hold",
            "createdAt": "2025-01-01T00:00:00"
        }),
    );
    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let mut screen = mounted::<Projects>(&client).await;

    assert!(screen.open_edit(3));
    screen.dialog_mut().unwrap().form.name = "Hill Crest II".to_string();
    submit(&client, &mut screen).await;

    let project = &screen.records()[0];
    assert_eq!(project.name, "Hill Crest II");
    assert_eq!(project.status, "on_hold");
    assert_eq!(project.rera_id, "P-3");
}

#[tokio::test]
async fn test_invoice_list_with_timestamp_due_date() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "/admin/invoices",
        json!({
            "id": 1, "developerId": 1, "invoiceNumber": "INV-001", "totalAmount": 10.0,
            "paymentStatus": "pending", "dueDate": "2025-03-31"
        }),
    );
    backend.seed(
        "/admin/invoices",
        json!({
            "id": 2, "developerId": 1, "invoiceNumber": "INV-002", "totalAmount": 20.0,
            "paymentStatus": "pending", "dueDate": "2025-03-31T00:00:00"
        }),
    );
    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let screen = mounted::<Invoices>(&client).await;
    assert_eq!(screen.records().len(), 2);
}

#[tokio::test]
async fn test_save_failure_keeps_dialog() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "/admin/countries",
        json!({ "id": 3, "name": "Indai", "createdAt": "2025-01-01T00:00:00" }),
    );
    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let mut screen = mounted::<Countries>(&client).await;

    // Someone else deletes it in the meantime.
    client.delete("/admin/countries/3").await.unwrap();

    assert!(screen.open_edit(3));
    screen.dialog_mut().unwrap().form.name = "India".to_string();
    submit(&client, &mut screen).await;

    let dialog = screen.dialog().expect("dialog stays open");
    assert!(dialog.error.as_deref().unwrap().contains("Record not found"));
    assert_eq!(screen.phase(), Phase::Ready);
}

#[tokio::test]
async fn test_unauthorized_list_leaves_screen_empty() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "/admin/countries",
        json!({ "id": 1, "name": "India", "createdAt": "2025-01-01T00:00:00" }),
    );
    let client = client_for(&backend.base_url, None);
    let screen = mounted::<Countries>(&client).await;

    assert_eq!(screen.phase(), Phase::Ready);
    assert!(screen.records().is_empty());
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let backend = FakeBackend::start().await;
    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let mut screen = mounted::<Invoices>(&client).await;

    screen.open_create();
    screen.dialog_mut().unwrap().form.invoice_number = "INV-1".to_string();
    assert!(screen.submit().is_err());

    assert_eq!(backend.requests(), vec!["GET /admin/invoices".to_string()]);
}
