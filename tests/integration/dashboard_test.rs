use chrono::NaiveDate;
use serde_json::json;

use realty_admin::console::dashboard::fetch_stats;

use crate::common::{client_for, FakeBackend, FAKE_TOKEN};

#[tokio::test]
async fn test_fetch_stats_from_all_collections() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "/api/developers",
        json!({ "id": 1, "reraId": "R1", "name": "Acme", "email": "a@acme.test", "phone": "1" }),
    );
    for (id, status) in [(10, "new"), (11, "new"), (12, "converted")] {
        backend.seed(
            "/admin/leads",
            json!({
                "id": id, "projectId": 1, "developerId": 1, "userId": 1,
                "name": "Lead", "email": "l@example.com", "phone": "1",
                "budgetMin": 1.0, "budgetMax": 2.0,
                "leadStatus": status, "leadScore": 5
            }),
        );
    }
    for (id, status, due, amount) in [
        (20, "pending", "2025-01-10", 100.0),
        (21, "overdue", "2025-12-31", 50.0),
        (22, "paid", "2025-01-01", 25.0),
    ] {
        backend.seed(
            "/admin/invoices",
            json!({
                "id": id, "developerId": 1, "invoiceNumber": format!("INV-{id}"),
                "totalAmount": amount, "paymentStatus": status, "dueDate": due
            }),
        );
    }

    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let stats = fetch_stats(&client, today).await.unwrap();

    assert_eq!(stats.total_developers, 1);
    assert_eq!(stats.total_projects, 0);
    assert_eq!(stats.total_leads, 3);
    assert_eq!(stats.pending_leads, 2);
    assert_eq!(stats.total_invoices, 3);
    assert_eq!(stats.overdue_invoices, 2);
    assert_eq!(stats.total_revenue, 175.0);
}

#[tokio::test]
async fn test_fetch_stats_fails_as_a_whole() {
    let backend = FakeBackend::start().await;
    let client = client_for(&backend.base_url, None);
    let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    assert!(fetch_stats(&client, today).await.is_err());
}

#[tokio::test]
async fn test_odd_due_dates_do_not_sink_the_dashboard() {
    let backend = FakeBackend::start().await;
    for (id, due) in [
        (1, json!("2025-01-10")),
        (2, json!("2025-01-10T00:00:00")),
        (3, json!(null)),
        (4, json!("next week")),
    ] {
        backend.seed(
            "/admin/invoices",
            json!({
                "id": id, "developerId": 1, "invoiceNumber": format!("INV-{id}"),
                "totalAmount": 10.0, "paymentStatus": "pending", "dueDate": due
            }),
        );
    }

    let client = client_for(&backend.base_url, Some(FAKE_TOKEN));
    let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let stats = fetch_stats(&client, today).await.unwrap();

    assert_eq!(stats.total_invoices, 4);
    assert_eq!(stats.overdue_invoices, 2);
    assert_eq!(stats.total_revenue, 40.0);
}
