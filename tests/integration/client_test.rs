//! Wire behavior of the typed client

use assert_matches::assert_matches;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use std::sync::Arc;

use realty_admin::console::{ApiClient, ApiError, Config, MemoryTokenStore, Session, TokenStore};
use realty_admin::shared::config::AppConfig;
use realty_admin::shared::records::{Country, Invoice};

use crate::common::client_for;

#[tokio::test]
async fn test_get_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/countries"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "India", "createdAt": "2025-01-01T00:00:00" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Some("abc123"));
    let countries: Vec<Country> = client.get("/admin/countries").await.unwrap();

    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].name, "India");
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), None);
    let _: Vec<Country> = client.get("/admin/countries").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_clear_token_stops_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let config = Config::with_builder(AppConfig::builder().server_url(server.uri())).unwrap();
    let client = ApiClient::new(config, Session::restore(store.clone()));

    client.set_token("short-lived").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("short-lived"));
    let _: Vec<Country> = client.get("/admin/countries").await.unwrap();

    client.clear_token().unwrap();
    let _: Vec<Country> = client.get("/admin/countries").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].headers.get("authorization").and_then(|v| v.to_str().ok()),
        Some("Bearer short-lived")
    );
    assert!(!requests[1].headers.contains_key("authorization"));
    assert_eq!(store.load().unwrap(), None);
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_post_sends_camel_case_json() {
    let server = MockServer::start().await;
    let body = json!({
        "developerId": 2,
        "invoiceNumber": "INV-9",
        "totalAmount": 500.0,
        "paymentStatus": "pending",
        "dueDate": "2025-05-01"
    });
    Mock::given(method("POST"))
        .and(path("/admin/invoices"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "developerId": 2,
            "invoiceNumber": "INV-9",
            "totalAmount": 500.0,
            "paymentStatus": "pending",
            "dueDate": "2025-05-01",
            "createdAt": "2025-04-01T08:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Some("t"));
    let created: Invoice = client.post("/admin/invoices", &body).await.unwrap();
    assert_eq!(created.id, 9);
}

#[tokio::test]
async fn test_error_message_from_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/countries/3"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Name already exists" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Some("t"));
    let result: Result<Country, _> = client
        .put("/admin/countries/3", &json!({ "id": 3, "name": "India" }))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    assert_matches!(err, ApiError::Status { message, .. } if message == "Name already exists");
}

#[tokio::test]
async fn test_error_message_falls_back_to_text_then_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/leads"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/amenities"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Some("t"));

    let err = client.get::<Vec<Country>>("/admin/leads").await.unwrap_err();
    assert_matches!(err, ApiError::Status { message, .. } if message == "database unavailable");

    let err = client.get::<Vec<Country>>("/admin/amenities").await.unwrap_err();
    assert_matches!(err, ApiError::Status { message, .. } if message == "Not Found");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Some("t"));
    let err = client.get::<Vec<Country>>("/admin/countries").await.unwrap_err();
    assert_matches!(err, ApiError::Decode(_));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_delete_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/amenities/4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Amenity deleted"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Some("t"));
    client.delete("/admin/amenities/4").await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = client_for(&uri, Some("t"));
    let err = client.get::<Vec<Country>>("/admin/countries").await.unwrap_err();
    assert_matches!(err, ApiError::Transport(_));
}
