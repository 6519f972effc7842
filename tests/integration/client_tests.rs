//! Integration tests for `ApiClient` against the mock service.

use axum::http::StatusCode;
use todo_progress::api::ApiClient;
use todo_progress::AppError;

use super::test_helpers::{leanne_user_json, spawn_mock, twenty_todos_json, MockService};

#[tokio::test]
async fn fetch_employee_returns_decoded_record() {
    let (base_url, _svc, server) =
        spawn_mock(MockService::ok(leanne_user_json(), twenty_todos_json())).await;

    let client = ApiClient::new(base_url);
    let employee = client.fetch_employee(1).await.expect("employee fetch");
    assert_eq!(employee.name, "Leanne Graham");

    server.abort();
}

#[tokio::test]
async fn fetch_employee_non_success_is_http_error() {
    let service = MockService::ok(leanne_user_json(), twenty_todos_json())
        .with_user_status(StatusCode::NOT_FOUND);
    let (base_url, _svc, server) = spawn_mock(service).await;

    let client = ApiClient::new(base_url);
    let err = client.fetch_employee(1).await.expect_err("404 must fail");
    assert!(matches!(err, AppError::Http(_)), "got: {err}");

    server.abort();
}

#[tokio::test]
async fn fetch_employee_transport_failure_is_http_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = ApiClient::new(format!("http://127.0.0.1:{}", addr.port()));
    let err = client
        .fetch_employee(1)
        .await
        .expect_err("connection refused must fail");
    assert!(matches!(err, AppError::Http(_)), "got: {err}");
}

#[tokio::test]
async fn fetch_employee_malformed_payload_is_decode_error() {
    let service = MockService::ok(r#"{"id": 1, "username": "Bret"}"#.into(), "[]".into());
    let (base_url, _svc, server) = spawn_mock(service).await;

    let client = ApiClient::new(base_url);
    let err = client
        .fetch_employee(1)
        .await
        .expect_err("missing name must fail decoding");
    assert!(matches!(err, AppError::Decode(_)), "got: {err}");

    server.abort();
}

#[tokio::test]
async fn fetch_tasks_sends_user_id_query() {
    let (base_url, svc, server) =
        spawn_mock(MockService::ok(leanne_user_json(), twenty_todos_json())).await;

    let client = ApiClient::new(base_url);
    client.fetch_tasks(42).await.expect("task fetch");

    let seen = svc.seen_todo_queries.lock().expect("query log lock");
    assert_eq!(seen.as_slice(), ["userId=42"]);

    server.abort();
}

#[tokio::test]
async fn fetch_tasks_decodes_in_source_order() {
    let (base_url, _svc, server) =
        spawn_mock(MockService::ok(leanne_user_json(), twenty_todos_json())).await;

    let client = ApiClient::new(base_url);
    let tasks = client.fetch_tasks(1).await.expect("task fetch");

    assert_eq!(tasks.len(), 20);
    assert_eq!(tasks[0].title, "task 0");
    assert_eq!(tasks[19].title, "task 19");
    assert_eq!(tasks.iter().filter(|t| t.completed).count(), 5);

    server.abort();
}

#[tokio::test]
async fn fetch_tasks_non_success_is_http_error() {
    let service = MockService::ok(leanne_user_json(), twenty_todos_json())
        .with_todos_status(StatusCode::INTERNAL_SERVER_ERROR);
    let (base_url, _svc, server) = spawn_mock(service).await;

    let client = ApiClient::new(base_url);
    let err = client.fetch_tasks(1).await.expect_err("500 must fail");
    assert!(matches!(err, AppError::Http(_)), "got: {err}");

    server.abort();
}
