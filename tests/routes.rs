//! Route behavior with the database unreachable: every endpoint must answer
//! with a plain-text failure instead of crashing the worker.

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tower::ServiceExt;

use tarefas::routes;
use tarefas::state::AppState;

// Port 9 (discard) never runs PostgreSQL, so every checkout fails fast.
fn unreachable_app() -> Router {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(9)
        .database("tarefas")
        .username("tarefas")
        .password("tarefas");

    let db = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(options);

    routes::routes().with_state(AppState { db })
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn list_reports_connection_failure_as_plain_text() {
    let response = unreachable_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body_text(response).await, "Failed to connect to the database.");
}

#[tokio::test]
async fn create_reports_connection_failure_as_plain_text() {
    let request = Request::builder()
        .method("POST")
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("titulo=Comprar+leite"))
        .unwrap();

    let response = unreachable_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Failed to connect to the database.");
}

#[tokio::test]
async fn delete_reports_connection_failure_as_plain_text() {
    let response = unreachable_app()
        .oneshot(Request::builder().uri("/delete/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Failed to connect to the database.");
}

#[tokio::test]
async fn edit_form_reports_connection_failure_as_plain_text() {
    let response = unreachable_app()
        .oneshot(Request::builder().uri("/edit/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Failed to connect to the database.");
}

#[tokio::test]
async fn update_reports_connection_failure_as_plain_text() {
    let request = Request::builder()
        .method("POST")
        .uri("/update/1")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("titulo=Comprar+leite&concluida=on"))
        .unwrap();

    let response = unreachable_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Failed to connect to the database.");
}

#[tokio::test]
async fn health_does_not_touch_the_database() {
    let response = unreachable_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("ok"));
}

#[tokio::test]
async fn non_numeric_id_is_rejected_before_any_database_work() {
    let response = unreachable_app()
        .oneshot(Request::builder().uri("/delete/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn missing_title_is_rejected_before_any_database_work() {
    let request = Request::builder()
        .method("POST")
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("descricao=sem+titulo"))
        .unwrap();

    let response = unreachable_app().oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}
