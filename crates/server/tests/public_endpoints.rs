mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{app, memory_repositories, send, Caller};

#[tokio::test]
async fn health_is_public() {
    let app = app(memory_repositories());
    let (status, json) = send(&app, "GET", "/health", Caller::Anonymous, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "ok"}));
}

#[tokio::test]
async fn current_user_describes_the_caller() {
    let app = app(memory_repositories());

    let (status, json) = send(&app, "GET", "/api/currentUser", Caller::Admin, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["email"], "admin@ucsb.edu");
    assert_eq!(json["admin"], true);

    let (status, json) = send(&app, "GET", "/api/currentUser", Caller::User, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["admin"], false);
    assert_eq!(json["roles"], json!(["ROLE_USER"]));

    let (status, _) = send(&app, "GET", "/api/currentUser", Caller::Anonymous, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn openapi_document_lists_resources() {
    let app = app(memory_repositories());
    let (status, json) = send(&app, "GET", "/api-docs/openapi.json", Caller::Anonymous, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/HelpRequest/all"]["get"].is_object());
    assert!(json["paths"]["/api/ucsborganization"]["put"].is_object());
    assert!(json["components"]["schemas"]["RecommendationRequest"].is_object());
}
