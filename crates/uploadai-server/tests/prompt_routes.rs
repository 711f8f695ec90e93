mod common;

use axum::http::StatusCode;
use serde_json::json;
use uploadai_server::models::PromptResponse;

use common::{empty_request, json, json_request, TestApp};

async fn create(app: &TestApp, title: &str, template: &str) -> PromptResponse {
    let (status, body) = app
        .send(json_request(
            "POST",
            "/prompts",
            json!({ "title": title, "template": template }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let (status, body) = app.send(empty_request("GET", "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["status"], "ok");
}

#[tokio::test]
async fn test_create_then_get_prompt() {
    let app = TestApp::new();
    let created = create(&app, "Título", "Gere um título: {transcription}").await;

    let (status, body) = app
        .send(empty_request("GET", &format!("/prompts/{}", created.id)))
        .await;

    assert_eq!(status, StatusCode::OK);
    let fetched: PromptResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Título");
    assert_eq!(fetched.template, "Gere um título: {transcription}");
}

#[tokio::test]
async fn test_prompt_response_uses_camel_case() {
    let app = TestApp::new();
    let (_, body) = app
        .send(json_request(
            "POST",
            "/prompts",
            json!({ "title": "t", "template": "x" }),
        ))
        .await;

    let body = json(&body);
    assert!(body.get("createdAt").is_some());
    assert!(body.get("updatedAt").is_some());
}

#[tokio::test]
async fn test_list_prompts() {
    let app = TestApp::new();
    create(&app, "One", "1 {transcription}").await;
    create(&app, "Two", "2 {transcription}").await;

    let (status, body) = app.send(empty_request("GET", "/prompts")).await;

    assert_eq!(status, StatusCode::OK);
    let prompts: Vec<PromptResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(prompts.len(), 2);
}

#[tokio::test]
async fn test_update_keeps_id() {
    let app = TestApp::new();
    let created = create(&app, "Old", "old").await;

    let (status, body) = app
        .send(json_request(
            "PUT",
            &format!("/prompts/{}", created.id),
            json!({ "title": "New", "template": "new {transcription}" }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    let updated: PromptResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.template, "new {transcription}");
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_missing_prompt_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .send(json_request(
            "PUT",
            &format!("/prompts/{}", uuid::Uuid::new_v4()),
            json!({ "title": "t", "template": "x" }),
        ))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body)["error"], "Prompt not found");
}

#[tokio::test]
async fn test_delete_returns_prompt_then_not_found() {
    let app = TestApp::new();
    let created = create(&app, "Gone", "bye").await;
    let uri = format!("/prompts/{}", created.id);

    let (status, body) = app.send(empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    let deleted: PromptResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(deleted.id, created.id);

    let (status, _) = app.send(empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_with_invalid_id_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app.send(empty_request("GET", "/prompts/not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json(&body)["error"].is_string());
}

#[tokio::test]
async fn test_blank_title_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(json_request(
            "POST",
            "/prompts",
            json!({ "title": "   ", "template": "x" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json(&body)["error"].is_string());
}

#[tokio::test]
async fn test_missing_field_is_client_error() {
    let app = TestApp::new();

    let (status, body) = app
        .send(json_request("POST", "/prompts", json!({ "title": "t" })))
        .await;

    assert!(status.is_client_error());
    assert!(json(&body)["error"]
        .as_str()
        .unwrap()
        .contains("template"));

    let (_, body) = app.send(empty_request("GET", "/prompts")).await;
    assert_eq!(json(&body), json!([]));
}
