pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::errors::AppError;
use crate::resume::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form rules
        .route("/api/v1/form", get(handlers::handle_form_schema))
        .route("/api/v1/form/validate", post(handlers::handle_validate_field))
        .route("/api/v1/form/submit", post(handlers::handle_submit_plan))
        .route("/api/v1/form/shortcut", post(handlers::handle_shortcut))
        // Resume generation
        .route("/api/v1/resume", post(handlers::handle_generate_resume))
        // Drafts
        .route(
            "/api/v1/drafts/:scope",
            get(handlers::handle_get_drafts).delete(handlers::handle_clear_drafts),
        )
        .route("/api/v1/drafts/:scope/:field", put(handlers::handle_save_draft))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::drafts::InMemoryDrafts;
    use crate::form::submit::SubmitBehavior;

    fn test_state(behavior: SubmitBehavior) -> AppState {
        AppState {
            config: Config {
                redis_url: None,
                draft_ttl_secs: 60,
                submit_behavior: behavior,
                port: 0,
                rust_log: "info".to_string(),
            },
            drafts: Arc::new(InMemoryDrafts::new(Duration::from_secs(60))),
        }
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send_raw(app, method, uri, body.map(|v| v.to_string())).await
    }

    async fn send_raw(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(raw) => builder
                .header("content-type", "application/json")
                .body(Body::from(raw))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn valid_fields() -> Value {
        json!({
            "job_titles": "Software Engineer at TechCorp (2020-2023)",
            "projects": "E-commerce platform built with Django and React",
            "skills": "Python, JavaScript, React, Docker",
            "education": "BSc Computer Science, University of Technology"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_form_schema_lists_fields_in_order() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let (status, body) = send(&app, Method::GET, "/api/v1/form", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["job_titles", "projects", "skills", "education"]);
        assert_eq!(body["fields"][2]["policy"]["min_length"], 5);
        assert_eq!(body["default_policy"]["max_length"], 1000);
    }

    #[tokio::test]
    async fn test_validate_field_returns_reason_and_counter() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/form/validate",
            Some(json!({"name": "skills", "value": "abcd"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["valid"], false);
        assert!(body["result"]["reason"]
            .as_str()
            .unwrap()
            .contains("at least 5 characters."));
        assert_eq!(body["counter"]["text"], "4/1000");
    }

    #[tokio::test]
    async fn test_validate_field_requires_name() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/form/validate",
            Some(json!({"name": " ", "value": "abcde"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_submit_plan_blocks_invalid_form() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let mut fields = valid_fields();
        fields["projects"] = json!("tiny");
        let (status, body) = send(&app, Method::POST, "/api/v1/form/submit", Some(fields)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["proceed"], false);
        assert_eq!(body["prevent_default"], true);
        assert_eq!(body["focus_field"], "projects");
        assert_eq!(
            body["notice"]["message"],
            "Please correct the errors below before submitting."
        );
    }

    #[tokio::test]
    async fn test_submit_plan_follows_configured_behavior() {
        let behavior = SubmitBehavior {
            block_submission_on_invalid: false,
            disable_inputs_while_submitting: true,
        };
        let app = build_router(test_state(behavior));

        let mut invalid = valid_fields();
        invalid["skills"] = json!("Go");
        let (_, body) = send(&app, Method::POST, "/api/v1/form/submit", Some(invalid)).await;
        assert_eq!(body["proceed"], true);
        assert_eq!(body["prevent_default"], false);

        let (_, body) = send(&app, Method::POST, "/api/v1/form/submit", Some(valid_fields())).await;
        assert_eq!(body["loading"]["inputs_disabled"], true);
        assert_eq!(body["loading"]["button_label"], "Generating Resume...");
    }

    #[tokio::test]
    async fn test_draft_lifecycle() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let scope = Uuid::new_v4();

        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/drafts/{scope}/skills"),
            Some(json!({"value": "Go, Rust"})),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let uri = format!("/api/v1/drafts/{scope}");
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["drafts"]["skills"], "Go, Rust");
        assert_eq!(body["notice"]["level"], "info");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(body["drafts"], json!({}));
    }

    #[tokio::test]
    async fn test_oversized_draft_is_rejected() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let scope = Uuid::new_v4();
        let uri = format!("/api/v1/drafts/{scope}/skills");

        let (status, body) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({"value": "x".repeat(2001)})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({"value": "x".repeat(2000)})),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_malformed_scope_is_json_validation_error() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let (status, body) = send(&app, Method::GET, "/api/v1/drafts/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(!body["error"]["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_validation_error() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let (status, body) = send_raw(
            &app,
            Method::POST,
            "/api/v1/form/validate",
            Some("{\"name\": \"skills\",".to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/form/validate",
            Some(json!({"value": "name is missing"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_draft_for_unknown_field_is_not_found() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/drafts/{}/hobbies", Uuid::new_v4()),
            Some(json!({"value": "chess"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generate_resume_clears_drafts() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let scope = Uuid::new_v4();
        send(
            &app,
            Method::PUT,
            &format!("/api/v1/drafts/{scope}/projects"),
            Some(json!({"value": "half-written"})),
        )
        .await;

        let mut submission = valid_fields();
        submission["draft_scope"] = json!(scope);
        let (status, body) = send(&app, Method::POST, "/api/v1/resume", Some(submission)).await;
        assert_eq!(status, StatusCode::OK);
        let technical = body["extracted_skills"]["technical"].as_array().unwrap();
        assert!(technical.contains(&json!("React")));
        assert!(!body["suggestions"].as_array().unwrap().is_empty());

        let (_, body) = send(&app, Method::GET, &format!("/api/v1/drafts/{scope}"), None).await;
        assert_eq!(body["drafts"], json!({}));
    }

    #[tokio::test]
    async fn test_generate_resume_rejects_invalid_form() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let scope = Uuid::new_v4();
        send(
            &app,
            Method::PUT,
            &format!("/api/v1/drafts/{scope}/education"),
            Some(json!({"value": "BSc"})),
        )
        .await;

        let mut submission = valid_fields();
        submission["education"] = json!("x".repeat(1001));
        submission["draft_scope"] = json!(scope);
        let (status, body) = send(&app, Method::POST, "/api/v1/resume", Some(submission)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "FORM_INVALID");
        assert_eq!(body["error"]["fields"][0]["field"], "education");
        assert_eq!(body["error"]["fields"][0]["kind"], "too_long");

        let (_, body) = send(&app, Method::GET, &format!("/api/v1/drafts/{scope}"), None).await;
        assert_eq!(body["drafts"]["education"], "BSc");
    }

    #[tokio::test]
    async fn test_shortcut_resolution() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/form/shortcut",
            Some(json!({
                "key": "Enter",
                "ctrl_or_meta": true,
                "page": {"has_form": true, "has_resume_content": false}
            })),
        )
        .await;
        assert_eq!(body["action"], "submit_form");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = build_router(test_state(SubmitBehavior::default()));
        let (status, body) = send(&app, Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
