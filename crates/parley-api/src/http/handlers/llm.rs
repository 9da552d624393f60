//! Stateless text generation endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use parley_core::gateway::provider::ResponseGenerator;
use parley_types::api::{LlmQueryRequest, LlmQueryResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /llm/query - Send `text` to the generator as-is.
///
/// No session and no fallback: a generator failure is a 500.
pub async fn query(
    State(state): State<AppState>,
    payload: Result<Json<LlmQueryRequest>, JsonRejection>,
) -> Result<Json<LlmQueryResponse>, AppError> {
    let Json(request) = payload?;
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }

    let response = state.generator.generate(&request.text).await?;
    Ok(Json(LlmQueryResponse { response }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::test_support::{MockOptions, spawn_app};

    #[tokio::test]
    async fn query_returns_generator_reply() {
        let app = spawn_app(MockOptions::default()).await;

        let response = app
            .client
            .post(app.url("/llm/query"))
            .json(&json!({"text": "What is Rust?"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"response": "hi there"}));
        assert_eq!(*app.prompts.lock().unwrap(), vec!["What is Rust?".to_string()]);
        assert!(app.state.orchestrator.sessions().is_empty());
    }

    #[tokio::test]
    async fn blank_text_is_bad_request() {
        let app = spawn_app(MockOptions::default()).await;

        let response = app
            .client
            .post(app.url("/llm/query"))
            .json(&json!({"text": "   "}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        assert!(app.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = spawn_app(MockOptions::default()).await;

        let response = app
            .client
            .post(app.url("/llm/query"))
            .header("content-type", "application/json")
            .body(r#"{"prompt": 1"#)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn generator_failure_is_server_error() {
        let app = spawn_app(MockOptions {
            generator_fails: true,
            ..MockOptions::default()
        })
        .await;

        let response = app
            .client
            .post(app.url("/llm/query"))
            .json(&json!({"text": "hello"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("overloaded"));
    }
}
