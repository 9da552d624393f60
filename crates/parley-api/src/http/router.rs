//! Axum router configuration with middleware.
//!
//! Middleware: CORS (permissive), request tracing, upload size limit.
//!
//! `GET /` serves `index.html` from the static directory and `/static/*`
//! serves the directory itself, which is also where synthesized audio is
//! written.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Largest accepted request body (recordings are a few MB at most).
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = ServeFile::new(state.static_dir.join("index.html"));
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Voice agent
        .route("/agent/chat/{session_id}", post(handlers::agent::chat))
        // Stateless peers
        .route("/llm/query", post(handlers::llm::query))
        .route("/tts/echo", post(handlers::transcription::echo))
        .route(
            "/generate-murf-from-transcript",
            post(handlers::synthesis::generate_from_transcript),
        )
        .route("/ws", get(handlers::ws::ws_handler))
        .route("/health", get(health_check))
        .route_service("/", index)
        .nest_service("/static", static_files)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{MockOptions, spawn_app};

    #[tokio::test]
    async fn health_reports_version() {
        let app = spawn_app(MockOptions::default()).await;

        let body: serde_json::Value = app
            .client
            .get(app.url("/health"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn serves_index_and_static_files() {
        let app = spawn_app(MockOptions::default()).await;
        std::fs::write(app.static_dir.path().join("index.html"), "<h1>parley</h1>").unwrap();
        std::fs::write(app.static_dir.path().join("murf_1_abcd1234.mp3"), b"ID3").unwrap();

        let index = app.client.get(app.url("/")).send().await.unwrap();
        assert_eq!(index.status(), 200);
        assert_eq!(index.text().await.unwrap(), "<h1>parley</h1>");

        let audio = app
            .client
            .get(app.url("/static/murf_1_abcd1234.mp3"))
            .send()
            .await
            .unwrap();
        assert_eq!(audio.status(), 200);
        assert_eq!(audio.bytes().await.unwrap().as_ref(), b"ID3");

        let missing = app.client.get(app.url("/static/nope.mp3")).send().await.unwrap();
        assert_eq!(missing.status(), 404);
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = spawn_app(MockOptions::default()).await;

        let response = app
            .client
            .get(app.url("/health"))
            .header("origin", "http://localhost:3000")
            .send()
            .await
            .unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
