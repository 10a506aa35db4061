//! HTTP presentation layer: the single-page upload UI and its API.

use crate::cli::Output;
use crate::error::GathikaError;
use crate::pipeline::Pipeline;
use crate::upload::AudioUpload;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// The embedded single-page UI.
const INDEX_HTML: &str = include_str!("index.html");

/// Headroom over the 25 MiB upload cap so oversized files reach the
/// validator and get a proper message instead of a bare 413.
const BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

/// Shared application state.
struct AppState {
    pipeline: Pipeline,
}

/// Build the router. Separate from [`serve`] so tests can drive it directly.
pub fn app(pipeline: Pipeline) -> Router {
    let state = Arc::new(AppState { pipeline });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server until interrupted.
pub async fn serve(host: &str, port: u16, pipeline: Pipeline) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Gathika Audio Analysis");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Upload UI", "GET  /");
    Output::kv("Analyze", "POST /analyze");
    Output::kv("Health", "GET  /health");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app(pipeline)).await?;

    Ok(())
}

// === Response Types ===

#[derive(Serialize)]
struct AnalyzeResponse {
    transcript: String,
    analysis: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// === Handlers ===

async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let upload = match read_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response()
        }
    };

    match state.pipeline.run(&upload).await {
        Ok(report) => Json(AnalyzeResponse {
            transcript: report.transcript,
            analysis: report.analysis,
        })
        .into_response(),
        Err(e) => (
            status_for(&e),
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Pull the `file` field out of the multipart body.
async fn read_upload(multipart: &mut Multipart) -> std::result::Result<AudioUpload, String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| e.to_string())?;
        return Ok(AudioUpload::new(filename, bytes.to_vec()));
    }

    Err("No file field in upload".to_string())
}

fn status_for(error: &GathikaError) -> StatusCode {
    match error {
        GathikaError::Validation(_) => StatusCode::BAD_REQUEST,
        GathikaError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        // Remote service failures are not the client's fault.
        _ => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::transcription::Transcriber;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use std::path::Path;
    use tower::util::ServiceExt;

    struct StubTranscriber(String);

    #[async_trait]
    impl Transcriber for StubTranscriber {
        async fn transcribe(&self, _audio_path: &Path) -> crate::error::Result<String> {
            Ok(self.0.clone())
        }
    }

    struct StubAnalyzer(String);

    #[async_trait]
    impl Analyzer for StubAnalyzer {
        async fn analyze(&self, _transcript: &str) -> crate::error::Result<String> {
            Ok(self.0.clone())
        }
    }

    fn test_app() -> Router {
        app(Pipeline::new(
            Arc::new(StubTranscriber("halo dunia".to_string())),
            Arc::new(StubAnalyzer("Ringkasan: halo dunia".to_string())),
        ))
    }

    fn multipart_request(filename: &str, payload: &[u8]) -> Request<Body> {
        let boundary = "gathika-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        Request::post("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn index_serves_the_upload_page() {
        let response = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("Gathika"));
    }

    #[tokio::test]
    async fn analyze_returns_both_panels() {
        let response = test_app()
            .oneshot(multipart_request("rapat.wav", b"fake audio"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["transcript"], "halo dunia");
        assert_eq!(json["analysis"], "Ringkasan: halo dunia");
    }

    #[tokio::test]
    async fn analyze_rejects_unsupported_format() {
        let response = test_app()
            .oneshot(multipart_request("notes.txt", b"not audio"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("Unsupported format"));
    }

    #[tokio::test]
    async fn analyze_without_file_field_is_a_bad_request() {
        let boundary = "gathika-test-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nx\r\n--{b}--\r\n",
            b = boundary
        );
        let request = Request::post("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
