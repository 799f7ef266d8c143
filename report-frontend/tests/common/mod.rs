use axum::Router;
use report_frontend::config::{AppSettings, BackendSettings};
use report_frontend::services::submission_client::SubmissionClient;
use report_frontend::startup::build_router;
use report_frontend::AppState;
use std::sync::Arc;

/// Builds the full application router pointed at the given backend base URL.
pub fn test_app(backend_url: &str) -> Router {
    let backend = BackendSettings {
        url: backend_url.to_string(),
        submission_path: "/api/submission".to_string(),
    };
    let submission_client = Arc::new(SubmissionClient::new(backend));
    build_router(AppState::new(submission_client, AppSettings::default()))
}

/// Collects a response body into a UTF-8 string.
#[allow(dead_code)]
pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not UTF-8")
}
