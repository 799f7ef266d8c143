use serde::{Deserialize, Serialize};

/// Body of the submission POST sent to the backend. Built fresh for every
/// submit attempt and discarded once the request resolves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub email: String,
    pub batch_no: String,
}

/// Submission envelope returned by the backend. `data` is only present when
/// `success` is true.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<SubmissionData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionData {
    pub pdf_url: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// Generic envelope the backend uses across its endpoints. The submission
/// flow only needs it to pull a message out of non-2xx error bodies.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
