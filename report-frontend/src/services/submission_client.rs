//! Thin HTTP client for the external report backend.
//!
//! One POST per submit attempt, no retries, no caching. Trace context is
//! propagated on outgoing requests so backend spans join the request trace.

use crate::config::BackendSettings;
use crate::models::{ApiResponse, SubmissionRequest, SubmissionResponse};
use crate::utils::telemetry::inject_trace_context;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("submission request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend rejected submission ({status})")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("malformed backend response: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}

impl SubmissionError {
    /// The backend-provided message, when one could be parsed from the error
    /// body. Transport errors never carry a user-appropriate message.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            SubmissionError::Rejected {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

pub struct SubmissionClient {
    client: Client,
    settings: BackendSettings,
}

impl SubmissionClient {
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn submission_url(&self) -> String {
        format!("{}{}", self.settings.url, self.settings.submission_path)
    }

    /// Send the submission to the backend and deserialize its envelope.
    ///
    /// Non-2xx responses become `Rejected`, carrying whatever message the
    /// backend put in its error envelope.
    pub async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResponse, SubmissionError> {
        let url = self.submission_url();

        let mut headers = HeaderMap::new();
        inject_trace_context(&mut headers);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiResponse<serde_json::Value>>()
                .await
                .ok()
                .and_then(|body| body.message.or(body.error));
            tracing::warn!(%status, url = %url, "submission rejected by backend");
            return Err(SubmissionError::Rejected { status, message });
        }

        response
            .json::<SubmissionResponse>()
            .await
            .map_err(SubmissionError::MalformedResponse)
    }

    /// Fetch the report document itself; used by the download proxy.
    pub async fn fetch_document(&self, url: &str) -> Result<reqwest::Response, SubmissionError> {
        let response = self.client.get(url).send().await?;
        Ok(response)
    }
}
