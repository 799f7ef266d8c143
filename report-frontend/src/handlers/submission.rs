use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use validator::Validate;

use crate::handlers::app::IndexTemplate;
use crate::models::{SubmissionRequest, SubmissionResponse};
use crate::utils::validation::is_valid_email;
use crate::AppState;

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_SUBMIT_REJECTED: &str = "Failed to submit form. Please try again.";
pub const MSG_SUBMIT_ERROR: &str =
    "Something went wrong. Please check your batch number and try again.";

const DEFAULT_PRODUCT_NAME: &str = "Report";

#[derive(Debug, Deserialize, Validate)]
pub struct SubmissionForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub batch_no: String,
}

/// Validate, issue exactly one backend call, then redirect to the viewer on
/// success or re-render the form with an error. Validation failures never
/// reach the network.
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<SubmissionForm>,
) -> Response {
    if form.validate().is_err() {
        return form_error(
            &state,
            &form,
            StatusCode::UNPROCESSABLE_ENTITY,
            MSG_MISSING_FIELDS,
        );
    }

    if !is_valid_email(&form.email) {
        return form_error(
            &state,
            &form,
            StatusCode::UNPROCESSABLE_ENTITY,
            MSG_INVALID_EMAIL,
        );
    }

    let request = SubmissionRequest {
        email: form.email.clone(),
        batch_no: form.batch_no.clone(),
    };

    let SubmissionResponse {
        success,
        message,
        data,
    } = match state.submission_client.submit(&request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(batch_no = %request.batch_no, error = %err, "submission request failed");
            let message = err
                .backend_message()
                .unwrap_or(MSG_SUBMIT_ERROR)
                .to_string();
            return form_error(&state, &form, StatusCode::BAD_GATEWAY, &message);
        }
    };

    if success {
        if let Some(data) = data {
            let product = data
                .product_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string());
            let query = serde_urlencoded::to_string([
                ("url", data.pdf_url.as_str()),
                ("product", product.as_str()),
            ])
            .unwrap_or_default();

            tracing::info!(batch_no = %request.batch_no, product = %product, "submission accepted, redirecting to viewer");
            return Redirect::to(&format!("/pdf?{query}")).into_response();
        }
    }

    // Soft failure: success flag unset or data missing; the form stays usable
    tracing::warn!(batch_no = %request.batch_no, message = %message, "submission rejected by backend");
    let message = if message.is_empty() {
        MSG_SUBMIT_REJECTED
    } else {
        message.as_str()
    };
    form_error(&state, &form, StatusCode::UNPROCESSABLE_ENTITY, message)
}

fn form_error(state: &AppState, form: &SubmissionForm, status: StatusCode, message: &str) -> Response {
    let template = IndexTemplate {
        app_name: state.app.name.clone(),
        error: Some(message.to_string()),
        email: form.email.clone(),
        batch_no: form.batch_no.clone(),
    };
    (status, template).into_response()
}
