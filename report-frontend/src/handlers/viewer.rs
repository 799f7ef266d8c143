use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::AppState;

/// How long the success banner stays up before auto-dismissing.
pub const BANNER_AUTO_DISMISS_MILLIS: u64 = 4_000;

const MSG_NO_PDF_URL: &str = "No PDF URL provided";
const DEFAULT_PRODUCT_NAME: &str = "Report";

#[derive(Debug, Deserialize)]
pub struct ViewerParams {
    pub url: Option<String>,
    pub product: Option<String>,
}

#[derive(Template)]
#[template(path = "pdf.html")]
pub struct ViewerTemplate {
    pub app_name: String,
    pub product_name: String,
    pub pdf_url: Option<String>,
    pub download_href: Option<String>,
    pub error: Option<String>,
    pub banner_millis: u64,
}

/// The viewer reconstructs everything it needs from the query string; no
/// state survives the navigation from the form.
pub async fn viewer_page(
    State(state): State<AppState>,
    Query(params): Query<ViewerParams>,
) -> impl IntoResponse {
    let product_name = params
        .product
        .filter(|product| !product.is_empty())
        .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string());

    match params.url.filter(|url| !url.is_empty()) {
        Some(url) => {
            let download_href = download_href(&url, &product_name);
            ViewerTemplate {
                app_name: state.app.name.clone(),
                product_name,
                pdf_url: Some(url),
                download_href: Some(download_href),
                error: None,
                banner_millis: BANNER_AUTO_DISMISS_MILLIS,
            }
        }
        None => ViewerTemplate {
            app_name: state.app.name.clone(),
            product_name,
            pdf_url: None,
            download_href: None,
            error: Some(MSG_NO_PDF_URL.to_string()),
            banner_millis: BANNER_AUTO_DISMISS_MILLIS,
        },
    }
}

/// Fetch the document and hand it to the browser as an attachment named
/// after the product.
pub async fn download_report(
    State(state): State<AppState>,
    Query(params): Query<ViewerParams>,
) -> Result<Response, StatusCode> {
    let url = match params.url.filter(|url| !url.is_empty()) {
        Some(url) => url,
        None => return Err(StatusCode::BAD_REQUEST),
    };
    let product_name = params
        .product
        .filter(|product| !product.is_empty())
        .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string());

    tracing::info!(url = %url, product = %product_name, "report download requested");

    let upstream = state
        .submission_client
        .fetch_document(&url)
        .await
        .map_err(|err| {
            tracing::error!(url = %url, error = %err, "failed to fetch report for download");
            StatusCode::BAD_GATEWAY
        })?;

    if !upstream.status().is_success() {
        let status = upstream.status();
        tracing::warn!(url = %url, status = %status, "report download failed upstream");
        return Err(status);
    }

    let content_type = upstream
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/pdf")
        .to_string();

    let file_data = upstream.bytes().await.map_err(|err| {
        tracing::error!(url = %url, error = %err, "failed to read report bytes");
        StatusCode::BAD_GATEWAY
    })?;

    tracing::info!(url = %url, size = file_data.len(), "report download completed");

    let content_disposition = format!(
        "attachment; filename=\"{}\"",
        download_filename(&product_name)
    );

    Ok((
        StatusCode::OK,
        [
            ("content-type", content_type),
            ("content-disposition", content_disposition),
        ],
        file_data,
    )
        .into_response())
}

fn download_href(url: &str, product: &str) -> String {
    let query = serde_urlencoded::to_string([("url", url), ("product", product)])
        .unwrap_or_default();
    format!("/pdf/download?{query}")
}

/// Runs of whitespace in the product name collapse to a single underscore.
pub fn download_filename(product: &str) -> String {
    let mut name = String::with_capacity(product.len());
    let mut in_whitespace = false;
    for c in product.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    format!("{name}_Report.pdf")
}
