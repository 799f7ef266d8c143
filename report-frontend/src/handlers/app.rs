use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub app_name: String,
    pub error: Option<String>,
    pub email: String,
    pub batch_no: String,
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        app_name: state.app.name.clone(),
        error: None,
        email: String::new(),
        batch_no: String::new(),
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
