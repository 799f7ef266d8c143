pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use config::AppSettings;
use services::submission_client::SubmissionClient;
use std::sync::Arc;

/// Shared application state: the backend client plus display settings.
#[derive(Clone)]
pub struct AppState {
    pub submission_client: Arc<SubmissionClient>,
    pub app: AppSettings,
}

impl AppState {
    pub fn new(submission_client: Arc<SubmissionClient>, app: AppSettings) -> Self {
        Self {
            submission_client,
            app,
        }
    }
}
