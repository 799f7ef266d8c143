pub mod metrics;
pub mod submission_client;
