pub mod app;
pub mod metrics;
pub mod submission;
pub mod viewer;
