pub mod telemetry;
pub mod validation;
