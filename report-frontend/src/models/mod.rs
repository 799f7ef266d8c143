pub mod submission;

pub use submission::{ApiResponse, SubmissionData, SubmissionRequest, SubmissionResponse};
