//! Shared response envelope types for API handlers.
//!
//! Catalog endpoints return their payloads bare (`Car[]` / `Car`); the
//! form-intake endpoints use the `{success, message}` envelope below. Use
//! these instead of ad-hoc `serde_json::json!` so the wire shapes stay
//! consistent and type-checked.

use serde::Serialize;

/// `{ success, message }` envelope for form submissions.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: &'static str,
}

impl SubmissionResponse {
    pub fn accepted(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
