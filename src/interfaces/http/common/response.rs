//! JSON response envelopes
//!
//! Every JSON body carries a `success` flag. The payload key depends on the
//! operation: `user` for reads, `data` for the created id and `message` for
//! deletes and errors.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error returned by JSON handlers
pub type ApiError = (StatusCode, Json<MessageResponse>);

/// `{"success": bool, "message": string}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Build an [`ApiError`] with the failure envelope.
pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(MessageResponse::error(message)))
}
