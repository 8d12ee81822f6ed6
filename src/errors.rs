use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode failure: {0}")]
    Encode(#[from] serde_json::Error),
}

// The underlying store error is logged server-side only; the client sees a
// fixed message and a 500.
#[derive(Debug)]
pub struct ApiError {
    message: &'static str,
}

impl ApiError {
    pub fn retrieval(err: StoreError) -> Self {
        error!("click count lookup failed: {err}");
        Self {
            message: "Failed to get click count",
        }
    }

    pub fn update(err: StoreError) -> Self {
        error!("click count update failed: {err}");
        Self {
            message: "Failed to update click count",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(json!({ "error": self.message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
