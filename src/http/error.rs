use crate::error::DeckError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// A `DeckError` rendered as `{"error": "..."}` with a matching status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub DeckError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DeckError::NotFound(_) => StatusCode::NOT_FOUND,
            DeckError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<DeckError> for ApiError {
    fn from(e: DeckError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !self.0.is_client_error() {
            tracing::error!(error = %self.0, "deck store conflict");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
