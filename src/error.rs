use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Dish not found")]
    NotFound,

    #[error("No dishes found")]
    EmptySearch,

    #[error("Internal server error")]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Storage(ref cause) = self {
            error!("Storage failure: {cause}");
        }

        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::EmptySearch => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Empty search results get a message-shaped body, everything else
        // an error-shaped one. Storage detail never reaches the client.
        let body = match self {
            AppError::EmptySearch => json!({ "message": self.to_string() }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
