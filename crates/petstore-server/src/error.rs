use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use petstore_types::Ack;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("pet not found: {0}")]
    PetNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("store error: {0}")]
    Store(#[from] petstore_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// The HTTP status this error maps to on the wire.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PetNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::InvalidPayload(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }
        let ack = Ack::new(status.as_u16(), self.to_string());
        (status, Json(ack)).into_response()
    }
}
