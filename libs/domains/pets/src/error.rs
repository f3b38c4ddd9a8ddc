use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Invalid pet ID format";
pub const NOT_FOUND_MESSAGE: &str = "Pet not found";

#[derive(Debug, Error)]
pub enum PetError {
    #[error("Invalid pet ID format: {0}")]
    InvalidId(String),

    #[error("Pet not found: {0}")]
    NotFound(ObjectId),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PetResult<T> = Result<T, PetError>;

/// Convert PetError to AppError for standardized error responses
impl From<PetError> for AppError {
    fn from(err: PetError) -> Self {
        match err {
            PetError::InvalidId(_) => AppError::InvalidId(INVALID_ID_MESSAGE.to_string()),
            PetError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            PetError::Validation(msg) => AppError::BadRequest(msg),
            PetError::Database(msg) => AppError::InternalServerError(msg),
            PetError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PetError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for PetError {
    fn from(err: mongodb::error::Error) -> Self {
        PetError::Database(err.to_string())
    }
}

/// Parse a path identifier into an ObjectId
pub fn parse_id(id: &str) -> PetResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| PetError::InvalidId(id.to_string()))
}
