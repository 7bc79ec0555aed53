use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::error::ErrorResponse;
use thiserror::Error;
use tracing::error;
use crate::processor::CommentError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Playlist not found")]
    NotFound,
    #[error("Invalid playlist ID")]
    InvalidId,
    #[error("{0}")]
    InvalidComment(String),
    #[error("{0}")]
    Inappropriate(String),
    #[error("{0}")]
    RateLimited(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound => Status::NotFound,
            ApiError::InvalidId => Status::BadRequest,
            ApiError::InvalidComment(_) => Status::BadRequest,
            ApiError::Inappropriate(_) => Status::BadRequest,
            ApiError::RateLimited(_) => Status::TooManyRequests,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(e: CommentError) -> Self {
        match e {
            CommentError::Invalid(v) => ApiError::InvalidComment(v.to_string()),
            inappropriate @ CommentError::Inappropriate(_) => ApiError::Inappropriate(inappropriate.to_string()),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(detail) => {
                error!("Internal error on {}: {}", req.uri(), detail);
                "An internal server error occurred.".to_string()
            }
            other => other.to_string(),
        };

        rocket::Response::build_from(Json(ErrorResponse { error: message }).respond_to(req)?)
            .status(status)
            .ok()
    }
}
