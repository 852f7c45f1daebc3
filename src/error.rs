use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failures raised by a `RecordStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record has no string `id` key")]
    MissingId,
    #[error("stored record is malformed: {0}")]
    Malformed(String),
    #[error("record store is unavailable: {0}")]
    Unavailable(String),
}

/// Everything a command or read model can fail with. Each variant maps to one
/// HTTP status; store failures never leak their details to the caller.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),
    #[error("Todo with ID {0} not found.")]
    NotFound(String),
    #[error("An internal server error occurred.")]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for TodoError {
    fn status_code(&self) -> StatusCode {
        match self {
            TodoError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let TodoError::Store(err) = self {
            tracing::error!(error = %err, "record store failure");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}

/// Turns actix's plain-text JSON payload errors into the `{"message": ...}`
/// body the rest of the API speaks.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorBody {
        message: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}
