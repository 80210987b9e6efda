use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Failures of the prediction relay. Rendered as `{"detail": "..."}` like the
/// inference service's own errors.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("No file part named '{0}' in the request")]
    MissingFile(&'static str),
    #[error("Uploaded file is empty")]
    EmptyFile,
    #[error("Uploaded file exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
    #[error("Uploaded file is not a supported image")]
    NotAnImage,
    #[error("Malformed upload: {0}")]
    Multipart(String),
    #[error("Inference service unreachable: {0}")]
    Unreachable(String),
    #[error("Inference service returned an invalid response: {0}")]
    BadUpstream(String),
}

impl From<MultipartError> for RelayError {
    fn from(e: MultipartError) -> Self {
        RelayError::Multipart(e.to_string())
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingFile(_) | RelayError::EmptyFile | RelayError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            RelayError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RelayError::NotAnImage => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RelayError::Unreachable(_) | RelayError::BadUpstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}
