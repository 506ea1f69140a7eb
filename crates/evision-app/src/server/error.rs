use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use evision_ai::ScoreRequestError;
use serde::Serialize;

/// Errors a handler can answer with. The body is always `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    BadRequest(String),
    /// The model call failed.
    Upstream(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ScoreRequestError> for ApiError {
    fn from(err: ScoreRequestError) -> Self {
        match err {
            ScoreRequestError::MissingBrand | ScoreRequestError::MissingModel => {
                Self::BadRequest(err.to_string())
            }
            ScoreRequestError::Remote(e) => Self::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let status = self.status();
        let error = match self {
            Self::NotFound(what) => format!("{what} not found"),
            Self::BadRequest(msg) | Self::Upstream(msg) | Self::Internal(msg) => msg,
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
