use dccore::error::ClientError;
use http::status::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    #[error("400 Bad Request")]
    BadRequest,
    #[error("404 Not Found")]
    NotFound,
    #[error("500 Internal Server Error")]
    InternalServerError,

    // other non-http error
    #[error("Network Error")]
    NetworkError,
    #[error("Encode/decode error")]
    SerdeError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StatusCode> for AppError {
    // Only convert into status known to AppError
    fn from(value: StatusCode) -> Self {
        match value {
            StatusCode::BAD_REQUEST => AppError::BadRequest,
            StatusCode::NOT_FOUND => AppError::NotFound,
            _ => AppError::InternalServerError,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Network(_) => Self::NetworkError,
            ClientError::Decode(_) => Self::SerdeError,
            ClientError::Status { status, .. } => StatusCode::from_u16(status)
                .map(Self::from)
                .unwrap_or(Self::InternalServerError),
            ClientError::Browser(_) => Self::InternalServerError,
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr {
    use axum::{
        Json,
        response::{IntoResponse, Response},
    };
    use dccore::envelope::ErrorResponse;
    use crate::error::AppError;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn from_client_error() {
        assert_eq!(
            AppError::from(ClientError::Status { status: 404, error: None }),
            AppError::NotFound,
        );
        assert_eq!(
            AppError::from(ClientError::Status { status: 503, error: None }),
            AppError::InternalServerError,
        );
        assert_eq!(
            AppError::from(ClientError::Network("offline".into())),
            AppError::NetworkError,
        );
    }
}
