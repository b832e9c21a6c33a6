//! API Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use data_validator::ValidationError;
use inference_engine::InferenceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed answers (client error)
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// Model artifacts were not loaded at startup
    #[error("Serviço indisponível. Modelos de IA não estão carregados.")]
    ModelsUnavailable,

    /// Classifier produced a label with no profile
    #[error("Profile mapping not found for label {0:?}")]
    UnmappedLabel(String),

    /// Preprocessing or classification failed
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// Requested profile code does not exist
    #[error("Perfil {0:?} não encontrado.")]
    ProfileNotFound(String),
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::ModelsUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::UnmappedLabel(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Inference(InferenceError::InvalidInputShape { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Inference(err) if status.is_server_error() => {
                error!("Prediction failed: {}", err);
                "Erro interno ao processar a predição.".to_string()
            }
            ApiError::UnmappedLabel(label) => {
                error!("No profile for predicted label {:?}", label);
                "Mapeamento de perfil não encontrado.".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let count = ApiError::from(ValidationError::WrongAnswerCount {
            expected: 48,
            actual: 3,
        });
        assert_eq!(count.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::ModelsUnavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ApiError::UnmappedLabel("Z".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(InferenceError::InvalidInputShape { expected: 48, actual: 3 }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(InferenceError::UnknownClassIndex { index: 7, classes: 6 }).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::ProfileNotFound("Q".into()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::ModelsUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
