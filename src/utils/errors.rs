//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::repositories::car_repository::StoreError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage unavailable: {0}")]
    Storage(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid identity: car id must be greater than zero, got {0}")]
    InvalidIdentity(i64),

    #[error("Malformed request body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("Malformed path parameter: {0}")]
    PathParam(#[from] PathRejection),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) | AppError::InvalidIdentity(_) => StatusCode::BAD_REQUEST,
            AppError::JsonBody(rejection) => rejection.status(),
            AppError::PathParam(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::Storage(e) => {
                error!("Storage error: {}", e);
                ErrorResponse {
                    error: "Storage Unavailable".to_string(),
                    message: "The car store is temporarily unavailable".to_string(),
                    details: Some(json!({ "storage_error": e.to_string() })),
                    code: Some("STORAGE_UNAVAILABLE".to_string()),
                }
            }

            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "The provided data is invalid".to_string(),
                    details: Some(json!(e)),
                    code: Some("VALIDATION_ERROR".to_string()),
                }
            }

            AppError::InvalidIdentity(id) => {
                warn!("Invalid car identity: {}", id);
                ErrorResponse {
                    error: "Invalid Identity".to_string(),
                    message: "Car id must be greater than zero".to_string(),
                    details: Some(json!({ "id": id })),
                    code: Some("INVALID_IDENTITY".to_string()),
                }
            }

            AppError::JsonBody(rejection) => {
                warn!("Malformed request body: {}", rejection.body_text());
                ErrorResponse {
                    error: "Malformed Request".to_string(),
                    message: rejection.body_text(),
                    details: None,
                    code: Some("MALFORMED_REQUEST".to_string()),
                }
            }

            AppError::PathParam(rejection) => {
                warn!("Malformed path parameter: {}", rejection.body_text());
                ErrorResponse {
                    error: "Malformed Request".to_string(),
                    message: rejection.body_text(),
                    details: None,
                    code: Some("MALFORMED_REQUEST".to_string()),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación sobre un campo
pub fn validation_error(field: &'static str, error: validator::ValidationError) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}
