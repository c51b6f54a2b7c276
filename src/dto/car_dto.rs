use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Car;
use crate::utils::validation::validate_not_blank;

// Request para crear o reemplazar un car
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarRequest {
    #[serde(default)]
    pub id: i64,

    #[validate(length(min = 1), custom = "validate_not_blank")]
    pub color: String,

    #[validate(length(min = 1), custom = "validate_not_blank")]
    pub model: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    pub engine_type: Option<String>,
    pub year: Option<i32>,
    pub image_url: Option<String>,
}

impl From<CarRequest> for Car {
    fn from(request: CarRequest) -> Self {
        Self {
            id: request.id,
            color: request.color,
            model: request.model,
            price: request.price,
            engine_type: request.engine_type,
            year: request.year,
            image_url: request.image_url,
        }
    }
}

/// Etiqueta de resultado de un filtro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStatus {
    Found,
    NotFound,
    InvalidRange,
}

impl FilterStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            FilterStatus::Found => StatusCode::OK,
            FilterStatus::NotFound => StatusCode::NOT_FOUND,
            FilterStatus::InvalidRange => StatusCode::BAD_REQUEST,
        }
    }
}

/// Colección filtrada más su etiqueta de estado
///
/// El cuerpo HTTP siempre es un array JSON, incluso en 404/400.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    pub cars: Vec<Car>,
    pub status: FilterStatus,
}

impl FilterResult {
    pub fn found(cars: Vec<Car>) -> Self {
        Self { cars, status: FilterStatus::Found }
    }

    pub fn not_found() -> Self {
        Self { cars: Vec::new(), status: FilterStatus::NotFound }
    }

    pub fn invalid_range() -> Self {
        Self { cars: Vec::new(), status: FilterStatus::InvalidRange }
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

impl IntoResponse for FilterResult {
    fn into_response(self) -> Response {
        (self.status.status_code(), Json(self.cars)).into_response()
    }
}

/// Resultado del upsert: reemplazado o creado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertStatus {
    Replaced,
    Created,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpsertResult {
    pub car: Car,
    pub status: UpsertStatus,
}

impl IntoResponse for UpsertResult {
    fn into_response(self) -> Response {
        let status = match self.status {
            UpsertStatus::Replaced => StatusCode::OK,
            UpsertStatus::Created => StatusCode::CREATED,
        };
        (status, Json(self.car)).into_response()
    }
}

// Response de confirmación de borrado
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub id: i64,
}

impl DeleteResponse {
    pub fn deleted(id: i64) -> Self {
        Self {
            success: true,
            message: "Car eliminado exitosamente".to_string(),
            id,
        }
    }
}
