//! Modelo de Car
//!
//! Este módulo contiene el struct Car, la única entidad del catálogo.
//! Mapea exactamente a la tabla `cars` de PostgreSQL con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Color y modelo del registro centinela devuelto en modo compatibilidad
pub const SENTINEL_TEXT: &str = "000";

/// Precio del registro centinela devuelto en modo compatibilidad
pub const SENTINEL_PRICE: f64 = 9999.0;

/// Car principal - mapea a la tabla cars
///
/// Un `id <= 0` significa "todavía sin identidad asignada".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(default)]
    pub id: i64,
    pub color: String,
    pub model: String,
    pub price: f64,
    #[serde(default)]
    pub engine_type: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Car {
    /// Crear un car sin identidad y sin campos extendidos
    pub fn new(color: impl Into<String>, model: impl Into<String>, price: f64) -> Self {
        Self {
            id: 0,
            color: color.into(),
            model: model.into(),
            price,
            engine_type: None,
            year: None,
            image_url: None,
        }
    }

    /// Builder para fijar el id
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Registro centinela: sintácticamente válido pero marcado como inválido
    pub fn sentinel() -> Self {
        Self::new(SENTINEL_TEXT, SENTINEL_TEXT, SENTINEL_PRICE)
    }

    /// Verificar si el car ya tiene una identidad asignada por el store
    pub fn has_identity(&self) -> bool {
        self.id > 0
    }
}
