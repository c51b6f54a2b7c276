//! Predicados de filtrado del catálogo
//!
//! Funciones puras sobre la colección completa. Todas son recorridos
//! lineales estables: los cars seleccionados conservan el orden del store.

use crate::models::Car;

/// Límite de precio, inclusivo en ambos extremos
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceBound {
    Between { min: f64, max: f64 },
    AtMost(f64),
    AtLeast(f64),
}

impl PriceBound {
    /// Un rango con `min > max` no selecciona nada, sean cuales sean los datos
    pub fn is_valid(&self) -> bool {
        match *self {
            PriceBound::Between { min, max } => min <= max,
            PriceBound::AtMost(_) | PriceBound::AtLeast(_) => true,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        match *self {
            PriceBound::Between { min, max } => price >= min && price <= max,
            PriceBound::AtMost(max) => price <= max,
            PriceBound::AtLeast(min) => price >= min,
        }
    }
}

/// Seleccionar cars cuyo color coincide ignorando mayúsculas
pub fn filter_by_color(mut cars: Vec<Car>, color: &str) -> Vec<Car> {
    let wanted = color.to_lowercase();
    cars.retain(|car| car.color.to_lowercase() == wanted);
    cars
}

/// Seleccionar cars cuyo precio cae dentro del límite
pub fn filter_by_price(mut cars: Vec<Car>, bound: PriceBound) -> Vec<Car> {
    if !bound.is_valid() {
        return Vec::new();
    }
    cars.retain(|car| bound.contains(car.price));
    cars
}
