//! Datos de demostración para entornos de desarrollo

use tracing::info;

use crate::models::Car;
use crate::repositories::{CarStore, StoreError};

/// Catálogo de referencia: los cuatro cars de las pruebas de aceptación
pub fn demo_cars() -> Vec<Car> {
    vec![
        Car::new("red", "BMW", 25000.0).with_id(1),
        Car::new("green", "Audi A4", 15000.0).with_id(2),
        Car::new("white", "MB A220", 18000.0).with_id(3),
        Car::new("red", "Ferrari", 250000.0).with_id(4),
    ]
}

/// Cargar el catálogo de demostración sólo si el store está vacío
pub async fn seed_demo_cars(store: &dyn CarStore) -> Result<usize, StoreError> {
    if store.count().await? > 0 {
        info!("🌱 Store con datos, se omite el seed");
        return Ok(0);
    }

    let cars = demo_cars();
    let total = cars.len();
    for car in cars {
        store.save(car).await?;
    }
    info!("🌱 {} cars de demostración cargados", total);
    Ok(total)
}
