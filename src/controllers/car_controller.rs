use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::config::InvalidIdPolicy;
use crate::dto::car_dto::{CarRequest, DeleteResponse, FilterResult, UpsertResult, UpsertStatus};
use crate::models::Car;
use crate::repositories::CarStore;
use crate::services::car_filter_service::{self, PriceBound};
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::validate_price_bound;

pub struct CarController {
    store: Arc<dyn CarStore>,
    invalid_id_policy: InvalidIdPolicy,
}

impl CarController {
    pub fn new(store: Arc<dyn CarStore>, invalid_id_policy: InvalidIdPolicy) -> Self {
        Self {
            store,
            invalid_id_policy,
        }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Car>> {
        let cars = self.store.find_all().await?;
        info!("Listando {} cars", cars.len());
        Ok(cars)
    }

    /// Sin coincidencias se reporta como not-found, a diferencia de los filtros de precio
    pub async fn filter_by_color(&self, color: &str) -> AppResult<FilterResult> {
        let cars = car_filter_service::filter_by_color(self.store.find_all().await?, color);

        if cars.is_empty() {
            warn!("No cars found for color: {}", color);
            return Ok(FilterResult::not_found());
        }

        info!("Found {} cars with color: {}", cars.len(), color);
        Ok(FilterResult::found(cars))
    }

    /// `min > max` se etiqueta como rango inválido sin consultar el store
    pub async fn filter_by_price_range(&self, min: f64, max: f64) -> AppResult<FilterResult> {
        let min = validate_price_bound("min", min).map_err(|e| validation_error("min", e))?;
        let max = validate_price_bound("max", max).map_err(|e| validation_error("max", e))?;

        let bound = PriceBound::Between { min, max };
        if !bound.is_valid() {
            warn!("Invalid price range: min {} is greater than max {}", min, max);
            return Ok(FilterResult::invalid_range());
        }

        let cars = car_filter_service::filter_by_price(self.store.find_all().await?, bound);
        info!("Found {} cars with price between {} and {}", cars.len(), min, max);
        Ok(FilterResult::found(cars))
    }

    pub async fn filter_by_price_ceiling(&self, max: f64) -> AppResult<FilterResult> {
        let max = validate_price_bound("max", max).map_err(|e| validation_error("max", e))?;
        let cars =
            car_filter_service::filter_by_price(self.store.find_all().await?, PriceBound::AtMost(max));
        info!("Found {} cars with price under {}", cars.len(), max);
        Ok(FilterResult::found(cars))
    }

    pub async fn filter_by_price_floor(&self, min: f64) -> AppResult<FilterResult> {
        let min = validate_price_bound("min", min).map_err(|e| validation_error("min", e))?;
        let cars =
            car_filter_service::filter_by_price(self.store.find_all().await?, PriceBound::AtLeast(min));
        info!("Found {} cars with price over {}", cars.len(), min);
        Ok(FilterResult::found(cars))
    }

    /// Persistir un car nuevo; un `id <= 0` nunca llega al store
    pub async fn create(&self, request: CarRequest) -> AppResult<Car> {
        if request.id <= 0 {
            return self.reject_identity(request.id);
        }
        request.validate()?;

        let car = self.store.save(Car::from(request)).await?;
        info!("Car {} creado exitosamente", car.id);
        Ok(car)
    }

    /// Reemplazar el car con `id` o crearlo bajo ese mismo id
    ///
    /// El id de la ruta manda sobre el del payload. La decisión la toma el
    /// store en una sola escritura atómica.
    pub async fn upsert(&self, id: i64, mut request: CarRequest) -> AppResult<UpsertResult> {
        if id <= 0 {
            let car = self.reject_identity(id)?;
            return Ok(UpsertResult {
                car,
                status: UpsertStatus::Created,
            });
        }
        request.id = id;
        request.validate()?;

        let stored = self.store.upsert_by_id(id, Car::from(request)).await?;
        let status = if stored.inserted {
            info!("Car not found with id {}, creado", id);
            UpsertStatus::Created
        } else {
            info!("Found car with id {}, reemplazado", id);
            UpsertStatus::Replaced
        };

        Ok(UpsertResult {
            car: stored.car,
            status,
        })
    }

    /// Borrado idempotente
    pub async fn delete(&self, id: i64) -> AppResult<DeleteResponse> {
        info!("Delete car with id {}", id);
        self.store.delete_by_id(id).await?;
        Ok(DeleteResponse::deleted(id))
    }

    fn reject_identity(&self, id: i64) -> AppResult<Car> {
        match self.invalid_id_policy {
            InvalidIdPolicy::Reject => Err(AppError::InvalidIdentity(id)),
            InvalidIdPolicy::Sentinel => {
                warn!("Car id must be greater than zero, devolviendo registro centinela (id {})", id);
                Ok(Car::sentinel())
            }
        }
    }
}
