//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::controllers::car_controller::CarController;
use crate::repositories::CarStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CarStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn CarStore>, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }

    /// Controller para una request, con la política de identidad configurada
    pub fn car_controller(&self) -> CarController {
        CarController::new(self.store.clone(), self.config.invalid_id_policy)
    }
}
