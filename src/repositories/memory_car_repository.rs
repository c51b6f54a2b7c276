//! Store en memoria
//!
//! Implementación de `CarStore` sobre un `BTreeMap` protegido por un
//! `RwLock`. Se usa cuando no hay `DATABASE_URL` y en los tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::car_repository::{CarStore, StoreError, StoredCar};
use crate::models::Car;

#[derive(Debug, Default)]
struct MemoryState {
    cars: BTreeMap<i64, Car>,
    last_id: i64,
}

impl MemoryState {
    fn put(&mut self, id: i64, mut car: Car) -> StoredCar {
        car.id = id;
        self.last_id = self.last_id.max(id);
        let inserted = self.cars.insert(id, car.clone()).is_none();
        StoredCar { car, inserted }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCarStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crear un store precargado; los cars sin id reciben uno nuevo
    pub fn with_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        let mut state = MemoryState::default();
        for car in cars {
            let id = if car.has_identity() { car.id } else { state.last_id + 1 };
            state.put(id, car);
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

#[async_trait]
impl CarStore for InMemoryCarStore {
    async fn find_all(&self) -> Result<Vec<Car>, StoreError> {
        let state = self.state.read().await;
        Ok(state.cars.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, StoreError> {
        let state = self.state.read().await;
        Ok(state.cars.get(&id).cloned())
    }

    async fn save(&self, car: Car) -> Result<Car, StoreError> {
        let mut state = self.state.write().await;
        let id = if car.has_identity() { car.id } else { state.last_id + 1 };
        Ok(state.put(id, car).car)
    }

    async fn upsert_by_id(&self, id: i64, car: Car) -> Result<StoredCar, StoreError> {
        let mut state = self.state.write().await;
        Ok(state.put(id, car))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.cars.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.state.read().await.cars.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_fresh_ids() {
        let store = InMemoryCarStore::new();
        let first = store.save(Car::new("red", "BMW", 25000.0)).await.unwrap();
        let second = store.save(Car::new("green", "Audi A4", 15000.0)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_save_with_explicit_id_moves_counter_forward() {
        let store = InMemoryCarStore::new();
        store.save(Car::new("red", "BMW", 1.0).with_id(10)).await.unwrap();
        let next = store.save(Car::new("red", "BMW", 1.0)).await.unwrap();
        assert_eq!(next.id, 11);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let store = InMemoryCarStore::with_cars(vec![
            Car::new("white", "MB A220", 18000.0).with_id(3),
            Car::new("red", "BMW", 25000.0).with_id(1),
        ]);
        let ids: Vec<i64> = store.find_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_upsert_reports_insert_then_replace() {
        let store = InMemoryCarStore::new();
        let created = store
            .upsert_by_id(7, Car::new("red", "BMW", 1.0).with_id(99))
            .await
            .unwrap();
        assert!(created.inserted);
        assert_eq!(created.car.id, 7);

        let replaced = store
            .upsert_by_id(7, Car::new("blue", "BMW", 2.0))
            .await
            .unwrap();
        assert!(!replaced.inserted);
        assert_eq!(store.find_by_id(7).await.unwrap().unwrap().color, "blue");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let store = InMemoryCarStore::with_cars(vec![Car::new("red", "BMW", 1.0)]);
        store.delete_by_id(42).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        store.delete_by_id(1).await.unwrap();
        store.delete_by_id(1).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
