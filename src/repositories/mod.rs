pub mod car_repository;
pub mod memory_car_repository;

pub use car_repository::{CarStore, PgCarStore, StoreError, StoredCar};
pub use memory_car_repository::InMemoryCarStore;
