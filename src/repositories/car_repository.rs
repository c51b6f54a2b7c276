use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::models::Car;

const CAR_COLUMNS: &str = "id, color, model, price, engine_type, year, image_url";

/// Errores del store, opacos para el core
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

/// Registro persistido más si la escritura insertó una fila nueva
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StoredCar {
    #[sqlx(flatten)]
    pub car: Car,
    pub inserted: bool,
}

/// Contrato del store de cars
///
/// Cada operación es atómica y linealizable respecto de las demás.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Todos los cars en orden nativo del store (id ascendente)
    async fn find_all(&self) -> Result<Vec<Car>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, StoreError>;

    /// Insertar o actualizar por id. Con `id <= 0` el store asigna un id nuevo.
    async fn save(&self, car: Car) -> Result<Car, StoreError>;

    /// Reemplazar o crear bajo `id` en una sola operación atómica
    async fn upsert_by_id(&self, id: i64, car: Car) -> Result<StoredCar, StoreError>;

    /// Borrar por id. No es error si el id no existe.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}

/// Store respaldado por PostgreSQL
#[derive(Clone)]
pub struct PgCarStore {
    pool: PgPool,
}

impl PgCarStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Avanzar la secuencia para que los ids explícitos no choquen con los generados
    async fn sync_id_sequence(&self) -> Result<(), StoreError> {
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('cars', 'id'), (SELECT COALESCE(MAX(id), 1) FROM cars))",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl CarStore for PgCarStore {
    async fn find_all(&self) -> Result<Vec<Car>, StoreError> {
        let cars = sqlx::query_as::<_, Car>(&format!("SELECT {CAR_COLUMNS} FROM cars ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, StoreError> {
        let car = sqlx::query_as::<_, Car>(&format!("SELECT {CAR_COLUMNS} FROM cars WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    async fn save(&self, car: Car) -> Result<Car, StoreError> {
        if car.has_identity() {
            let id = car.id;
            return Ok(self.upsert_by_id(id, car).await?.car);
        }

        let car = sqlx::query_as::<_, Car>(&format!(
            r#"
            INSERT INTO cars (color, model, price, engine_type, year, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CAR_COLUMNS}
            "#
        ))
        .bind(car.color)
        .bind(car.model)
        .bind(car.price)
        .bind(car.engine_type)
        .bind(car.year)
        .bind(car.image_url)
        .fetch_one(&self.pool)
        .await?;

        debug!("Car insertado con id generado {}", car.id);
        Ok(car)
    }

    async fn upsert_by_id(&self, id: i64, car: Car) -> Result<StoredCar, StoreError> {
        let stored = sqlx::query_as::<_, StoredCar>(&format!(
            r#"
            INSERT INTO cars (id, color, model, price, engine_type, year, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET color = EXCLUDED.color, model = EXCLUDED.model, price = EXCLUDED.price,
                engine_type = EXCLUDED.engine_type, year = EXCLUDED.year, image_url = EXCLUDED.image_url
            RETURNING {CAR_COLUMNS}, (xmax = 0) AS inserted
            "#
        ))
        .bind(id)
        .bind(car.color)
        .bind(car.model)
        .bind(car.price)
        .bind(car.engine_type)
        .bind(car.year)
        .bind(car.image_url)
        .fetch_one(&self.pool)
        .await?;

        if stored.inserted {
            self.sync_id_sequence().await?;
        }

        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Delete car {}: {} filas afectadas", id, result.rows_affected());
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;

        Ok(usize::try_from(count).unwrap_or_default())
    }
}
