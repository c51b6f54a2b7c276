//! Tests del store PostgreSQL
//!
//! Necesitan una base de datos real:
//! `DATABASE_URL=postgresql://... cargo test --test pg_store_tests -- --ignored`

use car_catalog::config::DatabaseConfig;
use car_catalog::database;
use car_catalog::models::Car;
use car_catalog::repositories::{CarStore, PgCarStore};

// Función helper para crear el store sobre una tabla vacía
async fn create_test_store() -> Option<PgCarStore> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = database::connect(&DatabaseConfig::new(url))
        .await
        .expect("PostgreSQL reachable");
    sqlx::query("TRUNCATE cars RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("truncate cars");
    Some(PgCarStore::new(pool))
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing to a PostgreSQL instance"]
async fn test_pg_store_behaviour() {
    let Some(store) = create_test_store().await else {
        eprintln!("DATABASE_URL no definida, test omitido");
        return;
    };

    // upsert: primero inserta, después reemplaza
    let created = store
        .upsert_by_id(100, Car::new("Yellow", "Test_Audi", 12345.0))
        .await
        .unwrap();
    assert!(created.inserted);
    assert_eq!(created.car.id, 100);

    let replaced = store
        .upsert_by_id(100, Car::new("black", "Test_Audi", 13000.5))
        .await
        .unwrap();
    assert!(!replaced.inserted);
    assert_eq!(replaced.car.color, "black");
    assert_eq!(store.count().await.unwrap(), 1);

    // save sin id genera uno mayor que los ids explícitos
    let generated = store.save(Car::new("red", "BMW", 25000.0)).await.unwrap();
    assert!(generated.id > 100, "generated id {} must be past 100", generated.id);

    // save con id explícito actualiza en sitio
    let mut updated = generated.clone();
    updated.engine_type = Some("petrol".to_string());
    updated.year = Some(2020);
    store.save(updated.clone()).await.unwrap();
    assert_eq!(store.find_by_id(generated.id).await.unwrap(), Some(updated));

    let ids: Vec<i64> = store.find_all().await.unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![100, generated.id]);

    // borrado idempotente
    store.delete_by_id(100).await.unwrap();
    store.delete_by_id(100).await.unwrap();
    store.delete_by_id(999_999).await.unwrap();
    assert!(store.find_by_id(100).await.unwrap().is_none());
    assert_eq!(store.count().await.unwrap(), 1);
}
