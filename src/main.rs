use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use dotenvy::dotenv;

use car_catalog::config::{DatabaseConfig, EnvironmentConfig};
use car_catalog::database::{self, seed::seed_demo_cars};
use car_catalog::repositories::{CarStore, InMemoryCarStore, PgCarStore};
use car_catalog::routes::create_app;
use car_catalog::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Car Catalog API");
    info!("==================");

    // Inicializar store
    let store: Arc<dyn CarStore> = match &config.database_url {
        Some(url) => {
            let pool = match database::connect(&DatabaseConfig::new(url.as_str())).await {
                Ok(pool) => pool,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    return Err(e);
                }
            };
            info!("✅ PostgreSQL conectado exitosamente");
            Arc::new(PgCarStore::new(pool))
        }
        None => {
            info!("💾 DATABASE_URL no definida, usando store en memoria");
            Arc::new(InMemoryCarStore::new())
        }
    };

    if config.seed_demo_data {
        seed_demo_cars(store.as_ref()).await?;
    }

    let addr: SocketAddr = config.server_url().parse()?;
    info!("⚙️ Entorno: {}, política de id inválido: {:?}", config.environment, config.invalid_id_policy);
    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en producción: se permite cualquier origen");
    }
    let app = create_app(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /api/cars - Listar cars");
    info!("   GET    /api/cars/color/:color - Filtrar por color");
    info!("   GET    /api/cars/price/between/:min/:max - Filtrar por rango de precio");
    info!("   GET    /api/cars/price/under/:max - Precio máximo");
    info!("   GET    /api/cars/price/over/:min - Precio mínimo");
    info!("   POST   /api/cars - Crear car");
    info!("   PUT    /api/cars/:id - Reemplazar o crear car");
    info!("   DELETE /api/cars/:id - Eliminar car");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
