//! User & Task Registry API - Main Entry Point

use std::sync::Arc;

use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_task_api::domain::gateways::{TaskRepository, UserRepository};
use user_task_api::infrastructure::driven_adapters::config::{AppConfig, DatabaseDriver, LogConfig, LogFormat};
use user_task_api::infrastructure::driven_adapters::database;
use user_task_api::infrastructure::driven_adapters::{
    InMemoryTaskRepository, InMemoryUserRepository, PostgresTaskRepository, PostgresUserRepository,
};
use user_task_api::infrastructure::driving_adapters::api_rest::{self, AppState};

fn init_tracing(config: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "user_task_api=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

/// Resolves when the process is asked to stop (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(&config.log);
    tracing::info!("Configuration loaded successfully");

    // Create repositories; the pool, if any, is owned here until shutdown
    let mut pool: Option<PgPool> = None;
    let (user_repository, task_repository): (Arc<dyn UserRepository>, Arc<dyn TaskRepository>) =
        match config.database.driver {
            DatabaseDriver::Postgres => {
                let pg = database::create_pool(&config.database).await?;
                tracing::info!("Database connection pool created");

                if let Err(error) = database::run_migrations(&pg).await {
                    pg.close().await;
                    return Err(error.into());
                }
                tracing::info!("Database migrations completed");

                pool = Some(pg.clone());
                (
                    Arc::new(PostgresUserRepository::new(pg.clone())),
                    Arc::new(PostgresTaskRepository::new(pg)),
                )
            }
            DatabaseDriver::Memory => {
                tracing::warn!("Using in-memory repositories, data will not survive a restart");
                (
                    Arc::new(InMemoryUserRepository::new()),
                    Arc::new(InMemoryTaskRepository::new()),
                )
            }
        };

    // Create application state and router
    let app_state = AppState::new(user_repository, task_repository, &config.api);
    let app = api_rest::router(app_state, &config.api.prefix);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let served = async {
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
    .await;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database connection pool closed");
    }

    served?;
    Ok(())
}
