use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use depot_api::{app, AppState};
use depot_store::{
    app_config::{CatalogBackend, Config},
    seed, CatalogRepository, DbClient, InMemoryCatalog, PgCatalogRepository,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "depot_api=debug,depot_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Depot on port {}", config.server.port);

    let catalog = build_catalog(&config).await?;

    let app_state = AppState {
        catalog,
        store_name: config.store.name.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_catalog(config: &Config) -> anyhow::Result<Arc<dyn CatalogRepository>> {
    match config.catalog.backend {
        CatalogBackend::Memory => {
            tracing::info!("Using in-memory catalog");
            let catalog = if config.catalog.seed {
                InMemoryCatalog::seeded()?
            } else {
                InMemoryCatalog::new()
            };
            Ok(Arc::new(catalog))
        }
        CatalogBackend::Postgres => {
            let url = config
                .database
                .url
                .as_deref()
                .context("database.url is required for the postgres catalog")?;

            let db = DbClient::new(url, config.database.max_connections)
                .await
                .context("Failed to connect to Postgres")?;
            db.migrate().await?;

            let repo = PgCatalogRepository::new(db.pool.clone());
            if config.catalog.seed {
                seed::seed_if_empty(&repo).await?;
            }
            Ok(Arc::new(repo))
        }
    }
}
