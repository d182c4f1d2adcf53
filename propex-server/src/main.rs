use anyhow::Context;
use clap::Parser;
use propex_core::database::PostgresDatabase;
use propex_server::{create_router, AppState, Args, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(
            |_| {
                "propex_server=info,propex_core=info,tower_http=info".into()
            },
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::load(&args);

    let db = PostgresDatabase::connect(
        &config.database_url,
        config.db_max_connections,
        config.db_min_connections,
    )
    .await
    .context("failed to connect to the store")?;

    db.initialize_schema()
        .await
        .context("failed to initialize database schema")?;
    info!("Database schema initialized successfully");

    let addr = config.bind_addr();
    let state = AppState::new(db, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Starting Propex listing catalog server on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
