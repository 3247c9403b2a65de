//! Process entry point: tracing, config, database, serve.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use person_api::config::AppConfig;
use person_api::db::Database;
use person_api::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "person_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("person-api v{} starting", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        database_path = %config.database.path,
        "configuration loaded"
    );

    // Open the database; the person table is created here if absent.
    let db = Database::open(&config.database.path)?;

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let server = HttpServer::new(db);

    server.run(listener).await?;

    Ok(())
}
