use actix_web::{web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod db;
mod domain;
mod models;
mod routes;

use db::CustomerRepository;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,clientes_api=debug")),
        )
        .init();

    tracing::info!("🚀 Starting Clientes API");

    let config = config::Config::from_env();
    tracing::info!(database_url = %config.database_url, echo_sql = config.echo_sql, "Loaded configuration");

    // === 1. Connect to storage and ensure the schema exists ===
    let pool = db::connect(&config).await?;
    db::init_schema(&pool).await?;

    // === 2. Build the repository, shared across workers ===
    let repository = web::Data::new(CustomerRepository::new(pool));

    // === 3. Serve the HTTP surface ===
    tracing::info!("Listening on http://{}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(repository.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
