// src/main.rs
use sales_report_api::{config::Config, database, routes, server, state::AppState};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables
    dotenv().ok();
    let config = Config::from_env();

    // Create database pool
    let db_pool = match database::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, url = %config.database_url, "Error initializing database");
            std::process::exit(1);
        }
    };
    if let Err(e) = database::ensure_schema(&db_pool).await {
        tracing::error!(error = %e, "Error preparing products table");
        std::process::exit(1);
    }

    let app_state = AppState::new(db_pool).with_unknown_month(config.unknown_month);
    let app = routes::app(app_state);

    let listener = match server::bind(&config).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, host = %config.host, port = config.port, "Failed to bind server address");
            std::process::exit(1);
        }
    };
    match listener.local_addr() {
        Ok(addr) => tracing::info!("Server started at http://{}/", addr),
        Err(e) => tracing::warn!(error = %e, "Server started on an unknown address"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
