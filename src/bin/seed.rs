// src/bin/seed.rs
use dotenvy::dotenv;
use sales_report_api::{config::Config, database, seed};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenv().ok();
    let config = Config::from_env();

    if let Err(e) = run(&config).await {
        tracing::error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), seed::SeedError> {
    let client = reqwest::Client::new();
    let products = seed::fetch_products(&client, &config.seed_url).await?;

    let db_pool = database::create_pool(&config.database_url).await?;
    tracing::info!(url = %config.database_url, "Connected to the SQLite database");

    seed::load_products(&db_pool, &products, config.seed_mode, config.seed_reset).await?;

    db_pool.close().await;
    tracing::info!("Database connection closed");
    Ok(())
}
