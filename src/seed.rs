// src/seed.rs
//! One-shot load of the `products` table from a remote JSON array.
//!
//! [`fetch_products`] downloads the dataset as raw JSON; [`load_products`] decodes each element
//! and writes it inside a single transaction. Under [`SeedMode::Atomic`] the first bad row rolls the whole load back;
//! under [`SeedMode::BestEffort`] bad rows are logged and skipped.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::database::ensure_schema;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to fetch seed data: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("record {index} rejected: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// All rows or none.
    #[default]
    Atomic,
    /// Skip rows that fail and keep the rest.
    BestEffort,
}

impl std::str::FromStr for SeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atomic" => Ok(Self::Atomic),
            "best-effort" | "best_effort" | "besteffort" => Ok(Self::BestEffort),
            other => Err(format!("unknown seed mode '{other}'")),
        }
    }
}

/// One object of the remote dataset. Its `id` field, if any, is ignored.
/// Free-text fields may be missing or null and are stored as NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedProduct {
    #[serde(default)]
    pub title: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub sold: bool,
    pub date_of_sale: String,
}

impl SeedProduct {
    /// Decodes and validates one element of the fetched array.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let product = Self::deserialize(value).map_err(|e| e.to_string())?;
        product.validate()?;
        Ok(product)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("price {} is not a non-negative number", self.price));
        }
        let parses = DateTime::parse_from_rfc3339(&self.date_of_sale).is_ok()
            || NaiveDate::parse_from_str(&self.date_of_sale, "%Y-%m-%d").is_ok();
        if !parses {
            return Err(format!("dateOfSale '{}' is not an ISO 8601 date", self.date_of_sale));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Downloads the dataset as raw JSON objects; each one is decoded later, per record.
pub async fn fetch_products(client: &reqwest::Client, url: &str) -> Result<Vec<Value>, SeedError> {
    info!(url, "Fetching seed data");
    let products = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<Value>>()
        .await?;
    info!(count = products.len(), "Fetched seed data");
    Ok(products)
}

/// Creates the table if needed and inserts `products`. With `reset`, existing rows are deleted
/// in the same transaction first.
pub async fn load_products(
    db_pool: &SqlitePool,
    products: &[Value],
    mode: SeedMode,
    reset: bool,
) -> Result<SeedReport, SeedError> {
    let mut tx = db_pool.begin().await?;
    ensure_schema(&mut *tx).await?;

    if reset {
        let removed = sqlx::query("DELETE FROM products").execute(&mut *tx).await?;
        info!(rows = removed.rows_affected(), "Cleared existing products");
    }

    let mut report = SeedReport::default();
    for (index, value) in products.iter().enumerate() {
        let product = match (SeedProduct::from_value(value), mode) {
            (Ok(product), _) => product,
            (Err(reason), SeedMode::Atomic) => return Err(SeedError::InvalidRecord { index, reason }),
            (Err(reason), SeedMode::BestEffort) => {
                warn!(index, %reason, "Skipping invalid record");
                report.skipped += 1;
                continue;
            }
        };

        let inserted = sqlx::query(
            "INSERT INTO products (title, price, description, category, image, sold, dateOfSale)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.image)
        .bind(product.sold)
        .bind(&product.date_of_sale)
        .execute(&mut *tx)
        .await;

        match (inserted, mode) {
            (Ok(_), _) => report.inserted += 1,
            (Err(e), SeedMode::Atomic) => return Err(e.into()),
            (Err(e), SeedMode::BestEffort) => {
                warn!(index, error = %e, "Error inserting record");
                report.skipped += 1;
            }
        }
    }

    tx.commit().await?;
    info!(inserted = report.inserted, skipped = report.skipped, "Database initialized with seed data");
    Ok(report)
}
