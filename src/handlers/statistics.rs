use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use sqlx::SqlitePool;
use tracing::{error, instrument};

use crate::dtos::statistics::StatisticsResponse;
use crate::error::AppError;
use crate::month::resolve_month;
use crate::state::AppState;

use super::MONTH_FILTER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleStatistics {
    /// Sum of sold prices, floored.
    pub total_sale_amount: i64,
    pub total_sold_items: i64,
    pub total_not_sold_items: i64,
}

// GET /statistics - Sales totals for one month
#[instrument(skip(state))]
pub async fn get_statistics(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let month = resolve_month(params.get("month").map(String::as_str), state.unknown_month);

    let stats = fetch_statistics(&state.db_pool, month.code).await.map_err(|e| {
        error!(?e, "Failed to fetch statistics");
        AppError::from(e)
    })?;

    Ok(Json(StatisticsResponse {
        selected_month: month.label,
        total_sale_amount: stats.total_sale_amount,
        total_sold_items: stats.total_sold_items,
        total_not_sold_items: stats.total_not_sold_items,
    }))
}

pub async fn fetch_statistics(
    db_pool: &SqlitePool,
    month_code: Option<&str>,
) -> Result<SaleStatistics, sqlx::Error> {
    // TOTAL() is always REAL and 0.0 over an empty set, unlike SUM().
    let sql = format!(
        "SELECT
            TOTAL(CASE WHEN sold = 1 THEN price ELSE 0 END) AS total_sale_amount,
            COUNT(CASE WHEN sold = 1 THEN 1 END)           AS total_sold_items,
            COUNT(CASE WHEN sold = 0 THEN 1 END)           AS total_not_sold_items
         FROM products
         WHERE {MONTH_FILTER}"
    );

    let (total, sold, not_sold) = sqlx::query_as::<_, (f64, i64, i64)>(&sql)
        .bind(month_code)
        .fetch_one(db_pool)
        .await?;

    Ok(SaleStatistics {
        total_sale_amount: total.floor() as i64,
        total_sold_items: sold,
        total_not_sold_items: not_sold,
    })
}
