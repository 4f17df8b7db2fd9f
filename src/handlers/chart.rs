// src/handlers/chart.rs
use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use sqlx::SqlitePool;
use tracing::{error, instrument};

use crate::dtos::chart::{BarChartResponse, CategoryCount, PieChartResponse, PriceRangeCount};
use crate::error::AppError;
use crate::month::resolve_month;
use crate::state::AppState;

use super::MONTH_FILTER;

/// Inclusive upper bound and label of each closed price bucket, ascending.
pub const PRICE_RANGES: [(u32, &str); 9] = [
    (100, "0 - 100"),
    (200, "101 - 200"),
    (300, "201 - 300"),
    (400, "301 - 400"),
    (500, "401 - 500"),
    (600, "501 - 600"),
    (700, "601 - 700"),
    (800, "701 - 800"),
    (900, "801 - 900"),
];

/// Bucket for anything priced above the last bound.
pub const OPEN_PRICE_RANGE: &str = "901-above";

// A price lands in the first bucket whose bound is >= price, so 100.5 goes to "101 - 200".
fn price_range_case() -> String {
    let mut case = String::from("CASE");
    for (upper, label) in PRICE_RANGES {
        case.push_str(&format!(" WHEN price <= {upper} THEN '{label}'"));
    }
    case.push_str(&format!(" ELSE '{OPEN_PRICE_RANGE}' END"));
    case
}

// GET /bar-chart - Item count per price range for one month
#[instrument(skip(state))]
pub async fn get_bar_chart(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<BarChartResponse>, AppError> {
    let month = resolve_month(params.get("month").map(String::as_str), state.unknown_month);

    match fetch_bar_chart(&state.db_pool, month.code).await {
        Ok(bar_chart_data) => Ok(Json(BarChartResponse {
            selected_month: month.label,
            bar_chart_data,
        })),
        Err(e) => {
            error!(?e, "Failed to fetch bar chart");
            Err(e.into())
        }
    }
}

/// Non-empty price buckets, most populated first; ties go to the cheaper bucket.
pub async fn fetch_bar_chart(
    db_pool: &SqlitePool,
    month_code: Option<&str>,
) -> Result<Vec<PriceRangeCount>, sqlx::Error> {
    let sql = format!(
        "SELECT {case} AS priceRange, COUNT(*) AS itemCount
         FROM products
         WHERE {MONTH_FILTER}
         GROUP BY priceRange
         ORDER BY itemCount DESC, MIN(price) ASC",
        case = price_range_case(),
    );

    sqlx::query_as::<_, PriceRangeCount>(&sql)
        .bind(month_code)
        .fetch_all(db_pool)
        .await
}

// GET /pie-chart - Item count per category for one month
#[instrument(skip(state))]
pub async fn get_pie_chart(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PieChartResponse>, AppError> {
    let month = resolve_month(params.get("month").map(String::as_str), state.unknown_month);

    match fetch_pie_chart(&state.db_pool, month.code).await {
        Ok(pie_chart_data) => Ok(Json(PieChartResponse {
            selected_month: month.label,
            pie_chart_data,
        })),
        Err(e) => {
            error!(?e, "Failed to fetch pie chart");
            Err(e.into())
        }
    }
}

pub async fn fetch_pie_chart(
    db_pool: &SqlitePool,
    month_code: Option<&str>,
) -> Result<Vec<CategoryCount>, sqlx::Error> {
    let sql = format!(
        "SELECT category, COUNT(*) AS itemCount
         FROM products
         WHERE {MONTH_FILTER}
         GROUP BY category
         ORDER BY itemCount DESC, category ASC"
    );

    sqlx::query_as::<_, CategoryCount>(&sql)
        .bind(month_code)
        .fetch_all(db_pool)
        .await
}
