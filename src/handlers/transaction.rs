// src/handlers/transaction.rs
use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use sqlx::SqlitePool;
use tracing::{error, instrument};

use crate::dtos::transaction::{TransactionPage, TransactionQuery};
use crate::error::AppError;
use crate::models::product::Product;
use crate::month::resolve_month;
use crate::state::AppState;

use super::MONTH_FILTER;

// GET /transactions - Paginated, searchable listing for one month
#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<TransactionPage>, AppError> {
    let query = TransactionQuery::from_params(&params);
    let month = resolve_month(query.month.as_deref(), state.unknown_month);

    match fetch_transactions(&state.db_pool, month.code, &query).await {
        Ok(transactions) => Ok(Json(TransactionPage {
            page: query.page,
            per_page: query.per_page,
            transactions,
        })),
        Err(e) => {
            error!(?e, "Failed to fetch transactions");
            Err(e.into())
        }
    }
}

/// Rows for `month_code` whose title, description or price text contains `query.search`.
/// The search term is matched literally: LIKE wildcards in it are escaped.
pub async fn fetch_transactions(
    db_pool: &SqlitePool,
    month_code: Option<&str>,
    query: &TransactionQuery,
) -> Result<Vec<Product>, sqlx::Error> {
    let sql = format!(
        r"SELECT id, title, price, description, category, image, sold, dateOfSale
         FROM products
         WHERE {MONTH_FILTER}
           AND (
             lower(title) LIKE ?2 ESCAPE '\'
             OR lower(description) LIKE ?2 ESCAPE '\'
             OR CAST(price AS TEXT) LIKE ?2 ESCAPE '\'
           )
         ORDER BY id
         LIMIT ?3 OFFSET ?4"
    );
    let pattern = format!("%{}%", escape_like(&query.search.to_lowercase()));

    sqlx::query_as::<_, Product>(&sql)
        .bind(month_code)
        .bind(pattern)
        .bind(query.per_page)
        .bind(query.offset())
        .fetch_all(db_pool)
        .await
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
