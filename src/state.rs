// src/state.rs
use sqlx::SqlitePool;

use crate::month::UnknownMonthPolicy;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub unknown_month: UnknownMonthPolicy,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self {
            db_pool,
            unknown_month: UnknownMonthPolicy::default(),
        }
    }

    pub fn with_unknown_month(mut self, policy: UnknownMonthPolicy) -> Self {
        self.unknown_month = policy;
        self
    }
}
