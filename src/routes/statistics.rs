use axum::{routing::get, Router};
use crate::handlers::statistics::get_statistics;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/statistics", get(get_statistics))
}
