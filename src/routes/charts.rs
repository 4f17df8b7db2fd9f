use axum::{routing::get, Router};
use crate::handlers::chart::{get_bar_chart, get_pie_chart};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bar-chart", get(get_bar_chart))
        .route("/pie-chart", get(get_pie_chart))
}
