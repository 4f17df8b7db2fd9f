use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeCount {
    #[sqlx(rename = "priceRange")]
    pub price_range: String,
    #[sqlx(rename = "itemCount")]
    pub item_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: Option<String>,
    #[sqlx(rename = "itemCount")]
    pub item_count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartResponse {
    pub selected_month: String,
    pub bar_chart_data: Vec<PriceRangeCount>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartResponse {
    pub selected_month: String,
    pub pie_chart_data: Vec<CategoryCount>,
}
