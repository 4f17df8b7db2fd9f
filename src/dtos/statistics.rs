use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub selected_month: String,
    pub total_sale_amount: i64,
    pub total_sold_items: i64,
    pub total_not_sold_items: i64,
}
