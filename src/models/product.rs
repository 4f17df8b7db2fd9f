use serde::Serialize;
use sqlx::FromRow;

/// One row of the `products` table: a single product sale event.
/// Text columns are NULL when the seed record omitted them.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: Option<String>,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub sold: bool,
    #[sqlx(rename = "dateOfSale")]
    pub date_of_sale: String,
}
